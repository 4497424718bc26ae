//! Pending notifications shown as dismissible dialogs

use super::traits::{Notifier, Outcome};
use chrono::{DateTime, Utc};
use std::collections::VecDeque;

/// A single pass/fail summary waiting to be acknowledged
#[derive(Debug, Clone)]
pub struct Notification {
    pub outcome: Outcome,
    pub message: String,
    pub issued_at: DateTime<Utc>,
}

/// FIFO of notifications; the front one is displayed until dismissed
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    pending: VecDeque<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// The notification currently on screen
    pub fn current(&self) -> Option<&Notification> {
        self.pending.front()
    }

    /// Acknowledge the notification on screen
    pub fn dismiss(&mut self) -> Option<Notification> {
        self.pending.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Notifier for NotificationQueue {
    fn notify(&mut self, outcome: Outcome, message: &str) {
        self.pending.push_back(Notification {
            outcome,
            message: message.to_string(),
            issued_at: Utc::now(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_queue_is_empty() {
        let queue = NotificationQueue::new();
        assert!(queue.is_empty());
        assert!(queue.current().is_none());
    }

    #[test]
    fn test_notifications_are_shown_in_order() {
        let mut queue = NotificationQueue::new();
        queue.notify(Outcome::Failure, "Please check your form again.");
        queue.notify(Outcome::Success, "Success!");

        let first = queue.dismiss().unwrap();
        assert_eq!(first.outcome, Outcome::Failure);
        assert_eq!(first.message, "Please check your form again.");
        assert_eq!(queue.current().unwrap().message, "Success!");
    }

    #[test]
    fn test_dismiss_on_empty_queue_is_noop() {
        let mut queue = NotificationQueue::new();
        assert!(queue.dismiss().is_none());
    }

    #[test]
    fn test_issued_at_is_recent() {
        let before = Utc::now();
        let mut queue = NotificationQueue::new();
        queue.notify(Outcome::Success, "Success!");
        assert!(queue.current().unwrap().issued_at >= before);
    }
}
