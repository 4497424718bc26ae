//! Collaborators the form talks to: confirmation and notification

mod notifications;
mod traits;

pub use notifications::{Notification, NotificationQueue};
pub use traits::{Confirm, Notifier, Outcome};

#[cfg(test)]
pub use traits::{MockConfirm, MockNotifier};
