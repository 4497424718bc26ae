//! Trait abstraction for user interaction to enable mocking in tests

/// Overall result of a validation pass, as reported to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

/// Blocking yes/no gate in front of destructive form actions
#[cfg_attr(test, mockall::automock)]
pub trait Confirm {
    /// Ask the user `message`; returns once they have answered
    fn confirm(&mut self, message: &str) -> bool;
}

/// Receives the final pass/fail summary after an explicit validate action
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn notify(&mut self, outcome: Outcome, message: &str);
}
