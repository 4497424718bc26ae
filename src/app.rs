//! Application state and core logic

use crate::config::FormConfig;
use crate::interaction::{Confirm, NotificationQueue, Notifier, Outcome};
use crate::platform::COMMAND_MODIFIER;
use crate::state::{ContactForm, EmailRows, EntryId, FormButton, RemoveOutcome};
use crate::validation::{FormValidator, ValidationReport};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Work the event loop has to carry out on behalf of the app.
///
/// Removing a row needs the blocking confirmation modal, which owns the
/// terminal, so the app hands the request back instead of doing it inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    RemoveRow(EntryId),
}

/// Main application struct
pub struct App {
    /// The contact form being edited
    pub form: ContactForm,
    /// Pass/fail summaries waiting to be dismissed
    pub notifications: NotificationQueue,
    validator: FormValidator,
    success_message: String,
    failure_message: String,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &FormConfig) -> Self {
        let rows = EmailRows::new().with_remove_message(config.remove_confirm_message());
        let mut form = ContactForm::with_rows(rows);
        for _ in 0..config.initial_email_rows() {
            form.emails.add_row();
        }

        Self {
            form,
            notifications: NotificationQueue::new(),
            validator: FormValidator::from_config(config),
            success_message: config.success_message(),
            failure_message: config.failure_message(),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Append a new email row and move the cursor into it
    pub fn add_email_row(&mut self) -> EntryId {
        let id = self.form.emails.add_row();
        self.form.focus_email(id);
        tracing::debug!("Added email row {id} ({} rows)", self.form.emails.len());
        id
    }

    /// Remove row `id` if `confirm` agrees
    pub fn remove_email_row(&mut self, id: EntryId, confirm: &mut dyn Confirm) -> RemoveOutcome {
        let neighbours = (
            self.form.emails.prev_id_before(id),
            self.form.emails.next_id_after(id),
        );

        let outcome = self.form.emails.remove_row(id, confirm);
        match outcome {
            RemoveOutcome::Removed => {
                self.form.refocus_after_removal(id, neighbours);
                tracing::debug!("Removed email row {id} ({} rows)", self.form.emails.len());
            }
            RemoveOutcome::Declined => tracing::debug!("Removal of email row {id} declined"),
            RemoveOutcome::NotFound => tracing::debug!("Email row {id} already removed"),
        }
        outcome
    }

    /// Validate the whole form, annotate every field and notify the result
    pub fn validate(&mut self) -> ValidationReport {
        let report = self
            .validator
            .validate(self.form.name.as_text(), &self.form.emails);
        self.form.annotate(&report);
        report_outcome(
            &mut self.notifications,
            &report,
            &self.success_message,
            &self.failure_message,
        );

        tracing::info!(
            valid = report.overall_valid,
            rows = report.email_errors.len(),
            invalid_rows = report.invalid_email_count(),
            "Form validated"
        );
        report
    }

    /// Handle a key event.
    ///
    /// Returns a [`Command`] when the event loop has to finish the job.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Command> {
        // A pending notification behaves like a modal: only dismissal keys
        if !self.notifications.is_empty() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.notifications.dismiss();
            }
            return None;
        }

        // AltGr arrives as Ctrl+Alt on Windows and must still type text
        let shortcut = key.modifiers.contains(COMMAND_MODIFIER)
            && !key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Char('n') if shortcut => {
                self.add_email_row();
            }
            KeyCode::Char('d') if shortcut => {
                return self.form.focused_email().map(Command::RemoveRow);
            }
            KeyCode::Char('s') if shortcut => {
                self.validate();
            }
            KeyCode::Char('u') if shortcut => {
                if let Some(field) = self.form.active_field_mut() {
                    field.clear();
                }
            }
            KeyCode::Char('q') if shortcut => self.quit = true,
            KeyCode::Char(_) if shortcut => {}
            KeyCode::Tab | KeyCode::Down => self.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.form.prev_field(),
            KeyCode::Delete => return self.form.focused_email().map(Command::RemoveRow),
            KeyCode::Left | KeyCode::Right if self.form.is_buttons_row_active() => {
                self.form.selected_button = self.form.selected_button.toggle();
            }
            KeyCode::Enter if self.form.is_buttons_row_active() => {
                self.press_button(self.form.selected_button);
            }
            KeyCode::Enter => self.form.next_field(),
            KeyCode::Backspace => {
                if let Some(field) = self.form.active_field_mut() {
                    field.pop_char();
                }
            }
            KeyCode::Char(c) => {
                if let Some(field) = self.form.active_field_mut() {
                    field.push_char(c);
                }
            }
            _ => {}
        }
        None
    }

    fn press_button(&mut self, button: FormButton) {
        match button {
            FormButton::AddEmail => {
                self.add_email_row();
            }
            FormButton::Validate => {
                self.validate();
            }
        }
    }
}

/// Send exactly one pass/fail summary for `report`
fn report_outcome(
    notifier: &mut dyn Notifier,
    report: &ValidationReport,
    success_message: &str,
    failure_message: &str,
) {
    if report.overall_valid {
        notifier.notify(Outcome::Success, success_message);
    } else {
        notifier.notify(Outcome::Failure, failure_message);
    }
}
