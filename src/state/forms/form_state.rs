//! Contact form state: the name field, the email rows and keyboard focus

use super::email_rows::{EmailRows, EntryId};
use super::field::FormField;
use crate::validation::ValidationReport;

/// Where keyboard input goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Name,
    Email(EntryId),
    /// The row of action buttons below the fields
    Buttons,
}

/// Buttons below the fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    AddEmail,
    #[default]
    Validate,
}

impl FormButton {
    pub const ALL: [FormButton; 2] = [FormButton::AddEmail, FormButton::Validate];

    pub fn label(&self) -> &'static str {
        match self {
            Self::AddEmail => "Add Email",
            Self::Validate => "Validate",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::AddEmail => Self::Validate,
            Self::Validate => Self::AddEmail,
        }
    }
}

/// The single contact form
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: FormField,
    pub emails: EmailRows,
    pub focus: Focus,
    pub selected_button: FormButton,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::with_rows(EmailRows::new())
    }

    pub fn with_rows(emails: EmailRows) -> Self {
        Self {
            name: FormField::text("Name", "Type your name here..."),
            emails,
            focus: Focus::Name,
            selected_button: FormButton::default(),
        }
    }

    /// Move focus forward: name, rows in order, buttons, then back to name
    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            Focus::Name => self
                .emails
                .first_id()
                .map_or(Focus::Buttons, Focus::Email),
            Focus::Email(id) => self
                .emails
                .next_id_after(id)
                .map_or(Focus::Buttons, Focus::Email),
            Focus::Buttons => Focus::Name,
        };
    }

    /// Move focus backward, wrapping from name to the buttons
    pub fn prev_field(&mut self) {
        self.focus = match self.focus {
            Focus::Name => Focus::Buttons,
            Focus::Email(id) => self
                .emails
                .prev_id_before(id)
                .map_or(Focus::Name, Focus::Email),
            Focus::Buttons => self.emails.last_id().map_or(Focus::Name, Focus::Email),
        };
    }

    /// Focus the row `id`; unknown ids leave focus where it is
    pub fn focus_email(&mut self, id: EntryId) {
        if self.emails.contains(id) {
            self.focus = Focus::Email(id);
        }
    }

    /// The row under focus, if any
    pub fn focused_email(&self) -> Option<EntryId> {
        match self.focus {
            Focus::Email(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_buttons_row_active(&self) -> bool {
        self.focus == Focus::Buttons
    }

    /// The text field receiving keystrokes (None on the buttons row)
    pub fn active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.focus {
            Focus::Name => Some(&mut self.name),
            Focus::Email(id) => self.emails.get_mut(id).map(|entry| &mut entry.field),
            Focus::Buttons => None,
        }
    }

    /// Pick the focus target after row `removed` disappeared.
    ///
    /// `neighbours` are the rows that were displayed before and after it.
    pub fn refocus_after_removal(
        &mut self,
        removed: EntryId,
        neighbours: (Option<EntryId>, Option<EntryId>),
    ) {
        if self.focus != Focus::Email(removed) {
            return;
        }
        let (prev, next) = neighbours;
        self.focus = prev.or(next).map_or(Focus::Name, Focus::Email);
    }

    /// Write every slot of `report` into the matching field.
    ///
    /// Rows the report mentions but the form no longer has are skipped.
    pub fn annotate(&mut self, report: &ValidationReport) {
        self.name.annotate(report.name_error.as_deref());
        for (id, error) in &report.email_errors {
            if let Some(entry) = self.emails.get_mut(*id) {
                entry.field.annotate(error.as_deref());
            }
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}
