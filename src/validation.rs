//! Name and email validation
//!
//! Validation is recomputed from scratch on every call. A failing field is a
//! normal outcome recorded in the [`ValidationReport`], never an error.

use crate::config::FormConfig;
use crate::state::{EmailRows, EntryId};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

pub const NAME_ERROR_MESSAGE: &str = "Please enter a valid name!";
pub const EMAIL_ERROR_MESSAGE: &str = "This email address is invalid!";

static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z ]+$").expect("name pattern is valid"));

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9-]+@[A-Za-z0-9-]+\.[A-Za-z]{2,4}$").expect("email pattern is valid")
});

/// Letters and spaces only, at least one character
pub fn is_valid_name(name: &str) -> bool {
    NAME_REGEX.is_match(name)
}

/// `local@domain.tld` with alphanumeric/hyphen parts and a 2-4 letter tld
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Per-field result of one validation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub overall_valid: bool,
    pub name_error: Option<String>,
    /// One slot per row, in display order
    pub email_errors: IndexMap<EntryId, Option<String>>,
}

impl ValidationReport {
    /// Number of email rows that failed
    pub fn invalid_email_count(&self) -> usize {
        self.email_errors.values().filter(|e| e.is_some()).count()
    }
}

/// Checks the name field and every email row
#[derive(Debug, Clone)]
pub struct FormValidator {
    name_message: String,
    email_message: String,
}

impl Default for FormValidator {
    fn default() -> Self {
        Self {
            name_message: NAME_ERROR_MESSAGE.to_string(),
            email_message: EMAIL_ERROR_MESSAGE.to_string(),
        }
    }
}

impl FormValidator {
    pub fn from_config(config: &FormConfig) -> Self {
        Self {
            name_message: config.name_error_message(),
            email_message: config.email_error_message(),
        }
    }

    /// Validate `name` and all of `emails`.
    ///
    /// Every row is checked even after a failure, so each one gets its own
    /// annotation. The form is valid only with a valid name, at least one
    /// row, and every row valid.
    pub fn validate(&self, name: &str, emails: &EmailRows) -> ValidationReport {
        let name_error = (!is_valid_name(name)).then(|| self.name_message.clone());

        let email_errors: IndexMap<EntryId, Option<String>> = emails
            .iter()
            .map(|entry| {
                let error = (!is_valid_email(entry.value())).then(|| self.email_message.clone());
                (entry.id, error)
            })
            .collect();

        let all_emails_valid = email_errors.values().all(Option::is_none);
        let overall_valid = name_error.is_none() && all_emails_valid && !emails.is_empty();

        ValidationReport {
            overall_valid,
            name_error,
            email_errors,
        }
    }
}
