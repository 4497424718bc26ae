//! Configuration handling for the form

use crate::state::REMOVE_CONFIRM_MESSAGE;
use crate::validation::{EMAIL_ERROR_MESSAGE, NAME_ERROR_MESSAGE};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const SUCCESS_MESSAGE: &str = "Success!";
pub const FAILURE_MESSAGE: &str = "Please check your form again.";

/// Errors raised while reading the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// User configuration for the form
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FormConfig {
    /// Shown under the name field when it fails validation
    pub name_error_message: Option<String>,
    /// Shown under an email row when it fails validation
    pub email_error_message: Option<String>,
    /// Question asked before an email row is removed
    pub remove_confirm_message: Option<String>,
    /// Notification after a passing validation
    pub success_message: Option<String>,
    /// Notification after a failing validation
    pub failure_message: Option<String>,
    /// Email rows present when the form opens
    pub initial_email_rows: Option<usize>,
}

impl FormConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "pii-form", "pii-form")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn name_error_message(&self) -> String {
        or_default(&self.name_error_message, NAME_ERROR_MESSAGE)
    }

    pub fn email_error_message(&self) -> String {
        or_default(&self.email_error_message, EMAIL_ERROR_MESSAGE)
    }

    pub fn remove_confirm_message(&self) -> String {
        or_default(&self.remove_confirm_message, REMOVE_CONFIRM_MESSAGE)
    }

    pub fn success_message(&self) -> String {
        or_default(&self.success_message, SUCCESS_MESSAGE)
    }

    pub fn failure_message(&self) -> String {
        or_default(&self.failure_message, FAILURE_MESSAGE)
    }

    pub fn initial_email_rows(&self) -> usize {
        self.initial_email_rows.unwrap_or(0)
    }
}

/// Configured text, ignoring blank overrides
fn or_default(value: &Option<String>, default: &str) -> String {
    match value {
        Some(s) if !s.trim().is_empty() => s.clone(),
        _ => default.to_string(),
    }
}
