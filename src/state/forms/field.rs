//! Form field value objects

/// Result of the last validation pass over a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validity {
    /// No validation pass has looked at this field yet
    #[default]
    Unchecked,
    Valid,
    Invalid,
}

/// Represents a single text field with its value and error slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub label: String,
    pub placeholder: String,
    pub value: String,
    /// Inline error text, shown beneath the field
    pub error: Option<String>,
    pub validity: Validity,
}

impl FormField {
    /// Create a new empty text field
    pub fn text(label: &str, placeholder: &str) -> Self {
        Self {
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            value: String::new(),
            error: None,
            validity: Validity::Unchecked,
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Record the outcome of a validation pass.
    ///
    /// `None` marks the field valid and clears any previous message.
    pub fn annotate(&mut self, error: Option<&str>) {
        match error {
            Some(message) => {
                self.error = Some(message.to_string());
                self.validity = Validity::Invalid;
            }
            None => {
                self.error = None;
                self.validity = Validity::Valid;
            }
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> &str {
        if self.value.is_empty() {
            &self.placeholder
        } else {
            &self.value
        }
    }
}
