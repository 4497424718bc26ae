//! Form domain layer
//!
//! The contact form, its name field and the dynamically managed email rows.

mod email_rows;
mod field;
mod form_state;

pub use email_rows::{EmailRows, EntryId, RemoveOutcome, REMOVE_CONFIRM_MESSAGE};
pub use field::{FormField, Validity};
pub use form_state::{ContactForm, Focus, FormButton};
