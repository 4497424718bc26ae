//! Form rendering module
//!
//! - `field_renderer`: a single field with its error slot
//! - `contact_form`: the name field, email rows and buttons

mod contact_form;
mod field_renderer;

pub use contact_form::draw_contact_form;
