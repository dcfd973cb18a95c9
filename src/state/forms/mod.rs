//! Form domain layer
//!
//! Holds the text the user typed and the latest validation results to
//! display. All validation goes through [`crate::validation`].

mod field;
mod form_state;

pub use field::FormField;
pub use form_state::{Form, Registration, RegistrationForm, SUBMIT_ROW};
