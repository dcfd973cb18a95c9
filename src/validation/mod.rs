//! Registration field validation
//!
//! Pure mapping from raw field text to a validity flag and diagnostic
//! message, plus the aggregate submit-readiness check. Nothing in here
//! touches presentation state: callers hand in a [`FormSnapshot`] and read
//! back immutable [`ValidationResult`]s.

mod error;
mod field;
mod report;
mod rules;

pub use error::FieldError;
pub use field::FieldKind;
pub use report::{validate_field, validate_form, FormReport, FormSnapshot, ValidationResult};
