//! Per-field validation failures

use super::FieldKind;
use thiserror::Error;

/// Why a field's text was rejected.
///
/// `Display` yields the bare reason ("cannot be empty"); use
/// [`FieldError::sentence`] for the full message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("cannot be empty")]
    Empty,
    #[error("must be at least {min} characters")]
    TooShort { min: usize },
    #[error("cannot exceed {max} characters")]
    TooLong { max: usize },
    #[error("must contain only letters")]
    NotLetters,
    #[error("must contain @ symbol")]
    MissingAt,
    #[error("must end with {suffix}")]
    WrongDomain { suffix: &'static str },
    #[error("invalid email format")]
    InvalidEmail,
    #[error("must be in MM/DD/YYYY format")]
    DateFormat,
    #[error("invalid date format")]
    DateUnparseable,
    #[error("invalid day for the given month")]
    DayOutOfRange,
    #[error("must contain only digits")]
    NotDigits,
    #[error("must be exactly {len} digits")]
    ZipLength { len: usize },
}

impl FieldError {
    /// Reasons that read as a sentence on their own, without the field subject
    fn is_standalone(&self) -> bool {
        matches!(
            self,
            Self::InvalidEmail | Self::DateUnparseable | Self::DayOutOfRange
        )
    }

    /// Full user-facing sentence, e.g. "First name cannot be empty"
    pub fn sentence(&self, kind: FieldKind) -> String {
        if self.is_standalone() {
            capitalize(&self.to_string())
        } else {
            format!("{} {}", kind.subject(), self)
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
