//! Validation results and whole-form checks

use super::rules::{validate_date_of_birth, validate_email, validate_name, validate_zip_code};
use super::{FieldError, FieldKind};

/// Outcome of validating one field's current text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationResult {
    kind: FieldKind,
    outcome: Result<(), FieldError>,
}

impl ValidationResult {
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn error(&self) -> Option<FieldError> {
        self.outcome.err()
    }

    /// Bare failure reason, or an empty string when valid
    pub fn message(&self) -> String {
        self.error().map(|e| e.to_string()).unwrap_or_default()
    }

    /// Full failure sentence, or an empty string when valid
    pub fn sentence(&self) -> String {
        self.error()
            .map(|e| e.sentence(self.kind))
            .unwrap_or_default()
    }
}

/// Validate one field. Names share a single rule for first and last name.
pub fn validate_field(kind: FieldKind, text: &str) -> ValidationResult {
    let outcome = match kind {
        FieldKind::FirstName | FieldKind::LastName => validate_name(text),
        FieldKind::Email => validate_email(text),
        FieldKind::DateOfBirth => validate_date_of_birth(text),
        FieldKind::ZipCode => validate_zip_code(text),
    };

    let result = ValidationResult { kind, outcome };
    tracing::debug!(
        field = kind.name(),
        valid = result.is_valid(),
        message = %result.message(),
        "validated field"
    );
    result
}

/// Immutable copy of the raw text of all five fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    values: [String; 5],
}

impl FormSnapshot {
    pub fn new(values: [String; 5]) -> Self {
        Self { values }
    }

    /// Raw, untrimmed text of a field
    pub fn get(&self, kind: FieldKind) -> &str {
        &self.values[kind.index()]
    }
}

/// Results for every field, computed together from one snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormReport {
    results: [ValidationResult; 5],
}

impl FormReport {
    pub fn result(&self, kind: FieldKind) -> &ValidationResult {
        &self.results[kind.index()]
    }

    /// True iff every field is valid
    pub fn is_submittable(&self) -> bool {
        self.results.iter().all(ValidationResult::is_valid)
    }

    pub fn invalid_fields(&self) -> impl Iterator<Item = FieldKind> + '_ {
        self.results
            .iter()
            .filter(|r| !r.is_valid())
            .map(ValidationResult::kind)
    }
}

/// Re-validate every field of a snapshot.
///
/// All five validators always run; nothing is cached between calls.
pub fn validate_form(snapshot: &FormSnapshot) -> FormReport {
    FormReport {
        results: FieldKind::ALL.map(|kind| validate_field(kind, snapshot.get(kind))),
    }
}
