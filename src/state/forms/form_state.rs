//! Registration form state

use super::field::FormField;
use crate::validation::{
    validate_field, validate_form, FieldKind, FormReport, FormSnapshot, ValidationResult,
};

/// Focus index of the "Add" button row, after the five text fields
pub const SUBMIT_ROW: usize = 5;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
}

/// The five-field registration form.
///
/// `results` holds what the indicators currently show; `None` means the
/// field has not been validated yet and its indicator is blank.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub fields: [FormField; 5],
    pub results: [Option<ValidationResult>; 5],
    pub active_field_index: usize,
    /// Whether the "Add" button accepts presses
    pub submit_enabled: bool,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self {
            fields: FieldKind::ALL.map(FormField::new),
            results: [None; 5],
            active_field_index: 0,
            submit_enabled: false,
        }
    }

    pub fn field(&self, kind: FieldKind) -> &FormField {
        &self.fields[kind.index()]
    }

    pub fn result(&self, kind: FieldKind) -> Option<&ValidationResult> {
        self.results[kind.index()].as_ref()
    }

    /// Returns true if the "Add" button row is focused
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == SUBMIT_ROW
    }

    pub fn is_blank(&self) -> bool {
        self.fields.iter().all(FormField::is_empty)
    }

    /// Immutable copy of the current raw text of every field
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot::new(self.fields.clone().map(|f| f.value))
    }

    /// Handle a field losing focus: validate it, then re-check the form.
    pub fn focus_lost(&mut self, kind: FieldKind) -> FormReport {
        let result = validate_field(kind, self.field(kind).as_text());
        self.results[kind.index()] = Some(result);
        self.recheck_all()
    }

    /// Re-validate every field, refresh every indicator and the
    /// submit button from the fresh results.
    pub fn recheck_all(&mut self) -> FormReport {
        let report = validate_form(&self.snapshot());
        self.results = FieldKind::ALL.map(|kind| Some(*report.result(kind)));
        self.submit_enabled = report.is_submittable();
        report
    }

    /// Attempt to submit. Returns the registration only if every field
    /// passes a fresh validation.
    pub fn submit(&mut self) -> Option<Registration> {
        let report = self.recheck_all();
        if !report.is_submittable() {
            tracing::info!(
                invalid = ?report.invalid_fields().map(FieldKind::name).collect::<Vec<_>>(),
                "submit rejected"
            );
            return None;
        }
        tracing::info!("registration submitted");
        Some(Registration {
            values: self.snapshot(),
        })
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for RegistrationForm {
    fn field_count(&self) -> usize {
        SUBMIT_ROW + 1 // five fields, Add button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        let index = index.min(SUBMIT_ROW);
        let previous = self.active_field_index;
        if index == previous {
            return;
        }
        self.active_field_index = index;
        if let Some(kind) = FieldKind::from_index(previous) {
            self.focus_lost(kind);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.active_field_index)
    }
}

/// Values accepted by a successful submit, kept verbatim for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    values: FormSnapshot,
}

impl Registration {
    pub fn value(&self, kind: FieldKind) -> &str {
        self.values.get(kind)
    }

    /// `(label, value)` rows in display order
    pub fn rows(&self) -> impl Iterator<Item = (&'static str, &str)> {
        FieldKind::ALL
            .into_iter()
            .map(move |kind| (kind.label(), self.value(kind)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FieldError;

    fn type_into(form: &mut RegistrationForm, kind: FieldKind, text: &str) {
        form.fields[kind.index()].value = text.to_string();
    }

    fn filled_form() -> RegistrationForm {
        let mut form = RegistrationForm::new();
        for (kind, text) in [
            (FieldKind::FirstName, "Jane"),
            (FieldKind::LastName, "Doe"),
            (FieldKind::Email, "jane.doe@farmingdale.edu"),
            (FieldKind::DateOfBirth, "05/12/2000"),
            (FieldKind::ZipCode, "11735"),
        ] {
            type_into(&mut form, kind, text);
        }
        form
    }

    mod initial_state {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_has_blank_indicators_and_disabled_submit() {
            let form = RegistrationForm::new();
            assert_eq!(form.active_field_index, 0);
            assert!(!form.submit_enabled);
            assert!(form.results.iter().all(Option::is_none));
            assert!(form.is_blank());
        }

        #[test]
        fn test_fields_in_display_order() {
            let form = RegistrationForm::new();
            for kind in FieldKind::ALL {
                assert_eq!(form.field(kind).kind, kind);
            }
            assert_eq!(form.field_count(), SUBMIT_ROW + 1);
        }
    }

    mod focus {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_next_field_cycles_through_submit_row() {
            let mut form = RegistrationForm::new();
            for expected in [1, 2, 3, 4, SUBMIT_ROW, 0] {
                form.next_field();
                assert_eq!(form.active_field_index, expected);
            }
        }

        #[test]
        fn test_prev_field_wraps_to_submit_row() {
            let mut form = RegistrationForm::new();
            form.prev_field();
            assert!(form.is_submit_row_active());
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = RegistrationForm::new();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, SUBMIT_ROW);
        }

        #[test]
        fn test_active_field_mut_none_on_submit_row() {
            let mut form = RegistrationForm::new();
            assert_eq!(form.get_active_field_mut().unwrap().kind, FieldKind::FirstName);
            form.set_active_field(SUBMIT_ROW);
            assert!(form.get_active_field_mut().is_none());
        }

        #[test]
        fn test_same_field_is_not_focus_loss() {
            let mut form = RegistrationForm::new();
            form.set_active_field(0);
            assert!(form.results.iter().all(Option::is_none));
        }

        #[test]
        fn test_leaving_a_field_revalidates_every_field() {
            let mut form = RegistrationForm::new();
            type_into(&mut form, FieldKind::FirstName, "Jane");
            form.next_field();

            let first = form.result(FieldKind::FirstName).unwrap();
            assert!(first.is_valid());
            for kind in &FieldKind::ALL[1..] {
                let result = form.result(*kind).unwrap();
                let expected = if *kind == FieldKind::DateOfBirth {
                    FieldError::DateFormat
                } else {
                    FieldError::Empty
                };
                assert_eq!(result.error(), Some(expected));
            }
            assert!(!form.submit_enabled);
        }

        #[test]
        fn test_leaving_submit_row_does_not_validate() {
            let mut form = RegistrationForm::new();
            form.active_field_index = SUBMIT_ROW;
            form.next_field();
            assert_eq!(form.active_field_index, 0);
            assert!(form.results.iter().all(Option::is_none));
        }

        #[test]
        fn test_submit_enabled_after_last_field_blurs() {
            let mut form = filled_form();
            for _ in 0..SUBMIT_ROW {
                form.next_field();
            }
            assert!(form.is_submit_row_active());
            assert!(form.submit_enabled);
        }

        #[test]
        fn test_invalidating_one_field_disables_submit() {
            let mut form = filled_form();
            form.recheck_all();
            assert!(form.submit_enabled);

            type_into(&mut form, FieldKind::ZipCode, "1173");
            form.focus_lost(FieldKind::ZipCode);
            assert!(!form.submit_enabled);
            assert_eq!(
                form.result(FieldKind::ZipCode).unwrap().sentence(),
                "Zip code must be exactly 5 digits"
            );
            assert!(form.result(FieldKind::Email).unwrap().is_valid());
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_submit_rejects_invalid_form() {
            let mut form = RegistrationForm::new();
            assert!(form.submit().is_none());
            assert!(!form.submit_enabled);
            assert!(form.results.iter().all(Option::is_some));
        }

        #[test]
        fn test_submit_ignores_stale_results() {
            let mut form = filled_form();
            form.recheck_all();
            assert!(form.submit_enabled);

            // Edited without leaving the field: the cached results are stale
            type_into(&mut form, FieldKind::DateOfBirth, "02/29/2023");
            assert!(form.submit().is_none());
            assert!(!form.submit_enabled);
            assert_eq!(
                form.result(FieldKind::DateOfBirth).unwrap().error(),
                Some(FieldError::DayOutOfRange)
            );
        }

        #[test]
        fn test_submit_keeps_values_verbatim() {
            let mut form = filled_form();
            type_into(&mut form, FieldKind::FirstName, "  Jane ");
            let registration = form.submit().expect("form is valid");

            assert_eq!(registration.value(FieldKind::FirstName), "  Jane ");
            let rows: Vec<_> = registration.rows().collect();
            assert_eq!(
                rows,
                vec![
                    ("First Name", "  Jane "),
                    ("Last Name", "Doe"),
                    ("Email", "jane.doe@farmingdale.edu"),
                    ("Date of Birth", "05/12/2000"),
                    ("Zip Code", "11735"),
                ]
            );
        }
    }
}
