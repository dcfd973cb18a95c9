//! Form field value objects

use crate::validation::FieldKind;

/// A single text input on the registration form
#[derive(Debug, Clone)]
pub struct FormField {
    pub kind: FieldKind,
    pub value: String,
}

impl FormField {
    /// Create an empty field
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            value: String::new(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    /// Raw text exactly as typed
    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }
}
