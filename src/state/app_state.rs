//! Application state definitions

use super::forms::{Form, Registration, RegistrationForm};
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    /// Registration form
    #[default]
    Form,
    /// Static confirmation shown after a successful submit
    Confirmation,
}

/// Discard prompt shown when leaving a partly filled form
#[derive(Debug, Clone, Default)]
pub struct PendingDiscard {
    /// false = Cancel, true = Discard
    pub selected_option: bool,
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    pub form: RegistrationForm,
    /// Set once a submit succeeds
    pub registration: Option<Registration>,
    pub pending_discard: Option<PendingDiscard>,
    pub status_message: Option<String>,
    error_queue: VecDeque<String>,
}

impl AppState {
    /// Handle character input in the focused field
    pub fn form_input_char(&mut self, c: char) {
        if let Some(field) = self.form.get_active_field_mut() {
            field.push_char(c);
        }
    }

    /// Handle backspace in the focused field
    pub fn form_backspace(&mut self) {
        if let Some(field) = self.form.get_active_field_mut() {
            field.pop_char();
        }
    }

    /// Queue an error for the error dialog
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    /// Error currently shown, if any
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    /// Dismiss the error currently shown
    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    /// Record a successful submit and switch to the confirmation view
    pub fn show_confirmation(&mut self, registration: Registration) {
        self.registration = Some(registration);
        self.status_message = None;
        self.current_view = View::Confirmation;
    }
}
