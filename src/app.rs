//! Application state and core logic

use crate::config::TuiConfig;
use crate::state::{AppState, Form, PendingDiscard, View, SUBMIT_ROW};
use crate::ui;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    pub config: TuiConfig,
    /// Whether the app should quit
    quit: bool,
    /// Terminal size for hit testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: TuiConfig) -> Self {
        Self {
            state: AppState::default(),
            config,
            quit: false,
            terminal_size: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Global quit: Ctrl+C
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }

        if self.state.current_error().is_some() {
            self.handle_error_dialog_key(key);
        } else if self.state.pending_discard.is_some() {
            self.handle_discard_dialog_key(key);
        } else {
            match self.state.current_view {
                View::Form => self.handle_form_key(key),
                View::Confirmation => self.handle_confirmation_key(key),
            }
        }
    }

    /// Handle keys in the registration form
    fn handle_form_key(&mut self, key: KeyEvent) {
        let on_submit_row = self.state.form.is_submit_row_active();
        let has_command_modifier = key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER);

        match key.code {
            KeyCode::Char('s')
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | crate::platform::SUBMIT_MODIFIER) =>
            {
                self.submit();
            }
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Enter if on_submit_row => self.press_add(),
            KeyCode::Enter => self.state.form.next_field(),
            KeyCode::Esc => self.request_quit(),
            KeyCode::Char(c) if !has_command_modifier => self.state.form_input_char(c),
            KeyCode::Backspace => self.state.form_backspace(),
            _ => {}
        }
        self.clear_resolved_status();
    }

    /// Drop a "needs attention" hint once the form passes
    fn clear_resolved_status(&mut self) {
        if self.state.form.submit_enabled {
            self.state.status_message = None;
        }
    }

    /// Handle keys on the confirmation screen (Close)
    fn handle_confirmation_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q')) {
            self.quit = true;
        }
    }

    fn handle_error_dialog_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            self.state.dismiss_error();
        }
    }

    fn handle_discard_dialog_key(&mut self, key: KeyEvent) {
        let Some(pending) = self.state.pending_discard.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Up
            | KeyCode::Down
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Tab
            | KeyCode::BackTab
            | KeyCode::Char('j')
            | KeyCode::Char('k') => pending.selected_option = !pending.selected_option,
            KeyCode::Enter => {
                if pending.selected_option {
                    tracing::info!("registration discarded");
                    self.quit = true;
                }
                self.state.pending_discard = None;
            }
            KeyCode::Esc => self.state.pending_discard = None,
            _ => {}
        }
    }

    /// Esc on the form: quit directly if nothing was typed, otherwise confirm
    fn request_quit(&mut self) {
        if self.state.form.is_blank() {
            self.quit = true;
        } else {
            self.state.pending_discard = Some(PendingDiscard::default());
        }
    }

    /// Press the "Add" button. A disabled button ignores the press.
    fn press_add(&mut self) {
        if self.state.form.submit_enabled {
            self.submit();
        } else {
            self.state.status_message = Some("Complete every field to enable Add".to_string());
        }
    }

    /// Re-check the whole form and move to the confirmation view if it passes
    fn submit(&mut self) {
        match self.state.form.submit() {
            Some(registration) => self.state.show_confirmation(registration),
            None => {
                let invalid = self
                    .state
                    .form
                    .results
                    .iter()
                    .flatten()
                    .filter(|r| !r.is_valid())
                    .count();
                let noun = if invalid == 1 { "field needs" } else { "fields need" };
                self.state.status_message = Some(format!("{invalid} {noun} attention"));
            }
        }
    }

    fn screen_area(&self) -> Option<Rect> {
        self.terminal_size
            .map(|(height, width)| Rect::new(0, 0, width, height))
    }

    /// Handle a mouse event. Left click focuses a field or presses a button.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left)
            || self.state.current_error().is_some()
            || self.state.pending_discard.is_some()
        {
            return;
        }
        let Some(area) = self.screen_area() else {
            return;
        };
        let (_, main_area, _) = ui::create_layout(area);

        match self.state.current_view {
            View::Form => match ui::hit_test(main_area, mouse.column, mouse.row) {
                Some(SUBMIT_ROW) => {
                    self.state.form.set_active_field(SUBMIT_ROW);
                    self.press_add();
                }
                Some(index) => {
                    self.state.form.set_active_field(index);
                    self.clear_resolved_status();
                }
                None => {}
            },
            View::Confirmation => {
                let close = ui::close_button_area(main_area);
                if close.contains(Position::new(mouse.column, mouse.row)) {
                    self.quit = true;
                }
            }
        }
    }
}
