//! UI module for rendering the TUI

mod components;
mod confirmation;
mod forms;
mod layout;

use crate::app::App;
use crate::state::View;
use components::{render_discard_dialog, render_error_dialog};
use ratatui::Frame;

pub use confirmation::close_button_area;
pub use forms::hit_test;
pub use layout::create_layout;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, &app.state.current_view);

    match (&app.state.current_view, &app.state.registration) {
        (View::Confirmation, Some(registration)) => {
            confirmation::draw(frame, main_area, registration)
        }
        _ => forms::draw_registration(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Overlays, error on top
    if let Some(pending) = &app.state.pending_discard {
        render_discard_dialog(frame, pending);
    }
    if let Some(message) = app.state.current_error() {
        render_error_dialog(frame, message);
    }
}
