//! Registration form rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::SUBMIT_ROW;
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use crate::validation::FieldKind;
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Height of one bordered input
const FIELD_HEIGHT: u16 = 3;
/// Maximum width of the form column
const FORM_WIDTH: u16 = 64;
const ADD_BUTTON_WIDTH: u16 = 10;

/// Screen regions of the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLayout {
    /// Outer bordered panel
    pub panel: Rect,
    /// One input per field, in display order
    pub fields: [Rect; 5],
    /// The "Add" button
    pub submit: Rect,
}

/// Compute the form layout inside `area`
pub fn form_layout(area: Rect) -> FormLayout {
    let width = area.width.min(FORM_WIDTH);
    let panel = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT), // First name
            Constraint::Length(FIELD_HEIGHT), // Last name
            Constraint::Length(FIELD_HEIGHT), // Email
            Constraint::Length(FIELD_HEIGHT), // Date of birth
            Constraint::Length(FIELD_HEIGHT), // Zip code
            Constraint::Length(1),            // Spacer
            Constraint::Length(BUTTON_HEIGHT), // Add button
            Constraint::Min(0),
        ])
        .margin(1)
        .split(panel);

    let button_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(ADD_BUTTON_WIDTH), Constraint::Min(0)])
        .split(chunks[6]);

    FormLayout {
        panel,
        fields: [chunks[0], chunks[1], chunks[2], chunks[3], chunks[4]],
        submit: button_row[0],
    }
}

/// Focus index under a screen position: a field index, [`SUBMIT_ROW`], or none
pub fn hit_test(area: Rect, column: u16, row: u16) -> Option<usize> {
    let layout = form_layout(area);
    let pos = Position::new(column, row);
    layout
        .fields
        .iter()
        .position(|rect| rect.contains(pos))
        .or_else(|| layout.submit.contains(pos).then_some(SUBMIT_ROW))
}

/// Draw the registration form
pub fn draw_registration(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let layout = form_layout(area);

    let block = Block::default()
        .title(" Register ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, layout.panel);

    for kind in FieldKind::ALL {
        draw_field(
            frame,
            layout.fields[kind.index()],
            form.field(kind),
            form.result(kind),
            form.active_field_index == kind.index(),
            app.config.show_prompts(),
        );
    }

    render_action_button(
        frame,
        layout.submit,
        "Add",
        form.is_submit_row_active(),
        form.submit_enabled,
        Some(Color::Green),
    );
}
