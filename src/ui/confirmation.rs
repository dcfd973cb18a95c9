//! Confirmation screen shown after a successful registration

use crate::state::Registration;
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

const CLOSE_BUTTON_WIDTH: u16 = 12;
const LABEL_WIDTH: usize = 15;

fn split(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Heading
            Constraint::Length(9),             // Registered information
            Constraint::Length(BUTTON_HEIGHT), // Close button
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Area of the Close button
pub fn close_button_area(area: Rect) -> Rect {
    let [_, _, button_row] = split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(CLOSE_BUTTON_WIDTH), Constraint::Min(0)])
        .split(button_row)[0]
}

/// Draw the confirmation screen. Values are shown exactly as typed.
pub fn draw(frame: &mut Frame, area: Rect, registration: &Registration) {
    let [heading_area, info_area, _] = split(area);

    let heading = Paragraph::new(Line::from(Span::styled(
        "Registration Successful!",
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )))
    .centered();
    frame.render_widget(heading, heading_area);

    let rows: Vec<Line> = registration
        .rows()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(
                    format!("{:<width$}", format!("{label}:"), width = LABEL_WIDTH),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(value),
            ])
        })
        .collect();

    let info = Paragraph::new(rows).block(
        Block::default()
            .title(" Registered Information ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .padding(Padding::uniform(1)),
    );
    frame.render_widget(info, info_area);

    render_action_button(
        frame,
        close_button_area(area),
        "Close",
        true,
        true,
        None,
    );
}
