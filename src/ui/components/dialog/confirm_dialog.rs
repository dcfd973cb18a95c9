//! Confirmation dialog for discarding a partly filled form

use super::base::{render_dialog, DialogConfig};
use crate::state::PendingDiscard;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Render the "discard registration?" dialog
pub fn render_discard_dialog(frame: &mut Frame, pending: &PendingDiscard) {
    let options = [(false, "Cancel", Color::White), (true, "Discard", Color::Red)];
    let body = options
        .iter()
        .map(|&(is_discard, label, color)| {
            let is_selected = pending.selected_option == is_discard;
            let prefix = if is_selected { "▸ " } else { "  " };
            let style = if is_selected {
                Style::default().fg(color).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(Span::styled(format!("{prefix}{label}"), style))
        })
        .collect();

    let hint = vec![
        Span::styled("↑↓", Style::default().fg(Color::Cyan)),
        Span::styled(" select  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::styled(" confirm  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::styled(" cancel", Style::default().fg(Color::DarkGray)),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Discard Registration?",
            accent: Color::Yellow,
            message: "The values entered so far will be lost.",
            body,
            hint: Some(hint),
            max_width: 50,
        },
    );
}
