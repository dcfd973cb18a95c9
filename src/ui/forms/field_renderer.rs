//! Field rendering utilities for forms

use crate::state::FormField;
use crate::validation::ValidationResult;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Indicator shown in the top-right corner of a validated field
fn indicator(result: Option<&ValidationResult>) -> Option<Span<'static>> {
    result.map(|r| {
        if r.is_valid() {
            Span::styled(" ✓ ", Style::default().fg(Color::Green))
        } else {
            Span::styled(" ✗ ", Style::default().fg(Color::Red))
        }
    })
}

/// Draw a single-line input with its validity indicator.
///
/// An invalid field gets a red border and its failure sentence on the
/// bottom border.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    result: Option<&ValidationResult>,
    is_active: bool,
    show_prompt: bool,
) {
    let is_invalid = result.is_some_and(|r| !r.is_valid());

    let border_style = if is_invalid {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let mut spans = if field.is_empty() && show_prompt {
        vec![Span::styled(
            field.kind.prompt(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )]
    } else {
        vec![Span::styled(field.as_text(), value_style)]
    };
    if is_active {
        // Cursor sits at the end of the typed text, before any prompt
        let at = if field.is_empty() { 0 } else { spans.len() };
        spans.insert(at, Span::styled("▌", Style::default().fg(Color::Cyan)));
    }

    let mut block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(border_style);

    if let Some(mark) = indicator(result) {
        block = block.title(Line::from(mark).right_aligned());
    }
    if let Some(r) = result.filter(|r| !r.is_valid()) {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {} ", r.sentence()),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
