//! Field rendering utilities for forms

use crate::state::FormField;
use crate::ui::{GOLD, MUTED};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

/// Field height in rows (top border + value + bottom border)
pub const FIELD_HEIGHT: u16 = 3;

/// Draw a single-line text field, showing its placeholder while empty
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let border_style = if is_active {
        Style::default().fg(GOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value_style = if field.is_empty() {
        Style::default().fg(MUTED)
    } else if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let cursor = if is_active { "▌" } else { "" };

    // Cursor sits before the placeholder so the hint stays readable
    let content = if field.is_empty() {
        Line::from(vec![
            Span::styled(cursor, Style::default().fg(GOLD)),
            Span::styled(field.display_value(), value_style),
        ])
    } else {
        Line::from(vec![
            Span::styled(field.display_value(), value_style),
            Span::styled(cursor, Style::default().fg(GOLD)),
        ])
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(content).block(block), area);
}

/// Draw muted help text lines
pub fn draw_help_text(frame: &mut Frame, area: Rect, lines: &[&str]) {
    let lines: Vec<Line> = lines
        .iter()
        .map(|line| Line::from(Span::styled(*line, Style::default().fg(MUTED))))
        .collect();
    frame.render_widget(
        Paragraph::new(lines)
            .centered()
            .wrap(Wrap { trim: true }),
        area,
    );
}
