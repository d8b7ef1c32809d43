//! Inline alert component

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

/// Alert height in rows (top border + message + bottom border)
pub const ALERT_HEIGHT: u16 = 3;

/// Render an inline error alert
pub fn render_error_alert(frame: &mut Frame, area: Rect, message: &str) {
    let line = Line::from(vec![
        Span::styled("⚠ ", Style::default().fg(Color::Red)),
        Span::styled(message, Style::default().fg(Color::Red)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Red));

    frame.render_widget(
        Paragraph::new(line)
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}
