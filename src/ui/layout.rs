//! Layout helpers (centered column, key help bar)

use super::{GOLD, MUTED};
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width of the centered signup column
pub const COLUMN_WIDTH: u16 = 72;

/// Split off the bottom line for the key help bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let [content, help] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
    (content, help)
}

/// Center a `width` x `height` box inside `area`, clamped to the area
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Push `rect` down by `rows`, never past the bottom of `area`
pub fn shifted_down(rect: Rect, rows: u16, area: Rect) -> Rect {
    let bottom = area.y + area.height;
    let y = (rect.y + rows).min(bottom);
    Rect {
        y,
        height: rect.height.min(bottom - y),
        ..rect
    }
}

/// Draw the key help bar
pub fn draw_help_bar(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let mut spans = Vec::new();
    for (idx, (key, action)) in hints.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled("  ·  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Style::default().fg(GOLD)));
        spans.push(Span::styled(format!(" {action}"), Style::default().fg(MUTED)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)).centered(), area);
}
