//! Button component for TUI

use crate::ui::{GOLD, MAROON};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a full-width primary button with border
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    is_selected: bool,
    is_enabled: bool,
) {
    let border_style = if !is_enabled {
        Style::default().fg(Color::DarkGray)
    } else if is_selected {
        Style::default().fg(GOLD)
    } else {
        Style::default().fg(MAROON)
    };

    let text_style = if !is_enabled {
        Style::default().fg(Color::Gray).bg(MAROON)
    } else if is_selected {
        Style::default()
            .fg(Color::White)
            .bg(MAROON)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White).bg(MAROON)
    };

    let paragraph = Paragraph::new(format!(" {content} "))
        .style(text_style)
        .centered();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}
