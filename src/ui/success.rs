//! Success view shown while the profile setup is simulated

use crate::app::App;
use crate::ui::layout::{centered, COLUMN_WIDTH};
use crate::ui::GOLD;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Period of the pulsing "Setting up" line
const PULSE_MS: u128 = 600;

const SUCCESS_HEIGHT: u16 = 8;

/// Draw the success view, scaled by the entrance animation
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let width = (COLUMN_WIDTH as f32 * app.reveal.scale()).round() as u16;
    let box_area = centered(area, width, SUCCESS_HEIGHT);

    let pulse_bright = (app.reveal.elapsed().as_millis() / PULSE_MS) % 2 == 0;
    let setup_style = if pulse_bright {
        Style::default().fg(Color::LightYellow)
    } else {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::DIM)
    };

    let lines = vec![
        Line::from(Span::styled("✦", Style::default().fg(GOLD))),
        Line::from(Span::styled(
            "Welcome to Spark'd!",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Your ASU email has been verified successfully.",
            Style::default().fg(Color::LightYellow),
        )),
        Line::from(""),
        Line::from(Span::styled("Setting up your profile...", setup_style)),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(GOLD));

    frame.render_widget(Paragraph::new(lines).centered().block(block), box_area);
}
