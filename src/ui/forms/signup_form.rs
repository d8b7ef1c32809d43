//! Signup form rendering

use super::field_renderer::{draw_field, draw_help_text, FIELD_HEIGHT};
use crate::app::App;
use crate::state::SignupForm;
use crate::ui::components::{render_button, render_error_alert, ALERT_HEIGHT, BUTTON_HEIGHT};
use crate::ui::layout::{centered, shifted_down, COLUMN_WIDTH};
use crate::ui::{GOLD, MAROON, MUTED};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Braille spinner shown while verifying
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_FRAME_MS: u128 = 80;

const HEADER_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 2;
/// Blank line, eligibility note, and the agreement note wrapped over two lines
const NOTES_HEIGHT: u16 = 4;

/// Rows inside the card, excluding the optional error alert
const CARD_INNER_HEIGHT: u16 = 2 + FIELD_HEIGHT + FIELD_HEIGHT + 1 + BUTTON_HEIGHT + NOTES_HEIGHT;

/// Draw the signup form view
pub fn draw_signup_form(frame: &mut Frame, area: Rect, app: &App) {
    let alert_height = if app.error.is_some() { ALERT_HEIGHT } else { 0 };
    let card_height = CARD_INNER_HEIGHT + alert_height + 2; // +2 for borders
    let total_height = HEADER_HEIGHT + card_height + FOOTER_HEIGHT;

    let column = centered(area, COLUMN_WIDTH, total_height);
    let column = shifted_down(column, app.reveal.row_offset(), area);

    let [header_area, card_area, footer_area] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(card_height),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(column);

    draw_header(frame, header_area);
    draw_card(frame, card_area, app, alert_height);

    let footer = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "🍴 Fork yeah! Let's find your perfect match 🍴",
            Style::default().fg(Color::Gray),
        )),
    ])
    .centered();
    frame.render_widget(footer, footer_area);
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "✦ Spark'd ✦",
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Where the devil dates",
            Style::default().fg(Color::LightYellow),
        )),
    ])
    .centered();
    frame.render_widget(header, area);
}

fn draw_card(frame: &mut Frame, area: Rect, app: &App, alert_height: u16) {
    let block = Block::default()
        .title(Line::from(" 🎓 Join Spark'd ").centered())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(MAROON));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [subtitle_area, names_area, email_area, hint_area, alert_area, button_area, notes_area] =
        Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(alert_height),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(NOTES_HEIGHT),
        ])
        .horizontal_margin(1)
        .areas(inner);

    draw_help_text(
        frame,
        subtitle_area,
        &["Where ASU devils find their perfect match"],
    );

    let form = &app.form;
    let [first_area, last_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)])
            .spacing(1)
            .areas(names_area);
    draw_field(frame, first_area, &form.first_name, form.active_field_index == 0);
    draw_field(frame, last_area, &form.last_name, form.active_field_index == 1);
    draw_field(frame, email_area, &form.email, form.active_field_index == 2);

    let hint = Paragraph::new(Span::styled(
        "We'll send a verification link to your ASU email",
        Style::default().fg(MUTED),
    ));
    frame.render_widget(hint, hint_area);

    if let Some(error) = &app.error {
        render_error_alert(frame, alert_area, &error.to_string());
    }

    let label = submit_label(app);
    render_button(
        frame,
        button_area,
        &label,
        form.active_field_index == SignupForm::SUBMIT_INDEX,
        !app.is_validating(),
    );

    draw_help_text(
        frame,
        notes_area,
        &[
            "",
            "Only ASU students with valid @asu.edu email addresses can join",
            "By signing up, you agree to connect with fellow Sun Devils in a respectful environment",
        ],
    );
}

fn submit_label(app: &App) -> String {
    if app.is_validating() {
        let frame_idx = (app.reveal.elapsed().as_millis() / SPINNER_FRAME_MS) as usize
            % SPINNER_FRAMES.len();
        format!("{} Verifying ASU Email...", SPINNER_FRAMES[frame_idx])
    } else {
        "Get Started with Spark'd".to_string()
    }
}
