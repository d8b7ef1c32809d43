//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod success;

use crate::app::{App, View};
use ratatui::style::Color;
use ratatui::Frame;

/// ASU maroon
pub const MAROON: Color = Color::Rgb(140, 29, 64);
/// ASU gold
pub const GOLD: Color = Color::Rgb(255, 198, 39);
/// Secondary text
pub const MUTED: Color = Color::Rgb(150, 150, 150);

const FORM_HINTS: &[(&str, &str)] = &[
    ("Tab/Shift+Tab", "move"),
    ("Enter", "submit"),
    ("Esc", "quit"),
];
const SUCCESS_HINTS: &[(&str, &str)] = &[("Esc", "quit")];

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (content_area, help_area) = layout::create_layout(frame.area());

    match app.view() {
        View::Form => {
            forms::draw_signup_form(frame, content_area, app);
            layout::draw_help_bar(frame, help_area, FORM_HINTS);
        }
        View::Success => {
            success::draw(frame, content_area, app);
            layout::draw_help_bar(frame, help_area, SUCCESS_HINTS);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::MockSignupCompletion;
    use crate::config::SignupConfig;
    use crate::state::ValidationError;
    use ratatui::{backend::TestBackend, Terminal};

    fn idle_app() -> App {
        let mut completion = MockSignupCompletion::new();
        completion.expect_on_signup_complete().return_const(());
        App::new(SignupConfig::default(), Box::new(completion))
    }

    fn type_into(field: &mut crate::state::FormField, text: &str) {
        for c in text.chars() {
            field.push_char(c);
        }
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    mod form_view {
        use super::*;

        #[test]
        fn test_shows_header_and_fields() {
            let text = render(&idle_app());
            assert!(text.contains("Spark'd"));
            assert!(text.contains("Where the devil dates"));
            assert!(text.contains("First Name"));
            assert!(text.contains("Last Name"));
            assert!(text.contains("ASU Email Address"));
            assert!(text.contains("Get Started with Spark'd"));
        }

        #[test]
        fn test_empty_fields_show_placeholders() {
            let text = render(&idle_app());
            assert!(text.contains("yourname@asu.edu"));
            assert!(text.contains("Enter your last name"));
        }

        #[test]
        fn test_typed_values_replace_placeholders() {
            let mut app = idle_app();
            type_into(&mut app.form.email, "sparky@asu.edu");
            let text = render(&app);
            assert!(text.contains("sparky@asu.edu"));
            assert!(!text.contains("yourname@asu.edu"));
        }

        #[test]
        fn test_error_is_shown_inline() {
            let mut app = idle_app();
            app.error = Some(ValidationError::InvalidEmail);
            let text = render(&app);
            assert!(text.contains("Please use your official ASU email address"));
        }

        #[test]
        fn test_no_error_without_failed_attempt() {
            let text = render(&idle_app());
            assert!(!text.contains("Please use your official ASU email address"));
            assert!(!text.contains("Please enter your first and last name"));
        }

        #[test]
        fn test_shows_eligibility_and_agreement_notes() {
            let text = render(&idle_app());
            assert!(text.contains("Only ASU students with valid @asu.edu email addresses can join"));
            assert!(text.contains("By signing up, you agree to connect with fellow Sun Devils"));
            assert!(text.contains("respectful environment"));
        }

        #[test]
        fn test_help_bar_lists_keys() {
            let text = render(&idle_app());
            assert!(text.contains("submit"));
            assert!(text.contains("quit"));
        }

        #[tokio::test(start_paused = true)]
        async fn test_button_shows_verifying_while_validating() {
            let mut app = idle_app();
            type_into(&mut app.form.first_name, "Sparky");
            type_into(&mut app.form.last_name, "Sun Devil");
            type_into(&mut app.form.email, "sparky@asu.edu");
            app.submit();

            let text = render(&app);
            assert!(text.contains("Verifying ASU Email..."));
            assert!(!text.contains("Get Started with Spark'd"));
        }
    }

    mod success_view {
        use super::*;

        #[tokio::test(start_paused = true)]
        async fn test_success_view_replaces_form() {
            let mut app = idle_app();
            type_into(&mut app.form.first_name, "Sparky");
            type_into(&mut app.form.last_name, "Sun Devil");
            type_into(&mut app.form.email, "sparky@asu.edu");
            app.submit();
            app.wait_for_timer().await;

            let text = render(&app);
            assert!(text.contains("Welcome to Spark'd!"));
            assert!(text.contains("Your ASU email has been verified successfully."));
            assert!(text.contains("Setting up your profile..."));
            assert!(!text.contains("ASU Email Address"));
        }
    }
}
