//! Spark'd Signup - terminal signup screen for Spark'd
//!
//! A Ratatui-based form that checks for an ASU email address, simulates
//! verification, and prints the verified email once signup completes.

mod app;
mod completion;
mod config;
mod scheduler;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use completion::VerifiedEmail;
use config::SignupConfig;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sparkd_signup=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = SignupConfig::load()?;
    let verified = VerifiedEmail::default();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run; dropping the app cancels any pending timers
    let mut app = App::new(config, Box::new(verified.clone()));
    let result = run_app(&mut terminal, &mut app);
    drop(app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    if let Some(email) = verified.take() {
        println!("{email}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Update entrance animation
        let animating = !app.reveal.is_complete();
        app.update_reveal();

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Use faster polling during animation (16ms = ~60fps) or while the
        // spinner is visible, normal polling (100ms) otherwise
        let poll_duration = if animating || app.is_validating() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        // Handle crossterm events
        if event::poll(poll_duration)? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        // Timers fire on the runtime's workers; state only changes here
        app.poll_timers();

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
