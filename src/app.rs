//! Application state and core logic

use crate::completion::SignupCompletion;
use crate::config::SignupConfig;
use crate::scheduler::Scheduler;
use crate::state::{
    transition, Effect, Form, RevealState, RevealStyle, SignupForm, SubmissionEvent,
    SubmissionPhase, TimerEvent, ValidationError,
};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, info};

/// Which of the two mutually exclusive views is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Form,
    Success,
}

/// Signup screen: owns the form input, submission phase and timers
pub struct App {
    /// Form input and focus
    pub form: SignupForm,
    /// Inline error from the last submission attempt
    pub error: Option<ValidationError>,
    /// Entrance animation for the current view
    pub reveal: RevealState,
    phase: SubmissionPhase,
    config: SignupConfig,
    scheduler: Scheduler<TimerEvent>,
    /// Taken on hand-off so it can only ever be called once
    completion: Option<Box<dyn SignupCompletion>>,
    quit: bool,
}

impl App {
    pub fn new(config: SignupConfig, completion: Box<dyn SignupCompletion>) -> Self {
        Self {
            form: SignupForm::new(),
            error: None,
            reveal: RevealState::new(RevealStyle::SlideUp),
            phase: SubmissionPhase::Idle,
            config,
            scheduler: Scheduler::new(),
            completion: Some(completion),
            quit: false,
        }
    }

    pub fn view(&self) -> View {
        match self.phase {
            SubmissionPhase::Success { .. } => View::Success,
            _ => View::Form,
        }
    }

    /// True while the submit button shows the verifying spinner
    pub fn is_validating(&self) -> bool {
        matches!(self.phase, SubmissionPhase::Validating { .. })
    }

    /// True once the email has been handed to the completion handler
    pub fn is_handed_off(&self) -> bool {
        self.completion.is_none()
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit || self.is_handed_off()
    }

    /// Advance the entrance animation
    pub fn update_reveal(&mut self) {
        self.reveal.update();
    }

    /// Handle a key press on the signup screen
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Esc => self.request_quit(),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.request_quit()
            }
            KeyCode::Tab | KeyCode::Down => self.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.form.prev_field(),
            KeyCode::Enter => self.submit(),
            // Form field input (only while the form is shown)
            KeyCode::Char(c) if self.view() == View::Form => {
                if let Some(field) = self.form.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace if self.view() == View::Form => {
                if let Some(field) = self.form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
    }

    /// Stop the screen; pending timers are cancelled right away
    fn request_quit(&mut self) {
        self.quit = true;
        self.scheduler.cancel_all();
    }

    /// Submit the form. Ignored unless the phase is idle.
    pub fn submit(&mut self) {
        if !self.phase.is_idle() {
            debug!(phase = self.phase.label(), "submit ignored");
            return;
        }

        // A new attempt never shows the previous attempt's error
        self.error = None;
        let submission = self.form.submission();
        self.apply(SubmissionEvent::Submit(submission));
    }

    /// Process every timer event that has fired since the last call
    pub fn poll_timers(&mut self) {
        while let Some(event) = self.scheduler.try_next() {
            self.apply(event.into());
        }
    }

    /// Wait for the next timer to fire and process it
    #[cfg(test)]
    pub async fn wait_for_timer(&mut self) {
        if let Some(event) = self.scheduler.next().await {
            self.apply(event.into());
        }
    }

    #[cfg(test)]
    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending_count()
    }

    #[cfg(test)]
    pub fn timer_handles(&self) -> Vec<tokio::task::AbortHandle> {
        self.scheduler.handles()
    }

    fn apply(&mut self, event: SubmissionEvent) {
        let next = transition(&self.phase, event);

        if next.phase != self.phase {
            info!(
                from = self.phase.label(),
                to = next.phase.label(),
                "submission phase changed"
            );
            if matches!(next.phase, SubmissionPhase::Success { .. }) {
                self.reveal = RevealState::new(RevealStyle::ScaleIn);
            }
            self.phase = next.phase;
        }

        match next.effect {
            Effect::None => {}
            Effect::Reject(error) => {
                debug!(%error, "submission rejected");
                self.error = Some(error);
            }
            Effect::Schedule(timer) => {
                self.error = None;
                self.scheduler.schedule(self.config.delay_for(timer), timer);
            }
            Effect::Complete(email) => {
                if let Some(mut completion) = self.completion.take() {
                    completion.on_signup_complete(&email);
                }
                self.scheduler.cancel_all();
            }
        }
    }
}
