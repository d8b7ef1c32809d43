//! Submission state machine
//!
//! The signup flow is `Idle -> Validating -> Success`, after which the verified
//! email is handed to the completion handler. [`transition`] is a pure function
//! over the current phase and an incoming event; the caller performs the
//! returned [`Effect`] (arming a timer, showing an error, completing).

use super::validation::ValidationError;

/// Phase of the signup submission
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    /// Form is editable and accepts submissions
    #[default]
    Idle,
    /// Simulated verification of the submitted email is in progress
    Validating { email: String },
    /// Verification finished; profile setup is being simulated
    Success { email: String },
}

impl SubmissionPhase {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Validating { .. } => "validating",
            Self::Success { .. } => "success",
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// Delayed events delivered by the scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerEvent {
    /// The simulated verification delay has elapsed
    VerificationElapsed,
    /// The simulated profile setup delay has elapsed
    SetupElapsed,
}

/// Input to the state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionEvent {
    /// User submitted the form; carries the validated email or the failure
    Submit(Result<String, ValidationError>),
    Timer(TimerEvent),
}

impl From<TimerEvent> for SubmissionEvent {
    fn from(event: TimerEvent) -> Self {
        Self::Timer(event)
    }
}

/// Side effect requested by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Show the error inline and keep the form editable
    Reject(ValidationError),
    /// Clear any previous error and arm a timer for the given event
    Schedule(TimerEvent),
    /// Hand the verified email to the completion handler
    Complete(String),
}

/// Result of applying an event to a phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub phase: SubmissionPhase,
    pub effect: Effect,
}

impl Transition {
    fn ignore(phase: &SubmissionPhase) -> Self {
        Self {
            phase: phase.clone(),
            effect: Effect::None,
        }
    }
}

/// Compute the next phase and effect for `event` in `phase`.
///
/// Unhandled pairs leave the phase untouched with [`Effect::None`], so a
/// submit while verifying or a stray timer never moves the flow backwards.
pub fn transition(phase: &SubmissionPhase, event: SubmissionEvent) -> Transition {
    match (phase, event) {
        (SubmissionPhase::Idle, SubmissionEvent::Submit(Err(error))) => Transition {
            phase: SubmissionPhase::Idle,
            effect: Effect::Reject(error),
        },
        (SubmissionPhase::Idle, SubmissionEvent::Submit(Ok(email))) => Transition {
            phase: SubmissionPhase::Validating { email },
            effect: Effect::Schedule(TimerEvent::VerificationElapsed),
        },
        (
            SubmissionPhase::Validating { email },
            SubmissionEvent::Timer(TimerEvent::VerificationElapsed),
        ) => Transition {
            phase: SubmissionPhase::Success {
                email: email.clone(),
            },
            effect: Effect::Schedule(TimerEvent::SetupElapsed),
        },
        (SubmissionPhase::Success { email }, SubmissionEvent::Timer(TimerEvent::SetupElapsed)) => {
            Transition {
                phase: phase.clone(),
                effect: Effect::Complete(email.clone()),
            }
        }
        _ => Transition::ignore(phase),
    }
}
