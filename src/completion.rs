//! Hand-off of the verified email to whoever owns the next step

use std::sync::{Arc, Mutex};
use tracing::info;

/// Receives the verified email once signup completes.
///
/// Invoked exactly once per screen, only on the success path.
#[cfg_attr(test, mockall::automock)]
pub trait SignupCompletion: Send {
    fn on_signup_complete(&mut self, email: &str);
}

/// Completion handler that stores the email for the caller to pick up
/// after the terminal has been restored.
#[derive(Debug, Clone, Default)]
pub struct VerifiedEmail {
    slot: Arc<Mutex<Option<String>>>,
}

impl VerifiedEmail {
    /// Take the stored email, if signup completed
    pub fn take(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|mut slot| slot.take())
    }
}

impl SignupCompletion for VerifiedEmail {
    fn on_signup_complete(&mut self, email: &str) {
        info!(%email, "signup complete");
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(email.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_is_empty_before_completion() {
        let verified = VerifiedEmail::default();
        assert_eq!(verified.take(), None);
    }

    #[test]
    fn test_clone_shares_the_slot() {
        let verified = VerifiedEmail::default();
        let mut handler = verified.clone();

        handler.on_signup_complete("sparky@asu.edu");

        assert_eq!(verified.take(), Some("sparky@asu.edu".to_string()));
        assert_eq!(verified.take(), None);
    }
}
