//! Configuration handling for the signup screen

use crate::state::TimerEvent;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default length of each simulated delay
const DEFAULT_DELAY_MS: u64 = 2000;

/// User configuration for the signup screen
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SignupConfig {
    /// Simulated email verification delay in milliseconds
    pub verification_delay_ms: Option<u64>,
    /// Simulated profile setup delay in milliseconds
    pub setup_delay_ms: Option<u64>,
}

impl SignupConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("edu", "sparkd", "sparkd-signup")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the user config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, falling back to defaults when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: SignupConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn verification_delay(&self) -> Duration {
        Duration::from_millis(self.verification_delay_ms.unwrap_or(DEFAULT_DELAY_MS))
    }

    pub fn setup_delay(&self) -> Duration {
        Duration::from_millis(self.setup_delay_ms.unwrap_or(DEFAULT_DELAY_MS))
    }

    /// Delay before `event` fires
    pub fn delay_for(&self, event: TimerEvent) -> Duration {
        match event {
            TimerEvent::VerificationElapsed => self.verification_delay(),
            TimerEvent::SetupElapsed => self.setup_delay(),
        }
    }
}
