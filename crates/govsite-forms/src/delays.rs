//! Submission delays derived from `[forms]` config.

use std::time::Duration;

use govsite_core::config::FormsConfig;

/// Fixed delays of the simulated submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormDelays {
    /// Submitting → Success.
    pub submit: Duration,
    /// Success → Idle.
    pub reset: Duration,
}

impl FormDelays {
    pub fn from_millis(submit_ms: u64, reset_ms: u64) -> Self {
        Self {
            submit: Duration::from_millis(submit_ms),
            reset: Duration::from_millis(reset_ms),
        }
    }
}

impl From<&FormsConfig> for FormDelays {
    fn from(config: &FormsConfig) -> Self {
        Self::from_millis(
            config.effective_submit_delay_ms(),
            config.effective_reset_delay_ms(),
        )
    }
}

impl Default for FormDelays {
    fn default() -> Self {
        Self::from(&FormsConfig::default())
    }
}
