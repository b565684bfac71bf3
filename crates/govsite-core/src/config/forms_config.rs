//! Simulated form configuration.

use serde::{Deserialize, Serialize};

/// Delays standing in for network latency on the simulated forms.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FormsConfig {
    /// Delay before a submission flips to success (ms). Default: 1500.
    pub submit_delay_ms: Option<u64>,
    /// Delay before a successful form resets to idle (ms). Default: 3000.
    pub reset_delay_ms: Option<u64>,
}

impl FormsConfig {
    pub fn effective_submit_delay_ms(&self) -> u64 {
        self.submit_delay_ms.unwrap_or(1500)
    }

    pub fn effective_reset_delay_ms(&self) -> u64 {
        self.reset_delay_ms.unwrap_or(3000)
    }
}
