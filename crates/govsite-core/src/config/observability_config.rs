//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Accepted values for `log_level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Configuration for tracing output.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default filter directive. Default: "info".
    pub log_level: Option<String>,
    /// Colourised output. Default: true.
    pub ansi: Option<bool>,
}

impl ObservabilityConfig {
    pub fn effective_log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }

    pub fn effective_ansi(&self) -> bool {
        self.ansi.unwrap_or(true)
    }
}
