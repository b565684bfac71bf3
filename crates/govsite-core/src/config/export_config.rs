//! Export configuration.

use serde::{Deserialize, Serialize};

/// Where exported plan artifacts are written.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExportConfig {
    /// Output directory for exported artifacts. Default: "exports".
    pub output_dir: Option<String>,
}

impl ExportConfig {
    /// Returns the effective output directory, defaulting to `exports`.
    pub fn effective_output_dir(&self) -> &str {
        self.output_dir.as_deref().unwrap_or("exports")
    }
}
