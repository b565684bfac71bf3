//! Top-level govsite configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::observability_config::LOG_LEVELS;
use super::{ExportConfig, FormsConfig, ObservabilityConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`GOVSITE_*`)
/// 2. Project config (`govsite.toml` in the site root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SiteConfig {
    pub forms: FormsConfig,
    pub export: ExportConfig,
    pub observability: ObservabilityConfig,
}

impl SiteConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;

        tracing::debug!(root = %root.display(), "site config resolved");
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &SiteConfig) -> Result<(), ConfigError> {
        if config.forms.submit_delay_ms == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "forms.submit_delay_ms".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.forms.reset_delay_ms == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "forms.reset_delay_ms".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.export.effective_output_dir().trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "export.output_dir".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        let level = config.observability.effective_log_level();
        if !LOG_LEVELS.contains(&level) {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!("must be one of {}", LOG_LEVELS.join(", ")),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    fn merge_toml_file(config: &mut SiteConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: SiteConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values override.
    fn merge(base: &mut SiteConfig, other: &SiteConfig) {
        if other.forms.submit_delay_ms.is_some() {
            base.forms.submit_delay_ms = other.forms.submit_delay_ms;
        }
        if other.forms.reset_delay_ms.is_some() {
            base.forms.reset_delay_ms = other.forms.reset_delay_ms;
        }
        if other.export.output_dir.is_some() {
            base.export.output_dir = other.export.output_dir.clone();
        }
        if other.observability.log_level.is_some() {
            base.observability.log_level = other.observability.log_level.clone();
        }
        if other.observability.ansi.is_some() {
            base.observability.ansi = other.observability.ansi;
        }
    }

    /// Apply environment variable overrides.
    /// Values that fail to parse are ignored.
    fn apply_env_overrides(config: &mut SiteConfig) {
        if let Ok(val) = std::env::var("GOVSITE_FORMS_SUBMIT_DELAY_MS") {
            if let Ok(v) = val.parse::<u64>() {
                config.forms.submit_delay_ms = Some(v);
            }
        }
        if let Ok(val) = std::env::var("GOVSITE_FORMS_RESET_DELAY_MS") {
            if let Ok(v) = val.parse::<u64>() {
                config.forms.reset_delay_ms = Some(v);
            }
        }
        if let Ok(val) = std::env::var("GOVSITE_EXPORT_DIR") {
            if !val.trim().is_empty() {
                config.export.output_dir = Some(val);
            }
        }
        if let Ok(val) = std::env::var("GOVSITE_LOG_LEVEL") {
            let level = val.trim().to_ascii_lowercase();
            if LOG_LEVELS.contains(&level.as_str()) {
                config.observability.log_level = Some(level);
            }
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
