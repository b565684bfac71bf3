//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::ObservabilityConfig;
use crate::errors::ConfigError;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins over the configured level when set. Returns `Ok(false)`
/// when a global subscriber was already installed.
pub fn init_tracing(config: &ObservabilityConfig) -> Result<bool, ConfigError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(config.effective_log_level()).map_err(|e| {
            ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: e.to_string(),
            }
        })?,
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.effective_ansi())
        .with_target(false)
        .try_init()
        .is_ok();

    Ok(installed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_reports_already_installed() {
        let config = ObservabilityConfig {
            log_level: Some("debug".to_string()),
            ansi: Some(false),
        };
        let _ = init_tracing(&config).unwrap();
        assert!(!init_tracing(&config).unwrap());
    }
}
