//! Tests for the govsite configuration system.

use std::sync::Mutex;

use govsite_core::config::SiteConfig;
use govsite_core::errors::ConfigError;

/// Serializes tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn clear_govsite_env_vars() {
    for key in [
        "GOVSITE_FORMS_SUBMIT_DELAY_MS",
        "GOVSITE_FORMS_RESET_DELAY_MS",
        "GOVSITE_EXPORT_DIR",
        "GOVSITE_LOG_LEVEL",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn empty_toml_yields_all_defaults() {
    let config = SiteConfig::from_toml("").unwrap();
    assert_eq!(config.forms.effective_submit_delay_ms(), 1500);
    assert_eq!(config.forms.effective_reset_delay_ms(), 3000);
    assert_eq!(config.export.effective_output_dir(), "exports");
    assert_eq!(config.observability.effective_log_level(), "info");
    assert!(config.observability.effective_ansi());
}

#[test]
fn partial_toml_keeps_other_defaults() {
    let config = SiteConfig::from_toml(
        r#"
[forms]
submit_delay_ms = 250
"#,
    )
    .unwrap();
    assert_eq!(config.forms.effective_submit_delay_ms(), 250);
    assert_eq!(config.forms.effective_reset_delay_ms(), 3000);
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let err = SiteConfig::from_toml("[forms\nsubmit_delay_ms = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn env_overrides_project_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_govsite_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("govsite.toml"),
        r#"
[forms]
submit_delay_ms = 800
reset_delay_ms = 900

[export]
output_dir = "from-file"
"#,
    )
    .unwrap();

    std::env::set_var("GOVSITE_FORMS_SUBMIT_DELAY_MS", "20");
    std::env::set_var("GOVSITE_EXPORT_DIR", "from-env");

    let config = SiteConfig::load(dir.path()).unwrap();
    clear_govsite_env_vars();

    assert_eq!(config.forms.effective_submit_delay_ms(), 20);
    assert_eq!(config.forms.effective_reset_delay_ms(), 900);
    assert_eq!(config.export.effective_output_dir(), "from-env");
}

#[test]
fn unparseable_env_value_is_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_govsite_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    std::env::set_var("GOVSITE_FORMS_RESET_DELAY_MS", "soon");
    let config = SiteConfig::load(dir.path()).unwrap();
    clear_govsite_env_vars();

    assert_eq!(config.forms.effective_reset_delay_ms(), 3000);
}

#[test]
fn invalid_env_log_level_and_blank_export_dir_are_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_govsite_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("govsite.toml"),
        "[observability]\nlog_level = \"warn\"\n",
    )
    .unwrap();
    std::env::set_var("GOVSITE_LOG_LEVEL", "verbose");
    std::env::set_var("GOVSITE_EXPORT_DIR", "   ");
    let config = SiteConfig::load(dir.path());
    clear_govsite_env_vars();

    let config = config.unwrap();
    assert_eq!(config.observability.effective_log_level(), "warn");
    assert_eq!(config.export.effective_output_dir(), "exports");
}

#[test]
fn env_log_level_is_case_insensitive() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_govsite_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    std::env::set_var("GOVSITE_LOG_LEVEL", " DEBUG ");
    let config = SiteConfig::load(dir.path());
    clear_govsite_env_vars();

    assert_eq!(config.unwrap().observability.effective_log_level(), "debug");
}

#[test]
fn missing_project_file_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_govsite_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    let config = SiteConfig::load(dir.path()).unwrap();
    assert_eq!(config.export.effective_output_dir(), "exports");
}

#[test]
fn malformed_project_file_is_fatal() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_govsite_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("govsite.toml"), "forms = [").unwrap();
    let err = SiteConfig::load(dir.path()).unwrap_err();
    match err {
        ConfigError::ParseError { path, .. } => assert!(path.ends_with("govsite.toml")),
        other => panic!("expected ParseError, got {other:?}"),
    }
}

#[test]
fn zero_delay_fails_validation() {
    let config = SiteConfig::from_toml("[forms]\nreset_delay_ms = 0\n").unwrap();
    let err = SiteConfig::validate(&config).unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "forms.reset_delay_ms")
        }
        other => panic!("expected ValidationFailed, got {other:?}"),
    }
}

#[test]
fn unknown_log_level_fails_validation() {
    let config = SiteConfig::from_toml("[observability]\nlog_level = \"loud\"\n").unwrap();
    assert!(SiteConfig::validate(&config).is_err());
}

#[test]
fn empty_output_dir_fails_validation() {
    let config = SiteConfig::from_toml("[export]\noutput_dir = \"  \"\n").unwrap();
    assert!(SiteConfig::validate(&config).is_err());
}

#[test]
fn config_toml_roundtrip_preserves_overrides() {
    let config = SiteConfig::from_toml("[forms]\nsubmit_delay_ms = 42\n").unwrap();
    let text = config.to_toml().unwrap();
    let back = SiteConfig::from_toml(&text).unwrap();
    assert_eq!(back.forms.submit_delay_ms, Some(42));
    assert_eq!(back.forms.reset_delay_ms, None);
}
