//! Stable error codes shared by every subsystem error.

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const ESTIMATOR_ERROR: &str = "ESTIMATOR_ERROR";
pub const GENERATE_DISABLED: &str = "GENERATE_DISABLED";
pub const EXPORT_ERROR: &str = "EXPORT_ERROR";
pub const NOTHING_TO_EXPORT: &str = "NOTHING_TO_EXPORT";
pub const FORM_ERROR: &str = "FORM_ERROR";

/// Maps an error to a stable, machine-readable code.
pub trait SiteErrorCode {
    fn error_code(&self) -> &'static str;
}
