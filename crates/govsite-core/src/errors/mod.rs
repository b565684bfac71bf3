//! Error handling for govsite.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod estimator_error;
pub mod export_error;
pub mod form_error;

pub use config_error::ConfigError;
pub use error_code::SiteErrorCode;
pub use estimator_error::EstimatorError;
pub use export_error::ExportError;
pub use form_error::FormError;
