//! Simulated form errors.

use super::error_code::{self, SiteErrorCode};

/// Errors raised by the simulated form submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Required field is empty: {field}")]
    MissingField { field: &'static str },

    #[error("A submission is already in flight")]
    AlreadyInFlight,

    #[error("No async runtime available to schedule the submission")]
    NoRuntime,

    #[error("Form has been unmounted")]
    Unmounted,
}

impl SiteErrorCode for FormError {
    fn error_code(&self) -> &'static str {
        error_code::FORM_ERROR
    }
}
