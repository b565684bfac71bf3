//! Estimator errors.

use super::error_code::{self, SiteErrorCode};

/// Errors raised by estimator inputs and the generate guard.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EstimatorError {
    #[error("Unknown {field} option: {value:?}")]
    UnknownOption { field: &'static str, value: String },

    #[error("Generate is disabled until required fields are set: {missing}")]
    GenerateDisabled { missing: String },
}

impl SiteErrorCode for EstimatorError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownOption { .. } => error_code::ESTIMATOR_ERROR,
            Self::GenerateDisabled { .. } => error_code::GENERATE_DISABLED,
        }
    }
}
