//! Export errors.

use super::error_code::{self, SiteErrorCode};

/// Errors raised while exporting a displayed plan.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Nothing to export: no plan has been generated for {scenario}")]
    NothingToExport { scenario: String },

    #[error("Failed to write export {path}: {message}")]
    WriteFailed { path: String, message: String },
}

impl SiteErrorCode for ExportError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NothingToExport { .. } => error_code::NOTHING_TO_EXPORT,
            Self::WriteFailed { .. } => error_code::EXPORT_ERROR,
        }
    }
}
