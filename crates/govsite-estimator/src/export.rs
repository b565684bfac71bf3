//! Export artifacts: the downloadable rendering of a displayed plan.

use std::path::{Path, PathBuf};

use govsite_core::errors::ExportError;
use serde::{Deserialize, Serialize};

use crate::formats::{MarkdownFormatter, PlainTextFormatter};
use crate::plan::DerivedPlan;

/// Output format of an exported plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExportFormat {
    PlainText,
    Markdown,
}

impl ExportFormat {
    pub fn content_type(self) -> &'static str {
        match self {
            Self::PlainText => "text/plain; charset=utf-8",
            Self::Markdown => "text/markdown; charset=utf-8",
        }
    }

    /// Render `plan` in this format.
    pub fn render(self, plan: &DerivedPlan) -> String {
        match self {
            Self::PlainText => PlainTextFormatter::new().format(plan),
            Self::Markdown => MarkdownFormatter::new().format(plan),
        }
    }
}

/// A rendered export with its fixed filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub filename: String,
    pub content_type: &'static str,
    pub body: String,
}

impl ExportArtifact {
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Write the artifact into `dir`, creating the directory if needed.
    /// Returns the written path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        let path = dir.join(&self.filename);
        std::fs::create_dir_all(dir).map_err(|e| ExportError::WriteFailed {
            path: dir.display().to_string(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, self.body.as_bytes()).map_err(|e| ExportError::WriteFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        tracing::debug!(path = %path.display(), bytes = self.body.len(), "export written");
        Ok(path)
    }
}
