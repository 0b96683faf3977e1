//! Application layer errors.
//!
//! The domain layer is total and has no error type of its own; everything
//! that can fail happens here, while rendering or at the write boundary.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during generation orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Serialising a generated document failed.
    #[error("Rendering {artifact} failed: {reason}")]
    RenderingFailed { artifact: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// An in-memory sink could not be accessed (lock poisoned).
    #[error("Output sink is unavailable")]
    SinkLockError,
}

impl ApplicationError {
    pub(crate) fn rendering(artifact: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::RenderingFailed {
            artifact: artifact.into(),
            reason: err.to_string(),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Files written before the failure were left in place; re-run to overwrite them"
                    .into(),
            ],
            Self::SinkLockError => vec![
                "The output sink is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::RenderingFailed { .. } => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } => ErrorCategory::Io,
            Self::SinkLockError | Self::RenderingFailed { .. } => ErrorCategory::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filesystem_error_mentions_path() {
        let err = ApplicationError::FilesystemError {
            path: PathBuf::from("/out/core"),
            reason: "permission denied".into(),
        };
        assert!(err.to_string().contains("/out/core"));
        assert_eq!(err.category(), ErrorCategory::Io);
        assert!(err.suggestions()[0].contains("/out/core"));
    }

    #[test]
    fn rendering_helper_captures_artifact() {
        let err = ApplicationError::rendering("openapi/openapi.yaml", "bad float");
        assert_eq!(
            err.to_string(),
            "Rendering openapi/openapi.yaml failed: bad float"
        );
    }
}
