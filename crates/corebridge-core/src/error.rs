//! Unified error handling for CoreBridge Core.
//!
//! Wraps application errors with a category and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;

/// Root error type for CoreBridge Core operations.
#[derive(Debug, Error, Clone)]
pub enum CoreBridgeError {
    /// Errors from the application layer (rendering, I/O).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl CoreBridgeError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check corebridge.config.json and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in CoreBridge".into(),
                "Please report this issue with the command you ran".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::SinkLockError))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type CoreBridgeResult<T> = Result<T, CoreBridgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_errors_keep_their_category() {
        let err: CoreBridgeError = ApplicationError::SinkLockError.into();
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(err.is_retryable());
    }
}
