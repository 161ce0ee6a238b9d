//! Error types for the logger system

use std::path::Path;
use std::time::Duration;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Unrecognized timestamp format name
    #[error("unrecognized timestamp format \"{value}\"")]
    InvalidFormat { value: String },

    /// Unrecognized console method name
    #[error("unrecognized console method \"{value}\"")]
    UnknownMethod { value: String },

    /// Unrecognized console color name
    #[error("unrecognized console color \"{value}\"")]
    UnknownColor { value: String },

    /// Unrecognized policy action
    #[error("unrecognized log action \"{value}\"")]
    UnknownAction { value: String },

    /// Unrecognized severity level name
    #[error("unrecognized log level \"{value}\"")]
    UnknownLevel { value: String },

    /// Raised on purpose by a policy whose action is `RaiseError`
    #[error("{message}")]
    Raised { message: String },

    /// IO error with context
    #[error("IO error while {operation} '{path}': {source}")]
    IoOperation {
        operation: String,
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Queued file writes did not drain in time
    #[error("pending file writes did not complete within {waited:?}")]
    Timeout { waited: Duration },
}

impl LoggerError {
    pub fn invalid_format(value: impl Into<String>) -> Self {
        LoggerError::InvalidFormat {
            value: value.into(),
        }
    }

    pub fn unknown_method(value: impl Into<String>) -> Self {
        LoggerError::UnknownMethod {
            value: value.into(),
        }
    }

    pub fn unknown_color(value: impl Into<String>) -> Self {
        LoggerError::UnknownColor {
            value: value.into(),
        }
    }

    pub fn unknown_action(value: impl Into<String>) -> Self {
        LoggerError::UnknownAction {
            value: value.into(),
        }
    }

    pub fn unknown_level(value: impl Into<String>) -> Self {
        LoggerError::UnknownLevel {
            value: value.into(),
        }
    }

    /// Create the failure carried by the `RaiseError` action
    pub fn raised(message: impl Into<String>) -> Self {
        LoggerError::Raised {
            message: message.into(),
        }
    }

    /// Create an IO operation error with the path it happened on
    pub fn io_operation(
        operation: impl Into<String>,
        path: &Path,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            path: path.display().to_string(),
            source,
        }
    }

    /// True for the deliberate failure produced by a `RaiseError` policy
    pub fn is_raised(&self) -> bool {
        matches!(self, LoggerError::Raised { .. })
    }
}
