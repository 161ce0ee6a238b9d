//! Raise appender: turns a log call into a failure

use crate::core::{with_prefix, LogMessage, LoggerError};

/// Build the failure returned for a `RaiseError` policy
pub fn raise(message: &LogMessage, prefix: &str) -> LoggerError {
    LoggerError::raised(with_prefix(prefix, message.plain()))
}
