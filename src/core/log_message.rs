//! Message values accepted by the logger

use std::error::Error;
use std::fmt::{self, Write};

/// Text or a failure value handed to [`Logger::print`](crate::Logger::print).
///
/// Failures keep two renderings: the one-line description used by files and
/// raised errors, and a detailed trace (description plus every `source()` in the
/// chain) shown on the console.
///
/// # Examples
///
/// ```
/// use policy_logger::core::LogMessage;
///
/// let err = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml missing");
/// let message = LogMessage::from_error(&err);
/// assert_eq!(message.plain(), "config.toml missing");
/// assert!(message.is_failure());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogMessage {
    Text(String),
    Failure { description: String, trace: String },
}

impl LogMessage {
    /// Capture an error together with its chain of causes
    pub fn from_error<E: Error + ?Sized>(err: &E) -> Self {
        let description = err.to_string();
        let mut trace = description.clone();

        let mut source = err.source();
        if source.is_some() {
            trace.push_str("\n\nCaused by:");
        }
        let mut depth = 0;
        while let Some(cause) = source {
            // Writing into a String cannot fail.
            let _ = write!(trace, "\n    {depth}: {cause}");
            depth += 1;
            source = cause.source();
        }

        LogMessage::Failure { description, trace }
    }

    /// Short form: the text itself, or the failure's description
    pub fn plain(&self) -> &str {
        match self {
            LogMessage::Text(text) => text,
            LogMessage::Failure { description, .. } => description,
        }
    }

    /// Long form: the text itself, or the failure's trace
    pub fn detailed(&self) -> &str {
        match self {
            LogMessage::Text(text) => text,
            LogMessage::Failure { trace, .. } => trace,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, LogMessage::Failure { .. })
    }
}

impl fmt::Display for LogMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.plain())
    }
}

impl From<String> for LogMessage {
    fn from(text: String) -> Self {
        LogMessage::Text(text)
    }
}

impl From<&str> for LogMessage {
    fn from(text: &str) -> Self {
        LogMessage::Text(text.to_string())
    }
}

impl From<&String> for LogMessage {
    fn from(text: &String) -> Self {
        LogMessage::Text(text.clone())
    }
}

impl From<fmt::Arguments<'_>> for LogMessage {
    fn from(args: fmt::Arguments<'_>) -> Self {
        LogMessage::Text(args.to_string())
    }
}
