//! # Policy Logger
//!
//! A policy-driven logging utility. Each message carries a severity level; the
//! logger gates it on its verbosity, then hands it to every configured policy
//! that accepts the level. A policy prints to a console stream, appends to a
//! size-bounded file, raises the message as an error, or drops it.
//!
//! ## Features
//!
//! - **Fan-out Policies**: Several outputs per level, applied in order
//! - **Scoped Loggers**: `spawn` derives per-request loggers without touching the parent
//! - **Bounded Files**: Oldest lines are trimmed once a file passes its byte budget
//! - **Non-blocking Files**: File appends run on a background writer thread
//!
//! ## Example
//!
//! ```
//! use policy_logger::prelude::*;
//!
//! let logger = Logger::builder()
//!     .prefix("billing")
//!     .policy(Policy::raise_error().for_levels([LogLevel::Error]))
//!     .build();
//!
//! let err = logger.error("invoice total is negative").unwrap_err();
//! assert_eq!(err.to_string(), "[billing] invoice total is negative");
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{CapturedStreams, ConsoleAppender, StdStreams};
    pub use crate::core::{
        Action, ConsoleColor, ConsoleLine, ConsoleMethod, ConsoleStream, GeneralConfig, LogLevel,
        LogMessage, Logger, LoggerBuilder, LoggerError, LoggerMetrics, Policy, Result,
        TimestampFormat,
    };
}

pub use crate::appenders::{CapturedStreams, ConsoleAppender, StdStreams, DEFAULT_FLUSH_TIMEOUT};
pub use crate::core::{
    Action, ConsoleColor, ConsoleLine, ConsoleMethod, ConsoleStream, GeneralConfig, LogLevel,
    LogMessage, Logger, LoggerBuilder, LoggerError, LoggerMetrics, Policy, ResolvedPolicy, Result,
    TimestampFormat,
};
