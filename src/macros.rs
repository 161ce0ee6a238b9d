//! Logging macros for ergonomic log message formatting.
//!
//! Each macro formats its arguments like `format!` and forwards to
//! [`Logger::print`](crate::Logger::print), returning its `Result` so a raising
//! policy can be handled with `?`.
//!
//! # Examples
//!
//! ```
//! use policy_logger::prelude::*;
//! use policy_logger::info;
//!
//! let logger = Logger::new();
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port).unwrap();
//! ```

/// Log a message at an explicit level with automatic formatting.
///
/// # Examples
///
/// ```
/// # use policy_logger::prelude::*;
/// # let logger = Logger::new();
/// use policy_logger::log;
/// log!(logger, LogLevel::Info, "Simple message").unwrap();
/// log!(logger, LogLevel::Error, "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.print(format!($($arg)+), $level)
    };
}

/// Log a debug-level message.
///
/// ```
/// # use policy_logger::prelude::*;
/// # let logger = Logger::builder().verbosity(LogLevel::Debug).build();
/// use policy_logger::debug;
/// debug!(logger, "Counter value: {}", 10).unwrap();
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// ```
/// # use policy_logger::prelude::*;
/// use policy_logger::error;
///
/// let logger = Logger::builder().policy(Policy::raise_error()).build();
/// let err = error!(logger, "Error code: {}", 500).unwrap_err();
/// assert_eq!(err.to_string(), "Error code: 500");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}
