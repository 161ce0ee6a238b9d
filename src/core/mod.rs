//! Core logger types and traits

pub mod action;
pub mod config;
pub mod error;
pub mod log_level;
pub mod log_message;
pub mod logger;
pub mod metrics;
pub mod policy;
pub mod prefix;
pub mod stream;
pub mod timestamp;

pub use action::{Action, ConsoleColor, ConsoleMethod};
pub use config::GeneralConfig;
pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use log_message::LogMessage;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use policy::{Policy, ResolvedPolicy};
pub use prefix::{build_prefix, compose_prefix, with_prefix};
pub use stream::{ConsoleLine, ConsoleStream};
pub use timestamp::{build_timestamp, TimestampFormat, MILLIS_WIDTH};
