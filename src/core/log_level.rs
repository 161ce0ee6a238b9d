//! Log level definitions

use super::action::{ConsoleColor, ConsoleMethod};
use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a message. Higher values are more verbose, so a logger with
/// verbosity `Info` lets `Error`, `Warn` and `Info` through and drops `Debug`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    None = 0,
    Error = 1,
    #[serde(alias = "warning")]
    Warn = 2,
    #[default]
    Info = 3,
    Debug = 4,
}

impl LogLevel {
    pub const ALL: [LogLevel; 5] = [
        LogLevel::None,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::None => "NONE",
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Console method and color used when a console action leaves them unset
    pub fn console_defaults(&self) -> (ConsoleMethod, ConsoleColor) {
        match self {
            LogLevel::Debug => (ConsoleMethod::Debug, ConsoleColor::Default),
            LogLevel::None | LogLevel::Info => (ConsoleMethod::Info, ConsoleColor::Green),
            LogLevel::Warn => (ConsoleMethod::Warn, ConsoleColor::YellowBright),
            LogLevel::Error => (ConsoleMethod::Error, ConsoleColor::Red),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "NONE" => Ok(LogLevel::None),
            "ERROR" => Ok(LogLevel::Error),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "INFO" => Ok(LogLevel::Info),
            "DEBUG" => Ok(LogLevel::Debug),
            _ => Err(LoggerError::unknown_level(s)),
        }
    }
}
