//! Policy actions and their console options

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Which console stream a line is written to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleMethod {
    Debug,
    Info,
    Warn,
    Error,
}

impl ConsoleMethod {
    pub fn to_str(&self) -> &'static str {
        match self {
            ConsoleMethod::Debug => "debug",
            ConsoleMethod::Info => "info",
            ConsoleMethod::Warn => "warn",
            ConsoleMethod::Error => "error",
        }
    }
}

impl fmt::Display for ConsoleMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for ConsoleMethod {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debug" => Ok(ConsoleMethod::Debug),
            "info" => Ok(ConsoleMethod::Info),
            "warn" => Ok(ConsoleMethod::Warn),
            "error" => Ok(ConsoleMethod::Error),
            _ => Err(LoggerError::unknown_method(s)),
        }
    }
}

/// Named color a console line is rendered in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConsoleColor {
    /// Terminal default, no escape codes
    #[default]
    Default,
    Green,
    YellowBright,
    Red,
    Blue,
    Cyan,
    Magenta,
}

impl ConsoleColor {
    pub fn to_str(&self) -> &'static str {
        match self {
            ConsoleColor::Default => "default",
            ConsoleColor::Green => "green",
            ConsoleColor::YellowBright => "yellowBright",
            ConsoleColor::Red => "red",
            ConsoleColor::Blue => "blue",
            ConsoleColor::Cyan => "cyan",
            ConsoleColor::Magenta => "magenta",
        }
    }

    /// Render text in this color
    #[cfg(feature = "console")]
    pub fn paint(&self, text: &str) -> String {
        use colored::Colorize;
        match self {
            ConsoleColor::Default => text.to_string(),
            ConsoleColor::Green => text.green().to_string(),
            ConsoleColor::YellowBright => text.bright_yellow().to_string(),
            ConsoleColor::Red => text.red().to_string(),
            ConsoleColor::Blue => text.blue().to_string(),
            ConsoleColor::Cyan => text.cyan().to_string(),
            ConsoleColor::Magenta => text.magenta().to_string(),
        }
    }

    /// Render text in this color (colors disabled at build time)
    #[cfg(not(feature = "console"))]
    pub fn paint(&self, text: &str) -> String {
        text.to_string()
    }
}

impl fmt::Display for ConsoleColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for ConsoleColor {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(ConsoleColor::Default),
            "green" => Ok(ConsoleColor::Green),
            "yellowBright" | "bright_yellow" => Ok(ConsoleColor::YellowBright),
            "red" => Ok(ConsoleColor::Red),
            "blue" => Ok(ConsoleColor::Blue),
            "cyan" => Ok(ConsoleColor::Cyan),
            "magenta" => Ok(ConsoleColor::Magenta),
            _ => Err(LoggerError::unknown_color(s)),
        }
    }
}

/// What a policy does with a message it accepts
///
/// # Examples
///
/// ```
/// use policy_logger::core::{Action, ConsoleMethod};
///
/// let action: Action = "console".parse().unwrap();
/// assert_eq!(action, Action::Console { method: None, color: None });
///
/// let action: Action = "file:/tmp/app.log".parse().unwrap();
/// assert!(matches!(action, Action::File { max_bytes: None, .. }));
///
/// assert!("email".parse::<Action>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Action {
    /// Print to a console stream; unset fields follow the message level
    Console {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        method: Option<ConsoleMethod>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<ConsoleColor>,
    },

    /// Append to a file, trimming the oldest lines once it grows past `max_bytes`
    File {
        path: PathBuf,
        #[serde(default, rename = "maxBytes", skip_serializing_if = "Option::is_none")]
        max_bytes: Option<u64>,
    },

    /// Turn the log call into a failure carrying the formatted message
    #[serde(rename = "error", alias = "raiseError")]
    RaiseError,

    /// Accept the message and do nothing
    None,
}

impl Default for Action {
    fn default() -> Self {
        Action::console()
    }
}

impl Action {
    /// Console action whose method and color follow the message level
    #[must_use]
    pub fn console() -> Self {
        Action::Console {
            method: None,
            color: None,
        }
    }

    /// File action without a size limit
    #[must_use]
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Action::File {
            path: path.into(),
            max_bytes: None,
        }
    }

    /// Short name of the action kind
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Console { .. } => "console",
            Action::File { .. } => "file",
            Action::RaiseError => "error",
            Action::None => "none",
        }
    }
}

impl FromStr for Action {
    type Err = LoggerError;

    /// Parse `console`, `error` (or `raise`), `none`, or `file:<path>`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(path) = s.strip_prefix("file:") {
            if path.is_empty() {
                return Err(LoggerError::unknown_action(s));
            }
            return Ok(Action::file(path));
        }
        match s {
            "console" => Ok(Action::console()),
            "error" | "raise" => Ok(Action::RaiseError),
            "none" => Ok(Action::None),
            _ => Err(LoggerError::unknown_action(s)),
        }
    }
}
