//! Timestamp formatting utilities
//!
//! Produces the timestamp portion of a message prefix. All formats use the
//! local wall clock.

use super::error::LoggerError;
use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Zero-padding width of the millisecond field in [`TimestampFormat::Milliseconds`].
///
/// Milliseconds never need more than three digits; the fourth is kept so existing
/// log parsers that expect `HH:MM:SS.0123` keep working.
pub const MILLIS_WIDTH: usize = 4;

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use policy_logger::core::TimestampFormat;
/// use chrono::{TimeZone, Utc};
///
/// let at = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(TimestampFormat::Time.format(&at), "10:30:45");
/// assert_eq!(TimestampFormat::None.format(&at), "");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampFormat {
    /// No timestamp at all
    #[default]
    None,

    /// Full date and time: `Wed Jan 08 2025 10:30:45 GMT+0000`
    Full,

    /// Time of day: `10:30:45`
    Time,

    /// Time of day with milliseconds: `10:30:45.0123`
    Milliseconds,
}

impl TimestampFormat {
    /// Format an instant according to this format
    #[must_use]
    pub fn format<Tz: TimeZone>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz::Offset: fmt::Display,
    {
        match self {
            TimestampFormat::None => String::new(),
            TimestampFormat::Full => datetime.format("%a %b %d %Y %H:%M:%S GMT%z").to_string(),
            TimestampFormat::Time => datetime.format("%H:%M:%S").to_string(),
            TimestampFormat::Milliseconds => format!(
                "{}.{:0width$}",
                datetime.format("%H:%M:%S"),
                datetime.timestamp_subsec_millis() % 1000,
                width = MILLIS_WIDTH
            ),
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            TimestampFormat::None => "none",
            TimestampFormat::Full => "full",
            TimestampFormat::Time => "time",
            TimestampFormat::Milliseconds => "milliseconds",
        }
    }
}

impl fmt::Display for TimestampFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for TimestampFormat {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(TimestampFormat::None),
            "full" => Ok(TimestampFormat::Full),
            "time" => Ok(TimestampFormat::Time),
            "milliseconds" | "millis" => Ok(TimestampFormat::Milliseconds),
            _ => Err(LoggerError::invalid_format(s)),
        }
    }
}

/// Build a timestamp for the current instant; an absent format means no timestamp
#[must_use]
pub fn build_timestamp(format: Option<TimestampFormat>) -> String {
    match format {
        Some(TimestampFormat::None) | None => String::new(),
        Some(format) => format.format(&Local::now()),
    }
}
