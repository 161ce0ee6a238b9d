//! Logger-wide configuration

use super::log_level::LogLevel;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};

/// Defaults shared by every policy of a logger.
///
/// Every field is optional. Unset fields fall back to: verbosity `Info`, no id,
/// no prefix, no timestamp.
///
/// # Examples
///
/// ```
/// use policy_logger::core::{GeneralConfig, LogLevel, TimestampFormat};
///
/// let config = GeneralConfig::new()
///     .with_prefix("api")
///     .with_verbosity(LogLevel::Debug)
///     .with_timestamp_format(TimestampFormat::Time);
/// assert_eq!(config.effective_verbosity(), LogLevel::Debug);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneralConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbosity: Option<LogLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp_format: Option<TimestampFormat>,
}

impl GeneralConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub fn with_verbosity(mut self, verbosity: LogLevel) -> Self {
        self.verbosity = Some(verbosity);
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = Some(format);
        self
    }

    /// Verbosity used for gating, `Info` when unset
    #[must_use]
    pub fn effective_verbosity(&self) -> LogLevel {
        self.verbosity.unwrap_or_default()
    }

    /// Whether a message at `level` passes the verbosity gate
    #[must_use]
    pub fn allows(&self, level: LogLevel) -> bool {
        level != LogLevel::None && level <= self.effective_verbosity()
    }

    /// Lay these values over `base`: fields set here win, unset ones come from `base`.
    #[must_use]
    pub fn merged_onto(&self, base: &GeneralConfig) -> GeneralConfig {
        GeneralConfig {
            id: self.id.clone().or_else(|| base.id.clone()),
            prefix: self.prefix.clone().or_else(|| base.prefix.clone()),
            verbosity: self.verbosity.or(base.verbosity),
            timestamp_format: self.timestamp_format.or(base.timestamp_format),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneralConfig::default();
        assert_eq!(config.effective_verbosity(), LogLevel::Info);
        assert!(config.id.is_none());
        assert!(config.prefix.is_none());
        assert!(config.timestamp_format.is_none());
    }

    #[test]
    fn test_gate() {
        let config = GeneralConfig::new().with_verbosity(LogLevel::Warn);
        assert!(config.allows(LogLevel::Error));
        assert!(config.allows(LogLevel::Warn));
        assert!(!config.allows(LogLevel::Info));
        assert!(!config.allows(LogLevel::Debug));
        assert!(!config.allows(LogLevel::None));
    }

    #[test]
    fn test_verbosity_none_silences_everything() {
        let config = GeneralConfig::new().with_verbosity(LogLevel::None);
        assert!(LogLevel::ALL.iter().all(|level| !config.allows(*level)));
    }

    #[test]
    fn test_merge_override_wins() {
        let parent = GeneralConfig::new()
            .with_id("1")
            .with_prefix("parent")
            .with_verbosity(LogLevel::Debug);
        let child = GeneralConfig::new().with_prefix("child").merged_onto(&parent);

        assert_eq!(child.prefix.as_deref(), Some("child"));
        assert_eq!(child.id.as_deref(), Some("1"));
        assert_eq!(child.verbosity, Some(LogLevel::Debug));
        assert_eq!(child.timestamp_format, None);
    }

    #[test]
    fn test_empty_merge_is_identity() {
        let parent = GeneralConfig::new()
            .with_prefix("parent")
            .with_timestamp_format(TimestampFormat::Time);
        assert_eq!(GeneralConfig::default().merged_onto(&parent), parent);
    }
}
