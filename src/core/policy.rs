//! Output policies and their resolution against the logger configuration

use super::action::{Action, ConsoleColor, ConsoleMethod};
use super::config::GeneralConfig;
use super::log_level::LogLevel;
use super::prefix::build_prefix;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// A rule describing which levels it applies to and what to do with them.
///
/// Unset `id`, `prefix` and `timestamp_format` are taken from the logger's
/// [`GeneralConfig`] when the policy is resolved.
///
/// # Examples
///
/// ```
/// use policy_logger::core::{LogLevel, Policy};
///
/// let audit = Policy::file("/var/log/app/audit.log")
///     .with_max_bytes(64 * 1024)
///     .for_levels([LogLevel::Warn, LogLevel::Error])
///     .with_prefix("audit");
///
/// assert!(audit.applies_to(LogLevel::Error));
/// assert!(!audit.applies_to(LogLevel::Info));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_format: Option<TimestampFormat>,
    /// Levels this policy handles; `None` means every level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub levels: Option<BTreeSet<LogLevel>>,
    pub action: Action,
}

impl Policy {
    #[must_use]
    pub fn new(action: Action) -> Self {
        Self {
            id: None,
            prefix: None,
            timestamp_format: None,
            levels: None,
            action,
        }
    }

    /// Console output with method and color taken from the level
    #[must_use]
    pub fn console() -> Self {
        Self::new(Action::console())
    }

    /// Console output on a fixed method and color
    #[must_use]
    pub fn console_with(method: ConsoleMethod, color: ConsoleColor) -> Self {
        Self::new(Action::Console {
            method: Some(method),
            color: Some(color),
        })
    }

    #[must_use]
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::new(Action::file(path))
    }

    #[must_use]
    pub fn raise_error() -> Self {
        Self::new(Action::RaiseError)
    }

    /// Swallow matching messages
    #[must_use]
    pub fn none() -> Self {
        Self::new(Action::None)
    }

    /// Restrict the policy to the given levels
    #[must_use]
    pub fn for_levels(mut self, levels: impl IntoIterator<Item = LogLevel>) -> Self {
        self.levels = Some(levels.into_iter().collect());
        self
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
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = Some(format);
        self
    }

    /// Set the trim threshold of a file policy; no effect on other actions
    #[must_use]
    pub fn with_max_bytes(mut self, limit: u64) -> Self {
        if let Action::File { max_bytes, .. } = &mut self.action {
            *max_bytes = Some(limit);
        }
        self
    }

    /// Whether this policy handles messages at `level`
    #[must_use]
    pub fn applies_to(&self, level: LogLevel) -> bool {
        self.levels
            .as_ref()
            .is_none_or(|levels| levels.contains(&level))
    }

    /// Fill unset fields from `general`; values set on the policy win
    #[must_use]
    pub fn resolve(&self, general: &GeneralConfig) -> ResolvedPolicy {
        ResolvedPolicy {
            id: self.id.clone().or_else(|| general.id.clone()),
            prefix: self.prefix.clone().or_else(|| general.prefix.clone()),
            timestamp_format: self.timestamp_format.or(general.timestamp_format),
            action: self.action.clone(),
        }
    }
}

/// A policy with every fallback applied, ready for dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPolicy {
    pub id: Option<String>,
    pub prefix: Option<String>,
    pub timestamp_format: Option<TimestampFormat>,
    pub action: Action,
}

impl ResolvedPolicy {
    /// The console policy used when no configured policy matches a level
    #[must_use]
    pub fn fallback(general: &GeneralConfig) -> Self {
        Self {
            id: general.id.clone(),
            prefix: general.prefix.clone(),
            timestamp_format: general.timestamp_format,
            action: Action::console(),
        }
    }

    /// Display prefix for a message dispatched now
    #[must_use]
    pub fn build_prefix(&self) -> String {
        build_prefix(
            self.timestamp_format,
            self.id.as_deref(),
            self.prefix.as_deref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn general() -> GeneralConfig {
        GeneralConfig::new()
            .with_id("req-9")
            .with_prefix("api")
            .with_timestamp_format(TimestampFormat::Time)
    }

    #[test]
    fn test_levels_filter() {
        let policy = Policy::console().for_levels([LogLevel::Warn, LogLevel::Error]);
        assert!(policy.applies_to(LogLevel::Warn));
        assert!(policy.applies_to(LogLevel::Error));
        assert!(!policy.applies_to(LogLevel::Info));
        assert!(!policy.applies_to(LogLevel::Debug));
    }

    #[test]
    fn test_unset_levels_match_everything() {
        let policy = Policy::none();
        assert!(LogLevel::ALL.iter().all(|level| policy.applies_to(*level)));
    }

    #[test]
    fn test_resolve_fills_from_general() {
        let resolved = Policy::raise_error().resolve(&general());
        assert_eq!(resolved.id.as_deref(), Some("req-9"));
        assert_eq!(resolved.prefix.as_deref(), Some("api"));
        assert_eq!(resolved.timestamp_format, Some(TimestampFormat::Time));
        assert_eq!(resolved.action, Action::RaiseError);
    }

    #[test]
    fn test_resolve_policy_wins() {
        let resolved = Policy::console()
            .with_prefix("audit")
            .with_timestamp_format(TimestampFormat::None)
            .resolve(&general());
        assert_eq!(resolved.prefix.as_deref(), Some("audit"));
        assert_eq!(resolved.id.as_deref(), Some("req-9"));
        assert_eq!(resolved.timestamp_format, Some(TimestampFormat::None));
        assert_eq!(resolved.build_prefix(), "[audit (req-9)]");
    }

    #[test]
    fn test_fallback_inherits_general() {
        let resolved = ResolvedPolicy::fallback(&GeneralConfig::new().with_prefix("svc"));
        assert_eq!(resolved.action, Action::console());
        assert_eq!(resolved.build_prefix(), "[svc]");
    }

    #[test]
    fn test_max_bytes_only_touches_file_actions() {
        let file = Policy::file("a.log").with_max_bytes(100);
        assert_eq!(
            file.action,
            Action::File {
                path: PathBuf::from("a.log"),
                max_bytes: Some(100)
            }
        );
        assert_eq!(Policy::console().with_max_bytes(100).action, Action::console());
    }
}
