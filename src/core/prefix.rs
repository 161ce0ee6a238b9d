//! Message prefix composition

use super::timestamp::{build_timestamp, TimestampFormat};

/// Build the display prefix for the current instant.
///
/// ```
/// use policy_logger::core::build_prefix;
///
/// assert_eq!(build_prefix(None, Some("42"), Some("db")), "[db (42)]");
/// assert_eq!(build_prefix(None, Some("42"), None), "");
/// ```
#[must_use]
pub fn build_prefix(
    timestamp_format: Option<TimestampFormat>,
    id: Option<&str>,
    prefix: Option<&str>,
) -> String {
    compose_prefix(&build_timestamp(timestamp_format), id, prefix)
}

/// Combine an already formatted timestamp with an optional prefix and id.
///
/// Without a prefix only the timestamp is shown, and nothing at all when the
/// timestamp is empty. An empty id counts as absent.
#[must_use]
pub fn compose_prefix(timestamp: &str, id: Option<&str>, prefix: Option<&str>) -> String {
    let Some(prefix) = prefix else {
        if timestamp.is_empty() {
            return String::new();
        }
        return format!("[{timestamp}]");
    };

    let mut out = String::with_capacity(timestamp.len() + prefix.len() + 8);
    out.push('[');
    if !timestamp.is_empty() {
        out.push_str(timestamp);
        out.push(' ');
    }
    out.push_str(prefix);
    if let Some(id) = id.filter(|id| !id.is_empty()) {
        out.push_str(" (");
        out.push_str(id);
        out.push(')');
    }
    out.push(']');
    out
}

/// Join a prefix and a message with a single space, or return the message alone
#[must_use]
pub fn with_prefix(prefix: &str, message: &str) -> String {
    if prefix.is_empty() {
        message.to_string()
    } else {
        format!("{prefix} {message}")
    }
}
