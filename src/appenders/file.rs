//! File appender implementation
//!
//! Appends one line per message and keeps the file under an optional byte budget
//! by dropping its oldest lines. The trim reads and rewrites the whole file, so
//! it is not safe against other processes writing the same path.

use crate::core::{LoggerError, LoggerMetrics, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// A single line destined for a log file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileWrite {
    pub path: PathBuf,
    /// Prefixed message, without the trailing newline
    pub line: String,
    /// Trim threshold; `None` or `Some(0)` disables trimming
    pub max_bytes: Option<u64>,
}

/// Performs [`FileWrite`]s, swallowing IO errors into metrics
#[derive(Debug, Clone, Copy, Default)]
pub struct FileAppender {
    report_errors: bool,
}

impl FileAppender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also print failures to stderr instead of only counting them
    #[must_use]
    pub fn with_error_reporting(mut self, enabled: bool) -> Self {
        self.report_errors = enabled;
        self
    }

    /// Append and trim, recording the outcome. Never fails.
    pub fn write(&self, job: &FileWrite, metrics: &LoggerMetrics) {
        match Self::try_write(job) {
            Ok(trimmed) => {
                metrics.record_file_write();
                if trimmed > 0 {
                    metrics.record_lines_trimmed(trimmed);
                }
            }
            Err(e) => {
                metrics.record_file_failure();
                if self.report_errors {
                    eprintln!("[LOGGER ERROR] File write failed: {}", e);
                }
            }
        }
    }

    /// Append the line, then trim if a budget is set. Returns the number of lines removed.
    pub fn try_write(job: &FileWrite) -> Result<u64> {
        append_line(&job.path, &job.line)?;
        match job.max_bytes {
            Some(max_bytes) if max_bytes > 0 => trim_to_size(&job.path, max_bytes),
            _ => Ok(0),
        }
    }
}

/// Append `line` and a newline, creating the file and its directory if needed
pub fn append_line(path: &Path, line: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| LoggerError::io_operation("creating log directory for", path, e))?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LoggerError::io_operation("opening", path, e))?;

    let mut buf = String::with_capacity(line.len() + 1);
    buf.push_str(line);
    buf.push('\n');
    file.write_all(buf.as_bytes())
        .map_err(|e| LoggerError::io_operation("appending to", path, e))
}

/// Drop the oldest lines of the file until it is at most `max_bytes` long.
///
/// Returns the number of lines removed. A file already within budget is left
/// untouched. If even the newest line is larger than the budget the file ends up empty.
pub fn trim_to_size(path: &Path, max_bytes: u64) -> Result<u64> {
    let size = fs::metadata(path)
        .map_err(|e| LoggerError::io_operation("reading metadata of", path, e))?
        .len();
    if size <= max_bytes {
        return Ok(0);
    }

    let content = fs::read(path).map_err(|e| LoggerError::io_operation("reading", path, e))?;
    let mut remaining = content.len() as u64;
    let mut cut = 0usize;
    let mut removed = 0u64;

    for line in content.split_inclusive(|b| *b == b'\n') {
        if remaining <= max_bytes {
            break;
        }
        remaining -= line.len() as u64;
        cut += line.len();
        removed += 1;
    }

    fs::write(path, &content[cut..]).map_err(|e| LoggerError::io_operation("rewriting", path, e))?;
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn job(path: &Path, line: &str, max_bytes: Option<u64>) -> FileWrite {
        FileWrite {
            path: path.to_path_buf(),
            line: line.to_string(),
            max_bytes,
        }
    }

    #[test]
    fn test_append_creates_file_and_directories() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("nested/deeper/app.log");

        append_line(&path, "first").unwrap();
        append_line(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_trim_keeps_newest_lines() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("trim.log");
        fs::write(&path, "aaaa\nbbbb\ncccc\ndddd\n").unwrap();

        let removed = trim_to_size(&path, 10).unwrap();

        assert_eq!(removed, 2);
        assert_eq!(fs::read_to_string(&path).unwrap(), "cccc\ndddd\n");
    }

    #[test]
    fn test_trim_within_budget_is_noop() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("small.log");
        fs::write(&path, "short\n").unwrap();

        assert_eq!(trim_to_size(&path, 100).unwrap(), 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), "short\n");
    }

    #[test]
    fn test_oversized_line_empties_file() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("huge.log");
        fs::write(&path, "this line is far too long\n").unwrap();

        assert_eq!(trim_to_size(&path, 5).unwrap(), 1);
        assert_eq!(fs::metadata(&path).unwrap().len(), 0);
    }

    #[test]
    fn test_write_records_metrics() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("metrics.log");
        let metrics = LoggerMetrics::new();
        let appender = FileAppender::new();

        for i in 0..20 {
            appender.write(&job(&path, &format!("line {i:02}"), Some(40)), &metrics);
        }

        assert_eq!(metrics.file_writes(), 20);
        assert_eq!(metrics.file_failures(), 0);
        assert!(metrics.lines_trimmed() > 0);
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.len() <= 40);
        assert!(content.ends_with("line 19\n"));
    }

    #[test]
    fn test_zero_budget_disables_trim() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("unbounded.log");
        for _ in 0..5 {
            FileAppender::try_write(&job(&path, "0123456789", Some(0))).unwrap();
        }
        assert_eq!(fs::metadata(&path).unwrap().len(), 55);
    }

    #[test]
    fn test_failure_is_counted_not_returned() {
        let dir = TempDir::new().expect("temp dir");
        // A directory cannot be opened for appending.
        let metrics = LoggerMetrics::new();
        FileAppender::new().write(&job(dir.path(), "lost", None), &metrics);

        assert_eq!(metrics.file_failures(), 1);
        assert_eq!(metrics.file_writes(), 0);
    }
}
