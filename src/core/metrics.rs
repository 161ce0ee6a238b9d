//! Logger metrics for observability
//!
//! Counters describing what a logger did with the messages it was given.
//! File writes happen off the calling thread and never report errors to the
//! caller, so `file_failures` is the place to look when a log file stays empty.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use policy_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_printed();
/// metrics.record_suppressed();
///
/// assert_eq!(metrics.printed(), 1);
/// assert_eq!(metrics.suppressed(), 1);
/// ```
#[derive(Debug, Default)]
pub struct LoggerMetrics {
    /// Messages that passed the verbosity gate
    printed: AtomicU64,

    /// Messages dropped by the verbosity gate
    suppressed: AtomicU64,

    /// Lines emitted on console streams
    console_writes: AtomicU64,

    /// Lines appended to files
    file_writes: AtomicU64,

    /// File appends or trims that failed
    file_failures: AtomicU64,

    /// Lines removed from files to stay under their size limit
    lines_trimmed: AtomicU64,

    /// Failures raised by `RaiseError` policies
    raised: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            printed: AtomicU64::new(0),
            suppressed: AtomicU64::new(0),
            console_writes: AtomicU64::new(0),
            file_writes: AtomicU64::new(0),
            file_failures: AtomicU64::new(0),
            lines_trimmed: AtomicU64::new(0),
            raised: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn printed(&self) -> u64 {
        self.printed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn suppressed(&self) -> u64 {
        self.suppressed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn console_writes(&self) -> u64 {
        self.console_writes.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn file_writes(&self) -> u64 {
        self.file_writes.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn file_failures(&self) -> u64 {
        self.file_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn lines_trimmed(&self) -> u64 {
        self.lines_trimmed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn raised(&self) -> u64 {
        self.raised.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_printed(&self) {
        self.printed.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_suppressed(&self) {
        self.suppressed.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_console_write(&self) {
        self.console_writes.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_file_write(&self) {
        self.file_writes.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_file_failure(&self) {
        self.file_failures.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_lines_trimmed(&self, count: u64) {
        self.lines_trimmed.fetch_add(count, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_raised(&self) {
        self.raised.fetch_add(1, Ordering::Relaxed);
    }

    /// Share of gated messages among everything handed to `print` (0.0 - 100.0)
    pub fn suppression_rate(&self) -> f64 {
        let suppressed = self.suppressed();
        let total = suppressed + self.printed();
        if total == 0 {
            return 0.0;
        }
        (suppressed as f64 / total as f64) * 100.0
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.printed.store(0, Ordering::Relaxed);
        self.suppressed.store(0, Ordering::Relaxed);
        self.console_writes.store(0, Ordering::Relaxed);
        self.file_writes.store(0, Ordering::Relaxed);
        self.file_failures.store(0, Ordering::Relaxed);
        self.lines_trimmed.store(0, Ordering::Relaxed);
        self.raised.store(0, Ordering::Relaxed);
    }
}
