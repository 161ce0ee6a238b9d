//! Main logger implementation

use super::{
    action::Action,
    config::GeneralConfig,
    error::{LoggerError, Result},
    log_level::LogLevel,
    log_message::LogMessage,
    metrics::LoggerMetrics,
    policy::{Policy, ResolvedPolicy},
    prefix::with_prefix,
    stream::ConsoleStream,
    timestamp::TimestampFormat,
};
use crate::appenders::{
    raise, BackgroundFileWriter, ConsoleAppender, FileAppender, FileWrite, DEFAULT_FLUSH_TIMEOUT,
};
use std::sync::Arc;
use std::time::Duration;

/// Where file actions are executed
#[derive(Debug, Clone)]
enum FileDispatch {
    /// Queued to a writer thread shared with spawned loggers
    Background(Arc<BackgroundFileWriter>),
    /// Written on the calling thread
    Inline(FileAppender),
}

impl FileDispatch {
    fn submit(&self, job: FileWrite, metrics: &Arc<LoggerMetrics>) {
        match self {
            FileDispatch::Background(writer) => writer.submit(job, Arc::clone(metrics)),
            FileDispatch::Inline(appender) => appender.write(&job, metrics),
        }
    }

    fn flush(&self, timeout: Duration) -> bool {
        match self {
            FileDispatch::Background(writer) => writer.flush(timeout),
            FileDispatch::Inline(_) => true,
        }
    }
}

/// A logger: general configuration plus an ordered list of policies.
///
/// Every message that passes the verbosity gate goes to each policy accepting its
/// level, in configuration order. When none accepts it, a console policy built
/// from the general configuration handles it.
///
/// # Example
///
/// ```
/// use policy_logger::prelude::*;
///
/// let captured = CapturedStreams::new();
/// let logger = Logger::builder()
///     .prefix("api")
///     .verbosity(LogLevel::Warn)
///     .console_stream(captured.clone())
///     .build();
///
/// logger.info("hidden").unwrap();
/// logger.warn("shown").unwrap();
/// assert_eq!(captured.texts(), vec!["[api] shown".to_string()]);
/// ```
#[derive(Debug)]
pub struct Logger {
    config: GeneralConfig,
    policies: Vec<Policy>,
    console: ConsoleAppender,
    files: FileDispatch,
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    /// Logger with default configuration and no policies, printing to stdout/stderr
    #[must_use]
    pub fn new() -> Self {
        LoggerBuilder::new().build()
    }

    #[must_use]
    pub fn with_config(config: GeneralConfig, policies: Vec<Policy>) -> Self {
        LoggerBuilder::new().config(config).policies(policies).build()
    }

    /// Log `message` at `level`.
    ///
    /// Returns an error only when a `RaiseError` policy fires; the policies after
    /// it are not run for this message.
    pub fn print(&self, message: impl Into<LogMessage>, level: LogLevel) -> Result<()> {
        if !self.config.allows(level) {
            self.metrics.record_suppressed();
            return Ok(());
        }
        self.metrics.record_printed();

        let message = message.into();
        let mut applied = false;
        for policy in self.policies.iter().filter(|p| p.applies_to(level)) {
            applied = true;
            self.dispatch(&policy.resolve(&self.config), &message, level)?;
        }

        if !applied {
            self.dispatch(&ResolvedPolicy::fallback(&self.config), &message, level)?;
        }
        Ok(())
    }

    /// Log an error value; console output shows its whole cause chain
    pub fn print_error<E>(&self, err: &E, level: LogLevel) -> Result<()>
    where
        E: std::error::Error + ?Sized,
    {
        self.print(LogMessage::from_error(err), level)
    }

    fn dispatch(&self, policy: &ResolvedPolicy, message: &LogMessage, level: LogLevel) -> Result<()> {
        match &policy.action {
            Action::Console { method, color } => {
                self.console
                    .write(message, &policy.build_prefix(), level, *method, *color);
                self.metrics.record_console_write();
            }
            Action::File { path, max_bytes } => {
                let job = FileWrite {
                    path: path.clone(),
                    line: with_prefix(&policy.build_prefix(), message.plain()),
                    max_bytes: *max_bytes,
                };
                self.files.submit(job, &self.metrics);
            }
            Action::RaiseError => {
                self.metrics.record_raised();
                return Err(raise::raise(message, &policy.build_prefix()));
            }
            Action::None => {}
        }
        Ok(())
    }

    #[inline]
    pub fn debug(&self, message: impl Into<LogMessage>) -> Result<()> {
        self.print(message, LogLevel::Debug)
    }

    #[inline]
    pub fn info(&self, message: impl Into<LogMessage>) -> Result<()> {
        self.print(message, LogLevel::Info)
    }

    #[inline]
    pub fn warn(&self, message: impl Into<LogMessage>) -> Result<()> {
        self.print(message, LogLevel::Warn)
    }

    #[inline]
    pub fn error(&self, message: impl Into<LogMessage>) -> Result<()> {
        self.print(message, LogLevel::Error)
    }

    /// Derive a logger: `overrides` laid over this logger's configuration, policies
    /// copied. The child shares console streams and the file writer, and keeps its
    /// own metrics. Pass `GeneralConfig::default()` to inherit everything.
    ///
    /// ```
    /// use policy_logger::prelude::*;
    ///
    /// let parent = Logger::builder().prefix("server").build();
    /// let request = parent.spawn(GeneralConfig::new().with_id("req-17"));
    ///
    /// assert_eq!(request.config().prefix.as_deref(), Some("server"));
    /// assert_eq!(request.config().id.as_deref(), Some("req-17"));
    /// ```
    #[must_use]
    pub fn spawn(&self, overrides: GeneralConfig) -> Logger {
        Logger {
            config: overrides.merged_onto(&self.config),
            policies: self.policies.clone(),
            console: self.console.clone(),
            files: self.files.clone(),
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }

    pub fn config(&self) -> &GeneralConfig {
        &self.config
    }

    pub fn policies(&self) -> &[Policy] {
        &self.policies
    }

    /// Get the logger metrics for detailed observability
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Wait for queued file writes (including those of related loggers) to finish.
    pub fn flush(&self) -> Result<()> {
        self.flush_timeout(DEFAULT_FLUSH_TIMEOUT)
    }

    pub fn flush_timeout(&self, timeout: Duration) -> Result<()> {
        if self.files.flush(timeout) {
            Ok(())
        } else {
            Err(LoggerError::Timeout { waited: timeout })
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use policy_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .prefix("worker")
///     .verbosity(LogLevel::Debug)
///     .timestamp_format(TimestampFormat::Milliseconds)
///     .policy(Policy::console().for_levels([LogLevel::Error, LogLevel::Warn]))
///     .policy(Policy::none().for_levels([LogLevel::Debug]))
///     .build();
///
/// assert_eq!(logger.policies().len(), 2);
/// ```
pub struct LoggerBuilder {
    config: GeneralConfig,
    policies: Vec<Policy>,
    console: Option<ConsoleAppender>,
    inline_file_writes: bool,
    report_file_errors: bool,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: GeneralConfig::default(),
            policies: Vec::new(),
            console: None,
            inline_file_writes: false,
            report_file_errors: false,
        }
    }

    /// Replace the whole general configuration
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: GeneralConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.config.id = Some(id.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.prefix = Some(prefix.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn verbosity(mut self, level: LogLevel) -> Self {
        self.config.verbosity = Some(level);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.config.timestamp_format = Some(format);
        self
    }

    /// Append a policy; policies fire in the order they are added
    #[must_use = "builder methods return a new value"]
    pub fn policy(mut self, policy: Policy) -> Self {
        self.policies.push(policy);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn policies(mut self, policies: impl IntoIterator<Item = Policy>) -> Self {
        self.policies.extend(policies);
        self
    }

    /// Send console output somewhere other than stdout/stderr
    #[must_use = "builder methods return a new value"]
    pub fn console_stream<S: ConsoleStream + 'static>(mut self, stream: S) -> Self {
        self.console = Some(ConsoleAppender::with_stream(stream));
        self
    }

    /// Perform file appends on the calling thread instead of a background writer
    #[must_use = "builder methods return a new value"]
    pub fn inline_file_writes(mut self, enabled: bool) -> Self {
        self.inline_file_writes = enabled;
        self
    }

    /// Echo file write failures to stderr in addition to counting them
    #[must_use = "builder methods return a new value"]
    pub fn report_file_errors(mut self, enabled: bool) -> Self {
        self.report_file_errors = enabled;
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let appender = FileAppender::new().with_error_reporting(self.report_file_errors);
        // Policies are fixed once built, so a logger without file actions never needs the thread
        let writes_files = self
            .policies
            .iter()
            .any(|p| matches!(p.action, Action::File { .. }));
        let files = if self.inline_file_writes || !writes_files {
            FileDispatch::Inline(appender)
        } else {
            FileDispatch::Background(Arc::new(BackgroundFileWriter::new(appender)))
        };

        Logger {
            config: self.config,
            policies: self.policies,
            console: self.console.unwrap_or_default(),
            files,
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::CapturedStreams;
    use crate::core::ConsoleMethod;

    fn captured_logger(builder: LoggerBuilder) -> (Logger, CapturedStreams) {
        let captured = CapturedStreams::new();
        (builder.console_stream(captured.clone()).build(), captured)
    }

    #[test]
    fn test_builder_basic() {
        let logger = Logger::builder()
            .id("7")
            .prefix("svc")
            .verbosity(LogLevel::Debug)
            .build();

        assert_eq!(logger.config().id.as_deref(), Some("7"));
        assert_eq!(logger.config().prefix.as_deref(), Some("svc"));
        assert_eq!(logger.config().effective_verbosity(), LogLevel::Debug);
        assert!(logger.policies().is_empty());
    }

    #[test]
    fn test_default_verbosity_hides_debug() {
        let (logger, captured) = captured_logger(Logger::builder());
        logger.debug("quiet").unwrap();
        logger.print("loud", LogLevel::Info).unwrap();

        assert_eq!(captured.texts(), vec!["loud".to_string()]);
        assert_eq!(logger.metrics().suppressed(), 1);
        assert_eq!(logger.metrics().printed(), 1);
    }

    #[test]
    fn test_none_level_never_prints() {
        let (logger, captured) = captured_logger(Logger::builder().verbosity(LogLevel::Debug));
        logger.print("nothing", LogLevel::None).unwrap();
        assert!(captured.is_empty());
    }

    #[test]
    fn test_fallback_used_when_no_policy_matches() {
        let (logger, captured) = captured_logger(
            Logger::builder()
                .prefix("svc")
                .policy(Policy::none().for_levels([LogLevel::Error])),
        );

        logger.warn("falls back").unwrap();
        logger.error("swallowed").unwrap();

        let lines = captured.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "[svc] falls back");
        assert_eq!(lines[0].method, ConsoleMethod::Warn);
    }

    #[test]
    fn test_raise_stops_later_policies() {
        let (logger, captured) = captured_logger(
            Logger::builder()
                .policy(Policy::raise_error().with_prefix("guard"))
                .policy(Policy::console()),
        );

        let err = logger.error("boom").unwrap_err();
        assert!(err.is_raised());
        assert_eq!(err.to_string(), "[guard] boom");
        assert!(captured.is_empty());
        assert_eq!(logger.metrics().raised(), 1);
    }

    #[test]
    fn test_spawn_keeps_parent_untouched() {
        let (parent, captured) = captured_logger(Logger::builder().prefix("parent"));
        let child = parent.spawn(GeneralConfig::new().with_prefix("child"));

        child.info("from child").unwrap();
        parent.info("from parent").unwrap();

        assert_eq!(
            captured.texts(),
            vec!["[child] from child".to_string(), "[parent] from parent".to_string()]
        );
        assert_eq!(parent.config().prefix.as_deref(), Some("parent"));
        assert_eq!(child.metrics().printed(), 1);
        assert_eq!(parent.metrics().printed(), 1);
    }

    #[test]
    fn test_flush_without_files() {
        let logger = Logger::builder().inline_file_writes(true).build();
        assert!(logger.flush().is_ok());
        assert!(Logger::new().flush().is_ok());
    }
}
