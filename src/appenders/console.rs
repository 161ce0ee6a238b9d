//! Console appender implementation

use crate::core::{
    with_prefix, ConsoleColor, ConsoleLine, ConsoleMethod, ConsoleStream, LogLevel, LogMessage,
};
use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;

/// Process stdout/stderr: debug and info lines go to stdout, warn and error to stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct StdStreams;

impl ConsoleStream for StdStreams {
    fn write_line(&self, line: &ConsoleLine) {
        let output = line.rendered();
        // A closed pipe must not take the caller down with it.
        match line.method {
            ConsoleMethod::Debug | ConsoleMethod::Info => {
                let _ = writeln!(std::io::stdout().lock(), "{}", output);
            }
            ConsoleMethod::Warn | ConsoleMethod::Error => {
                let _ = writeln!(std::io::stderr().lock(), "{}", output);
            }
        }
    }

    fn name(&self) -> &str {
        "std"
    }
}

/// In-memory streams recording every line, for asserting on console output in tests.
///
/// Clones share the same buffer, so keep one handle and give another to the logger.
///
/// # Example
///
/// ```
/// use policy_logger::prelude::*;
///
/// let captured = CapturedStreams::new();
/// let logger = Logger::builder().console_stream(captured.clone()).build();
///
/// logger.warn("disk almost full").unwrap();
/// assert_eq!(captured.texts(), vec!["disk almost full".to_string()]);
/// assert_eq!(captured.lines()[0].method, ConsoleMethod::Warn);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CapturedStreams {
    lines: Arc<Mutex<Vec<ConsoleLine>>>,
}

impl CapturedStreams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every line written so far, in order
    pub fn lines(&self) -> Vec<ConsoleLine> {
        self.lines.lock().clone()
    }

    /// Uncolored text of every line written so far
    pub fn texts(&self) -> Vec<String> {
        self.lines.lock().iter().map(|line| line.text.clone()).collect()
    }

    /// Lines written with one method
    pub fn on(&self, method: ConsoleMethod) -> Vec<ConsoleLine> {
        self.lines
            .lock()
            .iter()
            .filter(|line| line.method == method)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl ConsoleStream for CapturedStreams {
    fn write_line(&self, line: &ConsoleLine) {
        self.lines.lock().push(line.clone());
    }

    fn name(&self) -> &str {
        "captured"
    }
}

/// Writes prefixed messages to a set of console streams
#[derive(Clone)]
pub struct ConsoleAppender {
    stream: Arc<dyn ConsoleStream>,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self::with_stream(StdStreams)
    }

    pub fn with_stream<S: ConsoleStream + 'static>(stream: S) -> Self {
        Self {
            stream: Arc::new(stream),
        }
    }

    /// Emit one message. Unset method and color follow `level`; failures print
    /// their full trace.
    pub fn write(
        &self,
        message: &LogMessage,
        prefix: &str,
        level: LogLevel,
        method: Option<ConsoleMethod>,
        color: Option<ConsoleColor>,
    ) {
        let (default_method, default_color) = level.console_defaults();
        let line = ConsoleLine {
            method: method.unwrap_or(default_method),
            color: color.unwrap_or(default_color),
            text: with_prefix(prefix, message.detailed()),
        };
        self.stream.write_line(&line);
    }

    pub fn name(&self) -> &str {
        self.stream.name()
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ConsoleAppender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleAppender")
            .field("stream", &self.stream.name())
            .finish()
    }
}
