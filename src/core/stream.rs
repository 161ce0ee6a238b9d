//! Console stream trait for console output destinations

use super::action::{ConsoleColor, ConsoleMethod};

/// One line headed for a console stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleLine {
    pub method: ConsoleMethod,
    pub color: ConsoleColor,
    /// Prefix and message, without color escapes
    pub text: String,
}

impl ConsoleLine {
    /// The text as it appears on a terminal
    pub fn rendered(&self) -> String {
        self.color.paint(&self.text)
    }
}

/// The four leveled output streams a console action writes to.
///
/// Implementations must keep the streams distinct by `line.method`; how they map
/// onto real file descriptors is up to them.
pub trait ConsoleStream: Send + Sync {
    fn write_line(&self, line: &ConsoleLine);
    fn name(&self) -> &str;
}
