//! Channel writers for each policy action

pub mod background;
pub mod console;
pub mod file;
pub mod raise;

pub use background::{BackgroundFileWriter, DEFAULT_FLUSH_TIMEOUT, DEFAULT_SHUTDOWN_TIMEOUT};
pub use console::{CapturedStreams, ConsoleAppender, StdStreams};
pub use file::{FileAppender, FileWrite};

// Re-export the stream trait next to its implementations
pub use crate::core::{ConsoleLine, ConsoleStream};
