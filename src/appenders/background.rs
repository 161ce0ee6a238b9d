//! Background file writer
//!
//! File appends are queued to a dedicated thread so `print` never waits on disk
//! IO. Work is processed strictly in submission order; `flush` waits for
//! everything submitted before it.

use super::file::{FileAppender, FileWrite};
use crate::core::LoggerMetrics;
use crossbeam_channel::{bounded, unbounded, Sender};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Default shutdown timeout for draining queued file writes (5 seconds)
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// Default time `flush` waits for queued writes (5 seconds)
pub const DEFAULT_FLUSH_TIMEOUT: Duration = Duration::from_secs(5);

enum Command {
    Write {
        job: FileWrite,
        metrics: Arc<LoggerMetrics>,
    },
    Flush(Sender<()>),
}

/// A thread that performs file appends and trims in submission order
pub struct BackgroundFileWriter {
    sender: Option<Sender<Command>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl BackgroundFileWriter {
    pub fn new(appender: FileAppender) -> Self {
        let (sender, receiver) = unbounded::<Command>();

        let handle = thread::Builder::new()
            .name("policy-logger-file".to_string())
            .spawn(move || {
                for command in receiver {
                    match command {
                        Command::Write { job, metrics } => {
                            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(
                                || appender.write(&job, &metrics),
                            ));
                            if result.is_err() {
                                metrics.record_file_failure();
                                eprintln!(
                                    "[LOGGER CRITICAL] File writer panicked on '{}'. \
                                     Later writes continue.",
                                    job.path.display()
                                );
                            }
                        }
                        Command::Flush(ack) => {
                            let _ = ack.send(());
                        }
                    }
                }
            });

        match handle {
            Ok(handle) => Self {
                sender: Some(sender),
                handle: Some(handle),
            },
            Err(e) => {
                eprintln!("[LOGGER ERROR] Failed to start file writer thread: {}", e);
                Self {
                    sender: None,
                    handle: None,
                }
            }
        }
    }

    /// Queue a write without waiting for it. Failures only show up in `metrics`.
    pub fn submit(&self, job: FileWrite, metrics: Arc<LoggerMetrics>) {
        let delivered = self
            .sender
            .as_ref()
            .is_some_and(|sender| {
                sender
                    .send(Command::Write {
                        job,
                        metrics: Arc::clone(&metrics),
                    })
                    .is_ok()
            });
        if !delivered {
            metrics.record_file_failure();
        }
    }

    /// Wait until every write submitted so far has finished.
    ///
    /// Returns `false` if the queue did not drain within `timeout`.
    pub fn flush(&self, timeout: Duration) -> bool {
        let Some(sender) = self.sender.as_ref() else {
            return true;
        };
        let (ack_tx, ack_rx) = bounded(1);
        if sender.send(Command::Flush(ack_tx)).is_err() {
            return true;
        }
        ack_rx.recv_timeout(timeout).is_ok()
    }
}

impl Drop for BackgroundFileWriter {
    fn drop(&mut self) {
        // Closing the channel lets the worker drain what is queued and exit.
        drop(self.sender.take());

        if let Some(handle) = self.handle.take() {
            let start = Instant::now();
            loop {
                if handle.is_finished() {
                    if let Err(e) = handle.join() {
                        eprintln!("[LOGGER ERROR] File writer thread panicked during shutdown: {:?}", e);
                    }
                    break;
                }

                if start.elapsed() >= DEFAULT_SHUTDOWN_TIMEOUT {
                    eprintln!(
                        "[LOGGER WARNING] File writer did not finish within {:?} timeout. \
                         Some log lines may be lost.",
                        DEFAULT_SHUTDOWN_TIMEOUT
                    );
                    break;
                }

                thread::sleep(Duration::from_millis(10));
            }
        }
    }
}

impl std::fmt::Debug for BackgroundFileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackgroundFileWriter")
            .field("running", &self.sender.is_some())
            .finish()
    }
}
