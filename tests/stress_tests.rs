//! Stress tests for concurrent dispatch
//!
//! These tests verify:
//! - No console line is lost when many threads share one logger
//! - Background file writes from several threads all land on disk
//! - Spawned child loggers can be used from their own threads
//! - Trimming keeps the file under its limit while writers are busy

use policy_logger::prelude::*;
use std::sync::Arc;
use tempfile::TempDir;

const THREADS: usize = 8;
const PER_THREAD: usize = 200;

/// Every message from every thread reaches the console stream exactly once
#[test]
fn test_concurrent_console_logging() {
    let streams = CapturedStreams::new();
    let logger = Arc::new(
        Logger::builder()
            .verbosity(LogLevel::Debug)
            .console_stream(streams.clone())
            .build(),
    );

    let mut handles = vec![];
    for thread_id in 0..THREADS {
        let logger = Arc::clone(&logger);
        handles.push(std::thread::spawn(move || {
            for i in 0..PER_THREAD {
                let level = match i % 4 {
                    0 => LogLevel::Debug,
                    1 => LogLevel::Info,
                    2 => LogLevel::Warn,
                    _ => LogLevel::Error,
                };
                logger.print(format!("T{} message {}", thread_id, i), level).unwrap();
            }
        }));
    }
    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    assert_eq!(streams.len(), THREADS * PER_THREAD);
    assert_eq!(logger.metrics().printed(), (THREADS * PER_THREAD) as u64);
    assert_eq!(logger.metrics().console_writes(), (THREADS * PER_THREAD) as u64);

    let texts = streams.texts();
    for thread_id in 0..THREADS {
        let last = format!("T{} message {}", thread_id, PER_THREAD - 1);
        assert!(texts.contains(&last), "missing {last}");
    }
}

/// Suppressed messages are counted and never written under contention
#[test]
fn test_concurrent_suppression() {
    let streams = CapturedStreams::new();
    let logger = Arc::new(
        Logger::builder()
            .verbosity(LogLevel::Warn)
            .console_stream(streams.clone())
            .build(),
    );

    let mut handles = vec![];
    for _ in 0..THREADS {
        let logger = Arc::clone(&logger);
        handles.push(std::thread::spawn(move || {
            for i in 0..PER_THREAD {
                if i % 2 == 0 {
                    logger.debug("hidden").unwrap();
                } else {
                    logger.warn("shown").unwrap();
                }
            }
        }));
    }
    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    let half = (THREADS * PER_THREAD / 2) as u64;
    assert_eq!(streams.len() as u64, half);
    assert_eq!(logger.metrics().suppressed(), half);
    assert!(streams.texts().iter().all(|t| t == "shown"));
}

/// Background file writes from many threads all reach the file
#[test]
fn test_concurrent_file_logging() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("concurrent.log");

    let logger = Arc::new(
        Logger::builder()
            .verbosity(LogLevel::Debug)
            .policy(Policy::file(&log_file))
            .build(),
    );

    let mut handles = vec![];
    for thread_id in 0..THREADS {
        let logger = Arc::clone(&logger);
        handles.push(std::thread::spawn(move || {
            for i in 0..PER_THREAD {
                logger.info(format!("T{}-{}", thread_id, i)).unwrap();
            }
        }));
    }
    for handle in handles {
        handle.join().expect("Thread panicked");
    }
    logger.flush().expect("flush");

    let content = std::fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(content.lines().count(), THREADS * PER_THREAD);
    assert_eq!(logger.metrics().file_writes(), (THREADS * PER_THREAD) as u64);
    assert_eq!(logger.metrics().file_failures(), 0);

    // Lines from one thread keep their relative order
    for thread_id in 0..THREADS {
        let tag = format!("T{}-", thread_id);
        let indices: Vec<usize> = content
            .lines()
            .filter_map(|l| l.strip_prefix(&tag))
            .map(|n| n.parse().expect("numeric suffix"))
            .collect();
        assert_eq!(indices, (0..PER_THREAD).collect::<Vec<_>>());
    }
}

/// Child loggers spawned per thread share the parent's file writer
#[test]
fn test_spawned_children_across_threads() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("children.log");

    let parent = Logger::builder()
        .prefix("app")
        .policy(Policy::file(&log_file))
        .build();

    let mut handles = vec![];
    for worker in 0..4 {
        let child = parent.spawn(GeneralConfig::default().with_id(worker.to_string()));
        handles.push(std::thread::spawn(move || {
            for i in 0..50 {
                child.info(format!("job {}", i)).unwrap();
            }
            child.flush().expect("flush");
        }));
    }
    for handle in handles {
        handle.join().expect("Thread panicked");
    }
    parent.flush().expect("flush");

    let content = std::fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(content.lines().count(), 200);
    for worker in 0..4 {
        let tag = format!("[app ({})] job", worker);
        assert_eq!(content.lines().filter(|l| l.starts_with(&tag)).count(), 50);
    }
}

/// A size-limited file stays under its limit after a burst of writes
#[test]
fn test_trim_under_load() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("bounded.log");
    let max_bytes = 512;

    let logger = Arc::new(
        Logger::builder()
            .policy(Policy::file(&log_file).with_max_bytes(max_bytes))
            .build(),
    );

    let mut handles = vec![];
    for thread_id in 0..4 {
        let logger = Arc::clone(&logger);
        handles.push(std::thread::spawn(move || {
            for i in 0..100 {
                logger.info(format!("worker {} line {}", thread_id, i)).unwrap();
            }
        }));
    }
    for handle in handles {
        handle.join().expect("Thread panicked");
    }
    logger.flush().expect("flush");

    let len = std::fs::metadata(&log_file).expect("metadata").len();
    assert!(len <= max_bytes, "file is {len} bytes");
    assert!(logger.metrics().lines_trimmed() > 0);

    let content = std::fs::read_to_string(&log_file).expect("Failed to read log file");
    assert!(content.ends_with('\n'));
}
