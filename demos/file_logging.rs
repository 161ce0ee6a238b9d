//! File logging example
//!
//! Demonstrates fanning out to the console and a size-limited file.
//!
//! Run with: cargo run --example file_logging

use policy_logger::prelude::*;
use std::path::Path;

fn main() -> Result<()> {
    println!("=== Policy Logger - File Logging Example ===\n");

    let path = Path::new("application.log");

    // Errors and warnings reach the console, everything goes to the file
    let logger = Logger::builder()
        .prefix("app")
        .verbosity(LogLevel::Debug)
        .timestamp_format(TimestampFormat::Time)
        .policy(Policy::console().for_levels([LogLevel::Error, LogLevel::Warn]))
        .policy(
            Policy::file(path)
                .with_timestamp_format(TimestampFormat::Full)
                .with_max_bytes(4 * 1024),
        )
        .build();

    println!("1. Logging to both console and file:");
    logger.info("Application started")?;
    logger.debug("Loading configuration...")?;
    logger.warn("Using default settings for some options")?;
    logger.error("Failed to load optional plugin")?;

    println!("\n2. Performing some operations:");
    for i in 1..=5 {
        logger.info(format!("Processing item {}/5", i))?;
        if i == 3 {
            logger.warn("Item 3 took longer than expected")?;
        }
    }
    logger.info("All operations completed")?;

    // Wait for the background writer
    logger.flush()?;

    let metrics = logger.metrics();
    println!(
        "\nFile writes: {}, failures: {}, lines trimmed: {}",
        metrics.file_writes(),
        metrics.file_failures(),
        metrics.lines_trimmed()
    );

    let content = std::fs::read_to_string(path)
        .map_err(|e| LoggerError::io_operation("reading", path, e))?;
    println!("\nLast lines of '{}':", path.display());
    for line in content.lines().rev().take(3).collect::<Vec<_>>().into_iter().rev() {
        println!("   {line}");
    }

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
