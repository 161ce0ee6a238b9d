//! Basic logger usage example
//!
//! Demonstrates console output with the default policy, verbosity gating,
//! prefixes and child loggers.
//!
//! Run with: cargo run --example basic_usage

use policy_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Policy Logger - Basic Usage Example ===\n");

    // No policies: every level goes to the console with its default color
    let logger = Logger::builder().verbosity(LogLevel::Debug).build();

    println!("1. Logging at different levels:");
    logger.debug("This is a debug message")?;
    logger.info("This is an info message")?;
    logger.warn("This is a warning message")?;
    logger.error("This is an error message")?;

    println!("\n2. Verbosity gating:");
    let quiet = Logger::builder().verbosity(LogLevel::Warn).build();
    println!("   Verbosity set to WARN - debug and info won't show:");
    quiet.debug("Debug message (hidden)")?;
    quiet.info("Info message (hidden)")?;
    quiet.warn("Warning message (visible)")?;
    println!("   Suppressed so far: {}", quiet.metrics().suppressed());

    println!("\n3. Prefix, id and timestamp:");
    let api = Logger::builder()
        .prefix("api")
        .id("worker-1")
        .timestamp_format(TimestampFormat::Milliseconds)
        .build();
    api.info("Listening on port 8080")?;

    println!("\n4. Child loggers inherit and override:");
    let request = api.spawn(GeneralConfig::new().with_id("req-42"));
    request.info("Handling GET /health")?;
    request.print_error(
        &std::io::Error::new(std::io::ErrorKind::TimedOut, "upstream timed out"),
        LogLevel::Error,
    )?;

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
