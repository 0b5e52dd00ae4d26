//! Basic logger usage example
//!
//! Demonstrates console output with layout patterns, per-appender formatters
//! and level thresholds.
//!
//! Run with: cargo run --example basic_usage

use rust_pattern_logger::prelude::*;
use rust_pattern_logger::{debug, error, fatal, info, warn};

fn main() -> Result<()> {
    println!("=== Rust Pattern Logger - Basic Usage Example ===\n");

    // A named logger using the default pattern
    let mut logger = Logger::new("demo");
    logger.attach(ConsoleAppender::new());

    println!("1. Logging at different levels with the default pattern:");
    debug!(logger, "This is a debug message");
    info!(logger, "This is an info message");
    warn!(logger, "This is a warning message");
    error!(logger, "This is an error message");
    fatal!(logger, "This is a fatal message");

    println!("\n2. Raising the threshold:");
    logger.set_level(LogLevel::Warn);
    println!("   Threshold set to WARN - debug and info won't show:");
    debug!(logger, "Debug message (hidden)");
    info!(logger, "Info message (hidden)");
    warn!(logger, "Warning message (visible)");

    println!("\n3. Custom pattern with colors:");
    let mut http = Logger::builder()
        .name("http")
        .pattern("%d{%H:%M:%S}%T%c%T[%p]%T%m%n")
        .build();
    http.attach(ConsoleAppender::with_colors(true));
    let port = 8080;
    info!(http, "listening on port {}", port);
    error!(http, "upstream timeout after {}ms", 3000);

    println!("\n4. Appender with its own formatter and level:");
    http.attach(
        ConsoleAppender::new()
            .with_level(LogLevel::Error)
            .with_formatter(Formatter::strict("ALERT %c %f:%l %m%n")?.shared()),
    );
    info!(http, "only the first appender prints this");
    error!(http, "both appenders print this");

    println!("\n5. A malformed pattern renders its own diagnostics:");
    let mut broken = Logger::builder().name("broken").pattern("%Q | %m%n").build();
    broken.attach(ConsoleAppender::new());
    info!(broken, "the %Q directive is unknown");

    http.flush()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
