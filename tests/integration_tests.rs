//! Integration tests for logger system
//!
//! These tests verify:
//! - Pattern compilation and rendering through the public API
//! - Self-diagnosing output for malformed patterns
//! - Threshold filtering and appender attach/detach ordering
//! - Fault isolation between appenders
//! - File output and reopening

use rust_pattern_logger::appenders::file::FileAppender;
use rust_pattern_logger::appenders::memory::MemoryAppender;
use rust_pattern_logger::core::appender::shared;
use rust_pattern_logger::core::formatter::{Formatter, DEFAULT_PATTERN};
use rust_pattern_logger::core::log_event::LogEvent;
use rust_pattern_logger::core::log_level::LogLevel;
use rust_pattern_logger::core::logger::Logger;
use rust_pattern_logger::core::{Appender, LoggerError, Result};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn fixed_event() -> LogEvent {
    LogEvent::builder("a.c", 10)
        .elapsed(5)
        .thread_id(7)
        .fiber_id(2)
        .time(1_700_000_000)
        .message("hello")
        .build()
}

#[test]
fn test_every_directive_once_in_order() {
    let formatter = Formatter::new("<%m|%p|%r|%c|%t|%n|%d{%Y}|%f|%l|%T|%F>");
    assert!(!formatter.has_errors());

    let rendered = formatter.render("core", LogLevel::Error, &fixed_event());

    let fields = ["hello", "ERROR", "5", "core", "7", "\n", "a.c", "10", "\t", "2"];
    let mut cursor = 0;
    for field in fields {
        let found = rendered[cursor..]
            .find(field)
            .unwrap_or_else(|| panic!("{field:?} missing after offset {cursor} in {rendered:?}"));
        cursor += found + field.len();
    }

    assert_eq!(rendered.matches("ERROR").count(), 1);
    assert_eq!(rendered.matches("hello").count(), 1);
    assert_eq!(rendered.matches("a.c").count(), 1);
    assert_eq!(rendered.matches("10").count(), 1);
}

#[test]
fn test_exact_render_without_time() {
    let formatter = Formatter::new("%m%p%r%c%t%f%l%F");
    assert_eq!(
        formatter.render("core", LogLevel::Error, &fixed_event()),
        "helloERROR5core7a.c102"
    );
}

#[test]
fn test_literal_pattern_for_every_level() {
    let formatter = Formatter::new("static text [no fields]");
    for level in LogLevel::ALL {
        assert_eq!(
            formatter.render("any", level, &fixed_event()),
            "static text [no fields]"
        );
    }
}

#[test]
fn test_escaped_percent() {
    let formatter = Formatter::new("%%m is 100%%: %m");
    assert_eq!(
        formatter.render("x", LogLevel::Info, &fixed_event()),
        "%m is 100%: hello"
    );
}

#[test]
fn test_unknown_directive_renders_diagnostic() {
    let formatter = Formatter::new("[%Q] %m");
    let rendered = formatter.render("x", LogLevel::Info, &fixed_event());
    assert_eq!(rendered, "[<<error_format %Q>>] hello");
    assert!(rendered.contains('Q'));
}

#[test]
fn test_unterminated_brace_renders_marker() {
    let formatter = Formatter::new("%d{%Y");
    let rendered = formatter.render("x", LogLevel::Info, &fixed_event());
    assert_eq!(rendered, "<<pattern_error %d>>");
}

#[test]
fn test_default_pattern_through_logger() {
    let appender = MemoryAppender::new();
    let buffer = appender.buffer();
    let mut logger = Logger::default();
    logger.attach(appender);

    logger.warn(&fixed_event());

    let lines = buffer.lines();
    assert_eq!(lines.len(), 1);
    let fields: Vec<&str> = lines[0].trim_end_matches('\n').split('\t').collect();
    assert_eq!(fields.len(), 6);
    assert_eq!(&fields[1..], ["7", "2", "[WARN]", "a.c:10", "hello"]);
    assert_eq!(fields[0].len(), "2023-11-14 22:13:20".len());
    assert_eq!(logger.formatter().pattern(), DEFAULT_PATTERN);
}

#[test]
fn test_log_levels() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("levels_test.log");

    let mut logger = Logger::new("levels");
    logger.set_level(LogLevel::Warn); // Only warn and above
    logger.set_formatter(Formatter::new("%p %m%n").shared());

    let appender = FileAppender::new(&log_file).expect("Failed to create appender");
    logger.attach(appender);

    let message = |text: &'static str| LogEvent::builder("t.rs", 1).message(text).build();
    logger.debug(&message("Debug message"));
    logger.info(&message("Info message"));
    logger.warn(&message("Warn message"));
    logger.error(&message("Error message"));
    logger.fatal(&message("Fatal message"));

    logger.flush().expect("Failed to flush");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(
        content,
        "WARN Warn message\nERROR Error message\nFATAL Fatal message\n"
    );
}

#[test]
fn test_multiple_appenders_with_own_formatters() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file1 = temp_dir.path().join("multi1.log");
    let log_file2 = temp_dir.path().join("multi2.log");

    let mut logger = Logger::new("multi");
    logger.set_formatter(Formatter::new("default %m%n").shared());

    logger.attach(FileAppender::new(&log_file1).expect("Failed to create appender 1"));
    logger.attach(
        FileAppender::new(&log_file2)
            .expect("Failed to create appender 2")
            .with_formatter(Formatter::new("custom %c %m%n").shared()),
    );

    logger.info(&fixed_event());
    logger.flush().expect("Failed to flush");

    assert_eq!(fs::read_to_string(&log_file1).unwrap(), "default hello\n");
    assert_eq!(fs::read_to_string(&log_file2).unwrap(), "custom multi hello\n");
}

#[test]
fn test_remove_first_of_two_appenders() {
    let first = MemoryAppender::new();
    let first_buffer = first.buffer();
    let second = MemoryAppender::new();
    let second_buffer = second.buffer();

    let mut logger = Logger::builder().pattern("%m").build();
    let first_handle = logger.attach(first);
    logger.attach(second);

    logger.info(&LogEvent::builder("t.rs", 1).message("both").build());
    assert!(logger.remove_appender(&first_handle));
    logger.info(&LogEvent::builder("t.rs", 2).message("second only").build());
    logger.info(&LogEvent::builder("t.rs", 3).message("again").build());

    assert_eq!(first_buffer.lines(), vec!["both".to_string()]);
    assert_eq!(
        second_buffer.lines(),
        vec!["both".to_string(), "second only".to_string(), "again".to_string()]
    );
}

#[test]
fn test_remove_absent_appender_is_noop() {
    let mut logger = Logger::default();
    logger.attach(MemoryAppender::new());
    let stranger = shared(MemoryAppender::new());

    assert!(!logger.remove_appender(&stranger));
    assert_eq!(logger.appender_count(), 1);
}

#[test]
fn test_shared_appender_across_loggers() {
    let appender = MemoryAppender::new();
    let buffer = appender.buffer();
    let handle = shared(appender);

    let mut db = Logger::builder().name("db").pattern("%c:%m").build();
    let mut http = Logger::builder().name("http").pattern("ignored %m").build();
    db.add_appender(Arc::clone(&handle));
    http.add_appender(Arc::clone(&handle));

    db.info(&LogEvent::builder("t.rs", 1).message("query").build());
    http.info(&LogEvent::builder("t.rs", 2).message("request").build());

    // The formatter was bound once, by the first logger
    assert_eq!(
        buffer.lines(),
        vec!["db:query".to_string(), "http:request".to_string()]
    );
}

#[test]
fn test_error_tracking() {
    // Test that failed appender writes are tracked and do not block others
    struct FailingAppender {
        fail_count: std::sync::atomic::AtomicUsize,
    }

    impl Appender for FailingAppender {
        fn append(&mut self, _logger: &str, _level: LogLevel, _event: &LogEvent) -> Result<()> {
            self.fail_count
                .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            Err(LoggerError::other("Simulated failure"))
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "FailingAppender"
        }

        fn formatter(&self) -> Option<Arc<Formatter>> {
            None
        }

        fn set_formatter(&mut self, _formatter: Arc<Formatter>) {}
    }

    let healthy = MemoryAppender::new();
    let buffer = healthy.buffer();

    let mut logger = Logger::builder().pattern("%m").build();
    logger.attach(FailingAppender {
        fail_count: std::sync::atomic::AtomicUsize::new(0),
    });
    logger.attach(healthy);

    for i in 0..5 {
        logger.info(&LogEvent::builder("t.rs", 1).message(format!("m{i}")).build());
    }

    assert_eq!(logger.metrics().failed_writes(), 5);
    assert_eq!(logger.metrics().dispatched(), 5);
    assert_eq!(buffer.len(), 5);
}

#[test]
fn test_reopen_supports_external_rotation() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("app.log");
    let rotated = temp_dir.path().join("app.log.old");

    let formatter = Formatter::new("%m%n").shared();
    let mut appender = FileAppender::new(&log_file)
        .expect("Failed to create appender")
        .with_formatter(formatter);

    appender
        .append("root", LogLevel::Info, &LogEvent::builder("t.rs", 1).message("first").build())
        .unwrap();
    appender.flush().unwrap();
    fs::rename(&log_file, &rotated).unwrap();
    appender.reopen().unwrap();
    appender
        .append("root", LogLevel::Info, &LogEvent::builder("t.rs", 2).message("second").build())
        .unwrap();
    drop(appender);

    assert_eq!(fs::read_to_string(&rotated).unwrap(), "first\n");
    assert_eq!(fs::read_to_string(&log_file).unwrap(), "second\n");
}

#[test]
fn test_message_is_rendered_verbatim() {
    let formatter = Formatter::new("%m");
    let event = LogEvent::builder("t.rs", 1)
        .message("multi\nline %p {braces}")
        .build();
    assert_eq!(
        formatter.render("x", LogLevel::Info, &event),
        "multi\nline %p {braces}"
    );
}
