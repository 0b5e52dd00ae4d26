//! # Rust Pattern Logger
//!
//! Named loggers route leveled events to appenders, and each appender renders
//! events through a compiled, printf-style layout pattern.
//!
//! ## Features
//!
//! - **Layout patterns**: `%d{%H:%M:%S} [%p] %c %f:%l %m%n` style patterns compiled once
//!   and shared between appenders
//! - **Self-diagnosing**: malformed directives render as `<<error_format %X>>` markers
//!   instead of failing
//! - **Multiple Appenders**: Console, file and in-memory appenders, each with its own level
//! - **Fault isolation**: a failing appender never stops delivery to the others
//!
//! ```
//! use rust_pattern_logger::prelude::*;
//!
//! let appender = MemoryAppender::new();
//! let lines = appender.buffer();
//!
//! let mut logger = Logger::new("app");
//! logger.set_formatter(Formatter::new("[%p] %c: %m").shared());
//! logger.attach(appender);
//!
//! let event = LogEvent::builder("main.rs", 3).message("started").build();
//! logger.info(&event);
//!
//! assert_eq!(lines.lines(), vec!["[INFO] app: started".to_string()]);
//! ```

pub mod appenders;
pub mod config;
pub mod core;
pub mod macros;

pub mod prelude {
    #[cfg(feature = "console")]
    pub use crate::appenders::ConsoleAppender;
    #[cfg(feature = "file")]
    pub use crate::appenders::FileAppender;
    pub use crate::appenders::{MemoryAppender, MemoryBuffer};
    pub use crate::config::{AppenderConfig, LoggerConfig};
    pub use crate::core::appender;
    pub use crate::core::{
        Appender, FormatItem, Formatter, LogEvent, LogEventBuilder, LogLevel, Logger,
        LoggerBuilder, LoggerError, LoggerMetrics, PatternError, Result, SharedAppender,
        DEFAULT_PATTERN,
    };
}

#[cfg(feature = "console")]
pub use appenders::ConsoleAppender;
#[cfg(feature = "file")]
pub use appenders::FileAppender;
pub use appenders::{MemoryAppender, MemoryBuffer};
pub use config::{AppenderConfig, LoggerConfig};
pub use self::core::{
    compile, level_name, Appender, CompiledPattern, FormatItem, Formatter, LogEvent,
    LogEventBuilder, LogLevel, Logger, LoggerBuilder, LoggerError, LoggerMetrics, PatternError,
    Result, SharedAppender, DEFAULT_PATTERN, DEFAULT_TIME_FORMAT, ROOT_LOGGER_NAME,
    UNKNOWN_LEVEL,
};
