//! Core logger types and traits

pub mod appender;
pub mod error;
pub mod format_item;
pub mod formatter;
pub mod log_event;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod pattern;

pub use appender::{Appender, SharedAppender};
pub use error::{LoggerError, PatternError, Result};
pub use format_item::{FormatItem, DEFAULT_TIME_FORMAT};
pub use formatter::{Formatter, DEFAULT_PATTERN};
pub use log_event::{LogEvent, LogEventBuilder};
pub use log_level::{level_name, LogLevel, UNKNOWN_LEVEL};
pub use logger::{Logger, LoggerBuilder, ROOT_LOGGER_NAME};
pub use metrics::LoggerMetrics;
pub use pattern::{compile, CompiledPattern};
