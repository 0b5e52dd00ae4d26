//! Appender trait for log output destinations

use super::{error::Result, formatter::Formatter, log_event::LogEvent, log_level::LogLevel};
use parking_lot::Mutex;
use std::sync::Arc;

/// An output destination attached to one or more loggers.
///
/// An appender renders events with its own [`Formatter`]. When it has none,
/// the logger it is attached to installs the logger's default formatter
/// at attach time.
pub trait Appender: Send {
    /// Render and write one event on behalf of the logger named `logger`
    fn append(&mut self, logger: &str, level: LogLevel, event: &LogEvent) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
    fn formatter(&self) -> Option<Arc<Formatter>>;
    fn set_formatter(&mut self, formatter: Arc<Formatter>);
}

/// Appender handle held by loggers. Identity (for removal) is the `Arc` allocation.
pub type SharedAppender = Arc<Mutex<dyn Appender>>;

/// Wrap an appender in a [`SharedAppender`]
pub fn shared<A: Appender + 'static>(appender: A) -> SharedAppender {
    Arc::new(Mutex::new(appender))
}
