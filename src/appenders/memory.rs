//! In-memory appender for tests and embedding

use super::bound_formatter;
use crate::core::{Appender, Formatter, LogEvent, LogLevel, Result};
use parking_lot::Mutex;
use std::sync::Arc;

/// Shared view of the lines captured by a [`MemoryAppender`]
#[derive(Debug, Clone, Default)]
pub struct MemoryBuffer {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryBuffer {
    /// Rendered events in arrival order
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// All rendered events concatenated
    pub fn contents(&self) -> String {
        self.lines.lock().concat()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

/// Keeps every rendered event in memory.
///
/// # Example
///
/// ```
/// use rust_pattern_logger::prelude::*;
///
/// let appender = MemoryAppender::new();
/// let buffer = appender.buffer();
///
/// let mut logger = Logger::builder().pattern("%p %m").build();
/// logger.attach(appender);
/// logger.info(&LogEvent::builder("main.rs", 1).message("hi").build());
///
/// assert_eq!(buffer.lines(), vec!["INFO hi".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct MemoryAppender {
    level: LogLevel,
    formatter: Option<Arc<Formatter>>,
    buffer: MemoryBuffer,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum level this appender keeps
    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Use `formatter` instead of the logger's default
    #[must_use]
    pub fn with_formatter(mut self, formatter: Arc<Formatter>) -> Self {
        self.formatter = Some(formatter);
        self
    }

    /// Handle to the captured lines; stays valid after the appender is attached
    pub fn buffer(&self) -> MemoryBuffer {
        self.buffer.clone()
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn set_level(&mut self, level: LogLevel) {
        self.level = level;
    }
}

impl Appender for MemoryAppender {
    fn append(&mut self, logger: &str, level: LogLevel, event: &LogEvent) -> Result<()> {
        if level < self.level {
            return Ok(());
        }
        let line = bound_formatter(&self.formatter, "memory")?.render(logger, level, event);
        self.buffer.lines.lock().push(line);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }

    fn formatter(&self) -> Option<Arc<Formatter>> {
        self.formatter.clone()
    }

    fn set_formatter(&mut self, formatter: Arc<Formatter>) {
        self.formatter = Some(formatter);
    }
}
