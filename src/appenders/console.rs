//! Console appender implementation

use super::bound_formatter;
use crate::core::{Appender, Formatter, LogEvent, LogLevel, Result};
use colored::Colorize;
use std::io::Write;
use std::sync::Arc;

/// Writes rendered events to stdout
pub struct ConsoleAppender {
    level: LogLevel,
    use_colors: bool,
    formatter: Option<Arc<Formatter>>,
    buffer: String,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self::with_colors(false)
    }

    /// Colorize each line by level (the trailing newline is left uncolored)
    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            level: LogLevel::Debug,
            use_colors,
            formatter: None,
            buffer: String::new(),
        }
    }

    /// Set the minimum level this appender writes
    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Use `formatter` instead of the logger's default
    ///
    /// # Example
    ///
    /// ```
    /// use rust_pattern_logger::appenders::ConsoleAppender;
    /// use rust_pattern_logger::Formatter;
    ///
    /// let appender = ConsoleAppender::new()
    ///     .with_formatter(Formatter::new("[%p] %m%n").shared());
    /// ```
    #[must_use]
    pub fn with_formatter(mut self, formatter: Arc<Formatter>) -> Self {
        self.formatter = Some(formatter);
        self
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn set_level(&mut self, level: LogLevel) {
        self.level = level;
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, logger: &str, level: LogLevel, event: &LogEvent) -> Result<()> {
        if level < self.level {
            return Ok(());
        }

        self.buffer.clear();
        bound_formatter(&self.formatter, "console")?.render_into(
            &mut self.buffer,
            logger,
            level,
            event,
        );

        let mut stdout = std::io::stdout().lock();
        if self.use_colors {
            let (body, newline) = match self.buffer.strip_suffix('\n') {
                Some(body) => (body, "\n"),
                None => (self.buffer.as_str(), ""),
            };
            write!(stdout, "{}{}", body.color(level.color_code()), newline)?;
        } else {
            stdout.write_all(self.buffer.as_bytes())?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        std::io::stdout().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }

    fn formatter(&self) -> Option<Arc<Formatter>> {
        self.formatter.clone()
    }

    fn set_formatter(&mut self, formatter: Arc<Formatter>) {
        self.formatter = Some(formatter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event() -> LogEvent {
        LogEvent::builder("console.rs", 3).message("to stdout").build()
    }

    #[test]
    fn test_defaults() {
        let appender = ConsoleAppender::default();
        assert_eq!(appender.level(), LogLevel::Debug);
        assert!(appender.formatter().is_none());
        assert_eq!(appender.name(), "console");
    }

    #[test]
    fn test_append_without_formatter_is_error() {
        let mut appender = ConsoleAppender::new();
        assert!(appender.append("root", LogLevel::Info, &event()).is_err());
    }

    #[test]
    fn test_append_with_formatter() {
        let mut appender = ConsoleAppender::with_colors(true)
            .with_formatter(Formatter::new("[%p] %m%n").shared());
        assert!(appender.append("root", LogLevel::Warn, &event()).is_ok());
        assert!(appender.flush().is_ok());
    }

    #[test]
    fn test_below_appender_level_is_skipped() {
        // No formatter bound: reaching the render step would be an error
        let mut appender = ConsoleAppender::new().with_level(LogLevel::Error);
        assert!(appender.append("root", LogLevel::Info, &event()).is_ok());
    }
}
