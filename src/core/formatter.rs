//! Pattern-based formatter shared by loggers and appenders

use super::error::{LoggerError, PatternError, Result};
use super::format_item::FormatItem;
use super::log_event::LogEvent;
use super::log_level::LogLevel;
use super::pattern;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Pattern installed on loggers created without one:
/// time, thread id, fiber id, `[level]`, `file:line` and message, tab separated.
pub const DEFAULT_PATTERN: &str = "%d{%Y-%m-%d %H:%M:%S}%T%t%T%F%T[%p]%T%f:%l%T%m%n";

/// A compiled layout pattern.
///
/// Formatters are immutable once built and are normally shared between
/// appenders as `Arc<Formatter>`.
///
/// # Examples
///
/// ```
/// use rust_pattern_logger::{Formatter, LogEvent, LogLevel};
///
/// let formatter = Formatter::new("[%p] %c %f:%l %m");
/// let event = LogEvent::builder("main.rs", 7).message("ready").build();
///
/// assert_eq!(
///     formatter.render("app", LogLevel::Info, &event),
///     "[INFO] app main.rs:7 ready"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    pattern: String,
    items: Vec<FormatItem>,
    errors: Vec<PatternError>,
}

impl Formatter {
    /// Compile `pattern`, keeping malformed directives as in-band error markers.
    ///
    /// Problems are reported once on stderr and stay available through
    /// [`errors`](Self::errors).
    pub fn new(pattern: impl Into<String>) -> Self {
        let formatter = Self::compile(pattern.into());
        for error in &formatter.errors {
            eprintln!(
                "[LOGGER WARNING] pattern parse error in '{}': {}",
                formatter.pattern, error
            );
        }
        formatter
    }

    /// Compile `pattern`, rejecting it if any directive is malformed
    pub fn strict(pattern: impl Into<String>) -> Result<Self> {
        let formatter = Self::compile(pattern.into());
        if formatter.has_errors() {
            return Err(LoggerError::pattern(formatter.pattern, formatter.errors));
        }
        Ok(formatter)
    }

    fn compile(pattern: String) -> Self {
        let compiled = pattern::compile(&pattern);
        Self {
            pattern,
            items: compiled.items,
            errors: compiled.errors,
        }
    }

    /// Wrap in an `Arc` for sharing between appenders
    #[must_use]
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn items(&self) -> &[FormatItem] {
        &self.items
    }

    pub fn errors(&self) -> &[PatternError] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Render `event` through every item in pattern order
    pub fn render(&self, logger_name: &str, level: LogLevel, event: &LogEvent) -> String {
        let mut out = String::with_capacity(self.pattern.len() + event.message().len() + 32);
        self.render_into(&mut out, logger_name, level, event);
        out
    }

    /// Like [`render`](Self::render), appending to an existing buffer
    pub fn render_into(
        &self,
        out: &mut String,
        logger_name: &str,
        level: LogLevel,
        event: &LogEvent,
    ) {
        for item in &self.items {
            item.render(out, logger_name, level, event);
        }
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::compile(DEFAULT_PATTERN.to_string())
    }
}

impl FromStr for Formatter {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::strict(s)
    }
}

impl fmt::Display for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}
