//! Main logger implementation

use super::{
    appender::{self, Appender, SharedAppender},
    error::{LoggerError, Result},
    formatter::Formatter,
    log_event::LogEvent,
    log_level::LogLevel,
    metrics::LoggerMetrics,
};
use std::sync::Arc;

/// Name given to loggers built without one
pub const ROOT_LOGGER_NAME: &str = "root";

/// A named logger that forwards events at or above its threshold to every
/// attached appender, in attachment order.
///
/// Dispatch (`log` and the level aliases) takes `&self`. Configuration
/// (`add_appender`, `set_level`, ...) takes `&mut self`, so callers that
/// reconfigure a shared logger wrap it in their own lock.
pub struct Logger {
    name: String,
    level: LogLevel,
    formatter: Arc<Formatter>,
    appenders: Vec<SharedAppender>,
    /// Metrics for observability (dispatched, filtered and failed writes)
    metrics: LoggerMetrics,
}

impl Logger {
    /// Create a logger at `Debug` level using [`DEFAULT_PATTERN`](super::formatter::DEFAULT_PATTERN)
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: LogLevel::Debug,
            formatter: Arc::new(Formatter::default()),
            appenders: Vec::new(),
            metrics: LoggerMetrics::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn set_level(&mut self, level: LogLevel) {
        self.level = level;
    }

    /// Default formatter handed to appenders attached without one
    pub fn formatter(&self) -> &Arc<Formatter> {
        &self.formatter
    }

    /// Replace the default formatter. Appenders that are already attached keep
    /// whatever formatter they have.
    pub fn set_formatter(&mut self, formatter: Arc<Formatter>) {
        self.formatter = formatter;
    }

    /// Attach an appender. If it has no formatter yet it receives this
    /// logger's current default. The same appender may be attached more than once.
    pub fn add_appender(&mut self, appender: SharedAppender) {
        {
            let mut guard = appender.lock();
            if guard.formatter().is_none() {
                guard.set_formatter(Arc::clone(&self.formatter));
            }
        }
        self.appenders.push(appender);
    }

    /// Wrap, attach and return a handle usable with [`remove_appender`](Self::remove_appender)
    pub fn attach<A: Appender + 'static>(&mut self, appender: A) -> SharedAppender {
        let handle = appender::shared(appender);
        self.add_appender(Arc::clone(&handle));
        handle
    }

    /// Detach the first occurrence of `appender` (compared by identity).
    /// Returns `false` if it was not attached.
    pub fn remove_appender(&mut self, appender: &SharedAppender) -> bool {
        match self
            .appenders
            .iter()
            .position(|attached| Arc::ptr_eq(attached, appender))
        {
            Some(index) => {
                self.appenders.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn appender_count(&self) -> usize {
        self.appenders.len()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Forward `event` to every appender if `level` passes the threshold
    pub fn log(&self, level: LogLevel, event: &LogEvent) {
        if level < self.level {
            self.metrics.record_filtered();
            return;
        }

        self.metrics.record_dispatched();
        self.dispatch(level, event);
    }

    /// Deliver to each appender with per-appender panic isolation, so one
    /// failing appender never keeps the event from the ones after it.
    fn dispatch(&self, level: LogLevel, event: &LogEvent) {
        for (idx, appender) in self.appenders.iter().enumerate() {
            let append_result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                appender.lock().append(&self.name, level, event)
            }));

            match append_result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    eprintln!(
                        "[LOGGER ERROR] Logger '{}' appender #{} failed: {}",
                        self.name, idx, e
                    );
                    self.metrics.record_failed_write();
                }
                Err(panic_info) => {
                    eprintln!(
                        "[LOGGER CRITICAL] Logger '{}' appender #{} panicked: {}. \
                         Other appenders continue to function.",
                        self.name,
                        idx,
                        panic_message(&*panic_info)
                    );
                    self.metrics.record_failed_write();
                }
            }
        }
    }

    pub fn debug(&self, event: &LogEvent) {
        self.log(LogLevel::Debug, event);
    }

    pub fn info(&self, event: &LogEvent) {
        self.log(LogLevel::Info, event);
    }

    pub fn warn(&self, event: &LogEvent) {
        self.log(LogLevel::Warn, event);
    }

    pub fn error(&self, event: &LogEvent) {
        self.log(LogLevel::Error, event);
    }

    pub fn fatal(&self, event: &LogEvent) {
        self.log(LogLevel::Fatal, event);
    }

    /// Flush every appender. All appenders are flushed even if one fails;
    /// the first failure is returned.
    pub fn flush(&self) -> Result<()> {
        let mut first_error: Option<LoggerError> = None;
        for appender in &self.appenders {
            if let Err(e) = appender.lock().flush() {
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

fn panic_message(panic_info: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(ROOT_LOGGER_NAME)
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level)
            .field("pattern", &self.formatter.pattern())
            .field("appenders", &self.appenders.len())
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// The default formatter is installed before any appender is attached, so
/// appenders without their own formatter pick up the builder's pattern.
///
/// # Example
/// ```
/// use rust_pattern_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .name("http")
///     .level(LogLevel::Info)
///     .pattern("%d%T[%p]%T%c%T%m%n")
///     .appender(appender::shared(MemoryAppender::new()))
///     .build();
///
/// assert_eq!(logger.name(), "http");
/// assert_eq!(logger.appender_count(), 1);
/// ```
pub struct LoggerBuilder {
    name: String,
    level: LogLevel,
    formatter: Option<Arc<Formatter>>,
    appenders: Vec<SharedAppender>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            name: ROOT_LOGGER_NAME.to_string(),
            level: LogLevel::Debug,
            formatter: None,
            appenders: Vec::new(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the level threshold
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Compile `pattern` leniently and use it as the default formatter
    #[must_use = "builder methods return a new value"]
    pub fn pattern(self, pattern: &str) -> Self {
        self.formatter(Arc::new(Formatter::new(pattern)))
    }

    #[must_use = "builder methods return a new value"]
    pub fn formatter(mut self, formatter: Arc<Formatter>) -> Self {
        self.formatter = Some(formatter);
        self
    }

    /// Add an appender
    #[must_use = "builder methods return a new value"]
    pub fn appender(mut self, appender: SharedAppender) -> Self {
        self.appenders.push(appender);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let mut logger = Logger::new(self.name);
        logger.set_level(self.level);
        if let Some(formatter) = self.formatter {
            logger.set_formatter(formatter);
        }
        for appender in self.appenders {
            logger.add_appender(appender);
        }
        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
