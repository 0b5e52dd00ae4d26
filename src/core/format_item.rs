//! Compiled layout tokens
//!
//! A pattern such as `%d%T[%p]%T%m%n` compiles to a sequence of
//! [`FormatItem`]s. Each item appends one field of a log event (or a piece of
//! literal text) to an output buffer.

use super::error::PatternError;
use super::log_event::LogEvent;
use super::log_level::LogLevel;
use chrono::format::{Item, StrftimeItems};
use chrono::{Local, TimeZone};
use std::fmt::Write;

/// Date/time template used by `%d` when no subformat is given
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One executable unit of a compiled pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatItem {
    /// Text copied verbatim
    Literal(String),
    /// `%m`
    Message,
    /// `%p`
    Level,
    /// `%r`, milliseconds since process start
    Elapsed,
    /// `%c`
    LoggerName,
    /// `%t`
    ThreadId,
    /// `%F`
    FiberId,
    /// `%d{...}`, event time in the local time zone, strftime template
    DateTime(String),
    /// `%f`
    FileName,
    /// `%l`
    LineNo,
    /// `%n`
    NewLine,
    /// `%T`
    Tab,
    /// Malformed directive, renders its diagnostic marker
    Error(PatternError),
}

impl FormatItem {
    /// Build a `%d` item. An empty subformat selects [`DEFAULT_TIME_FORMAT`];
    /// a template chrono cannot interpret becomes an [`FormatItem::Error`].
    pub fn date_time(subformat: &str) -> Self {
        if subformat.is_empty() {
            return FormatItem::DateTime(DEFAULT_TIME_FORMAT.to_string());
        }
        if StrftimeItems::new(subformat).any(|item| matches!(item, Item::Error)) {
            return FormatItem::Error(PatternError::InvalidTimeFormat {
                directive: "d".to_string(),
                subformat: subformat.to_string(),
            });
        }
        FormatItem::DateTime(subformat.to_string())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, FormatItem::Error(_))
    }

    /// Append this item's rendering of `event` to `out`
    pub fn render(&self, out: &mut String, logger_name: &str, level: LogLevel, event: &LogEvent) {
        // Writing into a String only fails when a Display impl reports an
        // error, which none of the values below do.
        match self {
            FormatItem::Literal(text) => out.push_str(text),
            FormatItem::Message => out.push_str(event.message()),
            FormatItem::Level => out.push_str(level.to_str()),
            FormatItem::Elapsed => {
                let _ = write!(out, "{}", event.elapsed());
            }
            FormatItem::LoggerName => out.push_str(logger_name),
            FormatItem::ThreadId => {
                let _ = write!(out, "{}", event.thread_id());
            }
            FormatItem::FiberId => {
                let _ = write!(out, "{}", event.fiber_id());
            }
            FormatItem::DateTime(format) => render_time(out, format, event.time()),
            FormatItem::FileName => out.push_str(event.file()),
            FormatItem::LineNo => {
                let _ = write!(out, "{}", event.line());
            }
            FormatItem::NewLine => out.push('\n'),
            FormatItem::Tab => out.push('\t'),
            FormatItem::Error(error) => {
                let _ = write!(out, "{}", error);
            }
        }
    }
}

fn render_time(out: &mut String, format: &str, seconds: i64) {
    // earliest() picks the first instant when a DST fold makes the local time ambiguous
    match Local.timestamp_opt(seconds, 0).earliest() {
        Some(datetime) => {
            let mark = out.len();
            if write!(out, "{}", datetime.format(format)).is_err() {
                out.truncate(mark);
                let _ = write!(out, "{}", seconds);
            }
        }
        None => {
            let _ = write!(out, "{}", seconds);
        }
    }
}
