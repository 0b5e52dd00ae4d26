//! Log event structure

use chrono::Utc;
use std::cell::Cell;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;

static NEXT_THREAD_ID: AtomicU64 = AtomicU64::new(1);
static PROCESS_START: OnceLock<Instant> = OnceLock::new();

// Numeric ids are handed out on first use per thread and cached afterwards
thread_local! {
    static THREAD_ID_CACHE: Cell<u64> = const { Cell::new(0) };
}

/// Small numeric id for the current thread, stable for the thread's lifetime
pub fn current_thread_id() -> u64 {
    THREAD_ID_CACHE.with(|cache| {
        let cached = cache.get();
        if cached != 0 {
            return cached;
        }
        let id = NEXT_THREAD_ID.fetch_add(1, Ordering::Relaxed);
        cache.set(id);
        id
    })
}

/// Milliseconds elapsed since the process clock was first read
pub fn elapsed_millis() -> u64 {
    let start = PROCESS_START.get_or_init(Instant::now);
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

/// One log occurrence.
///
/// Events are assembled with a [`LogEventBuilder`] and are read-only once
/// built. A logger hands the same `&LogEvent` to every appender, possibly
/// from several threads at once.
///
/// The source file is a `&'static str` (normally from `file!()`), so an event
/// never owns or copies its file name and can still be moved across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    file: &'static str,
    line: u32,
    elapsed: u64,
    thread_id: u64,
    fiber_id: u64,
    time: i64,
    message: String,
}

impl LogEvent {
    /// Start an event for the given source location with every other field zeroed
    pub fn builder(file: &'static str, line: u32) -> LogEventBuilder {
        LogEventBuilder::new(file, line)
    }

    /// Start an event stamped with the current thread id, process-elapsed
    /// milliseconds and wall-clock time. The fiber id is left at 0.
    pub fn capture(file: &'static str, line: u32) -> LogEventBuilder {
        LogEventBuilder::new(file, line)
            .elapsed(elapsed_millis())
            .thread_id(current_thread_id())
            .time(Utc::now().timestamp())
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }

    pub fn thread_id(&self) -> u64 {
        self.thread_id
    }

    pub fn fiber_id(&self) -> u64 {
        self.fiber_id
    }

    /// Wall-clock time in seconds since the Unix epoch
    pub fn time(&self) -> i64 {
        self.time
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Accumulates the fields and message text of a [`LogEvent`].
///
/// The builder implements [`fmt::Write`], so the message can be streamed in
/// pieces with `write!` before the event is frozen by [`build`](Self::build).
///
/// # Examples
///
/// ```
/// use rust_pattern_logger::LogEvent;
/// use std::fmt::Write;
///
/// let mut builder = LogEvent::builder("main.rs", 12).thread_id(7);
/// write!(builder, "user {} logged in", 42).unwrap();
/// let event = builder.build();
///
/// assert_eq!(event.message(), "user 42 logged in");
/// ```
#[derive(Debug, Clone)]
pub struct LogEventBuilder {
    event: LogEvent,
}

impl LogEventBuilder {
    pub fn new(file: &'static str, line: u32) -> Self {
        Self {
            event: LogEvent {
                file,
                line,
                elapsed: 0,
                thread_id: 0,
                fiber_id: 0,
                time: 0,
                message: String::new(),
            },
        }
    }

    #[must_use]
    pub fn elapsed(mut self, millis: u64) -> Self {
        self.event.elapsed = millis;
        self
    }

    #[must_use]
    pub fn thread_id(mut self, id: u64) -> Self {
        self.event.thread_id = id;
        self
    }

    #[must_use]
    pub fn fiber_id(mut self, id: u64) -> Self {
        self.event.fiber_id = id;
        self
    }

    #[must_use]
    pub fn time(mut self, seconds: i64) -> Self {
        self.event.time = seconds;
        self
    }

    /// Replace the message text
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.event.message = message.into();
        self
    }

    /// Append to the message text
    pub fn push_str(&mut self, text: &str) -> &mut Self {
        self.event.message.push_str(text);
        self
    }

    pub fn build(self) -> LogEvent {
        self.event
    }
}

impl fmt::Write for LogEventBuilder {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.event.message.push_str(s);
        Ok(())
    }
}
