//! Appender implementations

#[cfg(feature = "console")]
pub mod console;
#[cfg(feature = "file")]
pub mod file;
pub mod memory;

#[cfg(feature = "console")]
pub use console::ConsoleAppender;
#[cfg(feature = "file")]
pub use file::FileAppender;
pub use memory::{MemoryAppender, MemoryBuffer};

// Re-exported for appender implementors
pub use crate::core::{Appender, SharedAppender};

use crate::core::{Formatter, LoggerError, Result};
use std::sync::Arc;

/// Formatter an appender renders with, or an error if none was ever bound
/// (the appender is being driven directly rather than through a logger).
pub(crate) fn bound_formatter<'a>(
    formatter: &'a Option<Arc<Formatter>>,
    appender: &str,
) -> Result<&'a Formatter> {
    formatter
        .as_deref()
        .ok_or_else(|| LoggerError::writer(format!("{} appender has no formatter bound", appender)))
}
