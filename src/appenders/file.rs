//! File appender implementation

use super::bound_formatter;
use crate::core::{Appender, Formatter, LogEvent, LogLevel, LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Appends rendered events to a file
pub struct FileAppender {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
    level: LogLevel,
    formatter: Option<Arc<Formatter>>,
    buffer: String,
}

fn open(path: &Path) -> std::io::Result<BufWriter<File>> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(BufWriter::new(file))
}

impl FileAppender {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let writer = open(&path).map_err(|e| {
            LoggerError::io_operation(
                "opening log file",
                format!("cannot open '{}'", path.display()),
                e,
            )
        })?;

        Ok(Self {
            path,
            writer: Some(writer),
            level: LogLevel::Debug,
            formatter: None,
            buffer: String::new(),
        })
    }

    /// Set the minimum level this appender writes
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

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn set_level(&mut self, level: LogLevel) {
        self.level = level;
    }

    /// Flush and close the current handle, then open the path again.
    ///
    /// After an external tool renames the file, this starts a fresh file at
    /// the same path. On failure the appender stays closed and further
    /// appends return errors until a later `reopen` succeeds.
    pub fn reopen(&mut self) -> Result<()> {
        if let Some(mut writer) = self.writer.take() {
            // The old handle is going away either way
            let _ = writer.flush();
        }

        let writer = open(&self.path).map_err(|e| {
            LoggerError::io_operation(
                "reopening log file",
                format!("cannot open '{}'", self.path.display()),
                e,
            )
        })?;
        self.writer = Some(writer);
        Ok(())
    }
}

impl Appender for FileAppender {
    fn append(&mut self, logger: &str, level: LogLevel, event: &LogEvent) -> Result<()> {
        if level < self.level {
            return Ok(());
        }

        let writer = self.writer.as_mut().ok_or_else(|| {
            LoggerError::file_appender(self.path.display().to_string(), "file is not open")
        })?;

        self.buffer.clear();
        bound_formatter(&self.formatter, "file")?.render_into(
            &mut self.buffer,
            logger,
            level,
            event,
        );

        writer.write_all(self.buffer.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }

    fn formatter(&self) -> Option<Arc<Formatter>> {
        self.formatter.clone()
    }

    fn set_formatter(&mut self, formatter: Arc<Formatter>) {
        self.formatter = Some(formatter);
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.flush();
    }
}
