//! Declarative logger configuration
//!
//! A [`LoggerConfig`] describes one logger and its appenders and can be
//! deserialized with serde (JSON helper included). Patterns given here are
//! compiled strictly: a malformed directive is a configuration error rather
//! than an in-band marker.
//!
//! ```
//! use rust_pattern_logger::config::LoggerConfig;
//! use rust_pattern_logger::LogLevel;
//!
//! let config = LoggerConfig::from_json(r#"{
//!     "name": "http",
//!     "level": "INFO",
//!     "pattern": "%d%T[%p]%T%m%n",
//!     "appenders": [
//!         { "type": "console", "level": "WARN", "pattern": "%p %m%n" }
//!     ]
//! }"#).unwrap();
//!
//! let logger = config.build().unwrap();
//! assert_eq!(logger.name(), "http");
//! assert_eq!(logger.level(), LogLevel::Info);
//! ```

use crate::core::{
    Formatter, LogLevel, Logger, LoggerError, Result, SharedAppender, ROOT_LOGGER_NAME,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub name: String,
    pub level: LogLevel,
    /// Default pattern for appenders without their own; `None` keeps
    /// [`DEFAULT_PATTERN`](crate::DEFAULT_PATTERN)
    pub pattern: Option<String>,
    pub appenders: Vec<AppenderConfig>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: ROOT_LOGGER_NAME.to_string(),
            level: LogLevel::Debug,
            pattern: None,
            appenders: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AppenderConfig {
    Console {
        #[serde(default)]
        level: LogLevel,
        #[serde(default)]
        pattern: Option<String>,
        #[serde(default)]
        colors: bool,
    },
    File {
        path: PathBuf,
        #[serde(default)]
        level: LogLevel,
        #[serde(default)]
        pattern: Option<String>,
    },
}

fn strict_formatter(pattern: Option<&str>) -> Result<Option<Arc<Formatter>>> {
    pattern
        .map(|pattern| Formatter::strict(pattern).map(Arc::new))
        .transpose()
}

impl AppenderConfig {
    /// Create the described appender
    pub fn build(&self) -> Result<SharedAppender> {
        match self {
            #[cfg(feature = "console")]
            AppenderConfig::Console {
                level,
                pattern,
                colors,
            } => {
                let mut appender =
                    crate::appenders::ConsoleAppender::with_colors(*colors).with_level(*level);
                if let Some(formatter) = strict_formatter(pattern.as_deref())? {
                    appender = appender.with_formatter(formatter);
                }
                Ok(crate::core::appender::shared(appender))
            }
            #[cfg(feature = "file")]
            AppenderConfig::File {
                path,
                level,
                pattern,
            } => {
                let mut appender = crate::appenders::FileAppender::new(path)?.with_level(*level);
                if let Some(formatter) = strict_formatter(pattern.as_deref())? {
                    appender = appender.with_formatter(formatter);
                }
                Ok(crate::core::appender::shared(appender))
            }
            #[allow(unreachable_patterns)]
            other => Err(LoggerError::config(
                "AppenderConfig",
                format!("appender type not enabled in this build: {:?}", other),
            )),
        }
    }
}

impl LoggerConfig {
    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the logger, its default formatter and every appender
    pub fn build(&self) -> Result<Logger> {
        let mut builder = Logger::builder().name(self.name.as_str()).level(self.level);
        if let Some(formatter) = strict_formatter(self.pattern.as_deref())? {
            builder = builder.formatter(formatter);
        }
        for appender in &self.appenders {
            builder = builder.appender(appender.build()?);
        }
        Ok(builder.build())
    }
}
