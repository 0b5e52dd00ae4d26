//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

/// A problem found while compiling a layout pattern.
///
/// Pattern errors never abort compilation. Each one is kept as an in-band
/// [`FormatItem::Error`](super::format_item::FormatItem::Error) token whose
/// rendered text is this type's `Display` output, so a bad pattern shows up
/// in the log lines it produces.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    /// Directive code not present in the registry (includes the empty code
    /// produced by a `%` followed by a non-alphabetic character)
    #[error("<<error_format %{directive}>>")]
    UnknownDirective { directive: String },

    /// `{` opened after a directive but the pattern ended before `}`
    #[error("<<pattern_error %{directive}>>")]
    UnterminatedSubformat {
        directive: String,
        subformat: String,
    },

    /// `%d{...}` subformat that is not a valid strftime template
    #[error("<<error_format %{directive}{{{subformat}}}>>")]
    InvalidTimeFormat {
        directive: String,
        subformat: String,
    },
}

impl PatternError {
    /// Directive code that triggered this error
    pub fn directive(&self) -> &str {
        match self {
            PatternError::UnknownDirective { directive }
            | PatternError::UnterminatedSubformat { directive, .. }
            | PatternError::InvalidTimeFormat { directive, .. } => directive,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON configuration error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Pattern rejected by strict compilation
    #[error("Invalid pattern '{pattern}': {} error(s), first: {}", .errors.len(), first_error(.errors))]
    InvalidPattern {
        pattern: String,
        errors: Vec<PatternError>,
    },

    /// File appender error with path
    #[error("File appender error for '{path}': {message}")]
    FileAppenderError { path: String, message: String },

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

fn first_error(errors: &[PatternError]) -> String {
    errors
        .first()
        .map(ToString::to_string)
        .unwrap_or_else(|| "none".to_string())
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create an invalid pattern error
    pub fn pattern(pattern: impl Into<String>, errors: Vec<PatternError>) -> Self {
        LoggerError::InvalidPattern {
            pattern: pattern.into(),
            errors,
        }
    }

    /// Create a file appender error
    pub fn file_appender(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FileAppenderError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}
