//! Error types for Spier operations.

use std::path::PathBuf;
use thiserror::Error;

use crate::Severity;

/// The main error type for Spier operations.
///
/// Open and write failures on a log file are always returned to the caller.
/// The logging core never terminates the host process.
#[derive(Error, Debug)]
pub enum SpierError {
    /// Requested severity is absent from the level registry
    #[error("Level \"{level}\" is not defined, use one of: {known}")]
    UnknownLevel {
        /// The severity that was looked up
        level: Severity,
        /// Registered severities, comma separated, in registry order
        known: String,
    },

    /// The filesystem refused to open or create the target log file
    #[error("Can't open {}: {source}", path.display())]
    ChannelOpen {
        /// File that could not be opened
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Appending to an open log file failed
    #[error("Can't write to {}: {source}", path.display())]
    ChannelWrite {
        /// File being written
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Write attempted on a channel with no open handle
    #[error("Bug detected: write attempted on a closed log channel\n\nThis is an internal error. Open the channel before writing.")]
    ChannelNotOpen,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SpierError {
    /// Build an `UnknownLevel` error from the registered keys.
    pub fn unknown_level<I>(level: Severity, known: I) -> Self
    where
        I: IntoIterator<Item = Severity>,
    {
        let known = known
            .into_iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        SpierError::UnknownLevel { level, known }
    }

    /// Whether this error came from the filesystem (open or write).
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            SpierError::ChannelOpen { .. } | SpierError::ChannelWrite { .. } | SpierError::Io(_)
        )
    }
}

/// A specialized Result type for Spier operations.
pub type Result<T> = std::result::Result<T, SpierError>;

/// Helper macro to bail out with a SpierError
///
/// This is used for expected error conditions.
///
/// # Example
///
/// ```ignore
/// if name.is_empty() {
///     bail!(Validation, "Level {} has an empty name", level);
/// }
/// ```
#[macro_export]
macro_rules! bail {
    ($variant:ident, $msg:expr) => {
        return Err($crate::SpierError::$variant($msg.to_string()))
    };
    ($variant:ident, $fmt:expr, $($arg:tt)*) => {
        return Err($crate::SpierError::$variant(format!($fmt, $($arg)*)))
    };
}
