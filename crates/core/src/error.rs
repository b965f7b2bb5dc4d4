//! Error types for thread status configuration
//!
//! Status tracking itself never fails: every problem on the tracking path
//! degrades to a no-op. Errors only surface while loading or writing the
//! column family options that decide whether tracking is enabled.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for configuration operations
pub type StatusResult<T> = std::result::Result<T, StatusError>;

/// Errors raised by the configuration layer
#[derive(Debug, Error)]
pub enum StatusError {
    /// I/O error while reading or writing a config file
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A config file could not be parsed as TOML
    #[error("Failed to parse config file '{}': {message}", path.display())]
    ConfigParse {
        /// Path of the offending file
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// Config content was well-formed but not acceptable
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl From<toml::de::Error> for StatusError {
    fn from(e: toml::de::Error) -> Self {
        StatusError::InvalidConfig(e.to_string())
    }
}

impl From<toml::ser::Error> for StatusError {
    fn from(e: toml::ser::Error) -> Self {
        StatusError::InvalidConfig(e.to_string())
    }
}
