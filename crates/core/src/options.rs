//! Column family options relevant to status tracking, via `thread_status.toml`
//!
//! Same model as the database config file: a commented default is written on
//! first use, and edits take effect the next time the column family is opened.

use crate::error::{StatusError, StatusResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name placed next to the column family data.
pub const THREAD_STATUS_CONFIG_FILE: &str = "thread_status.toml";

/// Per-column-family options consulted by the thread status facade.
///
/// # Example
///
/// ```toml
/// # Report flush and compaction progress for this column family
/// enable_thread_tracking = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnFamilyOptions {
    /// Publish the operation and state of threads working on this column
    /// family to the status registry. Off by default.
    pub enable_thread_tracking: bool,
}

impl ColumnFamilyOptions {
    /// Create options with default settings (tracking disabled).
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable thread tracking.
    pub fn enable_thread_tracking(mut self, enabled: bool) -> Self {
        self.enable_thread_tracking = enabled;
        self
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Thread status configuration for this column family
#
# Publish the operation (flush, compaction) and state of background threads
# working on this column family to the thread status registry.
# Default: false
enable_thread_tracking = false
"#
    }

    /// Parse options from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`StatusError::InvalidConfig`] if the text is not valid
    /// options TOML. There is no file involved, so no path is reported; use
    /// [`from_file`](Self::from_file) to get a [`StatusError::ConfigParse`]
    /// naming the offending file.
    pub fn from_toml_str(content: &str) -> StatusResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse options from a file path.
    ///
    /// # Errors
    ///
    /// Returns [`StatusError::Io`] if the file cannot be read, and
    /// [`StatusError::ConfigParse`] carrying `path` if it cannot be parsed.
    pub fn from_file(path: &Path) -> StatusResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| StatusError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Write the default config file if it does not already exist.
    pub fn write_default_if_missing(path: &Path) -> StatusResult<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }

    /// Serialize these options to TOML and write them to the given path.
    pub fn write_to_file(&self, path: &Path) -> StatusResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
