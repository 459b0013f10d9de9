//! Error types for configuration loading.
//!
//! The simulation itself never fails; only reading tuning/settings files can.

use std::fmt;
use std::path::PathBuf;

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading tuning or settings.
#[derive(Debug)]
pub enum ConfigError {
    /// Reading the file failed.
    Io {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// The file was not valid JSON for the expected shape.
    Parse(serde_json::Error),
    /// A value parsed but breaks a gameplay constraint.
    Invalid {
        /// The offending field.
        field: &'static str,
        /// Description of what was wrong.
        detail: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, detail: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            ConfigError::Parse(e) => write!(f, "parse error: {e}"),
            ConfigError::Invalid { field, detail } => write!(f, "invalid {field}: {detail}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}
