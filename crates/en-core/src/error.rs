//! Error types for the en-core crate.
//!
//! This module provides the [`ConfigError`] type for failures while loading
//! or reading navigation settings.

use camino::Utf8PathBuf;

/// Errors that can occur during settings loading and lookup.
///
/// A key that is simply absent is never an error here; lookups return
/// `None` and callers decide whether that aborts a command.
///
/// # Examples
///
/// ```
/// use en_core::ConfigError;
///
/// let error = ConfigError::invalid_value("root", "expected an array of path segments");
/// assert!(error.to_string().contains("root"));
/// ```
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A settings key holds a value of the wrong shape.
    #[error("invalid value for setting '{key}': {reason}")]
    InvalidValue {
        /// The offending key.
        key: String,
        /// Explanation of what was expected.
        reason: String,
    },

    /// A settings file is valid JSON but not an object.
    #[error("settings file {0} must contain a JSON object")]
    NotAnObject(Utf8PathBuf),

    /// An I/O error occurred while reading a settings file.
    #[error("failed to read settings file {path}: {source}")]
    Io {
        /// The file that could not be read.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse settings JSON.
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    /// Creates a new [`ConfigError::InvalidValue`] error.
    #[inline]
    pub fn invalid_value(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Creates a new [`ConfigError::Io`] error.
    #[inline]
    pub fn io(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
