//! Error types for the en-scanner crate.
//!
//! This module provides the [`ScanError`] type for errors that can occur
//! while listing category directories.

use camino::Utf8PathBuf;

/// Errors that can occur during listing.
///
/// A directory that does not exist is not an error: it lists as empty.
///
/// # Examples
///
/// ```
/// use en_scanner::ScanError;
///
/// fn describe(err: &ScanError) -> String {
///     match err {
///         ScanError::Walk(e) => format!("walk error: {e}"),
///         ScanError::Read { path, .. } => format!("read error: {path}"),
///         ScanError::NotADirectory(path) => format!("not a directory: {path}"),
///         ScanError::NonUtf8Path(p) => format!("invalid path: {}", p.display()),
///     }
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// Failed to walk a directory tree.
    #[error("failed to walk directory: {0}")]
    Walk(#[from] ignore::Error),

    /// Failed to read a directory's entries.
    #[error("failed to read directory {path}: {source}")]
    Read {
        /// The directory that couldn't be read.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The path to list exists but is not a directory.
    #[error("not a directory: {0}")]
    NotADirectory(Utf8PathBuf),

    /// A path is not valid UTF-8.
    #[error("path is not valid UTF-8: {}", _0.display())]
    NonUtf8Path(std::path::PathBuf),
}

impl ScanError {
    /// Creates a new [`ScanError::Read`] error.
    #[inline]
    pub fn read(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Returns the path associated with this error, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8PathBuf> {
        match self {
            Self::Read { path, .. } | Self::NotADirectory(path) => Some(path),
            Self::Walk(_) | Self::NonUtf8Path(_) => None,
        }
    }
}
