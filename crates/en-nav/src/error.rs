//! Error types for the en-nav crate.
//!
//! This module provides [`NavError`], covering every way a navigation
//! command can stop early.
//!
//! # Classification
//!
//! - **User-visible** ([`NavError::NoProjectRoot`]): reported through the
//!   selection UI, then the command aborts.
//! - **Silent** ([`NavError::MissingSetting`], [`NavError::MissingCategoryPath`]):
//!   the command produces no listing and reports nothing.
//! - Everything else propagates to the caller.
//!
//! Failing to relate the open file to any listed file is not an error, and
//! neither is dismissing the panel.

use en_core::{Category, ConfigError};
use en_scanner::ScanError;

/// Errors that can occur while running a navigation command.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum NavError {
    /// No project folder is open.
    #[error("Could not find project root")]
    NoProjectRoot,

    /// A setting required to build a path is absent from every scope.
    #[error("setting '{0}' is not configured")]
    MissingSetting(String),

    /// A category the command needs has no configured location.
    #[error("no location configured for {0}")]
    MissingCategoryPath(Category),

    /// A pattern built from settings or file names failed to compile.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern text.
        pattern: String,
        /// The underlying regex error.
        #[source]
        source: regex::Error,
    },

    /// Settings could not be read.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Listing files failed.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// The selection UI failed to present choices or open a file.
    #[error("host error: {0}")]
    Host(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl NavError {
    /// Creates a new [`NavError::InvalidPattern`] error.
    #[inline]
    pub fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// Wraps a selection UI error.
    #[inline]
    pub fn host(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Host(Box::new(source))
    }

    /// Returns `true` if the command should end without a listing and without
    /// telling the user.
    #[inline]
    #[must_use]
    pub const fn is_silent(&self) -> bool {
        matches!(self, Self::MissingSetting(_) | Self::MissingCategoryPath(_))
    }

    /// Returns `true` if the error should be shown to the user before the
    /// command aborts.
    #[inline]
    #[must_use]
    pub const fn is_user_visible(&self) -> bool {
        matches!(self, Self::NoProjectRoot)
    }
}

#[cfg(test)]
mod tests {
    use camino::Utf8PathBuf;

    use super::*;

    #[test]
    fn test_classification() {
        assert!(NavError::NoProjectRoot.is_user_visible());
        assert!(!NavError::NoProjectRoot.is_silent());

        assert!(NavError::MissingSetting("root".to_owned()).is_silent());
        assert!(NavError::MissingCategoryPath(Category::Views).is_silent());
        assert!(!NavError::MissingCategoryPath(Category::Views).is_user_visible());

        let scan = NavError::from(ScanError::NotADirectory(Utf8PathBuf::from("app.js")));
        assert!(!scan.is_silent());
        assert!(!scan.is_user_visible());
    }

    #[test]
    fn test_display() {
        assert_eq!(NavError::NoProjectRoot.to_string(), "Could not find project root");
        assert_eq!(
            NavError::MissingCategoryPath(Category::States).to_string(),
            "no location configured for states"
        );
    }

    #[test]
    fn test_host_wraps_source() {
        let err = NavError::host(std::io::Error::other("panel closed"));
        assert!(err.to_string().contains("panel closed"));
    }
}
