//! TUI-specific error types.
//!
//! This module provides the [`TuiError`] type for errors that can occur
//! while showing the quick panel or launching the editor.

use thiserror::Error;

/// Errors that can occur in the TUI.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TuiError {
    /// Terminal initialization or operation failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// No usable editor was found or it failed.
    #[error("editor error: {0}")]
    Editor(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl TuiError {
    /// Creates a new editor error.
    #[must_use]
    pub fn editor(message: impl Into<String>) -> Self {
        Self::Editor(message.into())
    }

    /// Creates a new configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_error() {
        let err = TuiError::editor("exited with status 1");
        assert!(matches!(err, TuiError::Editor(_)));
        assert_eq!(err.to_string(), "editor error: exited with status 1");
    }

    #[test]
    fn test_terminal_error_from_io() {
        let err = TuiError::from(std::io::Error::other("no tty"));
        assert!(err.to_string().starts_with("terminal error"));
    }
}
