//! The surface an editor or terminal must provide to run commands.
//!
//! [`Workspace`] answers questions about the open project; [`SelectionUi`]
//! shows choices and opens files. Both are queried fresh on every
//! invocation.

use camino::{Utf8Path, Utf8PathBuf};
use en_core::{ConfigError, SettingsLayer};

/// The open project.
pub trait Workspace {
    /// Returns the open project folders; the first one is the project root.
    fn project_folders(&self) -> Vec<Utf8PathBuf>;

    /// Returns the path of the file being edited, if any.
    fn active_file(&self) -> Option<Utf8PathBuf>;

    /// Returns project-scoped settings, if the project defines any.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings exist but cannot be read.
    fn project_settings(&self) -> Result<Option<SettingsLayer>, ConfigError>;

    /// Returns user-scoped settings, defaults included.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be read.
    fn user_settings(&self) -> Result<SettingsLayer, ConfigError>;
}

/// The user's answer to a list of choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The choice at this index was picked.
    Chosen(usize),
    /// The list was dismissed.
    Cancelled,
}

impl Selection {
    /// Converts a host index where any negative value means "dismissed".
    #[must_use]
    pub fn from_index(index: i64) -> Self {
        usize::try_from(index).map_or(Self::Cancelled, Self::Chosen)
    }

    /// Returns the chosen index.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::Chosen(index) => Some(index),
            Self::Cancelled => None,
        }
    }
}

/// Presents choices and opens files.
pub trait SelectionUi {
    /// Error returned by the UI.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Shows `choices` under `title` and waits for the user's answer.
    ///
    /// # Errors
    ///
    /// Returns an error if the choices cannot be shown.
    fn present_choices(&mut self, title: &str, choices: &[String])
        -> Result<Selection, Self::Error>;

    /// Opens `path` in the editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    fn open_file(&mut self, path: &Utf8Path) -> Result<(), Self::Error>;

    /// Tells the user about a failure.
    fn show_error(&mut self, message: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_from_index() {
        assert_eq!(Selection::from_index(-1), Selection::Cancelled);
        assert_eq!(Selection::from_index(-7), Selection::Cancelled);
        assert_eq!(Selection::from_index(0), Selection::Chosen(0));
        assert_eq!(Selection::from_index(3).index(), Some(3));
        assert_eq!(Selection::Cancelled.index(), None);
    }
}
