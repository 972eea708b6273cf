//! Terminal implementations of the navigation host traits.
//!
//! [`CliWorkspace`] answers from command-line flags and settings files;
//! [`TerminalUi`] shows the quick panel and launches the editor, or prints
//! the listing when `--print` is given.

use std::io::{self, Write};

use camino::{Utf8Path, Utf8PathBuf};
use en_core::{Config, ConfigError, SettingsLayer};
use en_nav::{Selection, SelectionUi, Workspace};
use en_tui::TuiError;
use tracing::{debug, error};

/// Name of the project settings file looked up in the first project folder.
pub const PROJECT_SETTINGS_FILE: &str = ".ember-nav.json";

/// The project as described on the command line.
#[derive(Debug, Clone)]
pub struct CliWorkspace {
    folders: Vec<Utf8PathBuf>,
    active_file: Option<Utf8PathBuf>,
    project_settings: Option<Utf8PathBuf>,
    user_settings: Option<Utf8PathBuf>,
}

impl CliWorkspace {
    /// Creates a workspace over `folders`, the first being the project root.
    #[must_use]
    pub const fn new(folders: Vec<Utf8PathBuf>, active_file: Option<Utf8PathBuf>) -> Self {
        Self {
            folders,
            active_file,
            project_settings: None,
            user_settings: None,
        }
    }

    /// Reads project settings from `path` instead of the default location.
    #[must_use]
    pub fn with_project_settings(mut self, path: Option<Utf8PathBuf>) -> Self {
        self.project_settings = path;
        self
    }

    /// Merges the user settings file at `path` over the defaults.
    #[must_use]
    pub fn with_user_settings(mut self, path: Option<Utf8PathBuf>) -> Self {
        self.user_settings = path;
        self
    }
}

impl Workspace for CliWorkspace {
    fn project_folders(&self) -> Vec<Utf8PathBuf> {
        self.folders.clone()
    }

    fn active_file(&self) -> Option<Utf8PathBuf> {
        self.active_file.clone()
    }

    fn project_settings(&self) -> Result<Option<SettingsLayer>, ConfigError> {
        if let Some(path) = &self.project_settings {
            return SettingsLayer::load(path).map(Some);
        }

        let Some(path) = self
            .folders
            .first()
            .map(|folder| folder.join(PROJECT_SETTINGS_FILE))
            .filter(|path| path.is_file())
        else {
            return Ok(None);
        };
        SettingsLayer::load(&path).map(Some)
    }

    fn user_settings(&self) -> Result<SettingsLayer, ConfigError> {
        let mut layer = SettingsLayer::defaults()?;
        if let Some(path) = &self.user_settings {
            layer.merge(SettingsLayer::load(path)?);
        }
        Ok(layer)
    }
}

/// How choices reach the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Full-screen quick panel, then the editor.
    Interactive,
    /// Write listings and paths to stdout and open nothing.
    Print,
}

/// Terminal selection UI.
///
/// Printed listings go to `out`, error messages to `err`.
#[derive(Debug)]
pub struct TerminalUi<W: Write, E: Write> {
    config: Config,
    mode: UiMode,
    out: W,
    err: E,
}

impl TerminalUi<io::Stdout, io::Stderr> {
    /// Creates a UI writing to stdout and stderr.
    #[must_use]
    pub fn stdout(config: Config, mode: UiMode) -> Self {
        Self::new(config, mode, io::stdout(), io::stderr())
    }
}

impl<W: Write, E: Write> TerminalUi<W, E> {
    /// Creates a UI writing printed output to `out` and errors to `err`.
    pub const fn new(config: Config, mode: UiMode, out: W, err: E) -> Self {
        Self {
            config,
            mode,
            out,
            err,
        }
    }
}

impl<W: Write, E: Write> SelectionUi for TerminalUi<W, E> {
    type Error = TuiError;

    fn present_choices(&mut self, title: &str, choices: &[String]) -> Result<Selection, TuiError> {
        match self.mode {
            UiMode::Interactive => en_tui::run_panel(title, choices, &self.config.tui),
            UiMode::Print => {
                debug!(title, count = choices.len(), "Printing listing");
                for choice in choices {
                    writeln!(self.out, "{choice}")?;
                }
                Ok(Selection::Cancelled)
            }
        }
    }

    fn open_file(&mut self, path: &Utf8Path) -> Result<(), TuiError> {
        match self.mode {
            UiMode::Interactive => en_tui::open_in_editor(path, &self.config.editor),
            UiMode::Print => {
                writeln!(self.out, "{path}")?;
                Ok(())
            }
        }
    }

    fn show_error(&mut self, message: &str) {
        error!(message, "Command failed");
        if let Err(err) = writeln!(self.err, "ember-nav: {message}") {
            debug!(error = %err, "Could not write to the error stream");
        }
    }
}
