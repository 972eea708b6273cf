//! Terminal wrapper for the quick panel.
//!
//! The panel blocks until the user answers, so events are read straight from
//! crossterm on the calling thread.
//!
//! # Example
//!
//! ```ignore
//! use en_tui::Tui;
//!
//! let mut tui = Tui::new()?;
//! tui.enter()?;
//!
//! loop {
//!     tui.draw(|frame| {
//!         // Render UI
//!     })?;
//!
//!     if let Some(event) = tui.next_event()? {
//!         // Handle event
//!     }
//! }
//!
//! tui.exit()?;
//! ```

use std::io::{self, Stdout};

use crossterm::ExecutableCommand;
use crossterm::event;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::prelude::*;
use tracing::{debug, error, trace};

use crate::error::TuiError;
use crate::event::Event;

/// Terminal wrapper.
///
/// Manages the terminal state (raw mode, alternate screen) and restores it
/// when dropped.
pub struct Tui {
    /// The underlying Ratatui terminal.
    terminal: Terminal<CrosstermBackend<Stdout>>,

    /// Whether raw mode and the alternate screen are active.
    entered: bool,
}

impl Tui {
    /// Creates a new TUI.
    ///
    /// The terminal is not entered yet; call [`enter()`](Self::enter) to
    /// initialize raw mode and the alternate screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be initialized.
    pub fn new() -> Result<Self, TuiError> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            entered: false,
        })
    }

    /// Enters the terminal (raw mode, alternate screen).
    ///
    /// # Errors
    ///
    /// Returns an error if terminal mode cannot be changed.
    pub fn enter(&mut self) -> Result<(), TuiError> {
        debug!("Entering terminal");

        enable_raw_mode()?;
        self.entered = true;
        io::stdout().execute(EnterAlternateScreen)?;

        self.terminal.hide_cursor()?;
        self.terminal.clear()?;
        Ok(())
    }

    /// Exits the terminal (restores normal mode). Does nothing if the
    /// terminal was never entered.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal mode cannot be restored.
    pub fn exit(&mut self) -> Result<(), TuiError> {
        if !self.entered {
            return Ok(());
        }
        debug!("Exiting terminal");
        self.entered = false;

        self.terminal.show_cursor()?;
        io::stdout().execute(LeaveAlternateScreen)?;
        disable_raw_mode()?;
        Ok(())
    }

    /// Draws to the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if drawing fails.
    pub fn draw<F>(&mut self, f: F) -> Result<(), TuiError>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }

    /// Blocks for the next terminal event.
    ///
    /// Returns `Ok(None)` for events the panel ignores.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    pub fn next_event(&mut self) -> Result<Option<Event>, TuiError> {
        let raw = event::read()?;
        trace!(?raw, "Terminal event");
        Ok(Event::from_crossterm(&raw))
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        // Attempt to restore terminal on drop
        if let Err(e) = self.exit() {
            error!(error = %e, "Failed to restore terminal on drop");
        }
    }
}
