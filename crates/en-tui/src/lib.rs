//! Terminal quick panel for ember-nav.
//!
//! Shows a list of files in a centered popup, narrows it as the user types
//! and reports which entry was picked. Also launches the external editor
//! for the chosen file.
//!
//! # Architecture
//!
//! ```text
//! crates/en-tui/src/
//!   lib.rs            # Public API and the panel loop
//!   panel.rs          # QuickPanel + ChoiceListState
//!   fuzzy.rs          # Subsequence query matching
//!   event.rs          # Event types (Key, Resize)
//!   action.rs         # User actions (from key bindings)
//!   tui.rs            # Terminal wrapper
//!   ui.rs             # Popup layout rendering
//!   theme.rs          # Color scheme and styling
//!   editor.rs         # External editor launcher
//!   error.rs          # TUI-specific error types
//!   components/
//!     query_input.rs  # Title and query line
//!     choice_list.rs  # Matching choices
//!     hint_bar.rs     # Match count and key hints
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use en_core::TuiConfig;
//! use en_tui::run_panel;
//!
//! let choices = vec!["post.js".to_owned(), "comment.js".to_owned()];
//! let selection = run_panel("Models", &choices, &TuiConfig::default())?;
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod action;
pub mod components;
pub mod editor;
pub mod error;
pub mod event;
pub mod fuzzy;
pub mod panel;
pub mod theme;
pub mod tui;
pub mod ui;

use en_core::TuiConfig;
use en_nav::Selection;
use tracing::{debug, info};

// Public re-exports
pub use action::Action;
pub use editor::open_in_editor;
pub use error::TuiError;
pub use event::Event;
pub use panel::{ChoiceListState, QuickPanel};
pub use theme::Theme;
pub use tui::Tui;

/// Shows `choices` under `title` and blocks until the user picks one or
/// dismisses the panel.
///
/// The terminal is restored before returning.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up, drawn to or read
/// from.
pub fn run_panel(
    title: &str,
    choices: &[String],
    config: &TuiConfig,
) -> Result<Selection, TuiError> {
    let theme = Theme::from_scheme(config.color_scheme);
    let mut panel = QuickPanel::new(title, choices, config.show_hints);

    let mut tui = Tui::new()?;
    tui.enter()?;

    info!(title, count = choices.len(), "Showing quick panel");
    let result = run_event_loop(&mut tui, &mut panel, &theme);

    tui.exit()?;

    result
}

/// Runs the panel loop until the panel closes.
fn run_event_loop(
    tui: &mut Tui,
    panel: &mut QuickPanel<'_>,
    theme: &Theme,
) -> Result<Selection, TuiError> {
    loop {
        tui.draw(|frame| ui::render(panel, frame, theme))?;

        let Some(event) = tui.next_event()? else {
            continue;
        };
        if let Some(selection) = panel.step(&event) {
            debug!(?selection, "Quick panel closed");
            return Ok(selection);
        }
    }
}
