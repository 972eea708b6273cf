//! User actions for the quick panel.
//!
//! ```text
//! Key Event → QuickPanel::handle_key → Action → QuickPanel::update
//! ```

/// User-initiated actions in the quick panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    // =========================================================================
    // Navigation
    // =========================================================================
    /// Move selection to the next choice.
    NextItem,

    /// Move selection to the previous choice.
    PreviousItem,

    /// Move selection to the first choice.
    FirstItem,

    /// Move selection to the last choice.
    LastItem,

    /// Move selection down by one page.
    PageDown,

    /// Move selection up by one page.
    PageUp,

    // =========================================================================
    // Query
    // =========================================================================
    /// Append a character to the query.
    InsertChar(char),

    /// Remove the last character of the query.
    DeleteChar,

    /// Clear the query.
    ClearQuery,

    // =========================================================================
    // Closing
    // =========================================================================
    /// Pick the selected choice.
    Accept,

    /// Dismiss the panel.
    Cancel,

    /// Redraw without changing state.
    Render,

    /// No operation.
    #[default]
    None,
}

impl Action {
    /// Returns `true` if this action changes the query.
    #[must_use]
    pub const fn modifies_query(&self) -> bool {
        matches!(self, Self::InsertChar(_) | Self::DeleteChar | Self::ClearQuery)
    }
}
