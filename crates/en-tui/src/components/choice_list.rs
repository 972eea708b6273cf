//! Choice list component.
//!
//! Displays the visible choices with the matched query characters
//! highlighted and the selection marked.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{HighlightSpacing, List, ListItem, ListState, StatefulWidget};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::fuzzy;
use crate::panel::{ChoiceListState, QuickPanel};
use crate::theme::Theme;

/// Width taken by the highlight symbol.
const HIGHLIGHT_WIDTH: usize = 2;

const ELLIPSIS: &str = "…";

/// A stateful choice list widget.
pub struct ChoiceList<'a> {
    /// The panel whose choices are listed.
    panel: &'a QuickPanel<'a>,
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> ChoiceList<'a> {
    /// Creates a new choice list view.
    #[must_use]
    pub const fn new(panel: &'a QuickPanel<'a>, theme: &'a Theme) -> Self {
        Self { panel, theme }
    }

    /// Builds one list item per visible choice.
    fn build_items(&self, width: usize) -> Vec<ListItem<'a>> {
        self.panel
            .visible()
            .map(|(_, choice)| ListItem::new(self.build_line(choice, width)))
            .collect()
    }

    /// Builds a line for a choice, styling matched characters.
    fn build_line(&self, choice: &str, width: usize) -> Line<'a> {
        let (display, skipped) = truncate_start(choice, width);
        let positions = fuzzy::match_positions(self.panel.query(), choice).unwrap_or_default();

        let mut spans = Vec::new();
        if skipped > 0 {
            spans.push(Span::styled(ELLIPSIS, self.theme.dimmed_style()));
        }
        for (index, c) in display.chars().enumerate() {
            let style = if positions.contains(&(index + skipped)) {
                self.theme.match_style()
            } else {
                self.theme.base_style()
            };
            spans.push(Span::styled(c.to_string(), style));
        }
        Line::from(spans)
    }
}

impl StatefulWidget for &ChoiceList<'_> {
    type State = ChoiceListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        // Update visible height for page navigation
        state.visible_height = area.height as usize;

        let width = (area.width as usize).saturating_sub(HIGHLIGHT_WIDTH);
        let list = List::new(self.build_items(width))
            .highlight_style(self.theme.highlight_style)
            .highlight_spacing(HighlightSpacing::Always)
            .highlight_symbol("▸ ");

        let mut list_state = ListState::default()
            .with_selected(state.selected)
            .with_offset(state.scroll_offset);

        StatefulWidget::render(list, area, buf, &mut list_state);
    }
}

/// Drops leading characters so `text` fits in `max_width` columns, leaving
/// room for an ellipsis. Returns the kept suffix and the number of chars
/// dropped.
fn truncate_start(text: &str, max_width: usize) -> (&str, usize) {
    if text.width() <= max_width {
        return (text, 0);
    }

    let budget = max_width.saturating_sub(ELLIPSIS.width());
    let mut width = 0;
    let mut start = text.len();
    for (offset, c) in text.char_indices().rev() {
        let char_width = c.width().unwrap_or(0);
        if width + char_width > budget {
            break;
        }
        width += char_width;
        start = offset;
    }

    let kept = &text[start..];
    (kept, text[..start].chars().count())
}
