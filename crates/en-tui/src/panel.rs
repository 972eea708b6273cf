//! Quick panel state.
//!
//! [`QuickPanel`] owns everything the panel needs between frames: the
//! choices, the query typed so far and the list selection.
//!
//! # Architecture
//!
//! ```text
//! QuickPanel
//!  ├── title: &str
//!  ├── choices: &[String]
//!  ├── query: String
//!  ├── list_state: ChoiceListState   # selection, scroll, filtered indices
//!  └── show_hints: bool
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use en_nav::Selection;
use tracing::{debug, trace};

use crate::action::Action;
use crate::event::Event;
use crate::fuzzy;

/// Selection and scroll state for the choice list.
#[derive(Debug, Clone, Default)]
pub struct ChoiceListState {
    /// Currently selected display index (if any).
    pub selected: Option<usize>,

    /// Scroll offset for virtualized rendering.
    pub scroll_offset: usize,

    /// Indices of choices matching the query.
    /// If `None`, all choices are shown.
    filtered_indices: Option<Vec<usize>>,

    /// Height of the visible area (for page navigation).
    pub visible_height: usize,
}

impl ChoiceListState {
    /// Creates a state selecting the first of `total` choices.
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            selected: (total > 0).then_some(0),
            ..Self::default()
        }
    }

    /// Returns the number of visible choices.
    #[must_use]
    pub fn len(&self, total: usize) -> usize {
        self.filtered_indices.as_ref().map_or(total, Vec::len)
    }

    /// Returns `true` if no choice is visible.
    #[must_use]
    pub fn is_empty(&self, total: usize) -> bool {
        self.len(total) == 0
    }

    /// Moves selection to the next choice, wrapping at the end.
    pub fn select_next(&mut self, total: usize) {
        let len = self.len(total);
        if len == 0 {
            self.selected = None;
            return;
        }

        self.selected = Some(match self.selected {
            Some(i) if i + 1 < len => i + 1,
            Some(_) | None => 0,
        });

        self.ensure_visible();
    }

    /// Moves selection to the previous choice, wrapping at the start.
    pub fn select_previous(&mut self, total: usize) {
        let len = self.len(total);
        if len == 0 {
            self.selected = None;
            return;
        }

        self.selected = Some(match self.selected {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        });

        self.ensure_visible();
    }

    /// Moves selection to the first choice.
    pub fn select_first(&mut self, total: usize) {
        if self.is_empty(total) {
            self.selected = None;
        } else {
            self.selected = Some(0);
            self.scroll_offset = 0;
        }
    }

    /// Moves selection to the last choice.
    pub fn select_last(&mut self, total: usize) {
        let len = self.len(total);
        if len == 0 {
            self.selected = None;
        } else {
            self.selected = Some(len - 1);
            self.ensure_visible();
        }
    }

    /// Moves selection down by one page.
    pub fn page_down(&mut self, total: usize) {
        let len = self.len(total);
        if len == 0 {
            return;
        }

        let page_size = self.visible_height.max(1);
        self.selected = Some(match self.selected {
            Some(i) => (i + page_size).min(len - 1),
            None => page_size.min(len - 1),
        });

        self.ensure_visible();
    }

    /// Moves selection up by one page.
    pub fn page_up(&mut self, total: usize) {
        if self.is_empty(total) {
            return;
        }

        let page_size = self.visible_height.max(1);
        self.selected = Some(self.selected.map_or(0, |i| i.saturating_sub(page_size)));

        self.ensure_visible();
    }

    /// Sets the filtered indices and selects the first match.
    pub fn set_filter(&mut self, indices: Option<Vec<usize>>, total: usize) {
        self.filtered_indices = indices;
        self.selected = (!self.is_empty(total)).then_some(0);
        self.scroll_offset = 0;
    }

    /// Returns the choice index for a display index.
    #[must_use]
    pub fn actual_index(&self, display_index: usize) -> usize {
        self.filtered_indices
            .as_ref()
            .and_then(|indices| indices.get(display_index).copied())
            .unwrap_or(display_index)
    }

    /// Returns the filtered indices (or `None` if no filter).
    #[must_use]
    pub fn filtered_indices(&self) -> Option<&[usize]> {
        self.filtered_indices.as_deref()
    }

    /// Ensures the selected choice is visible.
    fn ensure_visible(&mut self) {
        let Some(selected) = self.selected else {
            return;
        };
        let height = self.visible_height.max(1);
        if selected < self.scroll_offset {
            self.scroll_offset = selected;
        } else if selected >= self.scroll_offset + height {
            self.scroll_offset = selected + 1 - height;
        }
    }
}

/// A fuzzy-filtered list of choices awaiting a pick.
#[derive(Debug, Clone)]
pub struct QuickPanel<'a> {
    title: &'a str,
    choices: &'a [String],
    query: String,
    /// Choice list widget state.
    pub list_state: ChoiceListState,
    show_hints: bool,
}

impl<'a> QuickPanel<'a> {
    /// Creates a panel over `choices`.
    #[must_use]
    pub fn new(title: &'a str, choices: &'a [String], show_hints: bool) -> Self {
        Self {
            title,
            choices,
            query: String::new(),
            list_state: ChoiceListState::new(choices.len()),
            show_hints,
        }
    }

    /// Returns the panel title.
    #[must_use]
    pub const fn title(&self) -> &str {
        self.title
    }

    /// Returns every choice, filtered or not.
    #[must_use]
    pub const fn choices(&self) -> &[String] {
        self.choices
    }

    /// Returns the query typed so far.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns whether the key hint line is shown.
    #[must_use]
    pub const fn show_hints(&self) -> bool {
        self.show_hints
    }

    /// Returns the number of choices matching the query.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.list_state.len(self.choices.len())
    }

    /// Returns the visible choices with their original indices.
    pub fn visible(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        (0..self.visible_count()).filter_map(|display| {
            let index = self.list_state.actual_index(display);
            self.choices.get(index).map(|choice| (index, choice.as_str()))
        })
    }

    /// Returns the original index of the selected choice.
    #[must_use]
    pub fn selected_choice(&self) -> Option<usize> {
        self.list_state
            .selected
            .map(|display| self.list_state.actual_index(display))
            .filter(|&index| index < self.choices.len())
    }

    /// Maps an input event to an action.
    #[must_use]
    pub fn handle_event(&self, event: &Event) -> Action {
        match event {
            Event::Key(key) => self.handle_key(*key),
            Event::Resize { .. } => Action::Render,
        }
    }

    /// Handles one input event. Returns the user's answer once the panel
    /// closes.
    pub fn step(&mut self, event: &Event) -> Option<Selection> {
        let action = self.handle_event(event);
        self.update(action)
    }

    /// Maps a key press to an action.
    #[must_use]
    pub fn handle_key(&self, key: KeyEvent) -> Action {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => Action::Cancel,
            KeyCode::Char('c') if ctrl => Action::Cancel,
            KeyCode::Enter => Action::Accept,
            KeyCode::Down | KeyCode::Tab => Action::NextItem,
            KeyCode::Up | KeyCode::BackTab => Action::PreviousItem,
            KeyCode::Char('n') if ctrl => Action::NextItem,
            KeyCode::Char('p') if ctrl => Action::PreviousItem,
            KeyCode::PageDown => Action::PageDown,
            KeyCode::PageUp => Action::PageUp,
            KeyCode::Home => Action::FirstItem,
            KeyCode::End => Action::LastItem,
            KeyCode::Backspace => Action::DeleteChar,
            KeyCode::Char('u') if ctrl => Action::ClearQuery,
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                Action::InsertChar(c)
            }
            _ => Action::None,
        }
    }

    /// Applies an action. Returns the user's answer once the panel closes.
    pub fn update(&mut self, action: Action) -> Option<Selection> {
        trace!(?action, "Panel update");
        let total = self.choices.len();

        match action {
            Action::NextItem => self.list_state.select_next(total),
            Action::PreviousItem => self.list_state.select_previous(total),
            Action::FirstItem => self.list_state.select_first(total),
            Action::LastItem => self.list_state.select_last(total),
            Action::PageDown => self.list_state.page_down(total),
            Action::PageUp => self.list_state.page_up(total),
            Action::InsertChar(c) => self.query.push(c),
            Action::DeleteChar => {
                self.query.pop();
            }
            Action::ClearQuery => self.query.clear(),
            Action::Accept => {
                // Nothing to accept while the query hides every choice
                let index = self.selected_choice()?;
                debug!(index, "Choice accepted");
                return Some(Selection::Chosen(index));
            }
            Action::Cancel => {
                debug!("Panel dismissed");
                return Some(Selection::Cancelled);
            }
            Action::Render | Action::None => {}
        }

        if action.modifies_query() {
            self.apply_query();
        }
        None
    }

    fn apply_query(&mut self) {
        let indices = if self.query.trim().is_empty() {
            None
        } else {
            Some(fuzzy::filter_indices(&self.query, self.choices))
        };
        self.list_state.set_filter(indices, self.choices.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choices() -> Vec<String> {
        ["post.js", "comment.js", "admin/user.js", "admin/post_meta.js"]
            .map(str::to_owned)
            .to_vec()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_list_state_navigation() {
        let mut state = ChoiceListState::new(0);
        state.visible_height = 10;

        state.select_next(0);
        assert!(state.selected.is_none());

        state.select_next(5);
        assert_eq!(state.selected, Some(0));

        state.select_next(5);
        assert_eq!(state.selected, Some(1));

        state.select_last(5);
        assert_eq!(state.selected, Some(4));

        state.select_next(5);
        assert_eq!(state.selected, Some(0));

        state.select_previous(5);
        assert_eq!(state.selected, Some(4));

        state.select_first(5);
        assert_eq!(state.selected, Some(0));
    }

    #[test]
    fn test_list_state_paging_scrolls() {
        let mut state = ChoiceListState::new(50);
        state.visible_height = 10;

        state.page_down(50);
        assert_eq!(state.selected, Some(10));
        assert_eq!(state.scroll_offset, 1);

        state.select_last(50);
        assert_eq!(state.scroll_offset, 40);

        state.page_up(50);
        assert_eq!(state.selected, Some(39));
        assert_eq!(state.scroll_offset, 39);

        state.select_first(50);
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_first_choice_is_preselected() {
        let choices = choices();
        let panel = QuickPanel::new("Models", &choices, true);
        assert_eq!(panel.selected_choice(), Some(0));

        let empty: Vec<String> = Vec::new();
        let panel = QuickPanel::new("Models", &empty, true);
        assert_eq!(panel.selected_choice(), None);
    }

    #[test]
    fn test_key_bindings() {
        let choices = choices();
        let panel = QuickPanel::new("Models", &choices, true);

        assert_eq!(panel.handle_key(key(KeyCode::Esc)), Action::Cancel);
        assert_eq!(panel.handle_key(ctrl('c')), Action::Cancel);
        assert_eq!(panel.handle_key(key(KeyCode::Enter)), Action::Accept);
        assert_eq!(panel.handle_key(key(KeyCode::Down)), Action::NextItem);
        assert_eq!(panel.handle_key(ctrl('n')), Action::NextItem);
        assert_eq!(panel.handle_key(ctrl('p')), Action::PreviousItem);
        assert_eq!(panel.handle_key(ctrl('u')), Action::ClearQuery);
        assert_eq!(panel.handle_key(key(KeyCode::Char('n'))), Action::InsertChar('n'));
        assert_eq!(panel.handle_key(key(KeyCode::F(5))), Action::None);
    }

    #[test]
    fn test_query_filters_and_maps_back() {
        let choices = choices();
        let mut panel = QuickPanel::new("Models", &choices, true);

        for c in "post".chars() {
            assert_eq!(panel.update(Action::InsertChar(c)), None);
        }
        let visible: Vec<_> = panel.visible().collect();
        assert_eq!(visible, vec![(0, "post.js"), (3, "admin/post_meta.js")]);

        panel.update(Action::NextItem);
        assert_eq!(panel.update(Action::Accept), Some(Selection::Chosen(3)));
    }

    #[test]
    fn test_deleting_query_restores_choices() {
        let choices = choices();
        let mut panel = QuickPanel::new("Models", &choices, true);

        panel.update(Action::InsertChar('u'));
        assert_eq!(panel.visible_count(), 1);

        panel.update(Action::DeleteChar);
        assert_eq!(panel.query(), "");
        assert_eq!(panel.visible_count(), 4);
        assert!(panel.list_state.filtered_indices().is_none());
    }

    #[test]
    fn test_accept_without_match_stays_open() {
        let choices = choices();
        let mut panel = QuickPanel::new("Models", &choices, true);

        panel.update(Action::InsertChar('z'));
        assert_eq!(panel.visible_count(), 0);
        assert_eq!(panel.update(Action::Accept), None);
        assert_eq!(panel.update(Action::Cancel), Some(Selection::Cancelled));
    }

    #[test]
    fn test_typing_then_enter_picks_match() {
        let choices = choices();
        let mut panel = QuickPanel::new("Models", &choices, true);

        let events = [
            Event::Key(key(KeyCode::Char('u'))),
            Event::Key(key(KeyCode::Char('s'))),
            Event::Key(key(KeyCode::Enter)),
        ];
        let answer = events.iter().find_map(|event| panel.step(event));
        assert_eq!(answer, Some(Selection::Chosen(2)));
    }

    #[test]
    fn test_resize_only_redraws() {
        let choices = choices();
        let panel = QuickPanel::new("Models", &choices, true);
        let action = panel.handle_event(&Event::Resize {
            width: 80,
            height: 24,
        });
        assert_eq!(action, Action::Render);
    }
}
