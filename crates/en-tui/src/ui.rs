//! Quick panel layout and rendering.
//!
//! # Layout Structure
//!
//! ```text
//! +-------------------- terminal ---------------------+
//! |      +---------- Models ----------+               |
//! |      | pos▌                       |               |
//! |      +----------------------------+               |
//! |      | ▸ post.js                  |               |
//! |      |   admin/post_meta.js       |               |
//! |      +----------------------------+               |
//! |       2/4  ↑↓ move  Enter open  Esc cancel        |
//! +---------------------------------------------------+
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Clear};

use crate::components::{ChoiceList, HintBar, QueryInput};
use crate::panel::QuickPanel;
use crate::theme::Theme;

const POPUP_WIDTH_PERCENT: u16 = 70;
const POPUP_HEIGHT_PERCENT: u16 = 60;

/// Renders the quick panel centered in the frame.
///
/// Records the list height in the panel state so page navigation moves by
/// what is on screen.
pub fn render(panel: &mut QuickPanel<'_>, frame: &mut Frame, theme: &Theme) {
    let popup = centered_rect(POPUP_WIDTH_PERCENT, POPUP_HEIGHT_PERCENT, frame.area());
    frame.render_widget(Clear, popup);

    let hint_height = u16::from(panel.show_hints());
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // Query
            Constraint::Min(3),              // Choices
            Constraint::Length(hint_height), // Hints
        ])
        .split(popup);

    let query = QueryInput::new(panel.title(), panel.query(), theme);
    frame.render_widget(&query, chunks[0]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style)
        .style(Style::default().bg(theme.bg));
    let list_area = block.inner(chunks[1]);
    frame.render_widget(block, chunks[1]);

    let mut list_state = panel.list_state.clone();
    frame.render_stateful_widget(&ChoiceList::new(panel, theme), list_area, &mut list_state);
    panel.list_state.visible_height = list_state.visible_height;

    if panel.show_hints() {
        let hints = HintBar::new(panel.visible_count(), panel.choices().len(), theme);
        frame.render_widget(&hints, chunks[2]);
    }
}

/// Creates a centered rectangle with the given percentage width and height.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
