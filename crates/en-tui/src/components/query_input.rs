//! Query input component.
//!
//! Displays the panel title and the text typed so far.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::theme::Theme;

const PLACEHOLDER: &str = "Type to filter...";

/// The query input line, framed by a block carrying the panel title.
pub struct QueryInput<'a> {
    /// Panel title.
    title: &'a str,
    /// The query typed so far.
    text: &'a str,
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> QueryInput<'a> {
    /// Creates a new query input widget.
    #[must_use]
    pub const fn new(title: &'a str, text: &'a str, theme: &'a Theme) -> Self {
        Self { title, text, theme }
    }

    fn build_line(&self) -> Line<'a> {
        let cursor = Span::styled("▌", Style::default().fg(self.theme.accent));
        if self.text.is_empty() {
            Line::from(vec![
                Span::styled(
                    PLACEHOLDER,
                    self.theme.dimmed_style().add_modifier(Modifier::ITALIC),
                ),
                cursor,
            ])
        } else {
            Line::from(vec![
                Span::styled(self.text, self.theme.base_style()),
                cursor,
            ])
        }
    }
}

impl Widget for &QueryInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style)
            .title(Span::styled(format!(" {} ", self.title), self.theme.header_style))
            .style(Style::default().bg(self.theme.bg));

        Paragraph::new(self.build_line())
            .block(block)
            .render(area, buf);
    }
}
