//! Hint bar component.
//!
//! Displays the match count and the panel's key bindings.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::Theme;

const HINTS: [(&str, &str); 3] = [("↑↓", "move"), ("Enter", "open"), ("Esc", "cancel")];

/// The hint line under the choice list.
pub struct HintBar<'a> {
    /// Number of choices matching the query.
    visible: usize,
    /// Number of choices.
    total: usize,
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> HintBar<'a> {
    /// Creates a new hint bar.
    #[must_use]
    pub const fn new(visible: usize, total: usize, theme: &'a Theme) -> Self {
        Self {
            visible,
            total,
            theme,
        }
    }

    /// Builds the hint line spans.
    fn build_line(&self) -> Line<'a> {
        let mut spans = vec![
            Span::styled(
                format!(" {}/{} ", self.visible, self.total),
                Style::default()
                    .fg(self.theme.bg)
                    .bg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
        ];

        for (key, label) in HINTS {
            spans.push(Span::styled(
                key,
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(format!(" {label}  "), self.theme.dimmed_style()));
        }

        Line::from(spans)
    }
}

impl Widget for &HintBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.build_line())
            .style(self.theme.hint_bar_style)
            .render(area, buf);
    }
}
