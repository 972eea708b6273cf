//! Theme and styling for the quick panel.
//!
//! # Example
//!
//! ```
//! use en_core::ColorScheme;
//! use en_tui::Theme;
//!
//! let theme = Theme::from_scheme(ColorScheme::Light);
//! assert_eq!(theme, Theme::light());
//! ```

use en_core::ColorScheme;
use ratatui::style::{Color, Modifier, Style};

/// Colors and styles used by the quick panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // =========================================================================
    // Base Colors
    // =========================================================================
    /// Primary foreground color.
    pub fg: Color,

    /// Background color of the panel.
    pub bg: Color,

    /// Dimmed/secondary text color.
    pub dimmed_fg: Color,

    /// Accent color for titles and the cursor.
    pub accent: Color,

    /// Color of query characters matched in a choice.
    pub match_fg: Color,

    // =========================================================================
    // Component Styles
    // =========================================================================
    /// Style for the panel border.
    pub border_style: Style,

    /// Style for the selected choice.
    pub highlight_style: Style,

    /// Style for the panel title.
    pub header_style: Style,

    /// Style for the key hint line.
    pub hint_bar_style: Style,
}

impl Theme {
    /// Creates a dark theme (light text on dark background).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            fg: Color::Rgb(220, 220, 220),
            bg: Color::Rgb(30, 30, 40),
            dimmed_fg: Color::Rgb(128, 128, 128),
            accent: Color::Rgb(100, 150, 255),
            match_fg: Color::Rgb(255, 200, 100),

            border_style: Style::default().fg(Color::Rgb(100, 150, 255)),
            highlight_style: Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(60, 60, 80))
                .add_modifier(Modifier::BOLD),
            header_style: Style::default()
                .fg(Color::Rgb(100, 150, 255))
                .add_modifier(Modifier::BOLD),
            hint_bar_style: Style::default()
                .fg(Color::Rgb(180, 180, 180))
                .bg(Color::Rgb(40, 40, 50)),
        }
    }

    /// Creates a light theme (dark text on light background).
    #[must_use]
    pub fn light() -> Self {
        Self {
            fg: Color::Rgb(30, 30, 30),
            bg: Color::Rgb(245, 245, 250),
            dimmed_fg: Color::Rgb(100, 100, 100),
            accent: Color::Rgb(50, 100, 200),
            match_fg: Color::Rgb(180, 90, 0),

            border_style: Style::default().fg(Color::Rgb(50, 100, 200)),
            highlight_style: Style::default()
                .fg(Color::Black)
                .bg(Color::Rgb(200, 200, 220))
                .add_modifier(Modifier::BOLD),
            header_style: Style::default()
                .fg(Color::Rgb(50, 100, 200))
                .add_modifier(Modifier::BOLD),
            hint_bar_style: Style::default()
                .fg(Color::Rgb(60, 60, 60))
                .bg(Color::Rgb(220, 220, 230)),
        }
    }

    /// Creates a theme from a [`ColorScheme`] configuration.
    ///
    /// [`ColorScheme::Auto`] uses the dark theme.
    #[must_use]
    pub fn from_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self::light(),
            ColorScheme::Dark | ColorScheme::Auto | _ => Self::dark(),
        }
    }

    /// Returns a style with the base foreground color.
    #[must_use]
    pub fn base_style(&self) -> Style {
        Style::default().fg(self.fg)
    }

    /// Returns a style for dimmed/secondary text.
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed_fg)
    }

    /// Returns a style for matched query characters.
    #[must_use]
    pub fn match_style(&self) -> Style {
        Style::default()
            .fg(self.match_fg)
            .add_modifier(Modifier::UNDERLINED)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
