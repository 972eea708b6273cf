//! Configuration structures for the terminal host.
//!
//! Navigation settings (category locations, root segments) live in
//! [`settings`](crate::settings). This module covers how the terminal host
//! presents choices and opens files:
//!
//! - [`TuiConfig`] - Quick panel settings (colors)
//! - [`EditorConfig`] - External editor used to open the chosen file
//! - [`Config`] - Root configuration combining both
//!
//! All configuration types implement [`Default`].

use serde::{Deserialize, Serialize};

/// Color scheme for the quick panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ColorScheme {
    /// Automatically detect based on terminal settings.
    #[default]
    Auto,
    /// Light color scheme (dark text on light background).
    Light,
    /// Dark color scheme (light text on dark background).
    Dark,
}

/// Configuration for the quick panel.
///
/// # Examples
///
/// ```
/// use en_core::{TuiConfig, ColorScheme};
///
/// let config = TuiConfig::default();
/// assert_eq!(config.color_scheme, ColorScheme::Auto);
/// assert!(config.show_hints);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Color scheme for the interface.
    pub color_scheme: ColorScheme,

    /// Whether to show the key hint line under the list.
    pub show_hints: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            color_scheme: ColorScheme::Auto,
            show_hints: true,
        }
    }
}

/// Configuration for opening files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Editor command to use (overrides `$VISUAL`/`$EDITOR`).
    pub editor: Option<String>,
}

/// Root configuration for the terminal host.
///
/// # Examples
///
/// ```
/// use en_core::Config;
///
/// let config = Config::default();
/// assert!(config.editor.editor.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Quick panel configuration.
    pub tui: TuiConfig,

    /// Editor configuration.
    pub editor: EditorConfig,
}
