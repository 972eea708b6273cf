//! File categories of a convention-based Ember application.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::grammar::ExtensionGrammar;

/// The architectural role of a source file, decided by which configured
/// directory it lives under.
///
/// Each category maps to exactly one `{name}_location` settings key.
///
/// # Examples
///
/// ```
/// use en_core::{Category, ExtensionGrammar};
///
/// assert_eq!(Category::Models.settings_key(), "models_location");
/// assert_eq!(Category::Templates.grammar(), ExtensionGrammar::Template);
/// assert_eq!("adapters".parse::<Category>().ok(), Some(Category::Adapters));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Data models (`post.js`).
    Models,
    /// Controllers (`posts_controller.js`).
    Controllers,
    /// Views (`post_view.js`).
    Views,
    /// Handlebars templates (`post.handlebars`).
    Templates,
    /// Mixins.
    Mixins,
    /// Ember Data extensions.
    Data,
    /// Ember Data adapters.
    Adapters,
    /// Router states.
    States,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Models,
        Self::Controllers,
        Self::Views,
        Self::Templates,
        Self::Mixins,
        Self::Data,
        Self::Adapters,
        Self::States,
    ];

    /// Returns the lowercase name used in commands and settings keys.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Models => "models",
            Self::Controllers => "controllers",
            Self::Views => "views",
            Self::Templates => "templates",
            Self::Mixins => "mixins",
            Self::Data => "data",
            Self::Adapters => "adapters",
            Self::States => "states",
        }
    }

    /// Returns the settings key holding this category's path segments.
    #[inline]
    #[must_use]
    pub const fn settings_key(self) -> &'static str {
        match self {
            Self::Models => "models_location",
            Self::Controllers => "controllers_location",
            Self::Views => "views_location",
            Self::Templates => "templates_location",
            Self::Mixins => "mixins_location",
            Self::Data => "data_location",
            Self::Adapters => "adapters_location",
            Self::States => "states_location",
        }
    }

    /// Returns the extension grammar files of this category are written in.
    #[inline]
    #[must_use]
    pub const fn grammar(self) -> ExtensionGrammar {
        match self {
            Self::Templates => ExtensionGrammar::Template,
            _ => ExtensionGrammar::Script,
        }
    }

    /// Looks up a category by its lowercase name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown category name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category '{0}'")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseCategoryError(s.to_owned()))
    }
}
