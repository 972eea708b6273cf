//! Domain types for ember-nav.
//!
//! - [`category`] - File categories and their settings keys
//! - [`grammar`] - Script and template extension grammars
//! - [`listing`] - The ordered quick-panel contents
//!
//! All public types are re-exported here and at the crate root:
//!
//! ```
//! use en_core::{Category, ExtensionGrammar, FileListing};
//! ```

mod category;
pub mod grammar;
mod listing;

pub use category::{Category, ParseCategoryError};
pub use grammar::ExtensionGrammar;
pub use listing::FileListing;
