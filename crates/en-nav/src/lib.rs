//! Related-file navigation for convention-based Ember projects.
//!
//! This crate runs the navigation commands of ember-nav: list the files of
//! one category (models, controllers, views, templates, ...) with the files
//! related to the currently open file moved to the top, then open the
//! user's pick.
//!
//! # Overview
//!
//! - [`COMMANDS`]: the command table, one [`CommandSpec`] per command
//! - [`RelationRule`]: naming conventions between categories
//! - [`RelatedFileMatcher`]: reorders a listing around the open file
//! - [`execute`]: runs a command against a [`Workspace`], a
//!   [`FileLister`](en_scanner::FileLister) and a [`SelectionUi`]
//!
//! # Example
//!
//! ```ignore
//! use en_nav::{CommandSpec, execute};
//! use en_scanner::FileWalker;
//!
//! let spec = CommandSpec::by_name("models").ok_or("unknown command")?;
//! let outcome = execute(spec, &workspace, &FileWalker::new(), &mut ui)?;
//! println!("{outcome:?}");
//! ```
//!
//! # Ordering
//!
//! When the open file belongs to the related category, each rule's matches
//! move to the front of the listing as one block, keeping their relative
//! order. Everything else keeps the lister's order. The open file never
//! appears in a listing of its own category.

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod command;
mod error;
pub mod host;
mod matcher;
pub mod pipeline;
pub mod resolver;
pub mod rules;

pub use command::{COMMANDS, CommandAction, CommandSpec};
pub use error::NavError;
pub use host::{Selection, SelectionUi, Workspace};
pub use matcher::{RelatedCategory, RelatedFileMatcher};
pub use pipeline::{Choices, InvocationContext, Outcome, Prepared, execute, prepare, present};
pub use rules::{CompiledRule, NameTransform, RelationRule};
