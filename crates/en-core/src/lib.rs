//! Core types, settings, and naming-convention utilities for ember-nav.
//!
//! This crate provides the foundational pieces used across the workspace:
//!
//! - [`Category`] and the [`ExtensionGrammar`] each category lists with
//! - [`FileListing`], the ordered, duplicate-free quick-panel contents
//! - [`inflector`] for translating between singular and plural names
//! - Layered navigation settings ([`LayeredSettings`], [`SettingsLayer`])
//! - Terminal host configuration ([`Config`])
//! - Error types and `FxHashMap`/`FxHashSet` aliases

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod hash;
pub mod inflector;
pub mod settings;
pub mod types;

pub use config::{ColorScheme, Config, EditorConfig, TuiConfig};
pub use error::ConfigError;
pub use hash::{FxHashMap, FxHashSet};
pub use settings::{LayeredSettings, SettingsLayer, SettingsProvider, DEFAULT_SETTINGS};
pub use types::{Category, ExtensionGrammar, FileListing};
