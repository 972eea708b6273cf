//! Naming conventions that relate files across categories.
//!
//! A [`RelationRule`] describes how a file in one category (`from`) names
//! its counterparts in another (`to`):
//!
//! 1. the rule's extraction pattern pulls a base name out of the current
//!    file's name,
//! 2. the [`NameTransform`] turns it into the counterpart's base name,
//! 3. the counterpart pattern matches any file in the `to` category with
//!    that base name (optionally wrapped in the rule's prefix and suffix)
//!    and one of the category's extensions, in any subdirectory.
//!
//! | from        | to          | base name                            |
//! |-------------|-------------|--------------------------------------|
//! | controllers | models      | `selected_post_controller` → `post`  |
//! | models      | controllers | `post` → `posts_controller`          |
//! | templates   | views       | `post` → `post_view`                 |
//! | views       | templates   | `post_view` → `post`                 |
//!
//! Rules are compiled once per invocation into [`CompiledRule`]s.

use camino::Utf8Path;
use en_core::Category;
use en_core::inflector::{pluralize, singularize};
use regex::Regex;
use smallvec::SmallVec;

use crate::error::NavError;

/// Capture group holding the extracted base name.
const NAME_GROUP: &str = "name";

/// Controller names may carry one of these qualifiers before the model name.
const CONTROLLER_QUALIFIER: &str = "(?:(?:selected|current)_)?";

/// How an extracted base name becomes the counterpart's base name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameTransform {
    /// Use the name unchanged.
    Identity,
    /// Pluralize the last word.
    Pluralize,
    /// Singularize the last word.
    Singularize,
    /// Append the suffix unless the name already ends with it.
    AppendSuffix(&'static str),
}

impl NameTransform {
    /// Applies the transform to `name`.
    #[must_use]
    pub fn apply(self, name: &str) -> String {
        match self {
            Self::Identity => name.to_owned(),
            Self::Pluralize => pluralize(name),
            Self::Singularize => singularize(name),
            Self::AppendSuffix(suffix) if name.ends_with(suffix) => name.to_owned(),
            Self::AppendSuffix(suffix) => format!("{name}{suffix}"),
        }
    }
}

/// A naming convention from files in `from` to files in `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationRule {
    /// Category of the currently open file.
    pub from: Category,
    /// Category being listed.
    pub to: Category,
    /// Pattern applied to the current file's name. Must capture `name`.
    pub extract: &'static str,
    /// Turns the captured name into the counterpart's base name.
    pub transform: NameTransform,
    /// Optional-prefix pattern allowed before the counterpart's base name.
    pub target_prefix: &'static str,
    /// Optional-suffix pattern allowed after the counterpart's base name.
    pub target_suffix: &'static str,
}

/// Controllers to the model they manage.
pub const CONTROLLERS_TO_MODELS: &[RelationRule] = &[RelationRule {
    from: Category::Controllers,
    to: Category::Models,
    extract: r"^(?:(?:selected|current)_)?(?P<name>\w+)_controller\.[\w.]+$",
    transform: NameTransform::Singularize,
    target_prefix: "",
    target_suffix: "",
}];

/// Models to the controllers that manage them.
pub const MODELS_TO_CONTROLLERS: &[RelationRule] = &[RelationRule {
    from: Category::Models,
    to: Category::Controllers,
    extract: r"^(?P<name>\w+)\.[\w.]+$",
    transform: NameTransform::Pluralize,
    target_prefix: CONTROLLER_QUALIFIER,
    target_suffix: "_controller",
}];

/// Templates to the views that render them.
pub const TEMPLATES_TO_VIEWS: &[RelationRule] = &[RelationRule {
    from: Category::Templates,
    to: Category::Views,
    extract: r"^(?P<name>\w+)\.[\w.]+$",
    transform: NameTransform::AppendSuffix("_view"),
    target_prefix: "",
    target_suffix: "",
}];

/// Views to the templates they render.
pub const VIEWS_TO_TEMPLATES: &[RelationRule] = &[RelationRule {
    from: Category::Views,
    to: Category::Templates,
    extract: r"^(?P<name>\w+)_view\.[\w.]+$",
    transform: NameTransform::Identity,
    target_prefix: "",
    target_suffix: "(?:_view)?",
}];

impl RelationRule {
    /// Compiles the extraction pattern.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::InvalidPattern`] if the pattern is malformed.
    pub fn compile(&self) -> Result<CompiledRule, NavError> {
        let extract =
            Regex::new(self.extract).map_err(|e| NavError::invalid_pattern(self.extract, e))?;
        Ok(CompiledRule {
            rule: *self,
            extract,
        })
    }
}

/// Compiles every rule of a command.
///
/// # Errors
///
/// Returns the first compilation failure.
pub fn compile_all(rules: &[RelationRule]) -> Result<SmallVec<[CompiledRule; 2]>, NavError> {
    rules.iter().map(RelationRule::compile).collect()
}

/// A [`RelationRule`] with its extraction pattern compiled.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    rule: RelationRule,
    extract: Regex,
}

impl CompiledRule {
    /// Returns the underlying rule.
    #[must_use]
    pub const fn rule(&self) -> &RelationRule {
        &self.rule
    }

    /// Returns the counterpart base name for `current_file`, or `None` when
    /// the file does not follow the rule's naming convention.
    #[must_use]
    pub fn related_name(&self, current_file: &Utf8Path) -> Option<String> {
        let file_name = current_file.file_name()?;
        let captures = self.extract.captures(file_name)?;
        let name = captures.name(NAME_GROUP)?.as_str();
        Some(self.rule.transform.apply(name))
    }

    /// Builds the pattern matching counterparts named `name` anywhere under
    /// `target_root`.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::InvalidPattern`] if the assembled pattern is
    /// malformed.
    pub fn target_pattern(&self, target_root: &Utf8Path, name: &str) -> Result<Regex, NavError> {
        let root = target_root.as_str().trim_end_matches('/');
        let pattern = format!(
            r"^{root}/(?:.*/)?{prefix}{name}{suffix}\.{extensions}$",
            root = regex::escape(root),
            prefix = self.rule.target_prefix,
            name = regex::escape(name),
            suffix = self.rule.target_suffix,
            extensions = self.rule.to.grammar().extensions(),
        );
        Regex::new(&pattern).map_err(|e| NavError::invalid_pattern(pattern, e))
    }

    /// Runs both steps: extracts a name from `current_file` and builds the
    /// counterpart pattern under `target_root`.
    ///
    /// Returns `Ok(None)` when no name can be extracted.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::InvalidPattern`] if the counterpart pattern is
    /// malformed.
    pub fn related_pattern(
        &self,
        current_file: &Utf8Path,
        target_root: &Utf8Path,
    ) -> Result<Option<Regex>, NavError> {
        self.related_name(current_file)
            .map(|name| self.target_pattern(target_root, &name))
            .transpose()
    }
}
