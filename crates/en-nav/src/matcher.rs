//! Reordering a category listing around the currently open file.

use camino::Utf8Path;
use en_core::{Category, FileListing};
use tracing::{debug, trace};

use crate::error::NavError;
use crate::rules::CompiledRule;

/// The category whose files can point into the listed category.
#[derive(Debug, Clone, Copy)]
pub struct RelatedCategory<'a> {
    /// The related category.
    pub category: Category,
    /// Resolved directory of the related category.
    pub root: &'a Utf8Path,
    /// Rules from `category` into the listed category, in priority order.
    pub rules: &'a [CompiledRule],
}

/// Moves the files related to the open file to the top of a listing.
///
/// - If the open file belongs to the listed category, it is removed from the
///   listing and nothing else changes. A related directory nested inside the
///   listed one counts as the related category.
/// - If it belongs to the related category, each rule's matches move to the
///   front as a block, keeping their relative order. A later rule's block
///   lands in front of an earlier one.
/// - Otherwise the listing is returned as is.
#[derive(Debug, Clone, Copy)]
pub struct RelatedFileMatcher<'a> {
    listed: Category,
    listed_root: &'a Utf8Path,
    related: Option<RelatedCategory<'a>>,
}

impl<'a> RelatedFileMatcher<'a> {
    /// Creates a matcher for a listing of `listed` files under `listed_root`.
    #[must_use]
    pub const fn new(listed: Category, listed_root: &'a Utf8Path) -> Self {
        Self {
            listed,
            listed_root,
            related: None,
        }
    }

    /// Sets the related category.
    #[must_use]
    pub const fn with_related(mut self, related: RelatedCategory<'a>) -> Self {
        self.related = Some(related);
        self
    }

    /// Reorders `listing` for `current_file`.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::InvalidPattern`] if a counterpart pattern cannot
    /// be built.
    pub fn arrange(
        &self,
        current_file: Option<&Utf8Path>,
        mut listing: FileListing,
    ) -> Result<FileListing, NavError> {
        let Some(current) = current_file else {
            return Ok(listing);
        };

        // The most specific root decides: a related directory nested in the
        // listed one claims its own files.
        let related = self
            .related
            .filter(|related| current.starts_with(related.root));
        let in_nested_related = related.is_some_and(|related| {
            related.root != self.listed_root && related.root.starts_with(self.listed_root)
        });

        if current.starts_with(self.listed_root) && !in_nested_related {
            let removed = listing.remove(current);
            trace!(file = %current, removed, category = %self.listed, "Open file is in the listed category");
            return Ok(listing);
        }

        let Some(related) = related else {
            return Ok(listing);
        };

        for rule in related.rules {
            let Some(pattern) = rule.related_pattern(current, self.listed_root)? else {
                trace!(file = %current, from = %related.category, "No relation for rule");
                continue;
            };
            let promoted = listing.promote(|path| pattern.is_match(path.as_str()));
            debug!(
                file = %current,
                from = %related.category,
                to = %self.listed,
                promoted,
                "Promoted related files"
            );
        }

        Ok(listing)
    }
}
