//! The ordered contents of a quick panel.

use std::mem;

use camino::{Utf8Path, Utf8PathBuf};

use crate::hash::FxHashSet;

/// An ordered, duplicate-free sequence of candidate file paths.
///
/// A listing is created fresh for every command invocation from the
/// directory walk, rearranged in place (self-exclusion, promotion of related
/// files), presented once, then dropped.
///
/// # Examples
///
/// ```
/// use camino::{Utf8Path, Utf8PathBuf};
/// use en_core::FileListing;
///
/// let mut listing = FileListing::new([
///     Utf8PathBuf::from("app/models/comment.js"),
///     Utf8PathBuf::from("app/models/post.js"),
/// ]);
///
/// let promoted = listing.promote(|path| path.as_str().ends_with("post.js"));
/// assert_eq!(promoted, 1);
/// assert_eq!(listing.get(0), Some(Utf8Path::new("app/models/post.js")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileListing {
    entries: Vec<Utf8PathBuf>,
}

impl FileListing {
    /// Creates a listing, keeping the first occurrence of any repeated path.
    pub fn new(paths: impl IntoIterator<Item = Utf8PathBuf>) -> Self {
        let mut seen = FxHashSet::default();
        let entries = paths
            .into_iter()
            .filter(|path| seen.insert(path.clone()))
            .collect();
        Self { entries }
    }

    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the listing has no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Utf8Path> {
        self.entries.get(index).map(Utf8PathBuf::as_path)
    }

    /// Iterates over the entries in order.
    pub fn iter(&self) -> impl Iterator<Item = &Utf8Path> {
        self.entries.iter().map(Utf8PathBuf::as_path)
    }

    /// Removes `path` if present, leaving the order of the rest untouched.
    ///
    /// Returns `true` if an entry was removed.
    pub fn remove(&mut self, path: &Utf8Path) -> bool {
        match self.entries.iter().position(|entry| entry == path) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Keeps only the entries for which `keep` returns `true`.
    pub fn retain(&mut self, mut keep: impl FnMut(&Utf8Path) -> bool) {
        self.entries.retain(|entry| keep(entry));
    }

    /// Moves every entry accepted by `is_related` to the front.
    ///
    /// Promoted entries keep their relative order, and so do the entries
    /// left behind. Returns the number of promoted entries.
    pub fn promote(&mut self, mut is_related: impl FnMut(&Utf8Path) -> bool) -> usize {
        let (mut promoted, rest): (Vec<_>, Vec<_>) = mem::take(&mut self.entries)
            .into_iter()
            .partition(|entry| is_related(entry));
        let count = promoted.len();
        promoted.extend(rest);
        self.entries = promoted;
        count
    }

    /// Returns display labels relative to `root`.
    ///
    /// Entries outside `root` are shown in full.
    #[must_use]
    pub fn labels_relative_to(&self, root: &Utf8Path) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| {
                entry
                    .strip_prefix(root)
                    .map_or_else(|_| entry.to_string(), ToString::to_string)
            })
            .collect()
    }

    /// Returns display labels consisting of each entry's file name.
    #[must_use]
    pub fn file_name_labels(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| entry.file_name().unwrap_or(entry.as_str()).to_owned())
            .collect()
    }
}

impl FromIterator<Utf8PathBuf> for FileListing {
    fn from_iter<I: IntoIterator<Item = Utf8PathBuf>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a FileListing {
    type Item = &'a Utf8PathBuf;
    type IntoIter = std::slice::Iter<'a, Utf8PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(paths: &[&str]) -> FileListing {
        paths.iter().map(|p| Utf8PathBuf::from(*p)).collect()
    }

    fn as_strs(listing: &FileListing) -> Vec<&str> {
        listing.iter().map(Utf8Path::as_str).collect()
    }

    #[test]
    fn test_new_drops_duplicates() {
        let listing = listing(&["a.js", "b.js", "a.js"]);
        assert_eq!(as_strs(&listing), vec!["a.js", "b.js"]);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut listing = listing(&["a.js", "b.js", "c.js"]);
        assert!(listing.remove(Utf8Path::new("b.js")));
        assert!(!listing.remove(Utf8Path::new("b.js")));
        assert_eq!(as_strs(&listing), vec!["a.js", "c.js"]);
    }

    #[test]
    fn test_promote_is_stable() {
        let mut listing = listing(&["a.js", "x1.js", "b.js", "x2.js", "c.js"]);
        let count = listing.promote(|p| p.as_str().starts_with('x'));
        assert_eq!(count, 2);
        assert_eq!(
            as_strs(&listing),
            vec!["x1.js", "x2.js", "a.js", "b.js", "c.js"]
        );
    }

    #[test]
    fn test_promote_without_matches_is_identity() {
        let mut listing = listing(&["a.js", "b.js"]);
        assert_eq!(listing.promote(|_| false), 0);
        assert_eq!(as_strs(&listing), vec!["a.js", "b.js"]);
    }

    #[test]
    fn test_labels_relative_to() {
        let listing = listing(&["/p/app/models/post.js", "/p/app/models/admin/user.js", "/q/x.js"]);
        assert_eq!(
            listing.labels_relative_to(Utf8Path::new("/p/app/models")),
            vec!["post.js", "admin/user.js", "/q/x.js"]
        );
    }

    #[test]
    fn test_file_name_labels() {
        let listing = listing(&["/p/app/app.js", "/p/app/router.js"]);
        assert_eq!(listing.file_name_labels(), vec!["app.js", "router.js"]);
    }
}
