//! Directory traversal for category listings.
//!
//! This module provides [`FileWalker`], which uses the `ignore` crate to
//! walk a category directory and collect the files whose names match the
//! category's extension grammar.
//!
//! # Features
//!
//! - Respects `.gitignore` and `.ignore` patterns, skips hidden entries
//! - Prunes dependency and build output directories
//! - Yields paths sorted by name at every level, so listings are stable
//! - Converts paths to UTF-8 [`Utf8PathBuf`](camino::Utf8PathBuf)
//!
//! # Examples
//!
//! ```no_run
//! use camino::Utf8Path;
//! use en_scanner::FileWalker;
//! use regex::Regex;
//!
//! let pattern = Regex::new(r"\.js$")?;
//! let paths = FileWalker::new().collect_paths(Utf8Path::new("app/models"), &pattern)?;
//!
//! for path in &paths {
//!     println!("Found: {path}");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use ignore::WalkBuilder;
use regex::Regex;
use tracing::{debug, trace};

use crate::error::ScanError;

/// Default directories to skip during listing.
const SKIP_DIRECTORIES: &[&str] = &[
    "node_modules",
    "bower_components",
    "dist",
    "tmp",
    ".git",
];

/// An entry found directly inside a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Full path of the entry.
    pub path: Utf8PathBuf,
    /// Whether the entry is a regular file (symlinks followed).
    pub is_file: bool,
}

impl DirectoryEntry {
    /// Returns the entry's file name.
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.path.file_name().unwrap_or(self.path.as_str())
    }
}

/// A file walker that lists the files of a directory tree.
///
/// # Examples
///
/// ```
/// use en_scanner::FileWalker;
///
/// let walker = FileWalker::new()
///     .with_skip_dirs(&["vendor"])
///     .with_follow_links(true);
/// ```
#[derive(Debug, Clone)]
pub struct FileWalker {
    /// Additional directories to skip (beyond the defaults).
    skip_dirs: Vec<String>,
    /// Whether to follow symbolic links.
    follow_links: bool,
    /// Whether to apply `.gitignore` and hidden-file filters.
    standard_filters: bool,
}

impl Default for FileWalker {
    fn default() -> Self {
        Self::new()
    }
}

impl FileWalker {
    /// Creates a walker with the default filters.
    #[must_use]
    pub fn new() -> Self {
        Self {
            skip_dirs: Vec::new(),
            follow_links: false,
            standard_filters: true,
        }
    }

    /// Adds directories to skip during traversal.
    ///
    /// These are in addition to the default skip list (`node_modules`, `tmp`, etc.).
    #[must_use]
    pub fn with_skip_dirs(mut self, dirs: &[&str]) -> Self {
        self.skip_dirs.extend(dirs.iter().map(ToString::to_string));
        self
    }

    /// Configures whether to follow symbolic links. Off by default.
    #[must_use]
    pub const fn with_follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Configures whether `.gitignore` and hidden-file filters apply. On by default.
    #[must_use]
    pub const fn with_standard_filters(mut self, enabled: bool) -> Self {
        self.standard_filters = enabled;
        self
    }

    /// Collects every file under `root` whose file name matches `pattern`.
    ///
    /// A missing `root` yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Walk`] if directory traversal fails.
    /// Returns [`ScanError::NonUtf8Path`] if a non-UTF-8 path is encountered.
    pub fn collect_paths(
        &self,
        root: &Utf8Path,
        pattern: &Regex,
    ) -> Result<Vec<Utf8PathBuf>, ScanError> {
        if !root.is_dir() {
            debug!(root = %root, "Listing root is not a directory, nothing to list");
            return Ok(Vec::new());
        }

        let mut paths = Vec::new();

        for result in self.build_walker(root) {
            let entry = result?;

            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            let path = entry.path();
            let utf8_path =
                Utf8Path::from_path(path).ok_or_else(|| ScanError::NonUtf8Path(path.to_owned()))?;

            if !utf8_path
                .file_name()
                .is_some_and(|name| pattern.is_match(name))
            {
                trace!(path = %utf8_path, "Skipping file outside the grammar");
                continue;
            }

            paths.push(utf8_path.to_owned());
        }

        debug!(root = %root, count = paths.len(), "Collected files");
        Ok(paths)
    }

    /// Builds the ignore walker with configured settings.
    fn build_walker(&self, root: &Utf8Path) -> ignore::Walk {
        let skip_dirs = self.skip_dirs.clone();

        WalkBuilder::new(root)
            .standard_filters(self.standard_filters)
            .follow_links(self.follow_links)
            .require_git(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                entry.depth() == 0
                    || !entry.file_type().is_some_and(|ft| ft.is_dir())
                    || !entry
                        .file_name()
                        .to_str()
                        .is_some_and(|name| is_skipped_dir(name, &skip_dirs))
            })
            .build()
    }
}

/// Checks a directory name against the default and configured skip lists.
fn is_skipped_dir(name: &str, extra: &[String]) -> bool {
    SKIP_DIRECTORIES.contains(&name) || extra.iter().any(|d| d == name)
}

/// Lists the entries directly inside `dir`, sorted by path.
///
/// A missing `dir` yields an empty list.
///
/// # Errors
///
/// Returns [`ScanError::NotADirectory`] if `dir` is a file,
/// [`ScanError::Read`] if it cannot be read, and
/// [`ScanError::NonUtf8Path`] for non-UTF-8 entry names.
pub fn list_entries(dir: &Utf8Path) -> Result<Vec<DirectoryEntry>, ScanError> {
    if !dir.exists() {
        debug!(dir = %dir, "Directory does not exist, nothing to list");
        return Ok(Vec::new());
    }
    if !dir.is_dir() {
        return Err(ScanError::NotADirectory(dir.to_owned()));
    }

    let read_dir = std::fs::read_dir(dir).map_err(|e| ScanError::read(dir, e))?;

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| ScanError::read(dir, e))?;
        let path = Utf8PathBuf::from_path_buf(entry.path()).map_err(ScanError::NonUtf8Path)?;
        let is_file = path.is_file();
        entries.push(DirectoryEntry { path, is_file });
    }

    entries.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn fixture(files: &[&str]) -> (tempfile::TempDir, Utf8PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        for file in files {
            let path = root.join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, "").unwrap();
        }
        (dir, root)
    }

    fn relative(paths: &[Utf8PathBuf], root: &Utf8Path) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_is_skipped_dir() {
        let extra = vec!["vendor".to_owned()];
        assert!(is_skipped_dir("node_modules", &extra));
        assert!(is_skipped_dir("tmp", &extra));
        assert!(is_skipped_dir("vendor", &extra));
        assert!(!is_skipped_dir("models", &extra));
    }

    #[test]
    fn test_collect_paths_filters_and_sorts() {
        let (_dir, root) = fixture(&[
            "post.js",
            "comment.js.coffee",
            "admin/user.coffee",
            "notes.txt",
            "node_modules/lib.js",
        ]);
        let pattern = Regex::new(r"\.(?:js|(?:js\.)?coffee)$").unwrap();

        let paths = FileWalker::new().collect_paths(&root, &pattern).unwrap();
        assert_eq!(
            relative(&paths, &root),
            vec!["admin/user.coffee", "comment.js.coffee", "post.js"]
        );
    }

    #[test]
    fn test_collect_paths_missing_root_is_empty() {
        let (_dir, root) = fixture(&[]);
        let pattern = Regex::new(r"\.js$").unwrap();
        let paths = FileWalker::new()
            .collect_paths(&root.join("missing"), &pattern)
            .unwrap();
        assert!(paths.is_empty());
    }

    #[test]
    fn test_collect_paths_custom_skip_dirs() {
        let (_dir, root) = fixture(&["a.js", "vendor/b.js"]);
        let pattern = Regex::new(r"\.js$").unwrap();
        let paths = FileWalker::new()
            .with_skip_dirs(&["vendor"])
            .collect_paths(&root, &pattern)
            .unwrap();
        assert_eq!(relative(&paths, &root), vec!["a.js"]);
    }

    #[test]
    fn test_list_entries() {
        let (_dir, root) = fixture(&["router.js", "app.js", "models/post.js"]);
        let entries = list_entries(&root).unwrap();
        let names: Vec<_> = entries.iter().map(DirectoryEntry::file_name).collect();
        assert_eq!(names, vec!["app.js", "models", "router.js"]);
        assert!(entries[0].is_file);
        assert!(!entries[1].is_file);
    }

    #[test]
    fn test_list_entries_on_file_is_error() {
        let (_dir, root) = fixture(&["app.js"]);
        let err = list_entries(&root.join("app.js")).unwrap_err();
        assert!(matches!(err, ScanError::NotADirectory(_)));
    }

    #[test]
    fn test_hidden_files_need_filters_off() {
        let (_dir, root) = fixture(&["post.js", ".draft.js"]);
        let pattern = Regex::new(r"\.js$").unwrap();

        let paths = FileWalker::new().collect_paths(&root, &pattern).unwrap();
        assert_eq!(relative(&paths, &root), vec!["post.js"]);

        let paths = FileWalker::new()
            .with_standard_filters(false)
            .collect_paths(&root, &pattern)
            .unwrap();
        assert_eq!(relative(&paths, &root), vec![".draft.js", "post.js"]);
    }

    #[test]
    fn test_with_follow_links() {
        let walker = FileWalker::new().with_follow_links(true);
        assert!(walker.follow_links);
        assert!(walker.standard_filters);
    }
}
