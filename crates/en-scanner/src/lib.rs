//! Directory listing for ember-nav categories.
//!
//! The navigator never reads file contents; it only needs two kinds of
//! listing, both captured by the [`FileLister`] trait:
//!
//! - a recursive walk of a category directory, filtered by a filename regex
//! - a flat listing of the application root, for the root-file commands
//!
//! [`FileWalker`] is the filesystem implementation. Tests substitute their
//! own lister to run the navigation pipeline against fixed listings.
//!
//! # Architecture
//!
//! ```text
//! FileLister (trait)
//!     │
//!     └── FileWalker
//!             ├── collect_paths ── WalkBuilder (ignore crate)
//!             └── list_entries ─── std::fs::read_dir
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

mod error;
mod walker;

pub use error::ScanError;
pub use walker::{list_entries, DirectoryEntry, FileWalker};

use camino::{Utf8Path, Utf8PathBuf};
use regex::Regex;

/// Enumerates files for the navigator.
pub trait FileLister {
    /// Lists every file under `root` (recursively) whose file name matches
    /// `pattern`, in a stable order. A missing `root` lists as empty.
    fn list_files(&self, root: &Utf8Path, pattern: &Regex) -> Result<Vec<Utf8PathBuf>, ScanError>;

    /// Lists the entries directly inside `dir`, sorted by path.
    fn list_entries(&self, dir: &Utf8Path) -> Result<Vec<DirectoryEntry>, ScanError>;
}

impl FileLister for FileWalker {
    fn list_files(&self, root: &Utf8Path, pattern: &Regex) -> Result<Vec<Utf8PathBuf>, ScanError> {
        self.collect_paths(root, pattern)
    }

    fn list_entries(&self, dir: &Utf8Path) -> Result<Vec<DirectoryEntry>, ScanError> {
        walker::list_entries(dir)
    }
}
