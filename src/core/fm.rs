//! Directory traversal for heft.
//!
//! Provides the [FileEntry] struct which is used throughout heft, and [scan_dir]
//! which walks a tree and collects one entry per regular file.
//!
//! Symbolic links are never followed below the root: a link is reported as its own
//! entry by the walker and then skipped, since it is not a regular file.

use crate::error::ScanError;

use std::borrow::Cow;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::WalkDir;

/// A regular file found by the scan.
///
/// Holds the path as produced by the walk (rooted at the scan root) and the
/// size in bytes reported by the filesystem metadata at visit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    path: PathBuf,
    size: u64,
}

impl FileEntry {
    pub fn new(path: PathBuf, size: u64) -> Self {
        FileEntry { path, size }
    }

    // Accessors

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Final path component, or the whole path when it has none.
    #[inline]
    pub fn file_name(&self) -> &OsStr {
        self.path
            .file_name()
            .unwrap_or_else(|| self.path.as_os_str())
    }

    #[inline]
    pub fn name_str(&self) -> Cow<'_, str> {
        self.file_name().to_string_lossy()
    }

    /// Parent directory. Empty for a bare relative file name.
    #[inline]
    pub fn directory(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Joins [FileEntry::directory] and [FileEntry::file_name] back into a path.
    pub fn resolve(&self) -> PathBuf {
        self.directory().join(self.file_name())
    }
}

/// Walks `root` recursively and returns one [FileEntry] per regular file.
///
/// If `root` is itself a file, the result holds exactly that file.
///
/// # Errors
/// Returns the first [ScanError] hit by the walk (missing root, unreadable
/// directory, failed stat). Nothing collected before the failure is returned.
pub fn scan_dir(root: &Path) -> Result<Vec<FileEntry>, ScanError> {
    let started = Instant::now();
    tracing::debug!(root = %root.display(), "scan started");

    let mut entries = Vec::with_capacity(256);

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry?;

        if !entry.file_type().is_file() {
            continue;
        }

        let size = entry.metadata()?.len();
        entries.push(FileEntry::new(entry.into_path(), size));
    }

    tracing::info!(
        root = %root.display(),
        files = entries.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "scan finished"
    );
    Ok(entries)
}
