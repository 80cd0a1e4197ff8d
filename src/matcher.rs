//! File discovery by extension.

use crate::error::{RestyleError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collects candidate files from a directory tree.
///
/// Discovery is recursive and matches on file extension only. The walk order
/// is whatever the filesystem enumerates; it is not sorted. Collecting is
/// side-effect-free, so a collection can be repeated without consequence.
#[derive(Debug, Clone)]
pub struct FileMatcher {
    extensions: Vec<String>,
}

impl FileMatcher {
    /// Creates a matcher for files with the given extension (without dot).
    pub fn new(ext: impl Into<String>) -> Self {
        Self {
            extensions: vec![ext.into()],
        }
    }

    /// Adds another extension to match.
    pub fn extension(mut self, ext: impl Into<String>) -> Self {
        self.extensions.push(ext.into());
        self
    }

    /// Collects all matching files under the given root directory.
    ///
    /// Fails up front if the root does not exist or is not a directory;
    /// nothing has been read or written at that point.
    pub fn collect(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.is_dir() {
            return Err(RestyleError::RootNotFound(root.to_path_buf()));
        }

        let mut matched = Vec::new();

        for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
            let path = entry.path();

            if !entry.file_type().is_file() {
                continue;
            }

            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            if !self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)) {
                continue;
            }

            matched.push(path.to_path_buf());
        }

        Ok(matched)
    }
}
