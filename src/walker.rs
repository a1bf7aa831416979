//! Directory traversal with extension filtering
//!
//! Extensions are matched as file name suffixes, so `.spv` on its own and
//! `basic.vert.spv` both carry the `spv` extension.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use crate::error::{ToolError, ToolResult};

/// File filter for specific extensions
#[derive(Debug, Clone, Default)]
pub struct FileFilter {
    include: Vec<String>,
    exclude: Vec<String>,
}

impl FileFilter {
    /// Accept only files with one of the given extensions
    pub fn new<S: AsRef<str>>(extensions: &[S]) -> Self {
        Self {
            include: extensions.iter().map(|s| s.as_ref().to_string()).collect(),
            exclude: Vec::new(),
        }
    }

    /// Accept every file
    pub fn any() -> Self {
        Self::default()
    }

    /// Reject files with one of the given extensions
    pub fn excluding<S: AsRef<str>>(mut self, extensions: &[S]) -> Self {
        self.exclude
            .extend(extensions.iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Check if file passes filter
    pub fn matches(&self, path: &Path) -> bool {
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return self.include.is_empty(),
        };

        if self.exclude.iter().any(|e| has_extension(name, e)) {
            return false;
        }

        self.include.is_empty() || self.include.iter().any(|e| has_extension(name, e))
    }
}

fn has_extension(name: &str, extension: &str) -> bool {
    name.strip_suffix(extension)
        .map_or(false, |stem| stem.ends_with('.'))
}

/// Collect every file under `root` accepted by `filter`
///
/// Entries are visited in file name order so runs are reproducible.
/// Symlinks to files are included; symlinked directories are not entered.
/// Entries that cannot be read are logged and skipped.
pub fn collect_files(root: impl AsRef<Path>, filter: &FileFilter) -> ToolResult<Vec<PathBuf>> {
    let root = root.as_ref();
    if !root.exists() {
        return Err(ToolError::Walk {
            root: root.to_path_buf(),
            message: "no such file or directory".to_string(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                continue;
            }
        };

        // is_file() on the path follows symlinks
        if !entry.path().is_file() {
            continue;
        }

        let path = entry.into_path();
        if filter.matches(&path) {
            files.push(path);
        }
    }

    log::debug!("Found {} matching file(s) under {}", files.len(), root.display());
    Ok(files)
}
