//! Filesystem walker producing the ordered file path list

use crate::error::ListingError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::path::PathBuf;
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

/// Filesystem walker configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WalkerConfig {
    /// Whether to descend into symlinked directories (default: false)
    #[serde(default)]
    pub follow_symlinks: bool,
    /// Entry names to skip; matching directories are not descended
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
    /// Maximum depth to traverse (None = unlimited)
    #[serde(default)]
    pub max_depth: Option<usize>,
}

/// Filesystem walker
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    /// Walk the filesystem and collect every file path.
    pub fn walk(&self) -> Result<Vec<String>, ListingError> {
        self.walk_with(|_| {})
    }

    /// Walk the filesystem, reporting each file path as it is discovered.
    ///
    /// Within a directory, files come before subdirectories and siblings are
    /// ordered by name, so all files of one directory are contiguous and the
    /// order is stable between runs.
    pub fn walk_with<F>(&self, mut on_path: F) -> Result<Vec<String>, ListingError>
    where
        F: FnMut(&str),
    {
        let mut paths = Vec::new();

        let walker = WalkDir::new(&self.root)
            .follow_links(self.config.follow_symlinks)
            .max_depth(self.config.max_depth.unwrap_or(usize::MAX))
            .sort_by(files_first);

        let patterns = self.config.ignore_patterns.clone();
        let entries = walker
            .into_iter()
            .filter_entry(move |entry| entry.depth() == 0 || !is_ignored(entry, &patterns));

        for entry in entries {
            let entry = entry.map_err(|e| ListingError::Walk {
                root: self.root.clone(),
                message: e.to_string(),
            })?;

            if entry.depth() == 0 || !is_listed_file(&entry) {
                continue;
            }

            let path = entry.path().to_string_lossy().into_owned();
            trace!(path = %path, "Discovered file");
            on_path(&path);
            paths.push(path);
        }

        debug!(root = %self.root.display(), file_count = paths.len(), "Walked filesystem");
        Ok(paths)
    }
}

fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    let a_dir = a.file_type().is_dir();
    let b_dir = b.file_type().is_dir();
    a_dir
        .cmp(&b_dir)
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// Anything the walk does not descend into counts as a file, except a symlink
/// that resolves to a directory.
fn is_listed_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_dir() {
        return false;
    }
    if file_type.is_symlink() {
        return !entry.path().is_dir();
    }
    true
}

fn is_ignored(entry: &DirEntry, patterns: &[String]) -> bool {
    let name = entry.file_name().to_string_lossy();
    patterns.iter().any(|pattern| pattern.as_str() == name)
}
