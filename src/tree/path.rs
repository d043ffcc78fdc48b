//! String-level path helpers used by the tree-delta tracker.
//!
//! Paths are handled as plain strings split on a configured separator, so a
//! listing produced on one platform convention can be rebuilt on another.

use serde::{Deserialize, Serialize};

/// Separator and root-naming policy for path strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathStyle {
    /// Path component separator
    pub separator: char,
    /// Name the first opened directory `<sep><sep><segment>` instead of `<segment>`
    pub root_prefix: bool,
}

impl PathStyle {
    pub fn unix() -> Self {
        Self {
            separator: '/',
            root_prefix: false,
        }
    }

    pub fn windows() -> Self {
        Self {
            separator: '\\',
            root_prefix: false,
        }
    }

    pub fn with_root_prefix(mut self, root_prefix: bool) -> Self {
        self.root_prefix = root_prefix;
        self
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self::unix()
    }
}

/// Directory portion of `path`: everything before the last separator.
///
/// Trailing separators are stripped unless the head consists only of
/// separators (`/f.txt` yields `/`). A path without a separator yields `""`.
pub fn directory_of(path: &str, separator: char) -> &str {
    let head = match path.rfind(separator) {
        Some(index) => &path[..index + separator.len_utf8()],
        None => return "",
    };
    let trimmed = head.trim_end_matches(separator);
    if trimmed.is_empty() {
        head
    } else {
        trimmed
    }
}

/// Final component of `path` (text after the last separator)
pub fn base_name(path: &str, separator: char) -> &str {
    match path.rfind(separator) {
        Some(index) => &path[index + separator.len_utf8()..],
        None => path,
    }
}

/// Non-empty components of `path`
pub fn segments(path: &str, separator: char) -> Vec<&str> {
    path.split(separator).filter(|s| !s.is_empty()).collect()
}

/// Text before the first separator (`""` for `/usr/...`, `C:` for `C:\...`)
pub fn root_component(path: &str, separator: char) -> &str {
    path.split(separator).next().unwrap_or("")
}

/// Whether `prefix` is a prefix of `path` that ends on a component boundary.
pub fn is_bounded_prefix(prefix: &str, path: &str, separator: char) -> bool {
    if !path.starts_with(prefix) {
        return false;
    }
    prefix.ends_with(separator)
        || path.len() == prefix.len()
        || path[prefix.len()..].starts_with(separator)
}

/// Byte offset of the last separator, if any
pub fn last_separator(path: &str, separator: char) -> Option<usize> {
    path.rfind(separator)
}
