//! Pre-built path lists: one path per line, order preserved

use crate::error::ListingError;
use std::path::Path;
use tracing::debug;

/// Read a path list file.
///
/// Lines are trimmed of surrounding whitespace and empty lines dropped. The
/// order is kept exactly; grouping the list by directory is the caller's job.
pub fn read_path_list(path: &Path) -> Result<Vec<String>, ListingError> {
    let content = std::fs::read_to_string(path).map_err(|source| ListingError::ListFile {
        path: path.to_path_buf(),
        source,
    })?;
    let paths = parse_path_list(&content);
    debug!(list = %path.display(), file_count = paths.len(), "Read path list");
    Ok(paths)
}

/// Split path list text into trimmed, non-empty lines
pub fn parse_path_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
