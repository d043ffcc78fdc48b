//! Error types for the XML file listing builder.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while enumerating paths, reconstructing the tree, or writing
/// the finished document.
#[derive(Debug, Error)]
pub enum ListingError {
    #[error("Failed to walk {root:?}: {message}")]
    Walk { root: PathBuf, message: String },

    #[error("Failed to read path list {path:?}: {source}")]
    ListFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "No common ancestor between {previous:?} and {current:?}; \
         the path list is not grouped by directory"
    )]
    NoCommonAncestor { previous: String, current: String },

    #[error("Failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Build cancelled after {files_processed} files")]
    Cancelled { files_processed: u64 },
}

impl ListingError {
    /// Whether the caller may retry the failed operation unchanged.
    /// Only output failures qualify.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ListingError::Write { .. })
    }
}

/// Errors surfaced at the CLI and configuration boundary
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Listing(#[from] ListingError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Aborted: {0}")]
    Aborted(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
