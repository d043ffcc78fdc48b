//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{ApiError, ListingError};
use owo_colors::OwoColorize;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    let hint = match e {
        ApiError::Listing(ListingError::NoCommonAncestor { .. }) => {
            Some("paths in a list file must share a root and be grouped by directory")
        }
        _ => None,
    };
    match hint {
        Some(hint) => format!("{} {}\n  {}", "error:".red().bold(), e, hint.dimmed()),
        None => format!("{} {}", "error:".red().bold(), e),
    }
}
