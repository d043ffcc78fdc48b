//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::ListingConfig;
use config::ConfigError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the global file, an optional explicit file, and environment.
    pub fn load(explicit: Option<&Path>) -> Result<ListingConfig, ConfigError> {
        MergeService::load(explicit)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<ListingConfig, ConfigError> {
        MergeService::load_from_file(path)
    }
}
