//! Merge rules: defaults, override order, conflict handling.

use crate::metadata::DEFAULT_TIMESTAMP_FORMAT;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("format.convention", "native")?
        .set_default("format.root_prefix", false)?
        .set_default("format.timestamp_format", DEFAULT_TIMESTAMP_FORMAT)?
        .set_default("walk.follow_symlinks", false)?
        .set_default("logging.level", "warn")
}
