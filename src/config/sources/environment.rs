//! Environment variable source: XML_LISTING__* prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

pub const ENV_PREFIX: &str = "XML_LISTING";

/// Add environment variable overlay to builder.
/// `XML_LISTING__FORMAT__ROOT_PREFIX=true` sets `format.root_prefix`.
/// `walk.ignore_patterns` is read as a comma-separated list.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("walk.ignore_patterns")
            .try_parsing(true),
    );
    Ok(builder)
}
