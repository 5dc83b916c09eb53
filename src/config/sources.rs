//! Configuration sources: optional file and PATHSPECT__* environment overlay.

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Environment, File};
use std::path::Path;

/// File name looked up in the current directory by `ConfigLoader::load`.
pub const CONFIG_FILE_NAME: &str = "pathspect.toml";

pub fn builder() -> ConfigBuilder<DefaultState> {
    config::Config::builder()
}

/// Add a TOML file. Missing files are skipped unless `required`.
pub fn add_file(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
    required: bool,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(builder.add_source(File::from(path).required(required)))
}

/// Environment overlay. Uses PATHSPECT prefix and `__` as separator for nested keys,
/// e.g. `PATHSPECT__LOGGING__LEVEL=debug`.
pub fn add_environment(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(builder.add_source(
        Environment::with_prefix("PATHSPECT")
            .separator("__")
            .try_parsing(true),
    ))
}
