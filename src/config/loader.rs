//! ConfigLoader: composes sources and deserializes to AssertConfig.

use super::sources::{self, CONFIG_FILE_NAME};
use super::AssertConfig;
use crate::error::EvaluationError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from `./pathspect.toml` (if present) and the environment.
    /// Precedence: defaults (lowest) -> file -> environment (highest).
    pub fn load() -> Result<AssertConfig, EvaluationError> {
        Self::load_with_optional_file(Path::new(CONFIG_FILE_NAME), false)
    }

    /// Load configuration from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<AssertConfig, EvaluationError> {
        Self::load_with_optional_file(path, true)
    }

    fn load_with_optional_file(
        path: &Path,
        required: bool,
    ) -> Result<AssertConfig, EvaluationError> {
        let builder = sources::builder();
        let builder = sources::add_file(builder, path, required)?;
        let builder = sources::add_environment(builder)?;

        let config: AssertConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        tracing::debug!(
            charset = %config.default_charset,
            read_buffer_size = config.read_buffer_size,
            "Loaded assertion configuration"
        );
        Ok(config)
    }
}
