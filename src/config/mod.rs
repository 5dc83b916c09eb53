//! Configuration
//!
//! Defaults for assertion handles, loaded through the `config` crate. Every field has
//! a serde default so a partial file or an empty environment is fine.

mod loader;
mod sources;

pub use loader::ConfigLoader;

use crate::charset::Charset;
use crate::error::EvaluationError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Settings shared by every `PathAssert` created from them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssertConfig {
    /// Charset label used to decode text when none is given (default: utf-8)
    #[serde(default = "default_charset")]
    pub default_charset: String,

    /// Chunk size used when streaming a file through a digest
    #[serde(default = "default_read_buffer_size")]
    pub read_buffer_size: usize,

    /// Entries shown in directory failure messages before truncating
    #[serde(default = "default_max_listed_entries")]
    pub max_listed_entries: usize,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_charset() -> String {
    "utf-8".to_string()
}

fn default_read_buffer_size() -> usize {
    8192
}

fn default_max_listed_entries() -> usize {
    20
}

impl Default for AssertConfig {
    fn default() -> Self {
        Self {
            default_charset: default_charset(),
            read_buffer_size: default_read_buffer_size(),
            max_listed_entries: default_max_listed_entries(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AssertConfig {
    /// Resolve `default_charset` to a charset.
    pub fn charset(&self) -> Result<Charset, EvaluationError> {
        Charset::for_label(&self.default_charset)
    }

    /// Check values that serde cannot reject on its own.
    pub fn validate(&self) -> Result<(), EvaluationError> {
        self.charset()?;
        if self.read_buffer_size == 0 {
            return Err(EvaluationError::ConfigError(
                "read_buffer_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
