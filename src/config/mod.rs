//! Configuration
//!
//! Layered configuration for teashelf: built-in defaults, an optional global
//! file, an optional local file, then `TEASHELF__*` environment variables.

mod facade;
pub mod merge;
pub mod paths;
pub mod sources;
pub mod storage;

pub use facade::ConfigLoader;
pub use paths::xdg;
pub use storage::StorageConfig;

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Top-level teashelf configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeashelfConfig {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl TeashelfConfig {
    /// Render the effective configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String, ApiError> {
        toml::to_string_pretty(self)
            .map_err(|e| ApiError::ConfigError(format!("Failed to serialize config: {}", e)))
    }
}
