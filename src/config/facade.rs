//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::TeashelfConfig;
use config::ConfigError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the global file, `teashelf.toml` in
    /// `local_dir`, and environment.
    pub fn load(local_dir: &Path) -> Result<TeashelfConfig, ConfigError> {
        MergeService::load(local_dir)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<TeashelfConfig, ConfigError> {
        MergeService::load_from_file(path)
    }
}
