//! MergeService: orchestrates sources, applies merge policy, deserializes to TeashelfConfig.

use crate::config::sources::{environment, global_file, local_file};
use crate::config::TeashelfConfig;
use config::ConfigError;
use std::path::Path;

use super::builder_with_defaults;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Load config from standard sources.
    /// Precedence: global file (lowest) -> local file -> environment (highest).
    pub fn load(local_dir: &Path) -> Result<TeashelfConfig, ConfigError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = local_file::add_to_builder(builder, local_dir)?;
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Load config from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<TeashelfConfig, ConfigError> {
        use config::File;

        let builder = builder_with_defaults()?;
        let builder = builder.add_source(File::from(path).required(true));
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        config.try_deserialize()
    }
}
