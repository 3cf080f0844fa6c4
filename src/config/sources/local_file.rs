//! Local config file: `teashelf.toml` in the given directory, optional.

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File};
use std::path::Path;

pub const LOCAL_CONFIG_FILE: &str = "teashelf.toml";

pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    local_dir: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let path = local_dir.join(LOCAL_CONFIG_FILE);
    Ok(builder.add_source(File::from(path).required(false)))
}
