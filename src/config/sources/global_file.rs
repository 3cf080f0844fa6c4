//! Global config file: `$XDG_CONFIG_HOME/teashelf/config.toml`, optional.

use crate::config::xdg;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File};

pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    match xdg::global_config_path() {
        Some(path) => Ok(builder.add_source(File::from(path).required(false))),
        None => {
            tracing::debug!("No config home available, skipping global config file");
            Ok(builder)
        }
    }
}
