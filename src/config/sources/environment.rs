//! Environment variable source: TEASHELF_* prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Add environment variable overlay to builder.
/// `TEASHELF__STORAGE__DATA_FILE=/x.json` sets `storage.data_file`.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix("TEASHELF")
            .separator("__")
            .try_parsing(true),
    );
    Ok(builder)
}
