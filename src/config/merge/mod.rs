//! Merge policy: seed values for keys every source may override.

pub mod service;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Builder pre-loaded with logging defaults.
///
/// Storage has no seed: an unset `storage.data_file` means "use the XDG
/// default", which is resolved later.
pub(crate) fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("logging.enabled", true)?
        .set_default("logging.level", "warn")?
        .set_default("logging.format", "text")?
        .set_default("logging.output", "stderr")
}
