//! StorageConfig and data file resolution.

use crate::config::xdg;
use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Storage configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path to the tea collection file; `None` uses `$XDG_DATA_HOME/teashelf/data.json`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

impl StorageConfig {
    /// Resolve the data file to an actual filesystem location.
    pub fn resolve_data_file(&self) -> Result<PathBuf, ApiError> {
        match &self.data_file {
            Some(path) if !path.as_os_str().is_empty() => Ok(path.clone()),
            _ => xdg::default_data_file(),
        }
    }
}
