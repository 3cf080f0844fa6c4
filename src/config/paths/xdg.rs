//! XDG Base Directory utilities for teashelf data and config.

use crate::error::ApiError;
use crate::store::file::DEFAULT_DATA_FILE;
use std::path::PathBuf;

const APP_DIR: &str = "teashelf";

/// Get XDG data home directory
///
/// Returns `$XDG_DATA_HOME` if set, otherwise defaults to `$HOME/.local/share`
/// Follows XDG Base Directory Specification
pub fn data_home() -> Option<PathBuf> {
    if let Ok(xdg_data_home) = std::env::var("XDG_DATA_HOME") {
        if !xdg_data_home.is_empty() {
            return Some(PathBuf::from(xdg_data_home));
        }
    }

    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".local").join("share"))
}

/// Get XDG config home directory
///
/// Returns `$XDG_CONFIG_HOME` if set, otherwise defaults to `$HOME/.config`
pub fn config_home() -> Option<PathBuf> {
    if let Ok(xdg_config_home) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg_config_home.is_empty() {
            return Some(PathBuf::from(xdg_config_home));
        }
    }

    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".config"))
}

/// Get the teashelf data directory
///
/// Returns `<data_home>/teashelf/`, falling back to the platform data
/// directory when neither `XDG_DATA_HOME` nor `HOME` is set.
pub fn data_dir() -> Result<PathBuf, ApiError> {
    if let Some(home) = data_home() {
        return Ok(home.join(APP_DIR));
    }

    let project_dirs = directories::ProjectDirs::from("", APP_DIR, APP_DIR).ok_or_else(|| {
        ApiError::ConfigError(
            "Could not determine data directory (XDG_DATA_HOME and HOME not set)".to_string(),
        )
    })?;
    Ok(project_dirs.data_dir().to_path_buf())
}

/// Default location of the tea collection: `<data_dir>/data.json`
pub fn default_data_file() -> Result<PathBuf, ApiError> {
    Ok(data_dir()?.join(DEFAULT_DATA_FILE))
}

/// Global config file path: `<config_home>/teashelf/config.toml`
pub fn global_config_path() -> Option<PathBuf> {
    config_home().map(|home| home.join(APP_DIR).join("config.toml"))
}
