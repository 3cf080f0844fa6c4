//! Error types for the tea catalog.

use crate::types::TeaId;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the store, locator, and writer layers.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The persisted content could not be decoded as a tea collection.
    #[error("Corrupt tea store {}: {reason}", .path.display())]
    CorruptStore { path: PathBuf, reason: String },

    /// Another tea already owns this name.
    #[error("Tea with name {name} already exists (id {existing_id})")]
    NameConflict { name: String, existing_id: TeaId },

    /// The id is already owned by a tea with a different name.
    #[error("Tea with id {id} already exists (name {existing_name})")]
    IdConflict { id: TeaId, existing_name: String },

    #[error("Failed to encode tea collection: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl StorageError {
    /// True for the two uniqueness violations.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            StorageError::NameConflict { .. } | StorageError::IdConflict { .. }
        )
    }
}

/// Errors surfaced at the application boundary (CLI, configuration, logging).
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Tea not found: {0}")]
    TeaNotFound(String),

    /// The orchestrator declined the write; the cause is in the log.
    #[error("Failed to save tea {0}")]
    SaveFailed(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
