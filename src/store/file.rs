//! JSON file backed tea store.

use crate::error::StorageError;
use crate::store::TeaStore;
use crate::types::Tea;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Default file name for the tea collection.
pub const DEFAULT_DATA_FILE: &str = "data.json";

/// Stores the collection as a pretty-printed JSON array in a single file.
pub struct JsonFileTeaStore {
    path: PathBuf,
}

impl JsonFileTeaStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file the new content is staged in before the rename.
    fn staging_path(&self) -> PathBuf {
        let mut name: OsString = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn corrupt(&self, reason: impl ToString) -> StorageError {
        StorageError::CorruptStore {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }
}

impl TeaStore for JsonFileTeaStore {
    fn load_all(&self) -> Result<Vec<Tea>, StorageError> {
        if !self.path.try_exists()? {
            tracing::debug!("No tea store at {}, starting empty", self.path.display());
            return Ok(Vec::new());
        }

        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            // Not UTF-8, so it was never written by us.
            Err(e) if e.kind() == ErrorKind::InvalidData => return Err(self.corrupt(e)),
            Err(e) => return Err(StorageError::IoError(e)),
        };

        serde_json::from_str(&content).map_err(|e| self.corrupt(e))
    }

    fn replace_all(&self, teas: &[Tea]) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(teas)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let staging = self.staging_path();
        if let Err(e) = std::fs::write(&staging, content) {
            let _ = std::fs::remove_file(&staging);
            return Err(StorageError::IoError(e));
        }
        if let Err(e) = std::fs::rename(&staging, &self.path) {
            let _ = std::fs::remove_file(&staging);
            return Err(StorageError::IoError(e));
        }

        tracing::debug!("Wrote {} teas to {}", teas.len(), self.path.display());
        Ok(())
    }
}
