//! Uniqueness-enforcing writer.
//!
//! Validates a candidate tea against the freshly loaded collection, then
//! rewrites the whole collection with the candidate inserted or replaced by id.

use crate::error::StorageError;
use crate::store::TeaStore;
use crate::tea::locator::{find_by_id, find_by_name};
use crate::types::Tea;
use std::sync::Arc;

/// Fails with `NameConflict` when a different id already owns the candidate's name.
pub fn check_name_unique(teas: &[Tea], candidate: &Tea) -> Result<(), StorageError> {
    match find_by_name(teas, &candidate.name) {
        Some(existing) if existing.id != candidate.id => Err(StorageError::NameConflict {
            name: candidate.name.clone(),
            existing_id: existing.id,
        }),
        _ => Ok(()),
    }
}

/// Fails with `IdConflict` when the candidate's id belongs to a differently named tea.
pub fn check_id_unique(teas: &[Tea], candidate: &Tea) -> Result<(), StorageError> {
    match find_by_id(teas, candidate.id) {
        Some(existing) if existing.name != candidate.name => Err(StorageError::IdConflict {
            id: candidate.id,
            existing_name: existing.name.clone(),
        }),
        _ => Ok(()),
    }
}

/// Every tea with a different id in stored order, followed by `candidate`.
pub fn merge_candidate(teas: Vec<Tea>, candidate: Tea) -> Vec<Tea> {
    let mut merged: Vec<Tea> = teas.into_iter().filter(|tea| tea.id != candidate.id).collect();
    merged.push(candidate);
    merged
}

/// Writes teas through a `TeaStore`, enforcing id and name uniqueness.
///
/// There is no lock around read-validate-write: two writers racing on the
/// same store can lose an update. Safe only with a single writer.
#[derive(Clone)]
pub struct TeaWriter {
    store: Arc<dyn TeaStore>,
}

impl TeaWriter {
    pub fn new(store: Arc<dyn TeaStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn TeaStore> {
        &self.store
    }

    /// Insert `candidate`, or replace the stored tea with the same id.
    ///
    /// The store is untouched unless both uniqueness checks pass.
    pub fn upsert(&self, candidate: Tea) -> Result<(), StorageError> {
        let teas = self.store.load_all()?;

        check_name_unique(&teas, &candidate)?;
        check_id_unique(&teas, &candidate)?;

        let merged = merge_candidate(teas, candidate);
        self.store.replace_all(&merged)
    }
}
