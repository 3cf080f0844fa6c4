//! In-memory tea store for tests and embedding.

use crate::error::StorageError;
use crate::store::TeaStore;
use crate::types::Tea;
use parking_lot::RwLock;
use std::sync::Arc;

struct Stored {
    teas: Vec<Tea>,
    /// Number of successful `replace_all` calls.
    version: u64,
}

/// Vec-backed tea store. Clone-friendly via Arc; clones share contents.
#[derive(Clone)]
pub struct InMemoryTeaStore {
    inner: Arc<RwLock<Stored>>,
}

impl Default for InMemoryTeaStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryTeaStore {
    /// Create an empty store, equivalent to a never-written file.
    pub fn new() -> Self {
        Self::with_teas(Vec::new())
    }

    /// Create a store pre-seeded with `teas`. Seeding does not count as a write.
    pub fn with_teas(teas: Vec<Tea>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Stored { teas, version: 0 })),
        }
    }

    /// How many times the collection has been replaced.
    pub fn version(&self) -> u64 {
        self.inner.read().version
    }
}

impl TeaStore for InMemoryTeaStore {
    fn load_all(&self) -> Result<Vec<Tea>, StorageError> {
        Ok(self.inner.read().teas.clone())
    }

    fn replace_all(&self, teas: &[Tea]) -> Result<(), StorageError> {
        let mut stored = self.inner.write();
        stored.teas = teas.to_vec();
        stored.version += 1;
        Ok(())
    }
}
