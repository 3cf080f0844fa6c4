use crate::error::StorageError;
use crate::types::Tea;

/// Storage port for the tea collection.
///
/// Implementations hold no cache: `load_all` reflects whatever was last
/// written, by this process or any other.
pub trait TeaStore: Send + Sync {
    /// Load every stored tea in stored order. A store that was never written
    /// yields an empty collection.
    fn load_all(&self) -> Result<Vec<Tea>, StorageError>;

    /// Replace the entire stored collection with `teas`.
    fn replace_all(&self, teas: &[Tea]) -> Result<(), StorageError>;
}
