//! Core types for the tea catalog.

use serde::{Deserialize, Serialize};

/// TeaId: numeric identifier assigned once and never changed
pub type TeaId = u64;

/// A single catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tea {
    /// Unique across the collection, immutable once assigned.
    pub id: TeaId,
    /// Unique across the collection, immutable by convention.
    pub name: String,
    /// Brewing notes, side effects, anything.
    #[serde(default)]
    pub description: String,
}

impl Tea {
    pub fn new(id: TeaId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Caller input for the orchestrator: a tea without an assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeaDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl TeaDraft {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Attach an id, producing a fully formed tea.
    pub fn with_id(self, id: TeaId) -> Tea {
        Tea {
            id,
            name: self.name,
            description: self.description,
        }
    }
}
