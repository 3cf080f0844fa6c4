//! Upsert orchestration: decides create vs. update and reports a plain outcome.

use crate::error::StorageError;
use crate::store::TeaStore;
use crate::tea::id::{assign_id, IdGenerator};
use crate::tea::locator::find_by_name;
use crate::tea::writer::TeaWriter;
use crate::types::{Tea, TeaDraft, TeaId};
use serde::Serialize;
use std::sync::Arc;

/// Result of `TeaCatalog::add_tea`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddTeaOutcome {
    pub success: bool,
    /// Id the tea was written under, when the write succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<TeaId>,
    /// True when no tea with this name existed before.
    pub created: bool,
}

impl AddTeaOutcome {
    fn failed() -> Self {
        Self {
            success: false,
            id: None,
            created: false,
        }
    }
}

/// Tea catalog facade over a store and an id source.
pub struct TeaCatalog {
    writer: TeaWriter,
    ids: Arc<dyn IdGenerator>,
}

impl TeaCatalog {
    pub fn new(store: Arc<dyn TeaStore>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            writer: TeaWriter::new(store),
            ids,
        }
    }

    pub fn writer(&self) -> &TeaWriter {
        &self.writer
    }

    /// Look up a tea by exact name against a fresh read of the store.
    pub fn get_tea_by_name(&self, name: &str) -> Result<Option<Tea>, StorageError> {
        let teas = self.writer.store().load_all()?;
        Ok(find_by_name(&teas, name).cloned())
    }

    /// Create a tea, or update the one that already carries this name.
    ///
    /// Never fails: any lookup or write error is logged and reported as
    /// `success: false`.
    pub fn add_tea(&self, draft: TeaDraft) -> AddTeaOutcome {
        let existing = match self.get_tea_by_name(&draft.name) {
            Ok(existing) => existing,
            Err(e) => {
                tracing::error!("Failed to look up tea {:?}: {}", draft.name, e);
                return AddTeaOutcome::failed();
            }
        };

        let created = existing.is_none();
        let id = assign_id(existing.as_ref(), self.ids.as_ref());
        let tea = draft.with_id(id);
        let name = tea.name.clone();

        match self.writer.upsert(tea) {
            Ok(()) => {
                tracing::info!(
                    tea_id = id,
                    created,
                    "{} tea {:?}",
                    if created { "Created" } else { "Updated" },
                    name
                );
                AddTeaOutcome {
                    success: true,
                    id: Some(id),
                    created,
                }
            }
            Err(e) => {
                if e.is_conflict() {
                    tracing::warn!(tea_id = id, "Rejected tea {:?}: {}", name, e);
                } else {
                    tracing::error!(tea_id = id, "Failed to save tea {:?}: {}", name, e);
                }
                AddTeaOutcome::failed()
            }
        }
    }
}
