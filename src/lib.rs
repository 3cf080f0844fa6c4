//! Teashelf: a tea catalog in a flat file
//!
//! Keeps a small collection of teas, each with a unique id and a unique name,
//! in a single JSON file. Lookups are by exact name; writes are upserts by id
//! that refuse to break either uniqueness constraint.

pub mod config;
pub mod error;
pub mod logging;
pub mod store;
pub mod tea;
pub mod tooling;
pub mod types;

pub use error::{ApiError, StorageError};
pub use store::{InMemoryTeaStore, JsonFileTeaStore, TeaStore};
pub use tea::{AddTeaOutcome, TeaCatalog, TeaWriter};
pub use types::{Tea, TeaDraft, TeaId};
