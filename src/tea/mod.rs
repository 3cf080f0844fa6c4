//! Tea Catalog
//!
//! Lookup, uniqueness-enforcing writes, and the create-or-update flow built
//! on top of them. Every operation starts from a fresh read of the store.

pub mod catalog;
pub mod id;
pub mod locator;
pub mod writer;

pub use catalog::{AddTeaOutcome, TeaCatalog};
pub use id::{assign_id, ClockIdGenerator, IdGenerator, SequenceIdGenerator};
pub use locator::{find_by_id, find_by_name};
pub use writer::{check_id_unique, check_name_unique, merge_candidate, TeaWriter};
