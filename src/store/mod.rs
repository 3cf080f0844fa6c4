//! Tea Store
//!
//! Whole-collection persistence for teas. Every operation reads the full
//! collection and every successful write replaces it wholesale.

pub mod contract;
pub mod file;
pub mod memory;

pub use contract::TeaStore;
pub use file::JsonFileTeaStore;
pub use memory::InMemoryTeaStore;
