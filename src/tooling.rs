//! Tooling & Integration Layer
//!
//! Provides the command-line surface over the tea catalog.

pub mod cli;

pub use cli::{Cli, CliContext, Commands};
