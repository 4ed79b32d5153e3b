//! CLI module
//!
//! Command-line host for the connector.
//!
//! # Commands
//!
//! - `spec` - Print the connector specification and formula catalog
//! - `check` - Test connection to the API
//! - `run` - Run a formula or action once
//! - `sync` - Run a sync table, one step or following continuations

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
