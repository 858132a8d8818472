//! CLI module
//!
//! Command-line interface for running the merge.
//!
//! # Commands
//!
//! - `run` - Merge partition files and write JSON/CSV output
//! - `validate` - Check a pipeline definition and its inputs
//! - `template` - Build a NamSor request body from a CSV name list
//! - `lookup` - Print short country names for codes

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
