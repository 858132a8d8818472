//! # namsor-merge
//!
//! Merges partitioned NamSor classification results (ethnicity,
//! nationality, gender) into one classification per person, and writes
//! the result as a JSON document and a CSV table.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use namsor_merge::{engine::Pipeline, load_pipeline, Result};
//!
//! fn main() -> Result<()> {
//!     let definition = load_pipeline("pipeline.yaml")?;
//!     let summary = Pipeline::new(definition).run()?;
//!     println!("{} records", summary.records);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ethnicity files ──► seed ──► Classifications
//!                                   │
//! nationality files ──► merge (+ country names)
//!                                   │
//! gender files ─────► merge
//!                                   │
//!                     ┌─────────────┴─────────────┐
//!                     ▼                           ▼
//!            classifications.json        classifications.csv
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// YAML loader for pipeline definitions
pub mod loader;

/// Partition file decoders
pub mod decode;

/// Country code lookup
pub mod country;

/// Stage functions and pipeline orchestration
pub mod engine;

/// JSON/CSV output
pub mod output;

/// NamSor request body generation
pub mod template;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use loader::{load_pipeline, load_pipeline_from_str, PipelineDefinition};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
