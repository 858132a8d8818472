//! Output module
//!
//! Writes the merged classifications.
//!
//! # Overview
//!
//! This module provides utilities for:
//! - Writing the pretty-printed classification document (JSON)
//! - Reading a classification document back
//! - Writing the classification table (CSV)

mod document;
mod table;

pub use document::{document_to_string, read_document, write_document, ClassificationDocument};
pub use table::{records_to_rows, write_rows, write_table};

#[cfg(test)]
mod tests;
