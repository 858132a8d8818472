//! YAML Loader module
//!
//! Parse pipeline definitions from YAML files.
//!
//! # Overview
//!
//! The loader module provides:
//! - `PipelineDefinition` - Declarative pipeline specification
//! - `JoinStrategy` - How result sets are matched
//! - YAML parsing with validation

mod parser;
mod types;

pub use parser::{load_pipeline, load_pipeline_from_str, validate_pipeline};
pub use types::{
    CountryDefinition, InputsDefinition, JoinStrategy, OutputDefinition, PipelineDefinition,
};
