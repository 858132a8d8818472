//! Execution engine module
//!
//! Stage functions and pipeline orchestration.
//!
//! # Overview
//!
//! The engine module provides:
//! - `Classifications` - The master record list passed from stage to stage
//! - `seed_ethnicity` / `merge_nationality` / `merge_gender` - The stages
//! - `Pipeline` - Runs every stage in order and writes both outputs
//!
//! Stages run strictly in sequence: later stages match their entries
//! against the records seeded from the ethnicity results.

mod merge;
mod types;

pub use merge::{merge_gender, merge_nationality, seed_ethnicity};
pub use types::{Classifications, RunSummary};

use crate::country::{CountryNames, CountryTable};
use crate::decode::{read_partitions, EthnicityEntry, GenderEntry, NationalityEntry};
use crate::error::Result;
use crate::loader::PipelineDefinition;
use crate::output::{write_document, write_table};
use std::time::Instant;
use tracing::info;

/// Runs a pipeline definition end to end
pub struct Pipeline {
    /// Pipeline definition
    definition: PipelineDefinition,
    /// Country name lookup
    countries: Box<dyn CountryNames>,
}

impl Pipeline {
    /// Create a pipeline using the built-in country table
    pub fn new(definition: PipelineDefinition) -> Self {
        let countries = CountryTable::new().with_unknown(definition.country.unknown.clone());
        Self {
            definition,
            countries: Box::new(countries),
        }
    }

    /// Replace the country name lookup
    #[must_use]
    pub fn with_countries(mut self, countries: impl CountryNames + 'static) -> Self {
        self.countries = Box::new(countries);
        self
    }

    /// Get the pipeline definition
    pub fn definition(&self) -> &PipelineDefinition {
        &self.definition
    }

    /// Read and merge all three result sets without writing output
    pub fn merge(&self) -> Result<Classifications> {
        let def = &self.definition;

        info!("Combining ethnicity classifications...");
        let entries = read_partitions::<EthnicityEntry, _>(&def.ethnicity_paths())?;
        let classifications = seed_ethnicity(entries)?;

        info!("Combining nationality classifications...");
        let entries = read_partitions::<NationalityEntry, _>(&def.nationality_paths())?;
        let classifications =
            merge_nationality(classifications, entries, def.join, self.countries.as_ref())?;

        info!("Combining gender classifications...");
        let entries = read_partitions::<GenderEntry, _>(&def.gender_paths())?;
        merge_gender(classifications, entries, def.join)
    }

    /// Run every stage and write the document and table outputs
    pub fn run(&self) -> Result<RunSummary> {
        let start = Instant::now();
        let def = &self.definition;

        info!("Running pipeline '{}' ({} join)", def.name, def.join);
        let classifications = self.merge()?;

        let json_path = def.json_path();
        info!("Writing to JSON file");
        write_document(&json_path, classifications.records())?;

        let csv_path = def.csv_path();
        info!("Writing to CSV file");
        write_table(&csv_path, classifications.records())?;

        let summary = RunSummary {
            records: classifications.len(),
            ethnicity_files: def.inputs.ethnicity.len(),
            nationality_files: def.inputs.nationality.len(),
            gender_files: def.inputs.gender.len(),
            json_path,
            csv_path,
            elapsed: start.elapsed(),
        };

        info!(
            "Finished: {} records from {} files in {:?} ({}, {})",
            summary.records,
            summary.files_read(),
            summary.elapsed,
            summary.json_path.display(),
            summary.csv_path.display()
        );
        Ok(summary)
    }
}
