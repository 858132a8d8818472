//! Engine types
//!
//! The merge accumulator and the summary of a completed run.

use crate::error::{Error, Result};
use crate::types::{PersonRecord, Stage};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

/// The master record list, threaded through every stage
///
/// Records keep ethnicity order. Ids are unique; the id index is built
/// once when the list is seeded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classifications {
    records: Vec<PersonRecord>,
    index: HashMap<String, usize>,
}

impl Classifications {
    /// Build the accumulator from seeded records, rejecting duplicate ids
    pub fn from_records(records: Vec<PersonRecord>) -> Result<Self> {
        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if index.insert(record.id.clone(), position).is_some() {
                return Err(Error::duplicate_id(&record.id, Stage::Ethnicity.as_str()));
            }
        }
        Ok(Self { records, index })
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether there are no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Position of the record with `id`
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Record with `id`
    pub fn get(&self, id: &str) -> Option<&PersonRecord> {
        self.position(id).map(|i| &self.records[i])
    }

    /// Records in ethnicity order
    pub fn records(&self) -> &[PersonRecord] {
        &self.records
    }

    pub(crate) fn records_mut(&mut self) -> &mut [PersonRecord] {
        &mut self.records
    }

    /// Consume the accumulator, returning the records
    pub fn into_records(self) -> Vec<PersonRecord> {
        self.records
    }

    /// Iterate over records
    pub fn iter(&self) -> std::slice::Iter<'_, PersonRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Classifications {
    type Item = &'a PersonRecord;
    type IntoIter = std::slice::Iter<'a, PersonRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Statistics for a finished pipeline run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Records written
    pub records: usize,
    /// Ethnicity partition files read
    pub ethnicity_files: usize,
    /// Nationality partition files read
    pub nationality_files: usize,
    /// Gender partition files read
    pub gender_files: usize,
    /// Document output location
    pub json_path: PathBuf,
    /// Tabular output location
    pub csv_path: PathBuf,
    /// Wall time of the run
    pub elapsed: Duration,
}

impl RunSummary {
    /// Total number of partition files read
    pub fn files_read(&self) -> usize {
        self.ethnicity_files + self.nationality_files + self.gender_files
    }
}
