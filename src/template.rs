//! Request template generation
//!
//! Builds the `personalNames` request body for the NamSor batch endpoints
//! from a CSV name list. The CSV has one header row; the second and third
//! columns hold first and last names. Ids are assigned from 1 in row order.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// One name to classify
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestName {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

/// Batch request body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestTemplate {
    pub personal_names: Vec<RequestName>,
}

impl RequestTemplate {
    /// Number of names in the request
    pub fn len(&self) -> usize {
        self.personal_names.len()
    }

    /// Whether the request is empty
    pub fn is_empty(&self) -> bool {
        self.personal_names.is_empty()
    }

    /// Compact JSON body
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::serialize("request template", e))
    }
}

/// Build a request template from CSV data
///
/// `source` only labels errors.
pub fn build_request_from_reader<R: Read>(reader: R, source: &str) -> Result<RequestTemplate> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut personal_names = Vec::new();
    for (i, row) in csv_reader.records().enumerate() {
        let row = row?;
        let id = i + 1;
        let (Some(first_name), Some(last_name)) = (row.get(1), row.get(2)) else {
            return Err(Error::decode(
                source,
                format!(
                    "row {id} has {} column(s), expected at least 3",
                    row.len()
                ),
            ));
        };
        personal_names.push(RequestName {
            id: id.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        });
    }

    Ok(RequestTemplate { personal_names })
}

/// Build a request template from a CSV file
pub fn build_request(path: impl AsRef<Path>) -> Result<RequestTemplate> {
    let path = path.as_ref();
    let file = fs::File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::Io(e)
        }
    })?;

    let request = build_request_from_reader(file, &path.display().to_string())?;
    debug!("Read {} names from {}", request.len(), path.display());
    Ok(request)
}

/// Write a request template as compact JSON
pub fn write_request(request: &RequestTemplate, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, request.to_json()?)
        .map_err(|e| Error::output(format!("Failed to write '{}': {e}", path.display())))
}
