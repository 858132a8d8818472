//! Classification document writer
//!
//! `{"classifications": [...]}`, pretty-printed with two-space indentation.
//! Record keys keep their merge order.

use crate::error::{Error, Result};
use crate::types::PersonRecord;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Serialize)]
struct DocumentRef<'a> {
    classifications: &'a [PersonRecord],
}

/// A parsed classification document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationDocument {
    pub classifications: Vec<PersonRecord>,
}

/// Render records as a classification document
pub fn document_to_string(records: &[PersonRecord]) -> Result<String> {
    let document = DocumentRef {
        classifications: records,
    };
    serde_json::to_string_pretty(&document).map_err(|e| Error::serialize("classifications", e))
}

/// Write records to a classification document, returning the record count
pub fn write_document(path: impl AsRef<Path>, records: &[PersonRecord]) -> Result<usize> {
    let path = path.as_ref();
    let body = document_to_string(records)?;
    ensure_parent(path)?;
    fs::write(path, body).map_err(|e| {
        Error::output(format!("Failed to write '{}': {e}", path.display()))
    })?;

    debug!("Wrote {} records to {}", records.len(), path.display());
    Ok(records.len())
}

/// Read a classification document back
pub fn read_document(path: impl AsRef<Path>) -> Result<Vec<PersonRecord>> {
    let path = path.as_ref();
    let body = fs::read_to_string(path)?;
    let document: ClassificationDocument = serde_json::from_str(&body)
        .map_err(|e| Error::decode(path.display().to_string(), e.to_string()))?;
    Ok(document.classifications)
}

/// Create the parent directory of an output file if needed
pub(crate) fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|e| {
                Error::output(format!(
                    "Failed to create directory '{}': {e}",
                    parent.display()
                ))
            })
        }
        _ => Ok(()),
    }
}
