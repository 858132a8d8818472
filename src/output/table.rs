//! Classification table writer
//!
//! The header row is the key list of the first record; every row holds
//! that record's values in its own key order.

use super::document::ensure_parent;
use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue, PersonRecord};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::{debug, warn};

/// Convert records to ordered JSON objects
pub fn records_to_rows(records: &[PersonRecord]) -> Result<Vec<JsonObject>> {
    records
        .iter()
        .map(|record| {
            match serde_json::to_value(record).map_err(|e| Error::serialize("record", e))? {
                JsonValue::Object(map) => Ok(map),
                other => Err(Error::output(format!(
                    "Record serialized to a non-object value: {other}"
                ))),
            }
        })
        .collect()
}

/// Render a single cell
fn cell(value: &JsonValue) -> String {
    match value {
        JsonValue::Null => String::new(),
        JsonValue::String(s) => s.clone(),
        JsonValue::Number(n) => n.to_string(),
        JsonValue::Bool(b) => b.to_string(),
        nested => nested.to_string(),
    }
}

/// Write rows as CSV to any writer, returning the number of data rows
///
/// Writes nothing for an empty row set.
pub fn write_rows<W: Write>(writer: W, rows: &[JsonObject]) -> Result<usize> {
    let Some(first) = rows.first() else {
        return Ok(0);
    };

    let mut csv_writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(writer);

    let header: Vec<&String> = first.keys().collect();
    csv_writer.write_record(&header)?;

    for (i, row) in rows.iter().enumerate() {
        if row.len() != header.len() || !row.keys().zip(&header).all(|(a, b)| a == *b) {
            warn!(
                "Row {} has columns that differ from the header ({} vs {} keys)",
                i + 1,
                row.len(),
                header.len()
            );
        }
        csv_writer.write_record(row.values().map(cell))?;
    }

    csv_writer
        .flush()
        .map_err(|e| Error::output(format!("Failed to flush CSV output: {e}")))?;
    Ok(rows.len())
}

/// Write records to a CSV file, returning the number of data rows
pub fn write_table(path: impl AsRef<Path>, records: &[PersonRecord]) -> Result<usize> {
    let path = path.as_ref();
    let rows = records_to_rows(records)?;
    ensure_parent(path)?;

    let file = File::create(path)
        .map_err(|e| Error::output(format!("Failed to create '{}': {e}", path.display())))?;
    let written = write_rows(file, &rows)?;

    debug!("Wrote {} rows to {}", written, path.display());
    Ok(written)
}
