//! Partition file readers
//!
//! Files are read whole, one at a time, and decoded against the entry
//! schema of their result set.

use super::types::{PartitionEntry, PartitionFile};
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Decode a partition document from a string
///
/// `source` only labels errors (usually the file path).
pub fn decode_partition<T: PartitionEntry>(body: &str, source: &str) -> Result<Vec<T>> {
    let file: PartitionFile<T> = serde_json::from_str(body)
        .map_err(|e| Error::decode(source, format!("invalid {} results: {e}", T::STAGE)))?;
    Ok(file.personal_names)
}

/// Read and decode a single partition file
pub fn read_partition<T: PartitionEntry>(path: impl AsRef<Path>) -> Result<Vec<T>> {
    let path = path.as_ref();
    let body = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::Io(e)
        }
    })?;

    let entries = decode_partition(&body, &path.display().to_string())?;
    debug!(
        "Read {} {} entries from {}",
        entries.len(),
        T::STAGE,
        path.display()
    );
    Ok(entries)
}

/// Read partition files in order and concatenate their entries
pub fn read_partitions<T, P>(paths: &[P]) -> Result<Vec<T>>
where
    T: PartitionEntry,
    P: AsRef<Path>,
{
    let mut entries = Vec::new();
    for path in paths {
        entries.extend(read_partition::<T>(path)?);
    }
    Ok(entries)
}
