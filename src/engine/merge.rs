//! Stage functions
//!
//! Each stage takes the accumulator by value and hands it back merged.
//! A stage validates its whole result set against the accumulator before
//! touching any record, so a failed stage never leaves half-merged data.

use super::types::Classifications;
use crate::country::CountryNames;
use crate::decode::{EthnicityEntry, GenderEntry, NationalityEntry, PartitionEntry};
use crate::error::{Error, Result};
use crate::loader::JoinStrategy;
use crate::types::{Gender, Nationality, PersonRecord};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Seed the accumulator from ethnicity results
pub fn seed_ethnicity(entries: Vec<EthnicityEntry>) -> Result<Classifications> {
    let records = entries
        .into_iter()
        .map(|e| PersonRecord {
            id: e.id,
            first_name: e.first_name,
            last_name: e.last_name,
            ethnicity: e.race_ethnicity,
            ethnicity_accuracy: e.probability_calibrated,
            alt_ethnicity: e.race_ethnicity_alt,
            ethnicity_alt_accuracy: e.probability_alt_calibrated,
            country_origin: None,
            country_full_name: None,
            country_origin_accuracy: None,
            country_origin_alt: None,
            country_full_name_alt: None,
            country_origin_alt_accuracy: None,
            gender: None,
            gender_accuracy: None,
        })
        .collect();

    let classifications = Classifications::from_records(records)?;
    debug!("Seeded {} records", classifications.len());
    Ok(classifications)
}

/// Merge nationality results, deriving country display names
pub fn merge_nationality(
    classifications: Classifications,
    entries: Vec<NationalityEntry>,
    join: JoinStrategy,
    countries: &dyn CountryNames,
) -> Result<Classifications> {
    merge_stage(classifications, entries, join, |record, entry| {
        let country_full_name = countries.short_name(&entry.country_origin);
        let country_full_name_alt = countries.short_name(&entry.country_origin_alt);
        record.set_nationality(Nationality {
            country_origin: entry.country_origin,
            country_full_name,
            accuracy: entry.probability_calibrated,
            country_origin_alt: entry.country_origin_alt,
            country_full_name_alt,
            alt_accuracy: entry.probability_alt_calibrated,
        });
    })
}

/// Merge gender results
pub fn merge_gender(
    classifications: Classifications,
    entries: Vec<GenderEntry>,
    join: JoinStrategy,
) -> Result<Classifications> {
    merge_stage(classifications, entries, join, |record, entry| {
        record.set_gender(Gender {
            gender: entry.likely_gender,
            accuracy: entry.probability_calibrated,
        });
    })
}

/// Match every entry to a record, then apply `merge` to each pair
fn merge_stage<T, F>(
    mut classifications: Classifications,
    entries: Vec<T>,
    join: JoinStrategy,
    mut merge: F,
) -> Result<Classifications>
where
    T: PartitionEntry,
    F: FnMut(&mut PersonRecord, T),
{
    let targets = match join {
        JoinStrategy::Id => match_by_id(&classifications, &entries)?,
        JoinStrategy::Position => match_by_position(&classifications, &entries)?,
    };

    let records = classifications.records_mut();
    for (position, entry) in targets.into_iter().zip(entries) {
        merge(&mut records[position], entry);
    }

    debug!(
        "Merged {} {} entries ({} join)",
        classifications.len(),
        T::STAGE,
        join
    );
    Ok(classifications)
}

/// Resolve each entry's record position through its id
///
/// Every record must be matched exactly once.
fn match_by_id<T: PartitionEntry>(
    classifications: &Classifications,
    entries: &[T],
) -> Result<Vec<usize>> {
    let stage = T::STAGE.as_str();
    let mut seen = HashSet::with_capacity(entries.len());
    let mut targets = Vec::with_capacity(entries.len());

    for entry in entries {
        let id = entry.id();
        if !seen.insert(id) {
            return Err(Error::duplicate_id(id, stage));
        }
        let position = classifications
            .position(id)
            .ok_or_else(|| Error::unknown_id(id, stage))?;
        targets.push(position);
    }

    if seen.len() != classifications.len() {
        let ids: Vec<String> = classifications
            .iter()
            .filter(|r| !seen.contains(r.id.as_str()))
            .map(|r| r.id.clone())
            .collect();
        return Err(Error::MissingEnrichment {
            stage: stage.to_string(),
            ids,
        });
    }

    Ok(targets)
}

/// Pair entries with records by position
///
/// Counts must match exactly. Ids are not required to agree, but
/// disagreements are reported.
fn match_by_position<T: PartitionEntry>(
    classifications: &Classifications,
    entries: &[T],
) -> Result<Vec<usize>> {
    if entries.len() != classifications.len() {
        return Err(Error::LengthMismatch {
            stage: T::STAGE.to_string(),
            expected: classifications.len(),
            actual: entries.len(),
        });
    }

    let mismatched = classifications
        .iter()
        .zip(entries)
        .filter(|(record, entry)| record.id != entry.id())
        .count();
    if mismatched > 0 {
        warn!(
            "{} {} entries carry a different id than the record at their position",
            mismatched,
            T::STAGE
        );
    }

    Ok((0..entries.len()).collect())
}
