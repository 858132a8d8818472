//! Partition file schemas
//!
//! Each partition file is a NamSor batch response: a document with a
//! top-level `personalNames` array. Only the fields the merge needs are
//! declared; anything else in an entry is ignored.

use crate::types::{Probability, Stage};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A NamSor batch response document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartitionFile<T> {
    /// Classified names, in request order
    pub personal_names: Vec<T>,
}

/// Entry of an ethnicity (US race/ethnicity) partition file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EthnicityEntry {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub race_ethnicity: String,
    pub probability_calibrated: Probability,
    pub race_ethnicity_alt: String,
    pub probability_alt_calibrated: Probability,
}

/// Entry of a nationality (country of origin) partition file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NationalityEntry {
    pub id: String,
    pub country_origin: String,
    pub probability_calibrated: Probability,
    pub country_origin_alt: String,
    pub probability_alt_calibrated: Probability,
}

/// Entry of a gender partition file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenderEntry {
    pub id: String,
    pub likely_gender: String,
    pub probability_calibrated: Probability,
}

/// Trait implemented by every partition entry shape
pub trait PartitionEntry: DeserializeOwned {
    /// Result set this entry belongs to
    const STAGE: Stage;

    /// Upstream record id (the join key)
    fn id(&self) -> &str;
}

impl PartitionEntry for EthnicityEntry {
    const STAGE: Stage = Stage::Ethnicity;

    fn id(&self) -> &str {
        &self.id
    }
}

impl PartitionEntry for NationalityEntry {
    const STAGE: Stage = Stage::Nationality;

    fn id(&self) -> &str {
        &self.id
    }
}

impl PartitionEntry for GenderEntry {
    const STAGE: Stage = Stage::Gender;

    fn id(&self) -> &str {
        &self.id
    }
}
