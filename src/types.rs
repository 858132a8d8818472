//! Common types used throughout namsor-merge
//!
//! This module contains the merged classification record and the
//! type aliases shared by the decode, engine and output modules.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type (insertion ordered)
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// Calibrated probability, kept as the exact number token it was read as
pub type Probability = serde_json::Number;

// ============================================================================
// Stage
// ============================================================================

/// The three classification result sets produced upstream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Ethnicity,
    Nationality,
    Gender,
}

impl Stage {
    /// Name used in log lines and error messages
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Ethnicity => "ethnicity",
            Stage::Nationality => "nationality",
            Stage::Gender => "gender",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Person Record
// ============================================================================

/// One person's merged classification
///
/// Field declaration order is the serialized key order: ethnicity fields,
/// then nationality fields, then gender fields. Fields filled in by later
/// stages stay absent from the serialized form until they are merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: String,

    pub ethnicity: String,
    pub ethnicity_accuracy: Probability,
    pub alt_ethnicity: String,
    pub ethnicity_alt_accuracy: Probability,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_origin_accuracy: Option<Probability>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_origin_alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_full_name_alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_origin_alt_accuracy: Option<Probability>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender_accuracy: Option<Probability>,
}

/// Nationality fields merged into a record by the nationality stage
#[derive(Debug, Clone, PartialEq)]
pub struct Nationality {
    pub country_origin: String,
    pub country_full_name: String,
    pub accuracy: Probability,
    pub country_origin_alt: String,
    pub country_full_name_alt: String,
    pub alt_accuracy: Probability,
}

/// Gender fields merged into a record by the gender stage
#[derive(Debug, Clone, PartialEq)]
pub struct Gender {
    pub gender: String,
    pub accuracy: Probability,
}

impl PersonRecord {
    /// Merge nationality fields into this record
    pub fn set_nationality(&mut self, nationality: Nationality) {
        self.country_origin = Some(nationality.country_origin);
        self.country_full_name = Some(nationality.country_full_name);
        self.country_origin_accuracy = Some(nationality.accuracy);
        self.country_origin_alt = Some(nationality.country_origin_alt);
        self.country_full_name_alt = Some(nationality.country_full_name_alt);
        self.country_origin_alt_accuracy = Some(nationality.alt_accuracy);
    }

    /// Merge gender fields into this record
    pub fn set_gender(&mut self, gender: Gender) {
        self.gender = Some(gender.gender);
        self.gender_accuracy = Some(gender.accuracy);
    }

    /// Whether the nationality stage has populated this record
    pub fn has_nationality(&self) -> bool {
        self.country_origin.is_some()
    }

    /// Whether the gender stage has populated this record
    pub fn has_gender(&self) -> bool {
        self.gender.is_some()
    }

    /// Whether the record carries fields from every stage
    pub fn is_complete(&self) -> bool {
        self.has_nationality() && self.has_gender()
    }
}
