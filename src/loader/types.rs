//! Loader types
//!
//! Declarative pipeline definition types for YAML parsing.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ============================================================================
// Pipeline Definition
// ============================================================================

/// Top-level pipeline definition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PipelineDefinition {
    /// Pipeline name (used in log lines)
    pub name: String,
    /// Directory relative paths are resolved against
    #[serde(default)]
    pub base_dir: Option<PathBuf>,
    /// How nationality and gender results are matched to ethnicity results
    #[serde(default)]
    pub join: JoinStrategy,
    /// Partition files per result set
    pub inputs: InputsDefinition,
    /// Output file locations
    #[serde(default)]
    pub output: OutputDefinition,
    /// Country name lookup settings
    #[serde(default)]
    pub country: CountryDefinition,
}

impl PipelineDefinition {
    /// Resolve a configured path against `base_dir`
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Resolved ethnicity partition paths, in order
    pub fn ethnicity_paths(&self) -> Vec<PathBuf> {
        self.inputs.ethnicity.iter().map(|p| self.resolve(p)).collect()
    }

    /// Resolved nationality partition paths, in order
    pub fn nationality_paths(&self) -> Vec<PathBuf> {
        self.inputs
            .nationality
            .iter()
            .map(|p| self.resolve(p))
            .collect()
    }

    /// Resolved gender partition paths, in order
    pub fn gender_paths(&self) -> Vec<PathBuf> {
        self.inputs.gender.iter().map(|p| self.resolve(p)).collect()
    }

    /// Resolved document output path
    pub fn json_path(&self) -> PathBuf {
        self.resolve(&self.output.json)
    }

    /// Resolved tabular output path
    pub fn csv_path(&self) -> PathBuf {
        self.resolve(&self.output.csv)
    }
}

// ============================================================================
// Join Strategy
// ============================================================================

/// How later result sets are matched to the ethnicity records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinStrategy {
    /// Match entries by their `id` field
    #[default]
    Id,
    /// Match entries by position across the concatenated files
    Position,
}

impl std::fmt::Display for JoinStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JoinStrategy::Id => f.write_str("id"),
            JoinStrategy::Position => f.write_str("position"),
        }
    }
}

// ============================================================================
// Inputs / Outputs
// ============================================================================

/// Ordered partition file lists
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct InputsDefinition {
    pub ethnicity: Vec<PathBuf>,
    pub nationality: Vec<PathBuf>,
    pub gender: Vec<PathBuf>,
}

/// Output file locations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct OutputDefinition {
    /// Merged document (`{"classifications": [...]}`)
    #[serde(default = "default_json_output")]
    pub json: PathBuf,
    /// Merged table
    #[serde(default = "default_csv_output")]
    pub csv: PathBuf,
}

impl Default for OutputDefinition {
    fn default() -> Self {
        Self {
            json: default_json_output(),
            csv: default_csv_output(),
        }
    }
}

fn default_json_output() -> PathBuf {
    PathBuf::from("classifications.json")
}

fn default_csv_output() -> PathBuf {
    PathBuf::from("classifications.csv")
}

// ============================================================================
// Country Lookup
// ============================================================================

/// Country name lookup settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CountryDefinition {
    /// Display name written for codes the lookup does not know
    #[serde(default = "default_unknown_country")]
    pub unknown: String,
}

impl Default for CountryDefinition {
    fn default() -> Self {
        Self {
            unknown: default_unknown_country(),
        }
    }
}

fn default_unknown_country() -> String {
    crate::country::NOT_FOUND.to_string()
}
