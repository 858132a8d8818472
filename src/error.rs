//! Error types for namsor-merge
//!
//! This module defines the error hierarchy for the whole pipeline.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for namsor-merge
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse pipeline YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // ============================================================================
    // Input Errors
    // ============================================================================
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to decode '{path}': {message}")]
    Decode { path: String, message: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ============================================================================
    // Merge Errors
    // ============================================================================
    #[error("Duplicate id '{id}' in {stage} results")]
    DuplicateId { id: String, stage: String },

    #[error("Unknown id '{id}' in {stage} results (not present in ethnicity results)")]
    UnknownId { id: String, stage: String },

    #[error("{stage} results have {actual} entries, expected {expected}")]
    LengthMismatch {
        stage: String,
        expected: usize,
        actual: usize,
    },

    #[error("{stage} results are missing {} record(s): {}", .ids.len(), .ids.join(", "))]
    MissingEnrichment { stage: String, ids: Vec<String> },

    // ============================================================================
    // Output Errors
    // ============================================================================
    #[error("Output error: {message}")]
    Output { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a decode error for a file
    pub fn decode(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an output error
    pub fn output(message: impl Into<String>) -> Self {
        Self::Output {
            message: message.into(),
        }
    }

    /// Create an output error for a value that failed to serialize
    pub fn serialize(what: &str, source: serde_json::Error) -> Self {
        Self::output(format!("Failed to serialize {what}: {source}"))
    }

    /// Create a duplicate id error
    pub fn duplicate_id(id: impl Into<String>, stage: impl Into<String>) -> Self {
        Self::DuplicateId {
            id: id.into(),
            stage: stage.into(),
        }
    }

    /// Create an unknown id error
    pub fn unknown_id(id: impl Into<String>, stage: impl Into<String>) -> Self {
        Self::UnknownId {
            id: id.into(),
            stage: stage.into(),
        }
    }

    /// Check if this error was caused by inconsistent partition files
    /// rather than by configuration or I/O
    pub fn is_merge_error(&self) -> bool {
        matches!(
            self,
            Error::DuplicateId { .. }
                | Error::UnknownId { .. }
                | Error::LengthMismatch { .. }
                | Error::MissingEnrichment { .. }
        )
    }
}

/// Result type alias for namsor-merge
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
