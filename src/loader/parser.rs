//! YAML parser for pipeline definitions
//!
//! Parses and validates pipeline YAML files.

use crate::error::{Error, Result};
use crate::loader::types::PipelineDefinition;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Load a pipeline definition from a file path
///
/// When the file does not set `base_dir`, relative input and output paths
/// resolve against the directory holding the YAML file.
pub fn load_pipeline(path: impl AsRef<Path>) -> Result<PipelineDefinition> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::config(format!("Pipeline file '{}' not found", path.display()))
        } else {
            Error::config(format!(
                "Failed to read pipeline file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;

    let mut def = load_pipeline_from_str(&content)?;
    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
    def.base_dir = match (def.base_dir.take(), parent) {
        (Some(base), Some(parent)) if base.is_relative() => Some(parent.join(base)),
        (None, Some(parent)) => Some(parent.to_path_buf()),
        (base, _) => base,
    };
    Ok(def)
}

/// Load a pipeline definition from a YAML string
pub fn load_pipeline_from_str(yaml: &str) -> Result<PipelineDefinition> {
    let def: PipelineDefinition = serde_yaml::from_str(yaml)?;

    validate_pipeline(&def)?;
    Ok(def)
}

/// Validate a pipeline definition
pub fn validate_pipeline(def: &PipelineDefinition) -> Result<()> {
    if def.name.trim().is_empty() {
        return Err(Error::config("Pipeline name cannot be empty"));
    }

    validate_inputs("ethnicity", &def.inputs.ethnicity)?;
    validate_inputs("nationality", &def.inputs.nationality)?;
    validate_inputs("gender", &def.inputs.gender)?;

    if def.output.json.as_os_str().is_empty() || def.output.csv.as_os_str().is_empty() {
        return Err(Error::config("Output paths cannot be empty"));
    }

    if def.output.json == def.output.csv {
        return Err(Error::config(format!(
            "JSON and CSV outputs both point at '{}'",
            def.output.json.display()
        )));
    }

    let inputs: HashSet<PathBuf> = def
        .ethnicity_paths()
        .into_iter()
        .chain(def.nationality_paths())
        .chain(def.gender_paths())
        .collect();
    for output in [def.json_path(), def.csv_path()] {
        if inputs.contains(&output) {
            return Err(Error::config(format!(
                "Output '{}' would overwrite a partition file",
                output.display()
            )));
        }
    }

    Ok(())
}

/// Validate one ordered list of partition files
fn validate_inputs(stage: &str, paths: &[PathBuf]) -> Result<()> {
    if paths.is_empty() {
        return Err(Error::config(format!(
            "At least one {stage} partition file is required"
        )));
    }

    let mut seen = HashSet::new();
    for path in paths {
        if path.as_os_str().is_empty() {
            return Err(Error::config(format!(
                "Empty path in {stage} partition files"
            )));
        }
        if !seen.insert(path) {
            return Err(Error::config(format!(
                "Duplicate {stage} partition file: {}",
                path.display()
            )));
        }
    }

    Ok(())
}
