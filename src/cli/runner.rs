//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::country::{CountryNames, CountryTable};
use crate::engine::Pipeline;
use crate::error::{Error, Result, ResultExt};
use crate::loader::{load_pipeline, PipelineDefinition};
use crate::template::{build_request, write_request};
use std::path::{Path, PathBuf};
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Run {
                pipeline,
                base_dir,
                json_out,
                csv_out,
            } => self.run_pipeline(
                pipeline,
                base_dir.as_ref(),
                json_out.as_ref(),
                csv_out.as_ref(),
            ),
            Commands::Validate { pipeline } => self.validate(pipeline),
            Commands::Template { input, output } => self.template(input, output),
            Commands::Lookup { codes } => {
                self.lookup(codes);
                Ok(())
            }
        }
    }

    /// Load a pipeline definition, applying command-line overrides
    ///
    /// Override paths are taken relative to the current directory, not the
    /// pipeline file.
    fn load_definition(
        &self,
        path: &Path,
        base_dir: Option<&PathBuf>,
        json_out: Option<&PathBuf>,
        csv_out: Option<&PathBuf>,
    ) -> Result<PipelineDefinition> {
        let mut def = load_pipeline(path)?;
        if let Some(base_dir) = base_dir {
            def.base_dir = Some(std::path::absolute(base_dir)?);
        }
        if let Some(json_out) = json_out {
            def.output.json = std::path::absolute(json_out)?;
        }
        if let Some(csv_out) = csv_out {
            def.output.csv = std::path::absolute(csv_out)?;
        }
        crate::loader::validate_pipeline(&def)?;
        Ok(def)
    }

    /// Merge and write outputs
    fn run_pipeline(
        &self,
        path: &Path,
        base_dir: Option<&PathBuf>,
        json_out: Option<&PathBuf>,
        csv_out: Option<&PathBuf>,
    ) -> Result<()> {
        let def = self.load_definition(path, base_dir, json_out, csv_out)?;
        let name = def.name.clone();
        let summary = Pipeline::new(def)
            .run()
            .with_context(|| format!("Pipeline '{name}' failed"))?;
        println!(
            "Merged {} records -> {}, {}",
            summary.records,
            summary.json_path.display(),
            summary.csv_path.display()
        );
        Ok(())
    }

    /// Validate a pipeline definition and its inputs
    fn validate(&self, path: &Path) -> Result<()> {
        let def = self.load_definition(path, None, None, None)?;

        let missing: Vec<String> = def
            .ethnicity_paths()
            .into_iter()
            .chain(def.nationality_paths())
            .chain(def.gender_paths())
            .filter(|p| !p.is_file())
            .map(|p| p.display().to_string())
            .collect();

        if !missing.is_empty() {
            return Err(Error::config(format!(
                "Missing input files: {}",
                missing.join(", ")
            )));
        }

        println!("Pipeline '{}' is valid", def.name);
        println!("  join:        {}", def.join);
        println!("  ethnicity:   {} file(s)", def.inputs.ethnicity.len());
        println!("  nationality: {} file(s)", def.inputs.nationality.len());
        println!("  gender:      {} file(s)", def.inputs.gender.len());
        println!("  json output: {}", def.json_path().display());
        println!("  csv output:  {}", def.csv_path().display());
        Ok(())
    }

    /// Build a request template from a name list
    fn template(&self, input: &Path, output: &Path) -> Result<()> {
        info!("Parsing name list CSV...");
        let request = build_request(input)?;
        println!("{}", request.to_json()?);
        write_request(&request, output)?;
        info!(
            "Wrote {} names to {}",
            request.len(),
            output.display()
        );
        Ok(())
    }

    /// Print short country names
    fn lookup(&self, codes: &[String]) {
        let table = CountryTable::new();
        for code in codes {
            println!("{code}\t{}", table.short_name(code));
        }
    }
}
