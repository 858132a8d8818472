//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Merge NamSor classification results
#[derive(Parser, Debug)]
#[command(name = "namsor-merge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Merge the partition files and write JSON and CSV outputs
    Run {
        /// Pipeline definition file (YAML)
        #[arg(short, long)]
        pipeline: PathBuf,

        /// Override the directory relative pipeline paths resolve against
        /// (itself relative to the current directory)
        #[arg(long)]
        base_dir: Option<PathBuf>,

        /// Override the JSON output path (relative to the current directory)
        #[arg(long)]
        json_out: Option<PathBuf>,

        /// Override the CSV output path (relative to the current directory)
        #[arg(long)]
        csv_out: Option<PathBuf>,
    },

    /// Validate a pipeline definition and check its input files exist
    Validate {
        /// Pipeline definition file (YAML)
        #[arg(short, long)]
        pipeline: PathBuf,
    },

    /// Build a NamSor request body from a CSV name list
    Template {
        /// CSV name list (header row, then `_,firstName,lastName` rows)
        #[arg(short, long)]
        input: PathBuf,

        /// Where to write the request JSON
        #[arg(short, long, default_value = "request_template.json")]
        output: PathBuf,
    },

    /// Print the short country name for each code
    Lookup {
        /// ISO 3166-1 alpha-2 or alpha-3 codes
        #[arg(required = true)]
        codes: Vec<String>,
    },
}
