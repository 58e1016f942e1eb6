//! CLI argument parsing for buildstats

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for summary reports
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "buildstats")]
#[command(version)]
#[command(about = "Gather and summarize per-target build resource usage", long_about = None)]
pub struct Cli {
    /// Enable debug logging to stderr
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a build tree for *.timing files and aggregate them into one CSV
    Gather {
        /// Path of the aggregate CSV file to write
        output_file: PathBuf,

        /// Directory tree to scan for *.timing files
        #[arg(short = 'd', long = "base-dir", default_value = ".")]
        base_dir: PathBuf,

        /// Suppress per-file diagnostics for invalid timing files
        #[arg(short, long)]
        quiet: bool,
    },
    /// Summarize an aggregate build-stats CSV file
    Summarize {
        /// Aggregate CSV file produced by `gather`
        csv_file: PathBuf,

        /// Output format (text or json)
        #[arg(long = "format", value_enum, default_value = "text")]
        format: OutputFormat,
    },
}
