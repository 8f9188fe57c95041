//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use pipescan_core::CliOverrides;

#[derive(Debug, Parser)]
#[command(name = "pipescan")]
#[command(version)]
#[command(
    about = "Analyze data engineering projects for metadata, connectors, and dependencies",
    long_about = None
)]
pub struct Cli {
    /// Path to the data engineering project to analyze
    #[arg(long)]
    pub project_path: PathBuf,

    /// Output JSON file path
    #[arg(long, default_value = "metadata_report.json")]
    pub output: PathBuf,

    /// Path to a custom connector patterns catalog
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Logging level (PIPESCAN_LOG overrides it)
    #[arg(
        long,
        default_value = "INFO",
        value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"]
    )]
    pub log_level: String,

    /// Print the summary report to the console
    #[arg(long)]
    pub print_summary: bool,

    /// Worker threads for file analysis (0 = one per core)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Number of most frequent imports kept in the report
    #[arg(long)]
    pub top_imports: Option<usize>,
}

impl Cli {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            catalog_path: self.config.clone(),
            scan_threads: self.threads,
            top_imports: self.top_imports,
        }
    }
}
