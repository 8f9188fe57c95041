//! `pipescan` binary.

use std::process::ExitCode;

use clap::Parser;
use pipescan_analysis::report::{render_text_report, save_summary};
use pipescan_analysis::MetadataScanner;
use pipescan_core::errors::{ErrorCode, PipelineError};
use pipescan_core::tracing::init_tracing;
use pipescan_core::PipescanConfig;

mod cli;

use cli::Cli;

const RULE: &str = "================================================================================";

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    tracing::info!("{RULE}");
    tracing::info!("DATA ENGINEERING PROJECT ANALYZER");
    tracing::info!("{RULE}");

    match run(&cli) {
        Ok(()) => {
            tracing::info!("{RULE}");
            tracing::info!("Analysis complete!");
            tracing::info!("Results saved to: {}", cli.output.display());
            tracing::info!("{RULE}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Analysis failed: {}", e.coded_string());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), PipelineError> {
    let config = PipescanConfig::load(&cli.project_path, Some(&cli.overrides()))?;
    let top_tables = config.report.effective_top_tables();

    let scanner = MetadataScanner::new(&cli.project_path, config)?;
    let summary = scanner.scan();

    save_summary(&summary, &cli.output)?;

    if cli.print_summary {
        println!("{}", render_text_report(&summary, top_tables));
    }
    Ok(())
}
