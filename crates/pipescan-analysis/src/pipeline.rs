//! End-to-end scan driver.
//!
//! walk -> statistics -> parallel per-file analysis -> reduction -> summary.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use pipescan_core::config::PipescanConfig;
use pipescan_core::errors::PipelineError;
use rayon::prelude::*;

use crate::analysis::{aggregate, analyze_file, FileFailure, FileOutcome, FileReport};
use crate::catalog::{default_catalog_path, load_catalog, PatternCatalog};
use crate::report::{ProjectSummary, ScanMetadata};
use crate::scanner::{project_stats, read_text, resolve_project_root, FileRecord, Walker};

/// Progress is logged every this many files.
const PROGRESS_INTERVAL: usize = 10;

/// Scans one project with one immutable catalog.
pub struct MetadataScanner {
    root: PathBuf,
    config: PipescanConfig,
    catalog: PatternCatalog,
}

impl MetadataScanner {
    /// Resolve the project root and load the catalog.
    ///
    /// Fails only when the root is missing or not a directory. A catalog
    /// that cannot be loaded is replaced by an empty one.
    pub fn new(project_path: &Path, config: PipescanConfig) -> Result<Self, PipelineError> {
        let root = resolve_project_root(project_path)?;

        let catalog_path = config
            .catalog
            .path
            .clone()
            .unwrap_or_else(default_catalog_path);
        let loaded = load_catalog(&catalog_path);
        if !loaded.is_clean() {
            tracing::warn!(
                path = %catalog_path.display(),
                errors = loaded.error_count(),
                "catalog loaded with errors"
            );
        }

        tracing::info!("Initialized scanner for project: {}", root.display());
        Ok(Self {
            root,
            config,
            catalog: loaded.data,
        })
    }

    /// Use an already-built catalog instead of loading one.
    pub fn with_catalog(
        project_path: &Path,
        config: PipescanConfig,
        catalog: PatternCatalog,
    ) -> Result<Self, PipelineError> {
        let root = resolve_project_root(project_path)?;
        Ok(Self {
            root,
            config,
            catalog,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    /// Run the full scan. Per-file problems end up in the summary; nothing
    /// here aborts.
    pub fn scan(&self) -> ProjectSummary {
        let start = Instant::now();
        tracing::info!("Starting project scan...");

        tracing::info!("Discovering files...");
        let walked = Walker::new(&self.root, &self.config.scan).walk();
        if !walked.is_clean() {
            tracing::warn!("{} entries skipped during discovery", walked.error_count());
        }
        let records = walked.data;
        tracing::info!("Found {} files to analyze", records.len());

        let walk_stats = project_stats(&records);

        tracing::info!("Analyzing files for connectors and metadata...");
        let files = self.analyze_records(records);

        let aggregates = aggregate(&files, self.config.report.effective_top_imports());

        let scan_metadata = ScanMetadata {
            project_path: self.root.display().to_string(),
            project_name: self
                .root
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| self.root.display().to_string()),
            scan_timestamp: chrono::Local::now()
                .format("%Y-%m-%dT%H:%M:%S%.6f")
                .to_string(),
            analyzer_version: env!("CARGO_PKG_VERSION").to_string(),
        };

        tracing::info!(
            duration_ms = start.elapsed().as_millis() as u64,
            "Scan complete!"
        );
        ProjectSummary::build(scan_metadata, walk_stats, aggregates, files)
    }

    /// Analyze every record, in parallel, keeping input order. A record whose
    /// file cannot be read becomes an `error` entry.
    pub fn analyze_records(&self, records: Vec<FileRecord>) -> Vec<FileReport> {
        let total = records.len();
        let processed = AtomicUsize::new(0);

        let run = || {
            records
                .into_par_iter()
                .map(|record| {
                    let outcome = self.analyze_record(&record);
                    let done = processed.fetch_add(1, Ordering::Relaxed) + 1;
                    if done % PROGRESS_INTERVAL == 0 {
                        tracing::info!("Processed {done}/{total} files...");
                    }
                    FileReport { record, outcome }
                })
                .collect::<Vec<_>>()
        };

        let threads = self.config.scan.effective_threads();
        if threads == 0 {
            return run();
        }
        match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
            Ok(pool) => pool.install(run),
            Err(e) => {
                tracing::warn!("Could not build a {threads}-thread pool ({e}); using the global pool");
                run()
            }
        }
    }

    fn analyze_record(&self, record: &FileRecord) -> FileOutcome {
        match read_text(&record.absolute_path) {
            Ok(decoded) => {
                FileOutcome::Analyzed(analyze_file(&self.catalog, &record.extension, &decoded.text))
            }
            Err(e) => {
                tracing::error!("Error analyzing {}: {e}", record.relative_path);
                FileOutcome::Failed(FileFailure::new(e.to_string()))
            }
        }
    }
}
