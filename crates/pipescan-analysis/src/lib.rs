//! pipescan-analysis: pattern-recognition and aggregation engine.
//!
//! - Catalog: connector and file-type rules loaded from YAML
//! - Scanner: project walk, statistics, encoding-tolerant reads
//! - Classifier, connectors, imports, sql: per-file extraction
//! - Analysis: per-file records and the project-wide reduction
//! - Report: summary types, JSON writer, text report
//! - Pipeline: `MetadataScanner`, the end-to-end driver

pub mod analysis;
pub mod catalog;
pub mod classifier;
pub mod connectors;
pub mod imports;
pub mod pipeline;
pub mod report;
pub mod scanner;
pub mod sql;

pub use analysis::{analyze_file, FileAnalysis};
pub use catalog::PatternCatalog;
pub use pipeline::MetadataScanner;
pub use report::ProjectSummary;
