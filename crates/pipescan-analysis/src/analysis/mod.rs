//! Analysis module - per-file records and the project-wide reduction

mod aggregate;
mod file_analyzer;
mod types;

pub use aggregate::{aggregate, Aggregates, ProjectAggregator, DEFAULT_TOP_IMPORTS};
pub use file_analyzer::{analyze_file, count_lines};
pub use types::{FileAnalysis, FileFailure, FileOutcome, FileReport, ERROR_FILE_TYPE};
