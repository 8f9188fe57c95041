//! Summary types. Field names are the JSON keys.

use pipescan_core::types::collections::BTreeMap;
use serde::{Deserialize, Serialize};

use crate::analysis::{Aggregates, FileReport};
use crate::scanner::WalkStats;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanMetadata {
    pub project_path: String,
    pub project_name: String,
    /// Local time, ISO-8601 with microseconds
    pub scan_timestamp: String,
    pub analyzer_version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectStatistics {
    pub total_files: usize,
    pub total_size_bytes: u64,
    pub file_types: BTreeMap<String, usize>,
    pub total_directories: usize,
    pub directories: Vec<String>,
    pub total_loc: usize,
    pub files_with_spark: usize,
    pub files_with_sql: usize,
}

impl ProjectStatistics {
    pub fn new(walk: WalkStats, aggregates: &Aggregates) -> Self {
        Self {
            total_files: walk.total_files,
            total_size_bytes: walk.total_size_bytes,
            file_types: walk.file_types,
            total_directories: walk.total_directories,
            directories: walk.directories,
            total_loc: aggregates.total_loc,
            files_with_spark: aggregates.files_with_spark,
            files_with_sql: aggregates.files_with_sql,
        }
    }
}

/// Project-wide usage of one connector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectorUsage {
    pub total_files: usize,
    pub total_instances: usize,
    /// Kind of the first file's hit
    #[serde(rename = "type")]
    pub kind: String,
    /// Relative paths, first-seen order
    pub files: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    pub total_unique_imports: usize,
    /// `(import, count)`, most frequent first
    pub top_imports: Vec<(String, usize)>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SqlObjectsSummary {
    pub total_tables: usize,
    pub total_views: usize,
    /// Sorted
    pub tables: Vec<String>,
    /// Sorted
    pub views: Vec<String>,
}

/// The terminal artifact of a scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub scan_metadata: ScanMetadata,
    pub project_statistics: ProjectStatistics,
    pub connector_summary: BTreeMap<String, ConnectorUsage>,
    pub import_summary: ImportSummary,
    pub sql_objects_summary: SqlObjectsSummary,
    pub files: Vec<FileReport>,
}

impl ProjectSummary {
    pub fn build(
        scan_metadata: ScanMetadata,
        walk: WalkStats,
        aggregates: Aggregates,
        files: Vec<FileReport>,
    ) -> Self {
        let project_statistics = ProjectStatistics::new(walk, &aggregates);
        Self {
            scan_metadata,
            project_statistics,
            connector_summary: aggregates.connector_summary,
            import_summary: aggregates.import_summary,
            sql_objects_summary: aggregates.sql_objects_summary,
            files,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
