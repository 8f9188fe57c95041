//! Per-file analysis types

use pipescan_core::types::collections::BTreeMap;
use serde::{Deserialize, Serialize};

use crate::connectors::ConnectorHit;
use crate::scanner::FileRecord;
use crate::sql::SqlObjects;

/// `file_type` of a file whose content could not be read.
pub const ERROR_FILE_TYPE: &str = "error";

/// Everything derived from one file's content. A pure value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileAnalysis {
    pub file_type: String,
    /// Non-blank lines that are not `#` comments
    pub lines_of_code: usize,
    pub total_lines: usize,
    pub connectors: BTreeMap<String, ConnectorHit>,
    pub imports: Vec<String>,
    pub sql_objects: SqlObjects,
    pub has_spark: bool,
    pub has_sql: bool,
}

/// Why a file produced no analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileFailure {
    /// Always [`ERROR_FILE_TYPE`]
    pub file_type: String,
    pub error: String,
}

impl FileFailure {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            file_type: ERROR_FILE_TYPE.to_string(),
            error: error.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileOutcome {
    Analyzed(FileAnalysis),
    Failed(FileFailure),
}

impl FileOutcome {
    pub fn analysis(&self) -> Option<&FileAnalysis> {
        match self {
            Self::Analyzed(analysis) => Some(analysis),
            Self::Failed(_) => None,
        }
    }

    pub fn file_type(&self) -> &str {
        match self {
            Self::Analyzed(analysis) => &analysis.file_type,
            Self::Failed(failure) => &failure.file_type,
        }
    }
}

/// One entry of the report's `files` list: walker fields merged with the
/// analysis or the failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileReport {
    #[serde(flatten)]
    pub record: FileRecord,
    #[serde(flatten)]
    pub outcome: FileOutcome,
}
