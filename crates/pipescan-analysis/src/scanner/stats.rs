//! Project statistics derived from walker records alone.

use pipescan_core::types::collections::{BTreeMap, BTreeSet};
use serde::{Deserialize, Serialize};

use super::types::FileRecord;

/// Size, extension and directory statistics for a set of files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WalkStats {
    pub total_files: usize,
    pub total_size_bytes: u64,
    /// Extension histogram
    pub file_types: BTreeMap<String, usize>,
    pub total_directories: usize,
    /// Distinct relative directories, sorted
    pub directories: Vec<String>,
}

pub fn project_stats(records: &[FileRecord]) -> WalkStats {
    let mut file_types: BTreeMap<String, usize> = BTreeMap::new();
    let mut directories: BTreeSet<&str> = BTreeSet::new();
    let mut total_size_bytes = 0u64;

    for record in records {
        total_size_bytes += record.size_bytes;
        *file_types.entry(record.extension.clone()).or_insert(0) += 1;
        directories.insert(&record.directory);
    }

    WalkStats {
        total_files: records.len(),
        total_size_bytes,
        file_types,
        total_directories: directories.len(),
        directories: directories.into_iter().map(str::to_string).collect(),
    }
}
