//! Scanner types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Descriptor of one discovered file. Created by the walker, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    pub absolute_path: PathBuf,
    /// Path relative to the project root
    pub relative_path: String,
    pub filename: String,
    /// Lower-cased, with leading dot
    pub extension: String,
    /// Parent directory relative to the root; `.` for top-level files
    pub directory: String,
    pub size_bytes: u64,
    /// Seconds since the Unix epoch
    pub modified_time: f64,
}
