//! Scanner configuration.

use serde::{Deserialize, Serialize};

/// Directory names never descended into.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    "__pycache__",
    ".git",
    ".svn",
    "node_modules",
    "venv",
    "env",
    ".venv",
    ".env",
    "dist",
    "build",
    ".idea",
    ".vscode",
    ".pytest_cache",
    ".mypy_cache",
    "htmlcov",
    "coverage",
];

/// File extensions (lower-cased, with leading dot) that are scanned.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    ".py",
    ".sql",
    ".ddl",
    ".dml",
    ".yaml",
    ".yml",
    ".json",
    ".conf",
    ".ini",
    ".properties",
    ".sh",
    ".bash",
    ".scala",
    ".r",
];

/// Configuration for file discovery and per-file analysis.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// Directory names to skip. Replaces the defaults when set.
    pub excluded_dirs: Option<Vec<String>>,
    /// Extensions to scan. Replaces the defaults when set.
    pub extensions: Option<Vec<String>>,
    /// Worker threads for per-file analysis (0 = auto).
    pub threads: Option<usize>,
    /// Follow symbolic links while walking. Default: false.
    pub follow_symlinks: Option<bool>,
}

impl ScanConfig {
    pub fn effective_excluded_dirs(&self) -> Vec<String> {
        match &self.excluded_dirs {
            Some(dirs) => dirs.clone(),
            None => DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Extensions, normalized to lower case.
    pub fn effective_extensions(&self) -> Vec<String> {
        match &self.extensions {
            Some(exts) => exts.iter().map(|e| e.to_lowercase()).collect(),
            None => DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or(0)
    }

    pub fn effective_follow_symlinks(&self) -> bool {
        self.follow_symlinks.unwrap_or(false)
    }
}
