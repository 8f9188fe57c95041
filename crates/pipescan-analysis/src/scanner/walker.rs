//! Project file walker
//!
//! Single-threaded walk with directory pruning; records are sorted by
//! relative path so downstream parallel analysis stays deterministic.

use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use pipescan_core::config::ScanConfig;
use pipescan_core::errors::{PipelineResult, ScanError};
use pipescan_core::types::collections::FxHashSet;
use walkdir::{DirEntry, WalkDir};

use super::types::FileRecord;

/// Canonicalize `path` and check it is an existing directory.
pub fn resolve_project_root(path: &Path) -> Result<PathBuf, ScanError> {
    let root = path.canonicalize().map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ScanError::ProjectNotFound {
            path: path.to_path_buf(),
        },
        _ => ScanError::from_io(path, e),
    })?;
    if !root.is_dir() {
        return Err(ScanError::NotADirectory { path: root });
    }
    Ok(root)
}

/// Discovers the supported files under a project root.
pub struct Walker {
    root: PathBuf,
    excluded_dirs: FxHashSet<String>,
    extensions: FxHashSet<String>,
    follow_symlinks: bool,
}

impl Walker {
    pub fn new(root: impl Into<PathBuf>, config: &ScanConfig) -> Self {
        Self {
            root: root.into(),
            excluded_dirs: config.effective_excluded_dirs().into_iter().collect(),
            extensions: config.effective_extensions().into_iter().collect(),
            follow_symlinks: config.effective_follow_symlinks(),
        }
    }

    /// Walk the tree. Entries that cannot be listed or stat'ed are logged,
    /// collected as errors, and skipped.
    pub fn walk(&self) -> PipelineResult<Vec<FileRecord>> {
        let mut result = PipelineResult::new(Vec::new());

        let entries = WalkDir::new(&self.root)
            .follow_links(self.follow_symlinks)
            .into_iter()
            .filter_entry(|e| !self.is_excluded_dir(e));

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| self.root.clone());
                    let err = match e.into_io_error() {
                        Some(io) => ScanError::from_io(path, io),
                        None => ScanError::IoError {
                            path,
                            source: std::io::Error::other("filesystem loop"),
                        },
                    };
                    tracing::warn!("Error processing entry: {err}");
                    result.add_error(err);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let Some(extension) = extension_of(entry.path()) else {
                continue;
            };
            if !self.extensions.contains(&extension) {
                continue;
            }

            match self.record_for(&entry, extension) {
                Ok(record) => result.data.push(record),
                Err(err) => {
                    tracing::warn!("Error processing file {}: {err}", entry.path().display());
                    result.add_error(err);
                }
            }
        }

        result
            .data
            .sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        result
    }

    fn is_excluded_dir(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| self.excluded_dirs.contains(name))
    }

    fn record_for(&self, entry: &DirEntry, extension: String) -> Result<FileRecord, ScanError> {
        let path = entry.path();
        let metadata = entry
            .metadata()
            .map_err(|e| match e.into_io_error() {
                Some(io) => ScanError::from_io(path, io),
                None => ScanError::IoError {
                    path: path.to_path_buf(),
                    source: std::io::Error::other("metadata unavailable"),
                },
            })?;

        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        let directory = match relative.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                parent.to_string_lossy().into_owned()
            }
            _ => ".".to_string(),
        };

        let modified_time = metadata
            .modified()
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0);

        Ok(FileRecord {
            absolute_path: path.to_path_buf(),
            relative_path: relative.to_string_lossy().into_owned(),
            filename: entry.file_name().to_string_lossy().into_owned(),
            extension,
            directory,
            size_bytes: metadata.len(),
            modified_time,
        })
    }
}

/// Lower-cased extension with leading dot. Dotfiles such as `.bashrc`
/// have no extension.
fn extension_of(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?;
    Some(format!(".{}", ext.to_lowercase()))
}
