//! Scanner errors.

use std::path::PathBuf;

use super::error_code::{self, ErrorCode};

/// Errors that can occur while discovering or reading project files.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Project path does not exist: {path}")]
    ProjectNotFound { path: PathBuf },

    #[error("Project path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("IO error scanning {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },
}

impl ScanError {
    /// Classify an I/O failure on `path`, singling out permission problems.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::PermissionDenied {
            Self::PermissionDenied { path }
        } else {
            Self::IoError { path, source }
        }
    }
}

impl ErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ProjectNotFound { .. } | Self::NotADirectory { .. } => {
                error_code::PROJECT_NOT_FOUND
            }
            Self::PermissionDenied { .. } => error_code::PERMISSION_DENIED,
            Self::IoError { .. } => error_code::SCAN_ERROR,
        }
    }
}
