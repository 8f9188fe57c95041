//! Pattern catalog errors.

use std::path::PathBuf;

use super::error_code::{self, ErrorCode};

/// Errors that can occur while loading the connector/file-type catalog.
///
/// None of these abort a scan: the loader logs them and falls back to an
/// empty catalog (or skips the offending pattern).
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog file not readable: {path}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Catalog parse error in {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("Invalid regex in connector {connector}: {pattern}: {message}")]
    InvalidPattern {
        connector: String,
        pattern: String,
        message: String,
    },
}

impl ErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidPattern { .. } => error_code::INVALID_PATTERN,
            _ => error_code::CATALOG_ERROR,
        }
    }
}
