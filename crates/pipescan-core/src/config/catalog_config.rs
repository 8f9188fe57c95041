//! Pattern catalog location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where to load the connector pattern catalog from.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CatalogConfig {
    /// Explicit catalog path. Relative paths resolve against the scanned project root.
    pub path: Option<PathBuf>,
}
