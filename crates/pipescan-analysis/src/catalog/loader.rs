//! YAML catalog loading.
//!
//! Loading never fails outright. A missing or malformed document yields an
//! empty catalog; a malformed entry or regex is skipped. Every problem is
//! logged and returned alongside the catalog.

use std::path::{Path, PathBuf};

use pipescan_core::errors::{CatalogError, PipelineResult};
use regex::RegexBuilder;
use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use super::types::{ConnectionPattern, ConnectorSpec, FileTypeRoles, FileTypeSpec, PatternCatalog};

/// Default catalog location, relative to the executable's directory
/// (then to the working directory).
pub const DEFAULT_CATALOG_RELATIVE: &str = "config/connector_patterns.yaml";

/// Raw connector entry as written in YAML.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConnector {
    #[serde(rename = "type")]
    kind: Option<String>,
    keywords: Option<Vec<String>>,
    connection_patterns: Option<Vec<String>>,
}

/// Raw file-type entry as written in YAML.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawFileType {
    extensions: Option<Vec<String>>,
    keywords: Option<Vec<String>>,
}

/// Resolve the default catalog path: beside the executable if present there,
/// otherwise relative to the working directory.
pub fn default_catalog_path() -> PathBuf {
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            let candidate = dir.join(DEFAULT_CATALOG_RELATIVE);
            if candidate.is_file() {
                return candidate;
            }
        }
    }
    PathBuf::from(DEFAULT_CATALOG_RELATIVE)
}

/// Load the catalog at `path`.
pub fn load_catalog(path: &Path) -> PipelineResult<PatternCatalog> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(source) => {
            let err = CatalogError::Unreadable {
                path: path.to_path_buf(),
                source,
            };
            tracing::error!("Failed to load config: {err}");
            let mut result = PipelineResult::new(PatternCatalog::empty());
            result.add_error(err);
            return result;
        }
    };

    let result = parse_catalog(&content, path);
    tracing::info!(
        "Loaded {} connector patterns",
        result.data.connector_count()
    );
    result
}

/// Parse a catalog document. `origin` is only used in error messages.
pub fn parse_catalog(yaml: &str, origin: &Path) -> PipelineResult<PatternCatalog> {
    let mut result = PipelineResult::new(PatternCatalog::empty());

    let document: Value = match serde_yaml::from_str(yaml) {
        Ok(doc) => doc,
        Err(e) => {
            let err = CatalogError::ParseError {
                path: origin.to_path_buf(),
                message: e.to_string(),
            };
            tracing::error!("Failed to load config: {err}");
            result.add_error(err);
            return result;
        }
    };

    let root = match document {
        Value::Mapping(map) => map,
        Value::Null => return result,
        _ => {
            let err = CatalogError::ParseError {
                path: origin.to_path_buf(),
                message: "top level must be a mapping".to_string(),
            };
            tracing::error!("Failed to load config: {err}");
            result.add_error(err);
            return result;
        }
    };

    let mut catalog = PatternCatalog::empty();

    if let Some(roles) = root.get("roles") {
        match serde_yaml::from_value::<FileTypeRoles>(roles.clone()) {
            Ok(roles) => catalog.roles = roles,
            Err(e) => {
                let err = CatalogError::ParseError {
                    path: origin.to_path_buf(),
                    message: format!("roles: {e}"),
                };
                tracing::warn!("{err}; using default roles");
                result.add_error(err);
            }
        }
    }

    for (name, value) in section(&root, "connectors") {
        let raw: RawConnector = match value {
            Value::Null => RawConnector::default(),
            other => match serde_yaml::from_value(other.clone()) {
                Ok(raw) => raw,
                Err(e) => {
                    let err = CatalogError::ParseError {
                        path: origin.to_path_buf(),
                        message: format!("connector {name}: {e}"),
                    };
                    tracing::warn!("Skipping connector: {err}");
                    result.add_error(err);
                    continue;
                }
            },
        };

        let mut connection_patterns = Vec::new();
        for pattern in raw.connection_patterns.unwrap_or_default() {
            match RegexBuilder::new(&pattern).multi_line(true).build() {
                Ok(regex) => connection_patterns.push(ConnectionPattern {
                    source: pattern,
                    regex,
                }),
                Err(e) => {
                    let err = CatalogError::InvalidPattern {
                        connector: name.clone(),
                        pattern,
                        message: e.to_string(),
                    };
                    tracing::warn!("Invalid regex pattern: {err}");
                    result.add_error(err);
                }
            }
        }

        let spec = ConnectorSpec {
            kind: raw.kind.unwrap_or_else(|| "unknown".to_string()),
            keywords: raw.keywords.unwrap_or_default(),
            connection_patterns,
        };
        if !catalog.push_connector(name.clone(), spec) {
            tracing::warn!(connector = %name, "duplicate connector name ignored");
        }
    }

    for (name, value) in section(&root, "file_types") {
        let raw: RawFileType = match value {
            Value::Null => RawFileType::default(),
            other => match serde_yaml::from_value(other.clone()) {
                Ok(raw) => raw,
                Err(e) => {
                    let err = CatalogError::ParseError {
                        path: origin.to_path_buf(),
                        message: format!("file type {name}: {e}"),
                    };
                    tracing::warn!("Skipping file type: {err}");
                    result.add_error(err);
                    continue;
                }
            },
        };

        let spec = FileTypeSpec {
            extensions: raw
                .extensions
                .unwrap_or_default()
                .into_iter()
                .map(|e| e.to_lowercase())
                .collect(),
            keywords: raw.keywords.unwrap_or_default(),
        };
        if !catalog.push_file_type(name.clone(), spec) {
            tracing::warn!(file_type = %name, "duplicate file type name ignored");
        }
    }

    result.data = catalog;
    result
}

/// Entries of a top-level mapping section, in document order.
/// Non-string keys are rendered through YAML so they are not lost.
fn section<'a>(root: &'a Mapping, key: &str) -> Vec<(String, &'a Value)> {
    let Some(Value::Mapping(map)) = root.get(key) else {
        return Vec::new();
    };
    map.iter()
        .map(|(k, v)| {
            let name = match k {
                Value::String(s) => s.clone(),
                other => serde_yaml::to_string(other)
                    .map(|s| s.trim().to_string())
                    .unwrap_or_default(),
            };
            (name, v)
        })
        .collect()
}
