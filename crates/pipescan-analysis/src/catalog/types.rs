//! Catalog types.

use regex::Regex;
use serde::Deserialize;

/// A compiled connection-pattern regex, keeping the source text for reporting.
#[derive(Debug, Clone)]
pub struct ConnectionPattern {
    pub source: String,
    pub regex: Regex,
}

/// Recognition rules for one external system.
#[derive(Debug, Clone, Default)]
pub struct ConnectorSpec {
    /// Free-form kind tag, e.g. `database` or `cloud_storage`.
    pub kind: String,
    /// Literal substrings; presence of each yields one keyword hit.
    pub keywords: Vec<String>,
    /// Regexes for connection-establishing expressions. Invalid entries
    /// were dropped at load time.
    pub connection_patterns: Vec<ConnectionPattern>,
}

/// Recognition rules for one logical file type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileTypeSpec {
    /// Lower-cased extensions with leading dot.
    pub extensions: Vec<String>,
    pub keywords: Vec<String>,
}

/// File-type names with special meaning to the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileTypeRoles {
    /// Type whose keywords mark a notebook export; wins over extensions.
    pub notebook: String,
    /// Type whose keywords mark distributed data processing in scripts.
    pub distributed: String,
    /// Plain scripting type for `script_extension` files.
    pub script: String,
    /// SQL file type.
    pub sql: String,
    /// Extension of the general-purpose scripting language.
    pub script_extension: String,
}

impl Default for FileTypeRoles {
    fn default() -> Self {
        Self {
            notebook: "databricks_notebook".to_string(),
            distributed: "pyspark".to_string(),
            script: "python".to_string(),
            sql: "sql".to_string(),
            script_extension: ".py".to_string(),
        }
    }
}

impl FileTypeRoles {
    /// Script-like types are the only ones the import extractor reads.
    pub fn is_script_like(&self, file_type: &str) -> bool {
        file_type == self.script || file_type == self.distributed || file_type == self.notebook
    }
}

/// The full, immutable rule set. Entries keep their document order.
#[derive(Debug, Clone, Default)]
pub struct PatternCatalog {
    pub(crate) connectors: Vec<(String, ConnectorSpec)>,
    pub(crate) file_types: Vec<(String, FileTypeSpec)>,
    pub(crate) roles: FileTypeRoles,
}

impl PatternCatalog {
    /// A catalog that detects nothing. Used when loading fails.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a catalog directly from parts, in the given order.
    /// Later duplicates of a name are ignored.
    pub fn from_parts(
        connectors: Vec<(String, ConnectorSpec)>,
        file_types: Vec<(String, FileTypeSpec)>,
        roles: FileTypeRoles,
    ) -> Self {
        let mut catalog = Self {
            roles,
            ..Self::default()
        };
        for (name, spec) in connectors {
            catalog.push_connector(name, spec);
        }
        for (name, spec) in file_types {
            catalog.push_file_type(name, spec);
        }
        catalog
    }

    pub(crate) fn push_connector(&mut self, name: String, spec: ConnectorSpec) -> bool {
        if self.connectors.iter().any(|(n, _)| *n == name) {
            return false;
        }
        self.connectors.push((name, spec));
        true
    }

    pub(crate) fn push_file_type(&mut self, name: String, spec: FileTypeSpec) -> bool {
        if self.file_types.iter().any(|(n, _)| *n == name) {
            return false;
        }
        self.file_types.push((name, spec));
        true
    }

    /// Connectors in catalog order.
    pub fn connectors(&self) -> impl Iterator<Item = (&str, &ConnectorSpec)> {
        self.connectors.iter().map(|(n, s)| (n.as_str(), s))
    }

    /// File types in catalog order.
    pub fn file_types(&self) -> impl Iterator<Item = (&str, &FileTypeSpec)> {
        self.file_types.iter().map(|(n, s)| (n.as_str(), s))
    }

    pub fn file_type(&self, name: &str) -> Option<&FileTypeSpec> {
        self.file_types
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, s)| s)
    }

    pub fn connector(&self, name: &str) -> Option<&ConnectorSpec> {
        self.connectors
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, s)| s)
    }

    pub fn roles(&self) -> &FileTypeRoles {
        &self.roles
    }

    pub fn connector_count(&self) -> usize {
        self.connectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connectors.is_empty() && self.file_types.is_empty()
    }
}
