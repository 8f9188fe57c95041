//! Pattern catalog: connector and file-type recognition rules.
//!
//! The catalog is plain data loaded from a YAML document once per process.
//! It is immutable after loading; every detector borrows it.

pub mod loader;
pub mod types;

pub use loader::{default_catalog_path, load_catalog, parse_catalog, DEFAULT_CATALOG_RELATIVE};
pub use types::{ConnectionPattern, ConnectorSpec, FileTypeRoles, FileTypeSpec, PatternCatalog};
