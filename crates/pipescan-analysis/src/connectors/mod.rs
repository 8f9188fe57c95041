//! Connectors module - catalog-driven detection of external systems
//!
//! Keyword presence tests plus multi-line regex matches with line numbers.

mod detector;
mod types;

pub use detector::detect_connectors;
pub use types::{ConnectorHit, MatchInstance};
