//! Configuration system for pipescan.
//! TOML-based, layered resolution: CLI > env > project > defaults.

pub mod catalog_config;
pub mod pipescan_config;
pub mod report_config;
pub mod scan_config;

pub use catalog_config::CatalogConfig;
pub use pipescan_config::{CliOverrides, PipescanConfig, PROJECT_CONFIG_FILE};
pub use report_config::ReportConfig;
pub use scan_config::ScanConfig;
