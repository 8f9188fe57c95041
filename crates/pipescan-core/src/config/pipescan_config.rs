//! Top-level pipescan configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{CatalogConfig, ReportConfig, ScanConfig};
use crate::errors::ConfigError;

/// Name of the optional per-project config file, looked up in the scanned root.
pub const PROJECT_CONFIG_FILE: &str = "pipescan.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`PIPESCAN_*`)
/// 3. Project config (`pipescan.toml` in the scanned root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PipescanConfig {
    pub scan: ScanConfig,
    pub report: ReportConfig,
    pub catalog: CatalogConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub catalog_path: Option<PathBuf>,
    pub scan_threads: Option<usize>,
    pub top_imports: Option<usize>,
}

impl PipescanConfig {
    /// Load configuration for the project rooted at `root`.
    ///
    /// A missing `pipescan.toml` is not an error; an unparsable one is.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.is_file() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
            tracing::debug!(path = %project_config_path.display(), "merged project config");
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &PipescanConfig) -> Result<(), ConfigError> {
        if config.report.top_imports == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "report.top_imports".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(ref exts) = config.scan.extensions {
            if let Some(bad) = exts.iter().find(|e| !e.starts_with('.')) {
                return Err(ConfigError::ValidationFailed {
                    field: "scan.extensions".to_string(),
                    message: format!("extension '{bad}' must start with '.'"),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut PipescanConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let mut file_config: PipescanConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        // A relative catalog path in a project file is relative to that file.
        if let (Some(catalog), Some(dir)) = (file_config.catalog.path.as_mut(), path.parent()) {
            if catalog.is_relative() {
                *catalog = dir.join(&*catalog);
            }
        }

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut PipescanConfig, other: &PipescanConfig) {
        if other.scan.excluded_dirs.is_some() {
            base.scan.excluded_dirs = other.scan.excluded_dirs.clone();
        }
        if other.scan.extensions.is_some() {
            base.scan.extensions = other.scan.extensions.clone();
        }
        if other.scan.threads.is_some() {
            base.scan.threads = other.scan.threads;
        }
        if other.scan.follow_symlinks.is_some() {
            base.scan.follow_symlinks = other.scan.follow_symlinks;
        }

        if other.report.top_imports.is_some() {
            base.report.top_imports = other.report.top_imports;
        }
        if other.report.top_tables.is_some() {
            base.report.top_tables = other.report.top_tables;
        }

        if other.catalog.path.is_some() {
            base.catalog.path = other.catalog.path.clone();
        }
    }

    fn apply_env_overrides(config: &mut PipescanConfig) {
        if let Ok(val) = std::env::var("PIPESCAN_SCAN_THREADS") {
            if let Ok(v) = val.parse::<usize>() {
                config.scan.threads = Some(v);
            }
        }
        if let Ok(val) = std::env::var("PIPESCAN_SCAN_EXTENSIONS") {
            config.scan.extensions = Some(split_list(&val));
        }
        if let Ok(val) = std::env::var("PIPESCAN_SCAN_EXCLUDED_DIRS") {
            config.scan.excluded_dirs = Some(split_list(&val));
        }
        if let Ok(val) = std::env::var("PIPESCAN_REPORT_TOP_IMPORTS") {
            if let Ok(v) = val.parse::<usize>() {
                config.report.top_imports = Some(v);
            }
        }
        if let Ok(val) = std::env::var("PIPESCAN_CATALOG") {
            if !val.trim().is_empty() {
                config.catalog.path = Some(PathBuf::from(val));
            }
        }
    }

    fn apply_cli_overrides(config: &mut PipescanConfig, cli: &CliOverrides) {
        if let Some(ref path) = cli.catalog_path {
            config.catalog.path = Some(path.clone());
        }
        if let Some(threads) = cli.scan_threads {
            config.scan.threads = Some(threads);
        }
        if let Some(top) = cli.top_imports {
            config.report.top_imports = Some(top);
        }
    }
}

/// Split a comma-separated env value, dropping blanks.
fn split_list(val: &str) -> Vec<String> {
    val.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
