//! Report configuration.

use serde::{Deserialize, Serialize};

/// Knobs for the summary sections of the report.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReportConfig {
    /// Number of most frequent imports kept in `import_summary`. Default: 20.
    pub top_imports: Option<usize>,
    /// Number of tables listed in the text report. Default: 10.
    pub top_tables: Option<usize>,
}

impl ReportConfig {
    pub fn effective_top_imports(&self) -> usize {
        self.top_imports.unwrap_or(20)
    }

    pub fn effective_top_tables(&self) -> usize {
        self.top_tables.unwrap_or(10)
    }
}
