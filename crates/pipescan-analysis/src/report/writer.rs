//! JSON report output.

use std::path::Path;

use pipescan_core::errors::ReportError;

use super::types::ProjectSummary;

/// Write `summary` as pretty-printed JSON, creating parent directories.
pub fn save_summary(summary: &ProjectSummary, path: &Path) -> Result<(), ReportError> {
    let json = summary
        .to_json_pretty()
        .map_err(|e| ReportError::Serialize(e.to_string()))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| ReportError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    std::fs::write(path, json).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!("Metadata saved to: {}", path.display());
    Ok(())
}
