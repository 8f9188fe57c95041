//! ErrorCode trait: stable, machine-readable codes for every error enum.

/// Every error enum implements this to expose a structured code string
/// that the CLI prints next to the human-readable message.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "SCAN_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const SCAN_ERROR: &str = "SCAN_ERROR";
pub const PROJECT_NOT_FOUND: &str = "PROJECT_NOT_FOUND";
pub const PERMISSION_DENIED: &str = "PERMISSION_DENIED";
pub const CATALOG_ERROR: &str = "CATALOG_ERROR";
pub const INVALID_PATTERN: &str = "INVALID_PATTERN";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const REPORT_ERROR: &str = "REPORT_ERROR";
