//! Import extractor for script-like files.

use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::FileTypeRoles;

macro_rules! import_pattern {
    ($name:ident, $regex_str:expr) => {
        static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

import_pattern!(RE_MODULE_IMPORT, r"^import\s+[\w.]+");
import_pattern!(RE_FROM_IMPORT, r"^from\s+[\w.]+\s+import\s+.*");

/// Extract dependency declarations, one stripped line each, in order of
/// appearance. Duplicates are kept. Non-script types yield nothing.
pub fn extract_imports(text: &str, file_type: &str, roles: &FileTypeRoles) -> Vec<String> {
    if !roles.is_script_like(file_type) {
        return Vec::new();
    }

    let patterns: Vec<&Regex> = [&RE_MODULE_IMPORT, &RE_FROM_IMPORT]
        .into_iter()
        .filter_map(|re| LazyLock::force(re).as_ref())
        .collect();

    text.split('\n')
        .map(str::trim)
        .filter(|line| patterns.iter().any(|re| re.is_match(line)))
        .map(str::to_string)
        .collect()
}
