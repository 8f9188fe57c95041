//! File classifier: logical file type from extension and content.

use crate::catalog::PatternCatalog;

/// Returned when no rule matches.
pub const UNKNOWN_FILE_TYPE: &str = "unknown";

/// Classify a file. `extension` is lower-cased with its leading dot.
///
/// First match wins:
/// 1. any notebook-marker keyword in the text
/// 2. the script extension: distributed type if one of its keywords is
///    present, else the plain script type
/// 3. the first file type, in catalog order, listing the extension
/// 4. `unknown`
pub fn classify(catalog: &PatternCatalog, extension: &str, text: &str) -> String {
    let roles = catalog.roles();

    if let Some(notebook) = catalog.file_type(&roles.notebook) {
        if notebook.keywords.iter().any(|k| text.contains(k.as_str())) {
            return roles.notebook.clone();
        }
    }

    if extension == roles.script_extension {
        let distributed = catalog
            .file_type(&roles.distributed)
            .is_some_and(|spec| spec.keywords.iter().any(|k| text.contains(k.as_str())));
        return if distributed {
            roles.distributed.clone()
        } else {
            roles.script.clone()
        };
    }

    catalog
        .file_types()
        .find(|(_, spec)| spec.extensions.iter().any(|e| e == extension))
        .map(|(name, _)| name.to_string())
        .unwrap_or_else(|| UNKNOWN_FILE_TYPE.to_string())
}
