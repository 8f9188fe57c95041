//! Per-file analysis: classifier plus the three extractors.

use crate::catalog::PatternCatalog;
use crate::classifier::classify;
use crate::connectors::detect_connectors;
use crate::imports::extract_imports;
use crate::sql::extract_sql_objects;

use super::types::FileAnalysis;

/// Analyze one file's text. `extension` is the walker's lower-cased
/// extension. Pure: the same inputs always give the same record.
pub fn analyze_file(catalog: &PatternCatalog, extension: &str, text: &str) -> FileAnalysis {
    let roles = catalog.roles();

    let file_type = classify(catalog, extension, text);
    let connectors = detect_connectors(catalog, text);
    let imports = extract_imports(text, &file_type, roles);
    let sql_objects = extract_sql_objects(text, &file_type);
    let (lines_of_code, total_lines) = count_lines(text);

    let has_spark = (!roles.distributed.is_empty() && file_type.contains(&roles.distributed))
        || text.to_lowercase().contains("spark");
    let has_sql = !sql_objects.tables.is_empty() || file_type == roles.sql;

    FileAnalysis {
        file_type,
        lines_of_code,
        total_lines,
        connectors,
        imports,
        sql_objects,
        has_spark,
        has_sql,
    }
}

/// `(lines_of_code, total_lines)`. Lines are split on `\n`, so a trailing
/// newline counts as one more (empty) line.
pub fn count_lines(text: &str) -> (usize, usize) {
    let mut loc = 0;
    let mut total = 0;
    for line in text.split('\n') {
        total += 1;
        let stripped = line.trim();
        if !stripped.is_empty() && !stripped.starts_with('#') {
            loc += 1;
        }
    }
    (loc, total)
}
