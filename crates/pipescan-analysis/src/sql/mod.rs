//! SQL object extraction - heuristic table/view discovery
//!
//! Regex only. Runs on any text, whatever the file type; false positives
//! are accepted.

mod extractor;

pub use extractor::{extract_sql_objects, SqlObjects, STOPLIST};
