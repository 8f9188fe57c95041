//! Scanner module - project walk, walk statistics, tolerant text reads
//!
//! - `walkdir` for traversal with excluded-directory pruning
//! - `encoding_rs` for the Latin-1 decode fallback

mod reader;
mod stats;
mod types;
mod walker;

pub use reader::{decode_bytes, read_text, DecodedText};
pub use stats::{project_stats, WalkStats};
pub use types::FileRecord;
pub use walker::{resolve_project_root, Walker};
