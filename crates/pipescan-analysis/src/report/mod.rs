//! Report module - the project summary, its JSON writer, the text report

mod text;
mod types;
mod writer;

pub use text::{render_text_report, thousands};
pub use types::{
    ConnectorUsage, ImportSummary, ProjectStatistics, ProjectSummary, ScanMetadata,
    SqlObjectsSummary,
};
pub use writer::save_summary;
