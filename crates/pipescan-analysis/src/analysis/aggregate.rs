//! Project-wide reduction of per-file analyses.
//!
//! Single-threaded and order-sensitive only where first-seen order is part
//! of the output (connector file lists, import tie-breaking).

use pipescan_core::types::collections::{BTreeMap, BTreeSet, FxHashMap};

use super::types::{FileAnalysis, FileReport};
use crate::report::{ConnectorUsage, ImportSummary, SqlObjectsSummary};

/// Number of ranked imports kept when nothing is configured.
pub const DEFAULT_TOP_IMPORTS: usize = 20;

/// Reduced project-level findings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregates {
    pub total_loc: usize,
    pub files_with_spark: usize,
    pub files_with_sql: usize,
    pub connector_summary: BTreeMap<String, ConnectorUsage>,
    pub import_summary: ImportSummary,
    pub sql_objects_summary: SqlObjectsSummary,
}

/// Incremental reducer. Feed analyses in file order with [`add`](Self::add).
#[derive(Debug, Default)]
pub struct ProjectAggregator {
    total_loc: usize,
    files_with_spark: usize,
    files_with_sql: usize,
    connectors: BTreeMap<String, ConnectorUsage>,
    /// Import counts in first-encountered order
    imports: Vec<(String, usize)>,
    import_index: FxHashMap<String, usize>,
    tables: BTreeSet<String>,
    views: BTreeSet<String>,
}

impl ProjectAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, relative_path: &str, analysis: &FileAnalysis) {
        self.total_loc += analysis.lines_of_code;
        if analysis.has_spark {
            self.files_with_spark += 1;
        }
        if analysis.has_sql {
            self.files_with_sql += 1;
        }

        for (name, hit) in &analysis.connectors {
            let usage = self
                .connectors
                .entry(name.clone())
                .or_insert_with(|| ConnectorUsage {
                    total_files: 0,
                    total_instances: 0,
                    kind: hit.kind.clone(),
                    files: Vec::new(),
                });
            usage.total_files += 1;
            usage.total_instances += hit.count;
            usage.files.push(relative_path.to_string());
        }

        for import in &analysis.imports {
            match self.import_index.get(import) {
                Some(&slot) => self.imports[slot].1 += 1,
                None => {
                    self.import_index.insert(import.clone(), self.imports.len());
                    self.imports.push((import.clone(), 1));
                }
            }
        }

        self.tables.extend(analysis.sql_objects.tables.iter().cloned());
        self.views.extend(analysis.sql_objects.views.iter().cloned());
    }

    /// Finish the reduction, keeping the `top_imports` most frequent imports.
    /// Ties keep first-encountered order.
    pub fn finish(self, top_imports: usize) -> Aggregates {
        let total_unique_imports = self.imports.len();
        let mut ranked = self.imports;
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(top_imports);

        Aggregates {
            total_loc: self.total_loc,
            files_with_spark: self.files_with_spark,
            files_with_sql: self.files_with_sql,
            connector_summary: self.connectors,
            import_summary: ImportSummary {
                total_unique_imports,
                top_imports: ranked,
            },
            sql_objects_summary: SqlObjectsSummary {
                total_tables: self.tables.len(),
                total_views: self.views.len(),
                tables: self.tables.into_iter().collect(),
                views: self.views.into_iter().collect(),
            },
        }
    }
}

/// Reduce a full list of file reports. Failed files contribute nothing.
pub fn aggregate(files: &[FileReport], top_imports: usize) -> Aggregates {
    let mut aggregator = ProjectAggregator::new();
    for file in files {
        if let Some(analysis) = file.outcome.analysis() {
            aggregator.add(&file.record.relative_path, analysis);
        }
    }
    aggregator.finish(top_imports)
}
