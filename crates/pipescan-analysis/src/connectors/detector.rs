//! Connector detector

use pipescan_core::types::collections::BTreeMap;

use super::types::{ConnectorHit, MatchInstance};
use crate::catalog::PatternCatalog;

/// Detect every catalog connector referenced by `text`.
///
/// Only connectors with at least one instance appear in the result.
pub fn detect_connectors(catalog: &PatternCatalog, text: &str) -> BTreeMap<String, ConnectorHit> {
    let mut detected = BTreeMap::new();
    let mut lines: Option<LineIndex> = None;

    for (name, spec) in catalog.connectors() {
        let mut instances = Vec::new();

        for keyword in &spec.keywords {
            if text.contains(keyword.as_str()) {
                instances.push(MatchInstance::Keyword {
                    pattern: keyword.clone(),
                    connector_type: spec.kind.clone(),
                });
            }
        }

        for pattern in &spec.connection_patterns {
            for m in pattern.regex.find_iter(text) {
                let index = lines.get_or_insert_with(|| LineIndex::new(text));
                instances.push(MatchInstance::Connection {
                    pattern: pattern.source.clone(),
                    matched_text: m.as_str().to_string(),
                    line_number: index.line_of(m.start()),
                    connector_type: spec.kind.clone(),
                });
            }
        }

        if !instances.is_empty() {
            detected.insert(
                name.to_string(),
                ConnectorHit {
                    count: instances.len(),
                    kind: spec.kind.clone(),
                    instances,
                },
            );
        }
    }

    detected
}

/// Byte offsets of every `\n`, for offset-to-line lookups.
struct LineIndex {
    newlines: Vec<usize>,
}

impl LineIndex {
    fn new(text: &str) -> Self {
        Self {
            newlines: text
                .bytes()
                .enumerate()
                .filter(|(_, b)| *b == b'\n')
                .map(|(i, _)| i)
                .collect(),
        }
    }

    /// 1 + newlines strictly before `offset`.
    fn line_of(&self, offset: usize) -> usize {
        1 + self.newlines.partition_point(|&nl| nl < offset)
    }
}
