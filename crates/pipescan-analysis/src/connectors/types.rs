//! Connector detection types

use serde::{Deserialize, Serialize};

/// One occurrence of a connector in a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MatchInstance {
    /// A configured keyword appears somewhere in the text
    Keyword {
        pattern: String,
        connector_type: String,
    },
    /// A connection-pattern regex match
    Connection {
        pattern: String,
        #[serde(rename = "match")]
        matched_text: String,
        /// 1-based
        line_number: usize,
        connector_type: String,
    },
}

impl MatchInstance {
    pub fn is_keyword(&self) -> bool {
        matches!(self, MatchInstance::Keyword { .. })
    }
}

/// All occurrences of one connector in a file. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectorHit {
    /// Keyword plus connection instances
    pub count: usize,
    #[serde(rename = "type")]
    pub kind: String,
    pub instances: Vec<MatchInstance>,
}
