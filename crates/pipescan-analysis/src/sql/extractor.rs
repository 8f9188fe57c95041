//! Table and view identifier extraction.

use std::sync::LazyLock;

use pipescan_core::types::collections::BTreeSet;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// Captured words that are SQL syntax, not object names.
pub const STOPLIST: &[&str] = &["SELECT", "AS", "ON"];

/// Up to three dot-separated segments, each optionally quoted.
const QUALIFIED: &str = r#"([`"]?\w+[`"]?\.)?([`"]?\w+[`"]?\.)?([`"]?\w+[`"]?)"#;

macro_rules! sql_pattern {
    ($name:ident, $prefix:expr) => {
        static $name: LazyLock<Option<Regex>> = LazyLock::new(|| {
            RegexBuilder::new(&format!("{}{}", $prefix, QUALIFIED))
                .case_insensitive(true)
                .multi_line(true)
                .build()
                .ok()
        });
    };
}

sql_pattern!(RE_FROM, r"FROM\s+");
sql_pattern!(RE_JOIN, r"JOIN\s+");
sql_pattern!(RE_INTO, r"INTO\s+");
sql_pattern!(RE_UPDATE, r"UPDATE\s+");
sql_pattern!(RE_CREATE_VIEW, r"CREATE\s+VIEW\s+");
sql_pattern!(RE_CREATE_OR_REPLACE_VIEW, r"CREATE\s+OR\s+REPLACE\s+VIEW\s+");

static TABLE_PATTERNS: [&LazyLock<Option<Regex>>; 4] = [&RE_FROM, &RE_JOIN, &RE_INTO, &RE_UPDATE];
static VIEW_PATTERNS: [&LazyLock<Option<Regex>>; 2] = [&RE_CREATE_VIEW, &RE_CREATE_OR_REPLACE_VIEW];

/// Lower-cased, deduplicated object names, sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SqlObjects {
    pub tables: BTreeSet<String>,
    pub views: BTreeSet<String>,
}

impl SqlObjects {
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty() && self.views.is_empty()
    }
}

/// Find table and view names referenced anywhere in `text`.
///
/// `_file_type` does not gate extraction: SQL embedded in scripts and
/// config files is reported too.
pub fn extract_sql_objects(text: &str, _file_type: &str) -> SqlObjects {
    let upper = text.to_uppercase();
    let mut objects = SqlObjects::default();
    collect(&upper, &TABLE_PATTERNS, &mut objects.tables);
    collect(&upper, &VIEW_PATTERNS, &mut objects.views);
    objects
}

fn collect(upper: &str, patterns: &[&LazyLock<Option<Regex>>], into: &mut BTreeSet<String>) {
    for &pattern in patterns {
        let Some(re) = LazyLock::force(pattern) else {
            continue;
        };
        for caps in re.captures_iter(upper) {
            // Last participating segment is the object name.
            let Some(last) = caps.iter().skip(1).flatten().last() else {
                continue;
            };
            if let Some(name) = object_name(last.as_str()) {
                into.insert(name);
            }
        }
    }
}

fn object_name(segment: &str) -> Option<String> {
    let name = segment.trim_matches(|c| matches!(c, '`' | '"' | '\'' | ' '));
    if name.is_empty() || STOPLIST.iter().any(|s| name.eq_ignore_ascii_case(s)) {
        return None;
    }
    Some(name.to_lowercase())
}
