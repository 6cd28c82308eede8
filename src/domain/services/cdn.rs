use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The external resources attached to a post: ordered script and stylesheet
/// URLs. Both lists default to empty so partial payloads decode cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CdnList {
    pub scripts: Vec<String>,
    pub styles: Vec<String>,
}

impl CdnList {
    /// Decode a persisted JSON blob. Malformed or missing data degrades to an
    /// empty list rather than failing the request.
    pub fn parse(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"scripts":[],"styles":[]}"#.to_string())
    }

    /// Union of the server-persisted list and a browser-local list:
    /// deduplicated by URL, first-seen order preserved, server entries first.
    /// Merging a merged list with itself is a no-op.
    pub fn merge(server: &CdnList, local: &CdnList) -> CdnList {
        CdnList {
            scripts: union(&server.scripts, &local.scripts),
            styles: union(&server.styles, &local.styles),
        }
    }
}

fn union(first: &[String], second: &[String]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = Vec::new();
    for url in first.iter().chain(second.iter()) {
        if seen.insert(url.as_str()) {
            out.push(url.clone());
        }
    }
    out
}
