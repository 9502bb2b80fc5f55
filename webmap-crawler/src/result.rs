use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Frozen output of a crawl: the directed link structure of the site plus
/// the auxiliary link classifications. All internal URLs are stored in
/// normalized form (query string and fragment stripped).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteMap {
    /// Prefix defining the site boundary; links outside it are external.
    pub root: String,
    /// Unique (source, target) pairs between internal pages.
    pub edges: BTreeSet<(String, String)>,
    /// Resolved URLs that fall outside the root prefix. Never crawled.
    pub external: BTreeSet<String>,
    /// URLs whose fetch failed: network error or non-2xx response.
    pub broken: BTreeSet<String>,
    /// Internal URLs discovered and enqueued during the crawl.
    pub visited: BTreeSet<String>,
}

impl SiteMap {
    pub fn new(root: String) -> Self {
        Self {
            root,
            edges: BTreeSet::new(),
            external: BTreeSet::new(),
            broken: BTreeSet::new(),
            visited: BTreeSet::new(),
        }
    }

    pub fn page_count(&self) -> usize {
        self.visited.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
