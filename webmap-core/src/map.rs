// Graph export: turns the crawl's edge set into an interactive HTML artifact.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use serde_json::{Value, json};
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::io;
use std::path::Path;

/// Default filename of the HTML map artifact.
pub const DEFAULT_MAP_FILE: &str = "site_map.html";

const MAP_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>webmap - site link graph</title>
<script src="https://unpkg.com/vis-network@9.1.9/standalone/umd/vis-network.min.js"></script>
<style>
  body { margin: 0; font-family: sans-serif; }
  #sitemap { width: 1200px; height: 1200px; border: 1px solid #e0e0e0; }
</style>
</head>
<body>
<div id="sitemap"></div>
<script>
  const nodes = new vis.DataSet(__NODES__);
  const edges = new vis.DataSet(__EDGES__);
  const container = document.getElementById("sitemap");
  const network = new vis.Network(container, { nodes: nodes, edges: edges }, {
    physics: { stabilization: true },
    edges: { arrows: "to" },
    nodes: { shape: "dot", size: 10 },
  });
</script>
</body>
</html>
"#;

/// Directed graph of a crawled site, built from the crawler's edge set and
/// rendered as a self-contained interactive HTML page.
pub struct SiteGraph {
    graph: DiGraph<String, ()>,
}

impl SiteGraph {
    /// Build the graph from unique (source, target) URL pairs. Each distinct
    /// URL becomes one node.
    pub fn from_edges(edges: &BTreeSet<(String, String)>) -> Self {
        let mut graph = DiGraph::new();
        let mut nodes: HashMap<&str, NodeIndex> = HashMap::new();

        for (source, target) in edges {
            let source_ix = intern(&mut graph, &mut nodes, source);
            let target_ix = intern(&mut graph, &mut nodes, target);
            graph.add_edge(source_ix, target_ix, ());
        }

        Self { graph }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Render the graph as a standalone HTML page using vis-network.
    pub fn render_html(&self) -> String {
        let nodes: Vec<Value> = self
            .graph
            .node_indices()
            .map(|ix| {
                json!({
                    "id": ix.index(),
                    "label": self.graph[ix],
                })
            })
            .collect();

        let edges: Vec<Value> = self
            .graph
            .edge_references()
            .map(|edge| {
                json!({
                    "from": edge.source().index(),
                    "to": edge.target().index(),
                })
            })
            .collect();

        MAP_TEMPLATE
            .replace("__NODES__", &Value::Array(nodes).to_string())
            .replace("__EDGES__", &Value::Array(edges).to_string())
    }

    /// Write the rendered HTML artifact to `path`.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.render_html())
    }
}

fn intern<'a>(
    graph: &mut DiGraph<String, ()>,
    nodes: &mut HashMap<&'a str, NodeIndex>,
    url: &'a str,
) -> NodeIndex {
    match nodes.get(url) {
        Some(&ix) => ix,
        None => {
            let ix = graph.add_node(url.to_string());
            nodes.insert(url, ix);
            ix
        }
    }
}
