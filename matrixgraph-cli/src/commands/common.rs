use std::path::Path;

use anyhow::Context;
use matrixgraph::DirectedGraph;
use serde::Deserialize;

/// On-disk graph description.
///
/// ```json
/// { "capacity": 10,
///   "vertices": ["V1", "V2"],
///   "edges": [{ "from": "V1", "to": "V2", "weight": 2 }] }
/// ```
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphFile {
    /// Maximum vertex count; defaults to the number of listed vertices (at least 1).
    #[serde(default)]
    pub capacity: Option<usize>,
    pub vertices: Vec<String>,
    #[serde(default)]
    pub edges: Vec<EdgeEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EdgeEntry {
    pub from: String,
    pub to: String,
    #[serde(default = "default_weight")]
    pub weight: i64,
}

fn default_weight() -> i64 {
    1
}

impl GraphFile {
    /// Parse a description from JSON text.
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        serde_json::from_str(text).context("invalid graph description")
    }

    /// Insert every vertex, then every edge, in file order.
    pub fn build(&self) -> anyhow::Result<DirectedGraph> {
        let capacity = self.capacity.unwrap_or(self.vertices.len().max(1));
        let mut graph = DirectedGraph::new(capacity)
            .with_context(|| format!("cannot create a graph with capacity {capacity}"))?;

        for name in &self.vertices {
            graph
                .insert_vertex(name.as_str())
                .with_context(|| format!("cannot add vertex '{name}'"))?;
        }
        for edge in &self.edges {
            graph
                .insert_edge(&edge.from, &edge.to, edge.weight)
                .with_context(|| format!("cannot add edge '{}' -> '{}'", edge.from, edge.to))?;
        }

        log::debug!(
            "built graph with {} vertices and {} edges (capacity {})",
            graph.vertex_count(),
            graph.edge_count(),
            graph.capacity()
        );
        Ok(graph)
    }
}

/// Load and build the graph described by the JSON file at `path`.
pub fn load_graph(path: &Path) -> anyhow::Result<DirectedGraph> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read graph file: {}", path.display()))?;
    GraphFile::from_json(&text)
        .and_then(|file| file.build())
        .with_context(|| format!("failed to load graph: {}", path.display()))
}
