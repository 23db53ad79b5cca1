use std::path::Path;

use anyhow::Context;
use matrixgraph::DirectedGraph;
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::load_graph,
    output::{arrow_list, print_output},
};

#[derive(Debug, Serialize)]
struct TopSortOutput {
    order: Vec<String>,
}

/// Order every vertex, failing once with the library's cycle report.
fn order(graph: &DirectedGraph) -> anyhow::Result<Vec<String>> {
    graph.top_sort().context("graph cannot be topologically sorted")
}

pub fn run(path: &Path, opts: &GlobalOptions) -> anyhow::Result<()> {
    let graph = load_graph(path)?;
    let order = order(&graph)?;

    print_output(&TopSortOutput { order }, opts, |out| {
        println!("Topological order: {}", arrow_list(&out.order));
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_with(edges: &[(&str, &str)]) -> DirectedGraph {
        let mut graph = DirectedGraph::new(3).unwrap();
        for name in ["A", "B", "C"] {
            graph.insert_vertex(name).unwrap();
        }
        for (from, to) in edges {
            graph.insert_edge(from, to, 1).unwrap();
        }
        graph
    }

    #[test]
    fn test_order_acyclic() {
        let graph = graph_with(&[("C", "A"), ("A", "B")]);
        assert_eq!(order(&graph).unwrap(), ["C", "A", "B"]);
    }

    #[test]
    fn test_cycle_reported_once() {
        let graph = graph_with(&[("A", "B"), ("B", "A")]);
        let message = format!("{:#}", order(&graph).unwrap_err());
        assert_eq!(
            message,
            "graph cannot be topologically sorted: \
             Graph contains a cycle, 2 vertices cannot be ordered: A, B"
        );
        assert_eq!(message.matches("A, B").count(), 1);
    }
}
