use std::path::Path;

use anyhow::Context;
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::load_graph,
    output::{arrow_list, print_output},
};

/// Which traversal to run.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    Depth,
    Breadth,
}

#[derive(Debug, Serialize)]
struct TraversalOutput {
    order: Order,
    start: String,
    visited: Vec<String>,
}

pub fn run(path: &Path, start: &str, order: Order, opts: &GlobalOptions) -> anyhow::Result<()> {
    let graph = load_graph(path)?;

    let visited = match order {
        Order::Depth => graph.dfs(start),
        Order::Breadth => graph.bfs(start),
    }
    .with_context(|| format!("cannot traverse from '{start}'"))?;

    let output = TraversalOutput {
        order,
        start: start.to_string(),
        visited,
    };

    print_output(&output, opts, |out| {
        let label = match out.order {
            Order::Depth => "Depth-first",
            Order::Breadth => "Breadth-first",
        };
        println!(
            "{label} from {} ({} reachable): {}",
            out.start,
            out.visited.len(),
            arrow_list(&out.visited)
        );
    })
}
