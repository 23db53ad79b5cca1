use std::path::Path;

use anyhow::Context;
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::load_graph,
    output::{arrow_list, print_output},
};

#[derive(Debug, Serialize)]
struct PathOutput {
    from: String,
    to: String,
    reachable: bool,
    distance: Option<usize>,
    path: Vec<String>,
}

pub fn run(path: &Path, from: &str, to: &str, opts: &GlobalOptions) -> anyhow::Result<()> {
    let graph = load_graph(path)?;

    let found = graph
        .shortest_path(from, to)
        .with_context(|| format!("cannot search a path from '{from}' to '{to}'"))?;

    let output = PathOutput {
        from: from.to_string(),
        to: to.to_string(),
        reachable: found.is_some(),
        distance: found.as_ref().map(|p| p.distance()),
        path: found.map(|p| p.into_path()).unwrap_or_default(),
    };

    print_output(&output, opts, |out| match out.distance {
        Some(distance) => {
            println!("Shortest path from {} to {}: {distance} hop(s)", out.from, out.to);
            println!("  {}", arrow_list(&out.path));
        }
        None => println!("{} is not reachable from {}", out.to, out.from),
    })
}
