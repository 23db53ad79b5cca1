use std::path::Path;

use serde::Serialize;

use crate::{app::GlobalOptions, commands::common::load_graph, output::print_output};

#[derive(Debug, Serialize)]
struct MatrixOutput {
    vertices: Vec<String>,
    /// Full capacity × capacity snapshot, `null` where there is no edge
    rows: Vec<Vec<Option<i64>>>,
    #[serde(skip)]
    rendered: String,
}

pub fn run(path: &Path, opts: &GlobalOptions) -> anyhow::Result<()> {
    let graph = load_graph(path)?;

    let output = MatrixOutput {
        vertices: graph.vertices().map(|(_, name)| name.to_string()).collect(),
        rows: graph.dump_edges(),
        rendered: graph.format_edges(),
    };

    print_output(&output, opts, |out| {
        println!("Vertices: {}", out.vertices.join(", "));
        print!("{}", out.rendered);
    })
}
