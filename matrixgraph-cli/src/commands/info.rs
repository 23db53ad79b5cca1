use std::path::Path;

use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::load_graph,
    output::{print_output, Align, TabWriter},
};

#[derive(Debug, Serialize)]
struct VertexInfo {
    index: usize,
    name: String,
    in_degree: usize,
    out_degree: usize,
}

#[derive(Debug, Serialize)]
struct InfoOutput {
    capacity: usize,
    vertex_count: usize,
    edge_count: usize,
    vertices: Vec<VertexInfo>,
}

pub fn run(path: &Path, opts: &GlobalOptions) -> anyhow::Result<()> {
    let graph = load_graph(path)?;

    let vertices = graph
        .vertices()
        .map(|(id, name)| VertexInfo {
            index: id.index(),
            name: name.to_string(),
            in_degree: graph.in_degree(id),
            out_degree: graph.out_degree(id),
        })
        .collect();

    let output = InfoOutput {
        capacity: graph.capacity(),
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        vertices,
    };

    print_output(&output, opts, |out| {
        println!(
            "Graph: {} of {} vertices, {} edges",
            out.vertex_count, out.capacity, out.edge_count
        );
        if out.vertices.is_empty() {
            return;
        }
        println!();
        let mut tw = TabWriter::new(&[
            ("Index", Align::Right),
            ("Vertex", Align::Left),
            ("In", Align::Right),
            ("Out", Align::Right),
        ])
        .indent("  ");
        for vertex in &out.vertices {
            tw.row(vec![
                vertex.index.to_string(),
                vertex.name.clone(),
                vertex.in_degree.to_string(),
                vertex.out_degree.to_string(),
            ]);
        }
        tw.print();
    })
}
