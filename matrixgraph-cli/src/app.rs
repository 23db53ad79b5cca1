use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// matrixgraph - inspect and traverse fixed-capacity directed graphs
#[derive(Debug, Parser)]
#[command(name = "matrixgraph", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Display graph overview: capacity, vertices, edges and degrees.
    Info {
        /// Path to the JSON graph description.
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },

    /// Dump the adjacency matrix.
    Matrix {
        /// Path to the JSON graph description.
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },

    /// Depth-first traversal (pre-order) from a start vertex.
    Dfs {
        /// Path to the JSON graph description.
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Name of the vertex to start from.
        #[arg(short, long)]
        start: String,
    },

    /// Breadth-first traversal from a start vertex.
    Bfs {
        /// Path to the JSON graph description.
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Name of the vertex to start from.
        #[arg(short, long)]
        start: String,
    },

    /// Topologically sort all vertices, failing if the graph has a cycle.
    Topsort {
        /// Path to the JSON graph description.
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },

    /// Find the path with the fewest edges between two vertices.
    Path {
        /// Path to the JSON graph description.
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Name of the source vertex.
        #[arg(long)]
        from: String,

        /// Name of the target vertex.
        #[arg(long)]
        to: String,
    },

    /// Render the graph in Graphviz DOT format.
    Dot {
        /// Path to the JSON graph description.
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Optional graph label.
        #[arg(long)]
        title: Option<String>,
    },
}
