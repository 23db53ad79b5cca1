//! Fixed-capacity directed graph on an adjacency matrix.
//!
//! # Architecture
//!
//! - **Core Types**: [`VertexId`], [`EdgeMatrix`] and [`DirectedGraph`] provide the vertex
//!   registry and the edge store
//! - **Algorithms**: depth-first and breadth-first traversal, topological sorting and
//!   unweighted shortest paths, in [`algorithms`]
//! - **Traits**: [`GraphBase`], [`Successors`] and [`Predecessors`] decouple the algorithms
//!   from the matrix representation
//!
//! # Design Principles
//!
//! ## Strongly-Typed Identifiers
//!
//! Vertices are addressed by [`VertexId`], a newtype over the insertion index, so vertex
//! indices cannot be confused with weights, counts or other integers.
//!
//! ## Explicit Edge Presence
//!
//! Matrix cells are `Option<i64>`. A weight of `0` is an ordinary edge; only `None` means
//! "no edge".
//!
//! ## Fresh State Per Call
//!
//! Algorithms never store working state on the graph. Each call allocates its own visited
//! flags, queues and distance tables, so calls are independent and a shared `&DirectedGraph`
//! can be traversed from several threads.
//!
//! # Usage Examples
//!
//! ```rust
//! use matrixgraph::graph::{algorithms, DirectedGraph, VertexId};
//!
//! let mut graph = DirectedGraph::new(3)?;
//! let a = graph.insert_vertex("A")?;
//! let b = graph.insert_vertex("B")?;
//! let c = graph.insert_vertex("C")?;
//! graph.insert_edge("A", "B", 5)?;
//! graph.insert_edge("B", "C", 0)?;
//!
//! let order: Vec<VertexId> = algorithms::dfs(&graph, a).collect();
//! assert_eq!(order, vec![a, b, c]);
//! # Ok::<(), matrixgraph::Error>(())
//! ```

mod directed;
mod matrix;
mod traits;
mod vertex;

pub mod algorithms;

pub use algorithms::ShortestPath;
pub use directed::DirectedGraph;
pub use matrix::EdgeMatrix;
pub use traits::{GraphBase, Predecessors, Successors};
pub use vertex::VertexId;
