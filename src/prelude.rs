//! # matrixgraph Prelude
//!
//! Re-exports the types most programs need: the graph, its identifiers, the shortest path
//! result and the error handling types.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all matrixgraph operations
pub use crate::Error;

/// The result type used throughout matrixgraph
pub use crate::Result;

// ================================================================================================
// Graph
// ================================================================================================

/// The fixed-capacity directed graph and its storage
pub use crate::graph::{DirectedGraph, EdgeMatrix, VertexId};

/// Result of an unweighted shortest path query
pub use crate::graph::ShortestPath;

/// Traits the identifier-level algorithms are written against
pub use crate::graph::{GraphBase, Predecessors, Successors};
