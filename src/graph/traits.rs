//! Trait definitions the graph algorithms are written against.
//!
//! The algorithms in [`crate::graph::algorithms`] only need a vertex count and an ordered
//! successor enumeration (plus predecessors, for in-degrees). Expressing those needs as traits
//! keeps the algorithms independent of the matrix representation: any structure that can
//! answer these queries, such as a sparse adjacency list, can be traversed by the same code.
//!
//! - [`GraphBase`] - Vertex count and vertex iteration
//! - [`Successors`] - Forward edge traversal (outgoing edges)
//! - [`Predecessors`] - Backward edge traversal (incoming edges)

use crate::graph::VertexId;

/// Core graph properties: how many vertices exist and how to iterate them.
///
/// Vertex identifiers are expected to be dense, `0..vertex_count()`, so that algorithms can
/// keep per-vertex state in plain vectors indexed by [`VertexId::index`].
pub trait GraphBase {
    /// Returns the number of vertices in the graph.
    fn vertex_count(&self) -> usize;

    /// Returns an iterator over all vertex identifiers, in ascending order.
    fn vertex_ids(&self) -> impl Iterator<Item = VertexId>;
}

/// Forward adjacency: the targets of the edges leaving a vertex.
pub trait Successors: GraphBase {
    /// Returns the successors of `vertex` in ascending identifier order.
    ///
    /// Traversals rely on this order for deterministic results. An unknown `vertex` yields an
    /// empty iterator.
    fn successors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId>;
}

/// Backward adjacency: the sources of the edges entering a vertex.
pub trait Predecessors: GraphBase {
    /// Returns the predecessors of `vertex` in ascending identifier order.
    fn predecessors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId>;
}
