//! Vertex identifier for the adjacency-matrix graph.
//!
//! A [`VertexId`] is the stable insertion position of a vertex name. It doubles as the row and
//! column coordinate of that vertex in the [`EdgeMatrix`](crate::graph::EdgeMatrix).

use std::fmt;

/// A strongly-typed identifier for a vertex within a [`DirectedGraph`](crate::DirectedGraph).
///
/// `VertexId` wraps the 0-based insertion index of a vertex. Identifiers are assigned
/// sequentially by [`DirectedGraph::insert_vertex`](crate::DirectedGraph::insert_vertex) and,
/// since vertices are never removed, an identifier stays valid for the lifetime of the graph
/// that issued it.
///
/// Ordering of `VertexId`s is insertion order, which is also the tie-break order used by every
/// traversal in this crate.
///
/// # Examples
///
/// ```rust
/// use matrixgraph::{DirectedGraph, VertexId};
///
/// let mut graph = DirectedGraph::new(2)?;
/// let a = graph.insert_vertex("A")?;
/// let b = graph.insert_vertex("B")?;
///
/// assert_eq!(a, VertexId::new(0));
/// assert!(a < b);
/// # Ok::<(), matrixgraph::Error>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// Creates a new `VertexId` from a raw index value.
    ///
    /// Normal usage obtains identifiers from
    /// [`DirectedGraph::insert_vertex`](crate::DirectedGraph::insert_vertex) or
    /// [`DirectedGraph::vertex_id`](crate::DirectedGraph::vertex_id); an identifier built by
    /// hand is only meaningful if a vertex exists at that index.
    ///
    /// # Arguments
    ///
    /// * `index` - The raw vertex index (0-based)
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        VertexId(index)
    }

    /// Returns the raw index value of this vertex identifier.
    ///
    /// The index can be used directly to address per-vertex arrays such as visited flags or
    /// distance tables.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl From<usize> for VertexId {
    #[inline]
    fn from(index: usize) -> Self {
        VertexId(index)
    }
}

impl From<VertexId> for usize {
    #[inline]
    fn from(vertex: VertexId) -> Self {
        vertex.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_vertex_id_index() {
        let vertex = VertexId::new(42);
        assert_eq!(vertex.index(), 42);
    }

    #[test]
    fn test_vertex_id_ordering_follows_index() {
        let mut vertices = vec![VertexId::new(3), VertexId::new(0), VertexId::new(2)];
        vertices.sort();
        assert_eq!(
            vertices,
            vec![VertexId::new(0), VertexId::new(2), VertexId::new(3)]
        );
    }

    #[test]
    fn test_vertex_id_hash() {
        let mut set: HashSet<VertexId> = HashSet::new();
        set.insert(VertexId::new(1));
        set.insert(VertexId::new(2));
        set.insert(VertexId::new(1));

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_vertex_id_conversions() {
        let vertex: VertexId = 123usize.into();
        assert_eq!(vertex.index(), 123);

        let raw: usize = VertexId::new(789).into();
        assert_eq!(raw, 789);
    }

    #[test]
    fn test_vertex_id_formatting() {
        let vertex = VertexId::new(7);
        assert_eq!(format!("{vertex:?}"), "VertexId(7)");
        assert_eq!(format!("{vertex}"), "v7");
    }
}
