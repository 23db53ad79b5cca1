use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every variant signals a precondition the caller violated (an unknown or duplicate vertex, a
/// full registry) or a structural property of the graph that the requested operation cannot
/// accept (a cycle where an ordering was requested). None of them are transient, retrying the
/// same call on the same graph yields the same error.
///
/// Operations that fail never leave the graph partially modified, and algorithms that fail never
/// hand back a partial result.
///
/// # Error Categories
///
/// ## Construction and Mutation Errors
/// - [`Error::InvalidCapacity`] - A graph was requested with room for zero vertices
/// - [`Error::CapacityTooLarge`] - The edge matrix for the requested capacity cannot be allocated
/// - [`Error::CapacityExceeded`] - The vertex registry is already full
/// - [`Error::DuplicateVertex`] - A vertex with the same name already exists
///
/// ## Lookup Errors
/// - [`Error::UnknownVertex`] - A vertex name could not be resolved
///
/// ## Algorithm Errors
/// - [`Error::CycleDetected`] - Topological sort found a cycle
///
/// # Examples
///
/// ```rust
/// use matrixgraph::{DirectedGraph, Error};
///
/// let mut graph = DirectedGraph::new(2)?;
/// graph.insert_vertex("A")?;
///
/// match graph.insert_edge("A", "B", 1) {
///     Err(Error::UnknownVertex(name)) => assert_eq!(name, "B"),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// # Ok::<(), matrixgraph::Error>(())
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The graph was constructed with a capacity of zero.
    ///
    /// A graph must be able to hold at least one vertex.
    #[error("Graph capacity must be at least 1")]
    InvalidCapacity,

    /// The `capacity × capacity` edge matrix overflows `usize` or cannot be allocated.
    #[error("Graph capacity {capacity} is too large to allocate")]
    CapacityTooLarge {
        /// The requested capacity
        capacity: usize,
    },

    /// The vertex registry already holds `capacity` vertices.
    ///
    /// The capacity is fixed at construction; the graph never grows beyond it.
    #[error("Graph is full, cannot insert more than {capacity} vertices")]
    CapacityExceeded {
        /// The capacity the graph was constructed with
        capacity: usize,
    },

    /// A vertex with this name is already registered.
    #[error("Vertex '{0}' already exists")]
    DuplicateVertex(String),

    /// No vertex with this name is registered.
    ///
    /// Carries the name that failed to resolve. When both endpoints of an edge are missing,
    /// the source is reported.
    #[error("Vertex '{0}' does not exist")]
    UnknownVertex(String),

    /// The graph contains a cycle, so no topological ordering exists.
    ///
    /// `unsorted` lists, in insertion order, every vertex that could not be placed: the
    /// vertices on a cycle and everything reachable only through one.
    #[error("Graph contains a cycle, {} vertices cannot be ordered: {}", unsorted.len(), unsorted.join(", "))]
    CycleDetected {
        /// Names of the vertices left over when no in-degree 0 vertex remained
        unsorted: Vec<String>,
    },
}
