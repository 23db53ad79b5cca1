//! Fixed-capacity directed graph with named vertices.
//!
//! This module provides [`DirectedGraph`], which owns a registry of vertex names and an
//! [`EdgeMatrix`] sized for the declared capacity. Its public API is name based; the
//! identifier-level algorithms in [`crate::graph::algorithms`] do the actual work.

use std::{collections::HashMap, fmt::Write};

use crate::{
    graph::{
        algorithms::{self, CycleFound, ShortestPath},
        matrix::EdgeMatrix,
        traits::{GraphBase, Predecessors, Successors},
        vertex::VertexId,
    },
    utils::escape_dot,
    Error, Result,
};

/// Upper bound on the registry space reserved at construction.
const REGISTRY_HINT: usize = 1024;

/// A directed, weighted graph over a fixed-capacity set of named vertices.
///
/// `DirectedGraph` stores:
///
/// - an ordered registry of unique vertex names, where insertion order assigns each vertex its
///   [`VertexId`]
/// - a `capacity × capacity` [`EdgeMatrix`] of optional `i64` weights
///
/// Vertices and edges can only be added, never removed, and the capacity never changes.
/// Failed insertions leave the graph untouched.
///
/// All algorithms are read-only: their working state (visited flags, in-degrees, distances)
/// is allocated per call, so a graph can be traversed any number of times, and read from
/// several threads at once, without interference. Results are returned as owned `String`
/// names.
///
/// # Examples
///
/// ```rust
/// use matrixgraph::DirectedGraph;
///
/// let mut graph = DirectedGraph::new(10)?;
/// for name in ["V1", "V2", "V3", "V4"] {
///     graph.insert_vertex(name)?;
/// }
/// graph.insert_edge("V1", "V2", 2)?;
/// graph.insert_edge("V1", "V4", 1)?;
/// graph.insert_edge("V2", "V4", 3)?;
/// graph.insert_edge("V4", "V3", 2)?;
///
/// assert_eq!(graph.dfs("V1")?, ["V1", "V2", "V4", "V3"]);
/// assert_eq!(graph.bfs("V1")?, ["V1", "V2", "V4", "V3"]);
/// assert_eq!(graph.top_sort()?, ["V1", "V2", "V4", "V3"]);
///
/// let path = graph.shortest_path("V1", "V3")?.expect("V3 is reachable");
/// assert_eq!(path.path(), ["V1", "V4", "V3"]);
/// # Ok::<(), matrixgraph::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DirectedGraph {
    /// Vertex names in insertion order
    vertices: Vec<String>,
    /// Name to identifier lookup
    index: HashMap<String, VertexId>,
    /// Edge weights
    matrix: EdgeMatrix,
}

impl DirectedGraph {
    /// Creates an empty graph able to hold up to `capacity` vertices.
    ///
    /// The edge matrix for the full capacity is allocated up front.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCapacity`] if `capacity` is 0, or [`Error::CapacityTooLarge`]
    /// if the `capacity × capacity` matrix cannot be allocated.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity);
        }

        let matrix = EdgeMatrix::new(capacity)?;
        // The registry grows on demand past this hint
        let hint = capacity.min(REGISTRY_HINT);
        Ok(DirectedGraph {
            vertices: Vec::with_capacity(hint),
            index: HashMap::with_capacity(hint),
            matrix,
        })
    }

    /// Returns the maximum number of vertices this graph can hold.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.matrix.dimension()
    }

    /// Returns the number of vertices inserted so far.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of distinct directed edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.matrix.edge_count()
    }

    /// Returns `true` if no vertex has been inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns `true` if the registry holds `capacity` vertices.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.vertices.len() >= self.capacity()
    }

    /// Registers a new vertex and returns its identifier.
    ///
    /// The vertex receives the next free index, which is also its row and column in the edge
    /// matrix.
    ///
    /// # Errors
    ///
    /// - [`Error::CapacityExceeded`] if the graph already holds `capacity` vertices
    /// - [`Error::DuplicateVertex`] if a vertex with the same name exists
    pub fn insert_vertex(&mut self, name: impl Into<String>) -> Result<VertexId> {
        let name = name.into();
        if self.is_full() {
            return Err(Error::CapacityExceeded {
                capacity: self.capacity(),
            });
        }
        if self.index.contains_key(&name) {
            return Err(Error::DuplicateVertex(name));
        }

        let id = VertexId::new(self.vertices.len());
        log::debug!("inserting vertex '{name}' as {id}");
        self.index.insert(name.clone(), id);
        self.vertices.push(name);
        Ok(id)
    }

    /// Inserts or overwrites the directed edge `from → to`.
    ///
    /// Any weight is accepted and any inserted edge counts as present, including weight 0.
    /// Inserting an edge that already exists replaces its weight; weights never accumulate.
    /// Self-loops are allowed.
    ///
    /// # Returns
    ///
    /// The weight previously stored for this edge, if any.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`] naming `from` if it is not registered, otherwise naming
    /// `to` if that is not registered. The matrix is not modified in either case.
    pub fn insert_edge(&mut self, from: &str, to: &str, weight: i64) -> Result<Option<i64>> {
        let source = self.resolve(from)?;
        let target = self.resolve(to)?;

        log::debug!("inserting edge '{from}' -> '{to}' with weight {weight}");
        Ok(self.matrix.set(source, target, weight))
    }

    /// Returns the identifier of the vertex named `name`.
    #[must_use]
    pub fn vertex_id(&self, name: &str) -> Option<VertexId> {
        self.index.get(name).copied()
    }

    /// Returns the name of the vertex with identifier `id`.
    #[must_use]
    pub fn vertex_name(&self, id: VertexId) -> Option<&str> {
        self.vertices.get(id.index()).map(String::as_str)
    }

    /// Returns `true` if a vertex named `name` exists.
    #[must_use]
    pub fn contains_vertex(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns every vertex with its identifier, in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &str)> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .map(|(index, name)| (VertexId::new(index), name.as_str()))
    }

    /// Returns every edge as `(from, to, weight)`, ordered by source then target index.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, i64)> + '_ {
        self.matrix.edges().map(|(from, to, weight)| {
            (
                self.vertices[from.index()].as_str(),
                self.vertices[to.index()].as_str(),
                weight,
            )
        })
    }

    /// Returns the weight of the edge `from → to`.
    ///
    /// `None` if there is no such edge or either name is unknown.
    #[must_use]
    pub fn weight(&self, from: &str, to: &str) -> Option<i64> {
        self.matrix.get(self.vertex_id(from)?, self.vertex_id(to)?)
    }

    /// Returns the underlying edge matrix.
    #[must_use]
    pub fn matrix(&self) -> &EdgeMatrix {
        &self.matrix
    }

    /// Returns an owned `capacity × capacity` snapshot of the edge matrix, row-major.
    ///
    /// Rows and columns past the last inserted vertex are all `None`.
    #[must_use]
    pub fn dump_edges(&self) -> Vec<Vec<Option<i64>>> {
        self.matrix.to_rows()
    }

    /// Renders the edge matrix as tab-separated text, `-` marking absent edges.
    ///
    /// Intended for diagnostics; the format is not stable.
    #[must_use]
    pub fn format_edges(&self) -> String {
        self.matrix.to_string()
    }

    /// Returns the successors of `vertex`, in ascending identifier order.
    pub fn successors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.matrix.successors(vertex)
    }

    /// Returns the predecessors of `vertex`, in ascending identifier order.
    pub fn predecessors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.matrix.predecessors(vertex)
    }

    /// Returns the number of edges leaving `vertex`.
    #[must_use]
    pub fn out_degree(&self, vertex: VertexId) -> usize {
        self.successors(vertex).count()
    }

    /// Returns the number of edges entering `vertex`.
    #[must_use]
    pub fn in_degree(&self, vertex: VertexId) -> usize {
        self.predecessors(vertex).count()
    }

    /// Depth-first traversal from `start`, returning vertex names in pre-order.
    ///
    /// Every vertex reachable from `start` appears exactly once. Successors are explored in
    /// insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`] if `start` is not registered.
    pub fn dfs(&self, start: &str) -> Result<Vec<String>> {
        let start = self.resolve(start)?;
        Ok(self.names(algorithms::dfs(self, start)))
    }

    /// Breadth-first traversal from `start`, returning vertex names in visitation order.
    ///
    /// Every vertex reachable from `start` appears exactly once. Successors are enqueued in
    /// insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`] if `start` is not registered.
    pub fn bfs(&self, start: &str) -> Result<Vec<String>> {
        let start = self.resolve(start)?;
        Ok(self.names(algorithms::bfs(self, start)))
    }

    /// Topologically sorts every vertex.
    ///
    /// Whenever several vertices are ready, the earliest inserted one comes first, so the
    /// result is deterministic.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CycleDetected`] if the graph contains a cycle. The error lists the
    /// vertices that could not be ordered; no partial ordering is returned.
    pub fn top_sort(&self) -> Result<Vec<String>> {
        match algorithms::topological_sort(self) {
            Ok(order) => Ok(self.names(order)),
            Err(CycleFound { unsorted }) => {
                let unsorted = self.names(unsorted);
                log::debug!("topological sort blocked by a cycle through {unsorted:?}");
                Err(Error::CycleDetected { unsorted })
            }
        }
    }

    /// Finds a path from `start` to `end` using the fewest edges.
    ///
    /// Edge weights are ignored; each edge counts as one hop.
    ///
    /// # Returns
    ///
    /// `Some(ShortestPath)` with the hop count and the names along the path (both endpoints
    /// included), or `None` if `end` cannot be reached from `start`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`] if `start` or `end` is not registered.
    pub fn shortest_path(&self, start: &str, end: &str) -> Result<Option<ShortestPath>> {
        let source = self.resolve(start)?;
        let target = self.resolve(end)?;

        let found = algorithms::shortest_path(self, source, target)
            .map(|path| path.map(|id| self.vertices[id.index()].clone()));
        if found.is_none() {
            log::debug!("no path from '{start}' to '{end}'");
        }
        Ok(found)
    }

    /// Renders the graph in Graphviz DOT format.
    ///
    /// Each vertex becomes a node labelled with its name and each edge is labelled with its
    /// weight. Vertices appear in insertion order, edges in matrix order.
    ///
    /// # Arguments
    ///
    /// * `title` - Optional graph label
    #[must_use]
    pub fn to_dot(&self, title: Option<&str>) -> String {
        let mut dot = String::new();

        dot.push_str("digraph G {\n");
        if let Some(name) = title {
            let _ = writeln!(dot, "    label=\"{}\";", escape_dot(name));
            dot.push_str("    labelloc=t;\n");
        }
        dot.push_str("    node [shape=circle];\n\n");

        for (id, name) in self.vertices() {
            let _ = writeln!(dot, "    {id} [label=\"{}\"];", escape_dot(name));
        }

        dot.push('\n');

        for (from, to, weight) in self.matrix.edges() {
            let _ = writeln!(dot, "    {from} -> {to} [label=\"{weight}\"];");
        }

        dot.push_str("}\n");
        dot
    }

    fn resolve(&self, name: &str) -> Result<VertexId> {
        self.vertex_id(name)
            .ok_or_else(|| Error::UnknownVertex(name.to_string()))
    }

    fn names(&self, ids: impl IntoIterator<Item = VertexId>) -> Vec<String> {
        ids.into_iter()
            .map(|id| self.vertices[id.index()].clone())
            .collect()
    }
}

impl GraphBase for DirectedGraph {
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertices.len()).map(VertexId::new)
    }
}

impl Successors for DirectedGraph {
    fn successors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> {
        self.matrix.successors(vertex)
    }
}

impl Predecessors for DirectedGraph {
    fn predecessors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> {
        self.matrix.predecessors(vertex)
    }
}
