//! Unweighted (hop-count) shortest paths.
//!
//! Every present edge counts as one hop regardless of its stored weight. Distances come from a
//! breadth-first search that records, for each vertex, the hop count and the vertex that first
//! reached it. A path is then rebuilt by walking those predecessor links back from the target.

use std::{collections::VecDeque, fmt};

use crate::graph::{Successors, VertexId};

/// A shortest path between two vertices, measured in hops.
///
/// `V` is the vertex representation: [`VertexId`] when produced by
/// [`shortest_path`], `String` names when produced by
/// [`DirectedGraph::shortest_path`](crate::DirectedGraph::shortest_path).
///
/// The path always starts at the source and ends at the target, both inclusive, so
/// `path().len() == distance() + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath<V = String> {
    distance: usize,
    path: Vec<V>,
}

impl<V> ShortestPath<V> {
    /// Returns the number of edges on the path.
    #[must_use]
    pub fn distance(&self) -> usize {
        self.distance
    }

    /// Returns the vertices on the path, from source to target.
    #[must_use]
    pub fn path(&self) -> &[V] {
        &self.path
    }

    /// Consumes the result and returns the path vector.
    #[must_use]
    pub fn into_path(self) -> Vec<V> {
        self.path
    }

    /// Converts every vertex on the path, keeping the distance.
    pub fn map<U>(self, f: impl FnMut(V) -> U) -> ShortestPath<U> {
        ShortestPath {
            distance: self.distance,
            path: self.path.into_iter().map(f).collect(),
        }
    }
}

impl<V: fmt::Display> fmt::Display for ShortestPath<V> {
    /// Formats as `A -> B -> C (2 hops)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, vertex) in self.path.iter().enumerate() {
            if position > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{vertex}")?;
        }
        let unit = if self.distance == 1 { "hop" } else { "hops" };
        write!(f, " ({} {unit})", self.distance)
    }
}

/// Per-vertex BFS results: hop distance and discovering vertex.
struct HopTree {
    distance: Vec<Option<usize>>,
    predecessor: Vec<Option<VertexId>>,
}

fn hop_tree<G: Successors>(graph: &G, start: VertexId) -> HopTree {
    let vertex_count = graph.vertex_count();
    let mut tree = HopTree {
        distance: vec![None; vertex_count],
        predecessor: vec![None; vertex_count],
    };
    if start.index() >= vertex_count {
        return tree;
    }

    tree.distance[start.index()] = Some(0);
    let mut queue = VecDeque::new();
    queue.push_back((start, 0usize));

    while let Some((vertex, hops)) = queue.pop_front() {
        for succ in graph.successors(vertex) {
            if tree.distance[succ.index()].is_none() {
                tree.distance[succ.index()] = Some(hops + 1);
                tree.predecessor[succ.index()] = Some(vertex);
                queue.push_back((succ, hops + 1));
            }
        }
    }

    tree
}

/// Computes the hop distance from `start` to every vertex.
///
/// Entry `i` of the result is `Some(d)` if vertex `i` is reachable in `d` hops, `None`
/// otherwise. If `start` is not a vertex of the graph every entry is `None`.
///
/// # Examples
///
/// ```rust
/// use matrixgraph::{graph::algorithms::hop_distances, DirectedGraph};
///
/// let mut graph = DirectedGraph::new(3)?;
/// let a = graph.insert_vertex("A")?;
/// graph.insert_vertex("B")?;
/// graph.insert_vertex("C")?;
/// graph.insert_edge("A", "B", 9)?;
///
/// assert_eq!(hop_distances(&graph, a), vec![Some(0), Some(1), None]);
/// # Ok::<(), matrixgraph::Error>(())
/// ```
pub fn hop_distances<G: Successors>(graph: &G, start: VertexId) -> Vec<Option<usize>> {
    hop_tree(graph, start).distance
}

/// Finds a path from `start` to `end` with the fewest edges.
///
/// Among equally short paths, the one discovered first by a breadth-first search exploring
/// successors in ascending order is returned.
///
/// # Returns
///
/// `Some(ShortestPath)` if `end` is reachable from `start`, `None` if it is not or if either
/// vertex is not part of the graph. A vertex is always reachable from itself, with distance 0.
///
/// # Complexity
///
/// - Time: O(V + E) successor visits, plus O(V) path reconstruction
/// - Space: O(V)
///
/// # Examples
///
/// ```rust
/// use matrixgraph::{graph::algorithms::shortest_path, DirectedGraph};
///
/// let mut graph = DirectedGraph::new(4)?;
/// let a = graph.insert_vertex("A")?;
/// let b = graph.insert_vertex("B")?;
/// let c = graph.insert_vertex("C")?;
/// let d = graph.insert_vertex("D")?;
/// graph.insert_edge("A", "B", 1)?;
/// graph.insert_edge("B", "C", 1)?;
/// graph.insert_edge("A", "C", 100)?;
///
/// let path = shortest_path(&graph, a, c).expect("C is reachable");
/// assert_eq!(path.distance(), 1);
/// assert_eq!(path.path(), [a, c]);
///
/// assert!(shortest_path(&graph, a, d).is_none());
/// # Ok::<(), matrixgraph::Error>(())
/// ```
pub fn shortest_path<G: Successors>(
    graph: &G,
    start: VertexId,
    end: VertexId,
) -> Option<ShortestPath<VertexId>> {
    if end.index() >= graph.vertex_count() {
        return None;
    }

    let tree = hop_tree(graph, start);
    let distance = tree.distance[end.index()]?;

    // Walk predecessors back to the start, then unwind the stack into forward order
    let mut stack = Vec::with_capacity(distance + 1);
    let mut current = end;
    stack.push(current);
    while current != start {
        current = tree.predecessor[current.index()]?;
        stack.push(current);
    }

    let mut path = Vec::with_capacity(stack.len());
    while let Some(vertex) = stack.pop() {
        path.push(vertex);
    }

    Some(ShortestPath { distance, path })
}
