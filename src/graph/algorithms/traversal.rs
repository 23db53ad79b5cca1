//! Graph traversal algorithms.
//!
//! This module provides depth-first and breadth-first traversal over any graph implementing
//! [`Successors`]. Both return lazy iterators, so a caller that only needs a prefix of the
//! visitation order does not pay for the whole walk.
//!
//! # Algorithms
//!
//! - [`dfs`] - Depth-first search, pre-order, identical to the recursive formulation
//! - [`bfs`] - Breadth-first search, level order
//!
//! Successors are explored in the order the graph yields them, ascending [`VertexId`] for the
//! adjacency matrix, so the output of both traversals is fully deterministic.

use std::collections::VecDeque;

use crate::graph::{Successors, VertexId};

/// Iterator for depth-first traversal of a graph.
///
/// Yields vertices in pre-order. The traversal is iterative, using an explicit stack, but
/// produces exactly the order of the textbook recursive walk: visit a vertex, then fully
/// explore each unvisited successor in turn before moving to the next one. A vertex is marked
/// visited when it is yielded, not when it is pushed, which is what keeps the two orders equal.
///
/// Created by [`dfs`].
pub struct DfsIterator<'g, G: Successors> {
    graph: &'g G,
    stack: Vec<VertexId>,
    visited: Vec<bool>,
}

impl<'g, G: Successors> DfsIterator<'g, G> {
    fn new(graph: &'g G, start: VertexId) -> Self {
        let vertex_count = graph.vertex_count();
        if start.index() >= vertex_count {
            return DfsIterator {
                graph,
                stack: Vec::new(),
                visited: Vec::new(),
            };
        }

        DfsIterator {
            graph,
            stack: vec![start],
            visited: vec![false; vertex_count],
        }
    }
}

impl<G: Successors> Iterator for DfsIterator<'_, G> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let vertex = self.stack.pop()?;
            if self.visited[vertex.index()] {
                continue;
            }
            self.visited[vertex.index()] = true;

            // Reverse push so the lowest successor is popped first
            let successors: Vec<VertexId> = self.graph.successors(vertex).collect();
            for &succ in successors.iter().rev() {
                if !self.visited[succ.index()] {
                    self.stack.push(succ);
                }
            }

            return Some(vertex);
        }
    }
}

/// Performs a depth-first traversal starting from the given vertex.
///
/// Returns an iterator yielding every vertex reachable from `start` exactly once, in
/// pre-order. Cycles are handled through a visited set. If `start` is not a vertex of the
/// graph the iterator is empty.
///
/// # Complexity
///
/// - Time: O(V + E) successor visits (O(V²) on an adjacency matrix)
/// - Space: O(V + E) for the visited flags and the stack
///
/// # Examples
///
/// ```rust
/// use matrixgraph::{graph::algorithms::dfs, DirectedGraph, VertexId};
///
/// let mut graph = DirectedGraph::new(4)?;
/// let a = graph.insert_vertex("A")?;
/// let b = graph.insert_vertex("B")?;
/// let c = graph.insert_vertex("C")?;
/// let d = graph.insert_vertex("D")?;
/// graph.insert_edge("A", "B", 1)?;
/// graph.insert_edge("A", "C", 1)?;
/// graph.insert_edge("B", "D", 1)?;
///
/// let order: Vec<VertexId> = dfs(&graph, a).collect();
/// assert_eq!(order, vec![a, b, d, c]);
/// # Ok::<(), matrixgraph::Error>(())
/// ```
pub fn dfs<G: Successors>(graph: &G, start: VertexId) -> DfsIterator<'_, G> {
    DfsIterator::new(graph, start)
}

/// Iterator for breadth-first traversal of a graph.
///
/// Vertices are marked visited as they are enqueued, so siblings appear in the order they were
/// discovered and no vertex is queued twice.
///
/// Created by [`bfs`].
pub struct BfsIterator<'g, G: Successors> {
    graph: &'g G,
    queue: VecDeque<VertexId>,
    visited: Vec<bool>,
}

impl<'g, G: Successors> BfsIterator<'g, G> {
    fn new(graph: &'g G, start: VertexId) -> Self {
        let vertex_count = graph.vertex_count();
        if start.index() >= vertex_count {
            return BfsIterator {
                graph,
                queue: VecDeque::new(),
                visited: Vec::new(),
            };
        }

        let mut visited = vec![false; vertex_count];
        visited[start.index()] = true;

        let mut queue = VecDeque::new();
        queue.push_back(start);

        BfsIterator {
            graph,
            queue,
            visited,
        }
    }
}

impl<G: Successors> Iterator for BfsIterator<'_, G> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        let vertex = self.queue.pop_front()?;

        for succ in self.graph.successors(vertex) {
            if !self.visited[succ.index()] {
                self.visited[succ.index()] = true;
                self.queue.push_back(succ);
            }
        }

        Some(vertex)
    }
}

/// Performs a breadth-first traversal starting from the given vertex.
///
/// Returns an iterator yielding every vertex reachable from `start` exactly once, closest
/// first. If `start` is not a vertex of the graph the iterator is empty.
///
/// # Complexity
///
/// - Time: O(V + E) successor visits (O(V²) on an adjacency matrix)
/// - Space: O(V) for the visited flags and the queue
///
/// # Examples
///
/// ```rust
/// use matrixgraph::{graph::algorithms::bfs, DirectedGraph, VertexId};
///
/// let mut graph = DirectedGraph::new(4)?;
/// let a = graph.insert_vertex("A")?;
/// let b = graph.insert_vertex("B")?;
/// let c = graph.insert_vertex("C")?;
/// let d = graph.insert_vertex("D")?;
/// graph.insert_edge("A", "B", 1)?;
/// graph.insert_edge("A", "C", 1)?;
/// graph.insert_edge("B", "D", 1)?;
///
/// let order: Vec<VertexId> = bfs(&graph, a).collect();
/// assert_eq!(order, vec![a, b, c, d]);
/// # Ok::<(), matrixgraph::Error>(())
/// ```
pub fn bfs<G: Successors>(graph: &G, start: VertexId) -> BfsIterator<'_, G> {
    BfsIterator::new(graph, start)
}
