//! Topological sorting with deterministic tie-breaking.
//!
//! This module provides Kahn's algorithm for computing a topological ordering of a directed
//! graph. A topological ordering lists every vertex such that for every edge `(u, v)`, `u`
//! comes before `v`. One exists if and only if the graph is acyclic.
//!
//! Whenever several vertices are ready (in-degree 0) at the same time, the one with the lowest
//! [`VertexId`] is emitted first. For a given graph the result is therefore unique, and for a
//! graph whose vertices were inserted in a valid order it reproduces that insertion order.

use std::{cmp::Reverse, collections::BinaryHeap};

use crate::graph::{Predecessors, Successors, VertexId};

/// The vertices a topological sort could not place because of a cycle.
///
/// Returned by [`topological_sort`] instead of a partial ordering. `unsorted` is in ascending
/// identifier order and contains every vertex that lies on a cycle or is reachable only
/// through one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleFound {
    /// Vertices left with a non-zero in-degree once no ready vertex remained
    pub unsorted: Vec<VertexId>,
}

/// Computes the lowest-index-first topological ordering of all vertices.
///
/// # Arguments
///
/// * `graph` - The graph to sort topologically
///
/// # Returns
///
/// `Ok(Vec<VertexId>)` containing every vertex in topological order if the graph is acyclic,
/// `Err(CycleFound)` if it contains a cycle.
///
/// # Complexity
///
/// - Time: O((V + E) log V), plus the cost of enumerating adjacency
/// - Space: O(V) for the in-degree counts and the ready heap
///
/// # Algorithm
///
/// 1. Compute the in-degree of every vertex
/// 2. Seed a min-heap with every vertex of in-degree 0
/// 3. While the heap is not empty:
///    - Pop the lowest ready vertex and append it to the result
///    - Decrement the in-degree of each successor, pushing those that reach 0
/// 4. If fewer than `V` vertices were emitted the remainder sits on or behind a cycle
///
/// # Examples
///
/// ```rust
/// use matrixgraph::{graph::algorithms::topological_sort, DirectedGraph};
///
/// // C -> A, C -> B, A -> B
/// let mut graph = DirectedGraph::new(3)?;
/// let a = graph.insert_vertex("A")?;
/// let b = graph.insert_vertex("B")?;
/// let c = graph.insert_vertex("C")?;
/// graph.insert_edge("C", "A", 1)?;
/// graph.insert_edge("C", "B", 1)?;
/// graph.insert_edge("A", "B", 1)?;
///
/// assert_eq!(topological_sort(&graph), Ok(vec![c, a, b]));
/// # Ok::<(), matrixgraph::Error>(())
/// ```
pub fn topological_sort<G>(graph: &G) -> Result<Vec<VertexId>, CycleFound>
where
    G: Successors + Predecessors,
{
    let vertex_count = graph.vertex_count();
    if vertex_count == 0 {
        return Ok(Vec::new());
    }

    let mut in_degree: Vec<usize> = vec![0; vertex_count];
    for vertex in graph.vertex_ids() {
        in_degree[vertex.index()] = graph.predecessors(vertex).count();
    }

    let mut ready: BinaryHeap<Reverse<VertexId>> = graph
        .vertex_ids()
        .filter(|vertex| in_degree[vertex.index()] == 0)
        .map(Reverse)
        .collect();

    let mut result = Vec::with_capacity(vertex_count);
    while let Some(Reverse(vertex)) = ready.pop() {
        log::trace!("topological sort emits {vertex}");
        result.push(vertex);

        for succ in graph.successors(vertex) {
            in_degree[succ.index()] -= 1;
            if in_degree[succ.index()] == 0 {
                ready.push(Reverse(succ));
            }
        }
    }

    if result.len() == vertex_count {
        return Ok(result);
    }

    let unsorted = graph
        .vertex_ids()
        .filter(|vertex| in_degree[vertex.index()] > 0)
        .collect();
    Err(CycleFound { unsorted })
}

#[cfg(test)]
mod tests {
    use crate::graph::{
        algorithms::topological::{topological_sort, CycleFound},
        DirectedGraph, VertexId,
    };

    fn v(index: usize) -> VertexId {
        VertexId::new(index)
    }

    fn graph_with(names: &[&str], edges: &[(&str, &str)]) -> DirectedGraph {
        let mut graph = DirectedGraph::new(names.len().max(1)).unwrap();
        for name in names {
            graph.insert_vertex(*name).unwrap();
        }
        for (from, to) in edges {
            graph.insert_edge(from, to, 1).unwrap();
        }
        graph
    }

    #[test]
    fn test_topological_sort_empty_graph() {
        let graph = DirectedGraph::new(3).unwrap();
        assert_eq!(topological_sort(&graph), Ok(Vec::new()));
    }

    #[test]
    fn test_topological_sort_single_vertex() {
        let graph = graph_with(&["A"], &[]);
        assert_eq!(topological_sort(&graph), Ok(vec![v(0)]));
    }

    #[test]
    fn test_topological_sort_linear() {
        let graph = graph_with(&["A", "B", "C"], &[("A", "B"), ("B", "C")]);
        assert_eq!(topological_sort(&graph), Ok(vec![v(0), v(1), v(2)]));
    }

    #[test]
    fn test_topological_sort_reversed_insertion() {
        let graph = graph_with(&["C", "B", "A"], &[("A", "B"), ("B", "C")]);
        assert_eq!(topological_sort(&graph), Ok(vec![v(2), v(1), v(0)]));
    }

    #[test]
    fn test_topological_sort_lowest_index_first() {
        // D -> B and A, C independent: ready set starts as {A, C, D}
        let graph = graph_with(&["A", "B", "C", "D"], &[("D", "B")]);
        assert_eq!(topological_sort(&graph), Ok(vec![v(0), v(2), v(3), v(1)]));
    }

    #[test]
    fn test_topological_sort_newly_ready_vertex_competes_by_index() {
        // B -> A: once B is emitted, A (index 0) beats the still-ready C (index 2)
        let graph = graph_with(&["A", "B", "C"], &[("B", "A")]);
        assert_eq!(topological_sort(&graph), Ok(vec![v(1), v(0), v(2)]));
    }

    #[test]
    fn test_topological_sort_diamond_respects_edges() {
        let graph = graph_with(
            &["A", "B", "C", "D"],
            &[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")],
        );
        let order = topological_sort(&graph).unwrap();
        let pos = |n: VertexId| order.iter().position(|&x| x == n).unwrap();
        for (from, to) in graph.matrix().edges().map(|(f, t, _)| (f, t)) {
            assert!(pos(from) < pos(to));
        }
    }

    #[test]
    fn test_topological_sort_simple_cycle() {
        let graph = graph_with(&["A", "B", "C"], &[("A", "B"), ("B", "C"), ("C", "A")]);
        assert_eq!(
            topological_sort(&graph),
            Err(CycleFound {
                unsorted: vec![v(0), v(1), v(2)]
            })
        );
    }

    #[test]
    fn test_topological_sort_self_loop() {
        let graph = graph_with(&["A", "B"], &[("A", "A"), ("B", "A")]);
        assert_eq!(
            topological_sort(&graph),
            Err(CycleFound {
                unsorted: vec![v(0)]
            })
        );
    }

    #[test]
    fn test_topological_sort_partial_cycle() {
        // A -> B -> C -> D -> B, plus D -> E downstream of the cycle
        let graph = graph_with(
            &["A", "B", "C", "D", "E"],
            &[("A", "B"), ("B", "C"), ("C", "D"), ("D", "B"), ("D", "E")],
        );
        assert_eq!(
            topological_sort(&graph),
            Err(CycleFound {
                unsorted: vec![v(1), v(2), v(3), v(4)]
            })
        );
    }

    #[test]
    fn test_topological_sort_deep_dag() {
        let names: Vec<String> = (0..100).map(|i| format!("n{i}")).collect();
        let mut graph = DirectedGraph::new(100).unwrap();
        for name in &names {
            graph.insert_vertex(name.as_str()).unwrap();
        }
        for pair in names.windows(2) {
            graph.insert_edge(&pair[0], &pair[1], 1).unwrap();
        }

        let order = topological_sort(&graph).unwrap();
        let expected: Vec<VertexId> = (0..100).map(VertexId::new).collect();
        assert_eq!(order, expected);
    }
}
