//! Graph algorithms over vertex identifiers.
//!
//! These functions take any graph implementing the traits in [`crate::graph`] and work purely
//! on [`VertexId`](crate::VertexId)s. [`DirectedGraph`](crate::DirectedGraph) wraps each of
//! them in a name-based method that resolves names first and reports unknown ones as errors.
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`dfs`] - Depth-first search traversal (pre-order)
//! - [`bfs`] - Breadth-first search traversal (level order)
//!
//! ## Topological Ordering
//!
//! - [`topological_sort`] - Lowest-index-first Kahn ordering, or the vertices blocked by a cycle
//!
//! ## Shortest Paths
//!
//! - [`shortest_path`] - Fewest-hops path between two vertices
//! - [`hop_distances`] - Hop distance from one vertex to all others
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | DFS/BFS | O(V + E) | Reachability, visitation order |
//! | Topological Sort | O((V + E) log V) | Dependency ordering |
//! | Shortest Path | O(V + E) | Minimum hop count and route |
//!
//! On the adjacency matrix every successor enumeration scans a full row, so `E` is
//! effectively `V²` in the bounds above.

mod shortest_path;
mod topological;
mod traversal;

pub use shortest_path::{hop_distances, shortest_path, ShortestPath};
pub use topological::{topological_sort, CycleFound};
pub use traversal::{bfs, dfs, BfsIterator, DfsIterator};
