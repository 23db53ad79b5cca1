// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # matrixgraph
//!
//! A directed, weighted graph over a fixed-capacity vertex set, stored as an adjacency
//! matrix, together with the classic traversal and ordering algorithms:
//!
//! - depth-first search (pre-order)
//! - breadth-first search (level order)
//! - topological sort with cycle detection
//! - unweighted shortest path with path reconstruction
//!
//! ## Quick Start
//!
//! ```rust
//! use matrixgraph::prelude::*;
//!
//! let mut graph = DirectedGraph::new(4)?;
//! for name in ["A", "B", "C", "D"] {
//!     graph.insert_vertex(name)?;
//! }
//! graph.insert_edge("A", "B", 3)?;
//! graph.insert_edge("A", "C", 1)?;
//! graph.insert_edge("C", "D", 7)?;
//!
//! assert_eq!(graph.dfs("A")?, ["A", "B", "C", "D"]);
//! assert_eq!(graph.top_sort()?, ["A", "B", "C", "D"]);
//!
//! let path = graph.shortest_path("A", "D")?.expect("D is reachable from A");
//! assert_eq!(path.distance(), 2);
//! assert_eq!(path.path(), ["A", "C", "D"]);
//! # Ok::<(), matrixgraph::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`graph`] - The [`DirectedGraph`] itself, its edge matrix, identifiers and the algorithms
//! - [`prelude`] - Convenient re-exports of commonly used types
//! - [`Error`] and [`Result`] - Error handling
//!
//! The public [`DirectedGraph`] API is name based: vertices are registered and referenced by
//! their string names. Underneath, each name maps to a stable [`VertexId`] (its insertion
//! position), and the algorithms in [`graph::algorithms`] work purely on those identifiers
//! through the [`GraphBase`](graph::GraphBase) and [`Successors`](graph::Successors) traits.
//!
//! ## Representation
//!
//! Edges live in a dense `capacity × capacity` matrix. This keeps edge lookup O(1) and the
//! neighbour order trivially deterministic (ascending vertex index), at the cost of O(V²)
//! memory and O(V) neighbour enumeration. It is meant for small graphs whose size is known up
//! front, not as a scalable graph store.
//!
//! Every matrix cell carries an explicit presence marker, so an edge with weight `0` (or a
//! negative weight) is still an edge.

pub(crate) mod error;

/// Graph types, storage and algorithms.
///
/// See [`graph::DirectedGraph`] for the main entry point and [`graph::algorithms`] for the
/// identifier-level traversal functions.
pub mod graph;

/// Convenient re-exports of the most commonly used types.
///
/// # Example
///
/// ```rust
/// use matrixgraph::prelude::*;
///
/// let mut graph = DirectedGraph::new(2)?;
/// let a: VertexId = graph.insert_vertex("A")?;
/// assert_eq!(a.index(), 0);
/// # Ok::<(), matrixgraph::Error>(())
/// ```
pub mod prelude;

/// Small shared helpers (DOT escaping).
pub mod utils;

/// `matrixgraph` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
/// This is used consistently throughout the crate for all fallible operations.
pub type Result<T> = std::result::Result<T, Error>;

/// `matrixgraph` Error type
///
/// Every fallible operation in this crate reports one of its variants.
pub use error::Error;

pub use graph::{DirectedGraph, EdgeMatrix, ShortestPath, VertexId};
