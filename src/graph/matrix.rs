//! Dense adjacency-matrix edge storage.
//!
//! [`EdgeMatrix`] is a square `dimension × dimension` table where cell `[from][to]` holds the
//! weight of the directed edge `from → to`. Cells carry an explicit presence marker
//! (`Option<i64>`), so every weight, including `0` and negative values, denotes a real edge and
//! `None` is the only way to say "no edge".
//!
//! The matrix is stored row-major in a single contiguous vector. Row scans, which is what
//! successor enumeration does, are therefore linear reads over one slice.
//!
//! # Trade-offs
//!
//! A dense matrix gives O(1) edge lookup and a naturally ordered neighbour scan, but costs
//! O(V²) memory regardless of how many edges exist, and O(V) per neighbour enumeration. It is
//! the right fit for small graphs whose vertex bound is known in advance.

use std::fmt;

use crate::{graph::VertexId, Error, Result};

/// A square matrix of optional edge weights.
///
/// The matrix is sized once at construction and never grows. Out-of-range coordinates are
/// treated as "no edge" by every read accessor.
///
/// # Examples
///
/// ```rust
/// use matrixgraph::{DirectedGraph, VertexId};
///
/// let mut graph = DirectedGraph::new(3)?;
/// graph.insert_vertex("A")?;
/// graph.insert_vertex("B")?;
/// graph.insert_edge("A", "B", 0)?;
///
/// let matrix = graph.matrix();
/// assert_eq!(matrix.dimension(), 3);
/// assert_eq!(matrix.get(VertexId::new(0), VertexId::new(1)), Some(0));
/// assert_eq!(matrix.get(VertexId::new(1), VertexId::new(0)), None);
/// # Ok::<(), matrixgraph::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeMatrix {
    /// Row-major cell storage, `dimension * dimension` entries
    cells: Vec<Option<i64>>,
    /// Number of rows (and columns)
    dimension: usize,
    /// Number of `Some` cells
    edge_count: usize,
}

impl EdgeMatrix {
    /// Creates an empty `dimension × dimension` matrix with no edges.
    ///
    /// # Arguments
    ///
    /// * `dimension` - Number of rows and columns
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityTooLarge`] if `dimension²` cells overflow `usize` or cannot be
    /// allocated.
    pub fn new(dimension: usize) -> Result<Self> {
        let too_large = || Error::CapacityTooLarge {
            capacity: dimension,
        };
        let len = dimension.checked_mul(dimension).ok_or_else(too_large)?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| too_large())?;
        cells.resize(len, None);

        Ok(EdgeMatrix {
            cells,
            dimension,
            edge_count: 0,
        })
    }

    /// Returns the number of rows (equivalently, columns) of the matrix.
    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the number of cells holding an edge.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn offset(&self, from: VertexId, to: VertexId) -> Option<usize> {
        if from.index() < self.dimension && to.index() < self.dimension {
            Some(from.index() * self.dimension + to.index())
        } else {
            None
        }
    }

    /// Returns the weight of the edge `from → to`, or `None` if there is no such edge.
    #[must_use]
    pub fn get(&self, from: VertexId, to: VertexId) -> Option<i64> {
        self.offset(from, to).and_then(|offset| self.cells[offset])
    }

    /// Returns `true` if the edge `from → to` exists.
    #[must_use]
    pub fn contains(&self, from: VertexId, to: VertexId) -> bool {
        self.get(from, to).is_some()
    }

    /// Stores `weight` for the edge `from → to`, returning the weight it replaced.
    ///
    /// Returns `None` without modifying anything when either coordinate is out of range; the
    /// owning graph validates coordinates before calling this.
    pub(crate) fn set(&mut self, from: VertexId, to: VertexId, weight: i64) -> Option<i64> {
        let offset = self.offset(from, to)?;
        let previous = self.cells[offset].replace(weight);
        if previous.is_none() {
            self.edge_count += 1;
        }
        previous
    }

    /// Returns row `from` as a slice of cells, or an empty slice if `from` is out of range.
    #[must_use]
    pub fn row(&self, from: VertexId) -> &[Option<i64>] {
        if from.index() < self.dimension {
            let start = from.index() * self.dimension;
            &self.cells[start..start + self.dimension]
        } else {
            &[]
        }
    }

    /// Returns the targets of every edge leaving `from`, in ascending column order.
    ///
    /// This scan order defines the neighbour order, and so the tie-break, of every traversal in
    /// this crate.
    pub fn successors(&self, from: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.row(from)
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_some())
            .map(|(column, _)| VertexId::new(column))
    }

    /// Returns the sources of every edge entering `to`, in ascending row order.
    pub fn predecessors(&self, to: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        let rows = if to.index() < self.dimension {
            self.dimension
        } else {
            0
        };
        (0..rows)
            .map(VertexId::new)
            .filter(move |&from| self.contains(from, to))
    }

    /// Returns every edge as `(from, to, weight)`, in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId, i64)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(offset, cell)| {
                cell.map(|weight| {
                    (
                        VertexId::new(offset / self.dimension),
                        VertexId::new(offset % self.dimension),
                        weight,
                    )
                })
            })
    }

    /// Returns an owned row-major copy of the matrix.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<Option<i64>>> {
        if self.dimension == 0 {
            return Vec::new();
        }
        self.cells
            .chunks(self.dimension)
            .map(<[Option<i64>]>::to_vec)
            .collect()
    }
}

impl fmt::Display for EdgeMatrix {
    /// Renders the matrix row-major, one line per row, each cell preceded by a tab.
    ///
    /// Absent edges are shown as `-`. The output is meant for people, not for parsing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for from in 0..self.dimension {
            for cell in self.row(VertexId::new(from)) {
                match cell {
                    Some(weight) => write!(f, "\t{weight}")?,
                    None => f.write_str("\t-")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
