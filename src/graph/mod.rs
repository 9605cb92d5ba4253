//! An undirected graph over a fixed set of vertices `0..vertex_count`, stored
//! as a flat adjacency matrix.
//!
//! # Examples
//!
//! ```
//! use classic_ds::graph::Graph;
//!
//! # fn main() -> classic_ds::Result<()> {
//! let mut graph = Graph::new(5)?;
//! for (u, v) in [(0, 1), (0, 4), (1, 2), (1, 3), (1, 4), (2, 3), (3, 4)] {
//!     graph.add_edge(u, v)?;
//! }
//!
//! assert_eq!(graph.depth_first_traversal(0)?.collect::<Vec<_>>(), [0, 1, 2, 3, 4]);
//! assert_eq!(graph.breadth_first_traversal(0)?.collect::<Vec<_>>(), [0, 1, 4, 2, 3]);
//!
//! // Out of range vertices are reported, not ignored.
//! assert!(graph.add_edge(0, 5).is_err());
//! # Ok(())
//! # }
//! ```

mod traversal;

use std::fmt;
use std::iter::FusedIterator;
use std::ops::Range;

use crate::error::{Error, Result};

pub use traversal::{BreadthFirst, DepthFirst};

/// Whether [`Graph::add_edge`] accepts an edge from a vertex to itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SelfLoops {
    /// `add_edge(v, v)` fails with [`Error::SelfLoop`] and the diagonal of the
    /// matrix stays empty.
    #[default]
    Reject,
    /// `add_edge(v, v)` marks `v` as adjacent to itself.
    Allow,
}

/// An undirected graph backed by a `vertex_count × vertex_count` boolean
/// matrix. The matrix is kept symmetric by every operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    vertex_count: usize,
    /// Row-major; entry `u * vertex_count + v` is the edge `(u, v)`.
    adjacency: Vec<bool>,
    self_loops: SelfLoops,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges. Self-loops
    /// are rejected.
    ///
    /// # Errors
    ///
    /// [`Error::ResourceExhausted`] if the matrix can't be allocated.
    pub fn new(vertex_count: usize) -> Result<Self> {
        Self::with_self_loops(vertex_count, SelfLoops::default())
    }

    /// Creates a graph with `vertex_count` vertices, no edges, and the given
    /// self-loop policy.
    ///
    /// # Errors
    ///
    /// [`Error::ResourceExhausted`] if the matrix can't be allocated.
    pub fn with_self_loops(vertex_count: usize, self_loops: SelfLoops) -> Result<Self> {
        let requested = vertex_count
            .checked_mul(vertex_count)
            .ok_or(Error::ResourceExhausted {
                requested: usize::MAX,
            })?;

        let mut adjacency = Vec::new();
        adjacency
            .try_reserve_exact(requested)
            .map_err(|_| Error::ResourceExhausted { requested })?;
        adjacency.resize(requested, false);

        tracing::debug!(vertex_count, ?self_loops, "created graph");
        Ok(Self {
            vertex_count,
            adjacency,
            self_loops,
        })
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Whether the graph has no vertices at all.
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    /// The vertex ids, in ascending order.
    pub fn vertices(&self) -> Range<usize> {
        0..self.vertex_count
    }

    /// The configured self-loop policy.
    pub fn self_loops(&self) -> SelfLoops {
        self.self_loops
    }

    /// Number of undirected edges. A self-loop counts once.
    pub fn edge_count(&self) -> usize {
        self.vertices()
            .map(|u| self.row(u)[u..].iter().filter(|&&adjacent| adjacent).count())
            .sum()
    }

    /// Connects `u` and `v`. Returns `true` if they weren't connected before.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidVertex`] if either vertex is out of range, and
    /// [`Error::SelfLoop`] if `u == v` under [`SelfLoops::Reject`]. The graph
    /// is unchanged in both cases.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ds::graph::Graph;
    ///
    /// let mut graph = Graph::new(2).unwrap();
    ///
    /// assert_eq!(graph.add_edge(0, 1), Ok(true));
    /// assert_eq!(graph.add_edge(1, 0), Ok(false));
    /// assert_eq!(graph.has_edge(1, 0), Ok(true));
    /// ```
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<bool> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if u == v && self.self_loops == SelfLoops::Reject {
            tracing::warn!(vertex = u, "rejected self-loop");
            return Err(Error::SelfLoop { vertex: u });
        }

        let added = !self.set_edge(u, v, true);
        tracing::trace!(u, v, added, "add edge");
        Ok(added)
    }

    /// Disconnects `u` and `v`. Returns `true` if they were connected.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidVertex`] if either vertex is out of range. The graph is
    /// unchanged.
    pub fn remove_edge(&mut self, u: usize, v: usize) -> Result<bool> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;

        let removed = self.set_edge(u, v, false);
        tracing::trace!(u, v, removed, "remove edge");
        Ok(removed)
    }

    /// Whether `u` and `v` are connected.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidVertex`] if either vertex is out of range.
    pub fn has_edge(&self, u: usize, v: usize) -> Result<bool> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        Ok(self.adjacency[self.index(u, v)])
    }

    /// The vertices adjacent to `vertex`, in ascending order.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidVertex`] if `vertex` is out of range.
    pub fn neighbors(&self, vertex: usize) -> Result<Neighbors<'_>> {
        self.check_vertex(vertex)?;
        Ok(Neighbors::new(self.row(vertex)))
    }

    /// Number of vertices adjacent to `vertex`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidVertex`] if `vertex` is out of range.
    pub fn degree(&self, vertex: usize) -> Result<usize> {
        Ok(self.neighbors(vertex)?.count())
    }

    /// Lazily walks every vertex reachable from `start`, depth first. Among
    /// the neighbors of a vertex, lower ids are explored first.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidVertex`] if `start` is out of range.
    pub fn depth_first_traversal(&self, start: usize) -> Result<DepthFirst<'_>> {
        self.check_vertex(start)?;
        tracing::debug!(start, "depth first traversal");
        Ok(DepthFirst::new(self, start))
    }

    /// Lazily walks every vertex reachable from `start` in level order.
    /// Vertices on the same level come out in ascending order of discovery.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidVertex`] if `start` is out of range.
    pub fn breadth_first_traversal(&self, start: usize) -> Result<BreadthFirst<'_>> {
        self.check_vertex(start)?;
        tracing::debug!(start, "breadth first traversal");
        Ok(BreadthFirst::new(self, start))
    }

    fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex < self.vertex_count {
            Ok(())
        } else {
            tracing::warn!(vertex, vertex_count = self.vertex_count, "invalid vertex");
            Err(Error::InvalidVertex {
                vertex,
                vertex_count: self.vertex_count,
            })
        }
    }

    fn index(&self, u: usize, v: usize) -> usize {
        u * self.vertex_count + v
    }

    /// Adjacency row of `vertex`. The caller has already bounds checked it.
    fn row(&self, vertex: usize) -> &[bool] {
        let start = self.index(vertex, 0);
        &self.adjacency[start..start + self.vertex_count]
    }

    /// Writes both symmetric entries and returns the previous state.
    fn set_edge(&mut self, u: usize, v: usize, present: bool) -> bool {
        let (uv, vu) = (self.index(u, v), self.index(v, u));
        let previous = self.adjacency[uv];
        self.adjacency[uv] = present;
        self.adjacency[vu] = present;
        previous
    }
}

/// Renders the adjacency matrix, one row per line, `1` for an edge and `0`
/// otherwise.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for u in self.vertices() {
            for (v, &adjacent) in self.row(u).iter().enumerate() {
                if v > 0 {
                    f.write_str(" ")?;
                }
                f.write_str(if adjacent { "1" } else { "0" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Ascending iterator over the neighbors of a vertex, created by
/// [`Graph::neighbors`].
#[derive(Clone, Debug)]
pub struct Neighbors<'a> {
    row: &'a [bool],
    next: usize,
}

impl<'a> Neighbors<'a> {
    fn new(row: &'a [bool]) -> Self {
        Self { row, next: 0 }
    }
}

impl Iterator for Neighbors<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let offset = self.row[self.next..].iter().position(|&adjacent| adjacent)?;
        let neighbor = self.next + offset;
        self.next = neighbor + 1;
        Some(neighbor)
    }
}

impl FusedIterator for Neighbors<'_> {}
