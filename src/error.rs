//! Errors reported by the graph engine.
//!
//! Every error here is reported before any state is touched, so a caller
//! receiving one can keep using the structure as if the call never happened.
//! Outcomes like "key not found" or "edge already present" are not errors and
//! are returned as `bool`/`Option` instead.

use thiserror::Error;

/// Errors returned by fallible operations in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Storage for a new structure could not be obtained. Nothing was
    /// created.
    #[error("Resource exhausted: could not allocate {requested} adjacency entries")]
    ResourceExhausted {
        /// Number of matrix entries that were requested, saturated at
        /// `usize::MAX` when the size computation itself overflowed.
        requested: usize,
    },

    /// A vertex index was outside `0..vertex_count`.
    #[error("Invalid vertex {vertex}: graph has {vertex_count} vertices")]
    InvalidVertex {
        /// The offending index.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },

    /// An edge from a vertex to itself was requested on a graph configured
    /// with [`SelfLoops::Reject`][crate::graph::SelfLoops::Reject].
    #[error("Self-loop on vertex {vertex} rejected")]
    SelfLoop {
        /// The vertex at both ends of the rejected edge.
        vertex: usize,
    },
}

/// Convenience alias used by every fallible operation in this crate.
pub type Result<T> = std::result::Result<T, Error>;
