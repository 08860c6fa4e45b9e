//! Graph-specific error types.

use ar_core::{ArError, EdgeId, VertexId};
use thiserror::Error;

/// Graph construction and validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge refers to a vertex that doesn't exist.
    #[error("Edge {edge} refers to non-existent vertex {vertex}")]
    InvalidVertexRef { edge: EdgeId, vertex: VertexId },

    /// Edge IDs are not contiguous with their storage slots.
    #[error("Edge {edge} stored at slot {slot}")]
    MisplacedEdge { edge: EdgeId, slot: usize },

    /// Adjacency list is inconsistent (edge listed under a vertex it doesn't touch).
    #[error("Edge {edge} in vertex {vertex}'s adjacency list but doesn't reference that vertex")]
    InconsistentAdjacency { edge: EdgeId, vertex: VertexId },
}

impl From<GraphError> for ArError {
    fn from(err: GraphError) -> Self {
        ArError::Invariant {
            what: err.to_string(),
        }
    }
}
