//! Core graph data structures.

use ar_core::{EdgeId, VertexId};

use crate::indexing::KeyIndex;

/// A vertex in the deployment graph: one piece of equipment, or a key that
/// only shows up as an edge endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    pub id: VertexId,
    pub key: String,
    /// True when a project node declared this key, false for dangling endpoints.
    pub declared: bool,
}

/// A directed water-carrying connection between two vertices.
///
/// Parallel edges between the same pair are allowed and kept distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub id: EdgeId,
    pub from: VertexId,
    pub to: VertexId,
}

/// The graph: a validated, immutable collection of vertices and edges.
///
/// The graph stores:
/// - All vertices and edges in vectors (indexed by their IDs).
/// - Compact adjacency in both directions, in edge insertion order.
#[derive(Debug, Clone)]
pub struct Graph {
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) index: KeyIndex,

    /// Offsets for vertex->outgoing adjacency: vertex i's edges are in
    /// out_edges[out_offsets[i]..out_offsets[i+1]].
    pub(crate) out_offsets: Vec<usize>,
    pub(crate) out_edges: Vec<EdgeId>,

    /// Same layout for vertex->incoming adjacency.
    pub(crate) in_offsets: Vec<usize>,
    pub(crate) in_edges: Vec<EdgeId>,
}

impl Graph {
    /// Return all vertices.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Return all edges.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Get a vertex by ID (returns None if ID out of bounds).
    pub fn vertex_by_id(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.slot())
    }

    /// Resolve a key to its vertex ID.
    pub fn vertex(&self, key: &str) -> Option<VertexId> {
        self.index.get(key)
    }

    /// Get an edge by ID (returns None if ID out of bounds).
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.slot())
    }

    /// Edges leaving a vertex, in insertion order.
    pub fn outgoing(&self, vertex: VertexId) -> &[EdgeId] {
        Self::slice(&self.out_offsets, &self.out_edges, vertex)
    }

    /// Edges entering a vertex, in insertion order.
    pub fn incoming(&self, vertex: VertexId) -> &[EdgeId] {
        Self::slice(&self.in_offsets, &self.in_edges, vertex)
    }

    /// Outgoing adjacency looked up by key; unknown keys yield an empty slice.
    pub fn outgoing_by_key(&self, key: &str) -> &[EdgeId] {
        self.vertex(key).map_or(&[], |v| self.outgoing(v))
    }

    /// Incoming adjacency looked up by key; unknown keys yield an empty slice.
    pub fn incoming_by_key(&self, key: &str) -> &[EdgeId] {
        self.vertex(key).map_or(&[], |v| self.incoming(v))
    }

    fn slice<'a>(offsets: &[usize], flat: &'a [EdgeId], vertex: VertexId) -> &'a [EdgeId] {
        let idx = vertex.slot();
        match (offsets.get(idx), offsets.get(idx + 1)) {
            (Some(&start), Some(&end)) => &flat[start..end],
            _ => &[],
        }
    }
}
