//! Incremental graph builder.

use ar_core::{ArResult, EdgeId, VertexId};

use crate::graph::{Edge, Graph, Vertex};
use crate::indexing::KeyIndex;
use crate::validate;

/// Builder for constructing a graph incrementally.
///
/// Declare the project's nodes first with `declare`, then add edges with
/// `add_edge`; call `build()` to validate and freeze it into an immutable
/// `Graph`. Edge endpoints that were never declared are interned on the fly
/// and marked as undeclared.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    index: KeyIndex,
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a node key and return its vertex ID.
    ///
    /// Declaring a key twice returns the existing vertex.
    pub fn declare(&mut self, key: &str) -> VertexId {
        let id = self.vertex_for(key);
        self.vertices[id.slot()].declared = true;
        id
    }

    /// Add a directed edge between two keys and return its ID.
    pub fn add_edge(&mut self, from: &str, to: &str) -> EdgeId {
        let from = self.vertex_for(from);
        let to = self.vertex_for(to);
        let id = EdgeId::from_index(self.edges.len() as u32);
        self.edges.push(Edge { id, from, to });
        id
    }

    /// Build and validate the graph, returning an immutable `Graph`.
    ///
    /// This performs validation and constructs compact adjacency lists.
    pub fn build(self) -> ArResult<Graph> {
        validate::validate_structure(&self.vertices, &self.edges)?;

        let (out_offsets, out_edges) = Self::build_adjacency(&self.vertices, &self.edges, |e| e.from);
        let (in_offsets, in_edges) = Self::build_adjacency(&self.vertices, &self.edges, |e| e.to);

        validate::validate_adjacency(&self.edges, &out_offsets, &out_edges, |e| e.from)?;
        validate::validate_adjacency(&self.edges, &in_offsets, &in_edges, |e| e.to)?;

        Ok(Graph {
            vertices: self.vertices,
            edges: self.edges,
            index: self.index,
            out_offsets,
            out_edges,
            in_offsets,
            in_edges,
        })
    }

    fn vertex_for(&mut self, key: &str) -> VertexId {
        let id = self.index.intern(key);
        if id.slot() == self.vertices.len() {
            self.vertices.push(Vertex {
                id,
                key: key.to_string(),
                declared: false,
            });
        }
        id
    }

    /// Build compact adjacency lists: for each vertex, collect the edges whose
    /// `endpoint` is that vertex, preserving edge insertion order.
    fn build_adjacency(
        vertices: &[Vertex],
        edges: &[Edge],
        endpoint: impl Fn(&Edge) -> VertexId,
    ) -> (Vec<usize>, Vec<EdgeId>) {
        // Counting sort keeps each bucket in edge order
        let mut counts = vec![0usize; vertices.len()];
        for edge in edges {
            counts[endpoint(edge).slot()] += 1;
        }

        let mut offsets = Vec::with_capacity(vertices.len() + 1);
        offsets.push(0);
        for count in &counts {
            let last = offsets[offsets.len() - 1];
            offsets.push(last + count);
        }

        let mut cursor = offsets[..vertices.len()].to_vec();
        let mut flat = vec![EdgeId::from_index(0); edges.len()];
        for edge in edges {
            let slot = &mut cursor[endpoint(edge).slot()];
            flat[*slot] = edge.id;
            *slot += 1;
        }

        (offsets, flat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_basic() {
        let mut builder = GraphBuilder::new();
        let n1 = builder.declare("carro");
        let n2 = builder.declare("piton");
        let e1 = builder.add_edge("carro", "piton");

        assert_eq!(n1.index(), 0);
        assert_eq!(n2.index(), 1);
        assert_eq!(e1.index(), 0);
        assert_eq!(builder.vertices.len(), 2);
        assert_eq!(builder.edges.len(), 1);
    }

    #[test]
    fn redeclare_returns_same_vertex() {
        let mut builder = GraphBuilder::new();
        let a = builder.declare("a");
        assert_eq!(builder.declare("a"), a);
        assert_eq!(builder.vertices.len(), 1);
    }

    #[test]
    fn dangling_endpoints_are_undeclared() {
        let mut builder = GraphBuilder::new();
        builder.declare("a");
        builder.add_edge("a", "ghost");
        let graph = builder.build().unwrap();

        let ghost = graph.vertex("ghost").unwrap();
        assert!(!graph.vertex_by_id(ghost).unwrap().declared);
        assert_eq!(graph.incoming(ghost).len(), 1);
    }

    #[test]
    fn late_declaration_marks_endpoint_declared() {
        let mut builder = GraphBuilder::new();
        builder.add_edge("a", "b");
        builder.declare("b");
        let graph = builder.build().unwrap();
        let b = graph.vertex("b").unwrap();
        assert!(graph.vertex_by_id(b).unwrap().declared);
        assert!(!graph.vertex_by_id(graph.vertex("a").unwrap()).unwrap().declared);
    }

    #[test]
    fn builder_build_simple() {
        let mut builder = GraphBuilder::new();
        let n1 = builder.declare("N1");
        let n2 = builder.declare("N2");
        builder.add_edge("N1", "N2");

        let graph = builder.build().unwrap();
        assert_eq!(graph.vertices().len(), 2);
        assert_eq!(graph.edges().len(), 1);

        assert_eq!(graph.outgoing(n1).len(), 1);
        assert_eq!(graph.incoming(n1).len(), 0);
        assert_eq!(graph.outgoing(n2).len(), 0);
        assert_eq!(graph.incoming(n2).len(), 1);
    }
}
