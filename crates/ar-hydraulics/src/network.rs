//! Deployment network: a project indexed for flow and pressure queries.

use ar_core::{ArResult, EdgeId, VertexId};
use ar_graph::{Graph, GraphBuilder};
use ar_project::{EdgeDef, NodeDef, Project};

/// A project together with its adjacency index.
///
/// Vertices are declared in node order, then edges are added in edge order,
/// so `EdgeId::slot()` is the position of the edge in `project.edges` and
/// every adjacency list preserves the order edges appear in the project.
#[derive(Debug)]
pub struct Network<'a> {
    project: &'a Project,
    graph: Graph,
}

impl<'a> Network<'a> {
    pub fn index(project: &'a Project) -> ArResult<Self> {
        let mut builder = GraphBuilder::new();
        for node in &project.nodes {
            builder.declare(&node.id);
        }
        for edge in &project.edges {
            builder.add_edge(&edge.from, &edge.to);
        }
        let graph = builder.build()?;

        tracing::debug!(
            nodes = project.nodes.len(),
            edges = project.edges.len(),
            vertices = graph.vertices().len(),
            "indexed deployment network"
        );

        Ok(Self { project, graph })
    }

    pub fn project(&self) -> &'a Project {
        self.project
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn nodes(&self) -> &'a [NodeDef] {
        &self.project.nodes
    }

    pub fn vertex(&self, node_id: &str) -> Option<VertexId> {
        self.graph.vertex(node_id)
    }

    pub fn edge_def(&self, id: EdgeId) -> Option<&'a EdgeDef> {
        self.project.edges.get(id.slot())
    }

    /// Head vertex of an edge.
    pub fn target(&self, id: EdgeId) -> Option<VertexId> {
        self.graph.edge(id).map(|e| e.to)
    }

    /// Hoses leaving a vertex, in project order.
    pub fn leaving(&self, vertex: VertexId) -> impl Iterator<Item = (EdgeId, &'a EdgeDef)> {
        let edges = &self.project.edges;
        self.graph
            .outgoing(vertex)
            .iter()
            .filter_map(move |&id| edges.get(id.slot()).map(|def| (id, def)))
    }

    /// Hoses leaving the node with this id, in project order.
    pub fn outgoing(&self, node_id: &str) -> impl Iterator<Item = &'a EdgeDef> {
        let edges = &self.project.edges;
        self.graph
            .outgoing_by_key(node_id)
            .iter()
            .filter_map(move |id| edges.get(id.slot()))
    }

    /// Hoses arriving at the node with this id, in project order.
    pub fn incoming(&self, node_id: &str) -> impl Iterator<Item = &'a EdgeDef> {
        let edges = &self.project.edges;
        self.graph
            .incoming_by_key(node_id)
            .iter()
            .filter_map(move |id| edges.get(id.slot()))
    }

    /// Total target flow arriving at a node (LPM).
    pub fn inflow(&self, node_id: &str) -> f64 {
        self.incoming(node_id).map(|e| e.target_flow_lpm).sum()
    }

    /// Total target flow leaving a node (LPM).
    pub fn outflow(&self, node_id: &str) -> f64 {
        self.outgoing(node_id).map(|e| e.target_flow_lpm).sum()
    }
}
