//! Graph validation logic.

use ar_core::{ArError, ArResult, EdgeId, VertexId};

use crate::error::GraphError;
use crate::graph::{Edge, Vertex};

/// Validate the graph structure: IDs match their slots and every edge endpoint exists.
pub(crate) fn validate_structure(vertices: &[Vertex], edges: &[Edge]) -> ArResult<()> {
    for (i, vertex) in vertices.iter().enumerate() {
        if vertex.id.slot() != i {
            return Err(ArError::Invariant {
                what: format!("vertex {} stored at slot {}", vertex.id, i),
            });
        }
    }

    for (i, edge) in edges.iter().enumerate() {
        if edge.id.slot() != i {
            return Err(GraphError::MisplacedEdge {
                edge: edge.id,
                slot: i,
            }
            .into());
        }
        for vertex in [edge.from, edge.to] {
            if vertex.slot() >= vertices.len() {
                return Err(GraphError::InvalidVertexRef {
                    edge: edge.id,
                    vertex,
                }
                .into());
            }
        }
    }

    Ok(())
}

/// Validate one direction of adjacency: every edge is listed exactly once,
/// under the vertex it actually touches.
pub(crate) fn validate_adjacency(
    edges: &[Edge],
    offsets: &[usize],
    flat: &[EdgeId],
    endpoint: impl Fn(&Edge) -> VertexId,
) -> ArResult<()> {
    if flat.len() != edges.len() {
        return Err(ArError::Invariant {
            what: format!(
                "adjacency lists {} edges, graph has {}",
                flat.len(),
                edges.len()
            ),
        });
    }

    let mut seen = vec![false; edges.len()];
    for (slot, window) in offsets.windows(2).enumerate() {
        let vertex = VertexId::from_index(slot as u32);
        for &edge_id in &flat[window[0]..window[1]] {
            let edge = edges.get(edge_id.slot()).ok_or(ArError::IndexOob {
                what: "adjacency edge",
                index: edge_id.slot(),
                len: edges.len(),
            })?;
            if endpoint(edge) != vertex || seen[edge_id.slot()] {
                return Err(GraphError::InconsistentAdjacency {
                    edge: edge_id,
                    vertex,
                }
                .into());
            }
            seen[edge_id.slot()] = true;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertex(i: u32, key: &str) -> Vertex {
        Vertex {
            id: VertexId::from_index(i),
            key: key.to_string(),
            declared: true,
        }
    }

    #[test]
    fn rejects_edge_to_missing_vertex() {
        let vertices = vec![vertex(0, "a")];
        let edges = vec![Edge {
            id: EdgeId::from_index(0),
            from: VertexId::from_index(0),
            to: VertexId::from_index(3),
        }];
        let err = validate_structure(&vertices, &edges).unwrap_err();
        assert!(err.to_string().contains("non-existent vertex"));
    }

    #[test]
    fn rejects_misfiled_adjacency() {
        let edges = vec![Edge {
            id: EdgeId::from_index(0),
            from: VertexId::from_index(0),
            to: VertexId::from_index(1),
        }];
        // Edge listed under vertex 1 instead of vertex 0
        let offsets = vec![0, 0, 1];
        let flat = vec![EdgeId::from_index(0)];
        assert!(validate_adjacency(&edges, &offsets, &flat, |e| e.from).is_err());
        let offsets = vec![0, 1, 1];
        assert!(validate_adjacency(&edges, &offsets, &flat, |e| e.from).is_ok());
    }
}
