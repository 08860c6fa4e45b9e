//! Fixture builders shared by the unit tests.

use ar_project::{
    Discharge, EdgeDef, LatLng, NodeDef, NodeParams, NodeType, Ports, Project, PumpMode, PumpPoint,
    VehicleSpec,
};

/// A node labelled with its own id.
pub fn node(id: &str, node_type: NodeType) -> NodeDef {
    NodeDef {
        id: id.to_string(),
        node_type,
        label: id.to_string(),
        position: LatLng::default(),
        params: NodeParams::default(),
        ports: Ports::default(),
        variant: None,
        stats: None,
        connections: None,
    }
}

pub fn nozzle(id: &str, pressure: Option<f64>) -> NodeDef {
    let mut n = node(id, NodeType::Nozzle);
    n.params.pressure = pressure;
    n
}

pub fn edge(
    id: &str,
    from: &str,
    to: &str,
    length_meters: f64,
    diameter_mm: f64,
    target_flow_lpm: f64,
) -> EdgeDef {
    EdgeDef {
        id: id.to_string(),
        from: from.to_string(),
        to: to.to_string(),
        geometry: Vec::new(),
        length_meters,
        diameter_mm,
        target_flow_lpm,
    }
}

pub fn project(nodes: Vec<NodeDef>, edges: Vec<EdgeDef>) -> Project {
    let mut project = Project::new("fixture");
    project.nodes = nodes;
    project.edges = edges;
    project
}

pub fn vehicle(curve: &[(f64, f64)], discharges: &[f64]) -> VehicleSpec {
    VehicleSpec {
        id: "v".to_string(),
        name: "Fixture".to_string(),
        manufacturer: None,
        tank_liters: 3000.0,
        pump_curve: curve
            .iter()
            .map(|&(flow_lpm, pressure_bar)| PumpPoint {
                flow_lpm,
                pressure_bar,
            })
            .collect(),
        discharges: discharges
            .iter()
            .enumerate()
            .map(|(i, &max_flow_lpm)| Discharge {
                name: format!("D{i}"),
                diameter_mm: 65.0,
                max_flow_lpm,
            })
            .collect(),
        intakes: None,
        modes: vec![PumpMode::Tank],
        notes: None,
    }
}
