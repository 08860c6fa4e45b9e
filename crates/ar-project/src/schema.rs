//! Project schema definitions.
//!
//! Field names follow the JSON documents exchanged with the planning UI
//! (camelCase). Decorative fields such as positions and geometry are carried
//! through untouched.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
    pub nodes: Vec<NodeDef>,
    pub edges: Vec<EdgeDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<String>,
}

impl Project {
    /// Create an empty project with a fresh id and both timestamps set to now.
    pub fn new(name: impl Into<String>) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            created_at: now.clone(),
            updated_at: now,
            nodes: Vec::new(),
            edges: Vec::new(),
            vehicle_id: None,
        }
    }

    /// Refresh `updated_at` after an edit.
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now().to_rfc3339();
    }

    pub fn node(&self, id: &str) -> Option<&NodeDef> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Source,
    Appliance,
    Hose,
    Nozzle,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NodeVariant {
    Carro,
    Grifo,
    Piscina,
    Manguera,
    Piton,
    Accesorio,
}

impl NodeVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeVariant::Carro => "carro",
            NodeVariant::Grifo => "grifo",
            NodeVariant::Piscina => "piscina",
            NodeVariant::Manguera => "manguera",
            NodeVariant::Piton => "piton",
            NodeVariant::Accesorio => "accesorio",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Optional numeric parameters. Their meaning depends on the node type:
/// for nozzles `pressure` is the minimum working pressure in bar.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NodeParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diameter: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flow_target_lpm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loss_coefficient: Option<f64>,
}

/// Declared port multiplicity. Advisory only, so any number is accepted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Ports {
    pub inputs: f64,
    pub outputs: f64,
}

/// Equipment condition and coupling sizes, as filled in by catalog templates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NodeStats {
    #[serde(default = "default_health")]
    pub health: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inlet_diameter_mm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outlet_diameter_mm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_outputs: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_meters: Option<f64>,
}

pub const HEALTH_OPERATIONAL: &str = "operational";

fn default_health() -> String {
    HEALTH_OPERATIONAL.to_string()
}

impl Default for NodeStats {
    fn default() -> Self {
        Self {
            health: default_health(),
            inlet_diameter_mm: None,
            outlet_diameter_mm: None,
            max_outputs: None,
            length_meters: None,
        }
    }
}

impl NodeStats {
    pub fn is_operational(&self) -> bool {
        self.health == HEALTH_OPERATIONAL
    }
}

/// Which equipment variants may be coupled downstream of a node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NodeConnections {
    #[serde(default)]
    pub compatible_accessories: Vec<NodeVariant>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NodeDef {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub label: String,
    pub position: LatLng,
    pub params: NodeParams,
    pub ports: Ports,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<NodeVariant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<NodeStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connections: Option<NodeConnections>,
}

impl NodeDef {
    pub fn is_source(&self) -> bool {
        self.node_type == NodeType::Source
    }

    pub fn is_nozzle(&self) -> bool {
        self.node_type == NodeType::Nozzle
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EdgeDef {
    pub id: String,
    pub from: String,
    pub to: String,
    pub geometry: Vec<LatLng>,
    pub length_meters: f64,
    pub diameter_mm: f64,
    pub target_flow_lpm: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PumpMode {
    Tank,
    Relay,
    Booster,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PumpPoint {
    pub flow_lpm: f64,
    pub pressure_bar: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Discharge {
    pub name: String,
    pub diameter_mm: f64,
    pub max_flow_lpm: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Intake {
    pub name: String,
    pub diameter_mm: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_vacuum_bar: Option<f64>,
}

/// Pump vehicle performance envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VehicleSpec {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    pub tank_liters: f64,
    /// Samples in any order; consumers sort before use.
    pub pump_curve: Vec<PumpPoint>,
    pub discharges: Vec<Discharge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intakes: Option<Vec<Intake>>,
    pub modes: Vec<PumpMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl VehicleSpec {
    /// Combined capacity of every discharge outlet (LPM).
    pub fn max_discharge_flow(&self) -> f64 {
        self.discharges.iter().map(|d| d.max_flow_lpm).sum()
    }
}
