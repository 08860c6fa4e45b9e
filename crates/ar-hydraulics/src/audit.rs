//! Equipment connection audit.
//!
//! Advisory checks on how equipment is coupled. These never affect the
//! hydraulic result; they point at things a crew should look at before
//! deploying.

use std::fmt;

use ar_project::NodeDef;
use serde::Serialize;

use crate::network::Network;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advisory {
    /// A node's equipment is not in operational condition.
    OutOfService {
        node_id: String,
        label: String,
        health: String,
    },

    /// Outlet and inlet sizes differ and the upstream node does not list the
    /// downstream variant as a compatible accessory.
    IncompatibleCoupling {
        edge_id: String,
        from_label: String,
        to_label: String,
        outlet_mm: f64,
        inlet_mm: f64,
    },

    OutputsExceeded {
        node_id: String,
        label: String,
        declared: f64,
        used: usize,
    },

    InputsExceeded {
        node_id: String,
        label: String,
        declared: f64,
        used: usize,
    },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::OutOfService { label, health, .. } => {
                write!(f, "Equipo {label} no operativo ({health})")
            }
            Advisory::IncompatibleCoupling {
                edge_id,
                from_label,
                to_label,
                outlet_mm,
                inlet_mm,
            } => write!(
                f,
                "Acople incompatible en {edge_id}: salida {outlet_mm} mm de {from_label} hacia entrada {inlet_mm} mm de {to_label}"
            ),
            Advisory::OutputsExceeded {
                label,
                declared,
                used,
                ..
            } => write!(f, "{label} tiene {used} salidas conectadas y declara {declared}"),
            Advisory::InputsExceeded {
                label,
                declared,
                used,
                ..
            } => write!(f, "{label} tiene {used} entradas conectadas y declara {declared}"),
        }
    }
}

/// Whether `upstream` may feed `downstream`.
///
/// Unknown sizes are accepted. Mismatched sizes are accepted only when the
/// upstream node has no accessory list, or lists the downstream variant.
pub fn can_couple(upstream: &NodeDef, downstream: &NodeDef) -> bool {
    let (Some(outlet), Some(inlet)) = (outlet_mm(upstream), inlet_mm(downstream)) else {
        return true;
    };
    if outlet == inlet {
        return true;
    }
    let allowed = upstream
        .connections
        .as_ref()
        .map(|c| c.compatible_accessories.as_slice())
        .unwrap_or_default();
    allowed.is_empty() || downstream.variant.is_some_and(|v| allowed.contains(&v))
}

fn outlet_mm(node: &NodeDef) -> Option<f64> {
    node.stats.as_ref().and_then(|s| s.outlet_diameter_mm)
}

fn inlet_mm(node: &NodeDef) -> Option<f64> {
    node.stats.as_ref().and_then(|s| s.inlet_diameter_mm)
}

/// Audit every declared node (project order), then every hose (project order).
pub fn audit_connections(network: &Network<'_>) -> Vec<Advisory> {
    let mut advisories = Vec::new();

    for node in network.nodes() {
        if let Some(stats) = node.stats.as_ref().filter(|s| !s.is_operational()) {
            advisories.push(Advisory::OutOfService {
                node_id: node.id.clone(),
                label: node.label.clone(),
                health: stats.health.clone(),
            });
        }

        let used = network.outgoing(&node.id).count();
        if used as f64 > node.ports.outputs {
            advisories.push(Advisory::OutputsExceeded {
                node_id: node.id.clone(),
                label: node.label.clone(),
                declared: node.ports.outputs,
                used,
            });
        }
        let used = network.incoming(&node.id).count();
        if used as f64 > node.ports.inputs {
            advisories.push(Advisory::InputsExceeded {
                node_id: node.id.clone(),
                label: node.label.clone(),
                declared: node.ports.inputs,
                used,
            });
        }
    }

    let project = network.project();
    for hose in &project.edges {
        let (Some(from), Some(to)) = (project.node(&hose.from), project.node(&hose.to)) else {
            continue;
        };
        if !can_couple(from, to) {
            advisories.push(Advisory::IncompatibleCoupling {
                edge_id: hose.id.clone(),
                from_label: from.label.clone(),
                to_label: to.label.clone(),
                outlet_mm: outlet_mm(from).unwrap_or_default(),
                inlet_mm: inlet_mm(to).unwrap_or_default(),
            });
        }
    }

    tracing::debug!(advisories = advisories.len(), "connection audit done");
    advisories
}
