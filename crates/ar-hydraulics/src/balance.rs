//! Flow balance checks: source capacity and per-node conservation.

use ar_project::VehicleSpec;

use crate::network::Network;
use crate::report::{Finding, Report};

/// Flow totals at one node (LPM).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NodeBalance {
    pub inflow_lpm: f64,
    pub outflow_lpm: f64,
}

impl NodeBalance {
    pub fn of(network: &Network<'_>, node_id: &str) -> Self {
        Self {
            inflow_lpm: network.inflow(node_id),
            outflow_lpm: network.outflow(node_id),
        }
    }

    /// Strictly more water leaves than arrives.
    pub fn is_deficit(&self) -> bool {
        self.outflow_lpm > self.inflow_lpm
    }
}

/// Record capacity and conservation errors, walking nodes in project order.
///
/// Sources are compared against the vehicle's combined discharge capacity;
/// with no vehicle (or no discharges) the capacity is unknown and unchecked.
/// Every other node must not send out more than it receives; terminals with
/// no outflow always pass.
pub fn check_flow_balance(network: &Network<'_>, vehicle: Option<&VehicleSpec>, report: &mut Report) {
    let capacity_lpm = vehicle.map_or(0.0, VehicleSpec::max_discharge_flow);

    for node in network.nodes() {
        let balance = NodeBalance::of(network, &node.id);
        if node.is_source() {
            if capacity_lpm > 0.0 && balance.outflow_lpm > capacity_lpm {
                report.push(Finding::SourceOverdrawn {
                    node_id: node.id.clone(),
                    outflow_lpm: balance.outflow_lpm,
                    capacity_lpm,
                });
            }
        } else if balance.is_deficit() {
            report.push(Finding::FlowImbalance {
                node_id: node.id.clone(),
                label: node.label.clone(),
                inflow_lpm: balance.inflow_lpm,
                outflow_lpm: balance.outflow_lpm,
            });
        }
    }
}
