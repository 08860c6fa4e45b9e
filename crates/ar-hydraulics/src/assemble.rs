//! Turn propagated pressures into nozzle findings and hardware warnings.

use crate::network::Network;
use crate::policy::HydraulicPolicy;
use crate::propagate::PressureField;
use crate::report::{Finding, Report};

/// Compare every nozzle (project order) with its required pressure.
///
/// The achieved pressure is always recorded, even when it is 0 because the
/// nozzle was never reached.
pub fn check_nozzles(
    network: &Network<'_>,
    field: &PressureField,
    policy: &HydraulicPolicy,
    report: &mut Report,
) {
    for nozzle in network.nodes().iter().filter(|n| n.is_nozzle()) {
        let achieved_bar = network
            .vertex(&nozzle.id)
            .map_or(0.0, |v| field.at_or_zero(v));
        let required_bar = policy.required_nozzle_pressure(nozzle);

        if achieved_bar < required_bar {
            report.push(Finding::InsufficientPressure {
                node_id: nozzle.id.clone(),
                label: nozzle.label.clone(),
                achieved_bar,
                required_bar,
            });
        }
        report
            .nozzle_pressures
            .insert(nozzle.id.clone(), achieved_bar);
    }
}

/// Warn once per hose (project order) whose bore has no calibrated factor.
pub fn flag_uncalibrated_diameters(
    network: &Network<'_>,
    policy: &HydraulicPolicy,
    report: &mut Report,
) {
    for hose in &network.project().edges {
        if !policy.is_calibrated(hose.diameter_mm) {
            report.push(Finding::UncalibratedDiameter {
                edge_id: hose.id.clone(),
                diameter_mm: hose.diameter_mm,
            });
        }
    }
}

/// Copy pressures of declared nodes into the report, keyed by node id.
pub fn record_node_pressures(network: &Network<'_>, field: &PressureField, report: &mut Report) {
    for node in network.nodes() {
        if let Some(p) = network.vertex(&node.id).and_then(|v| field.get(v)) {
            report.node_pressures.insert(node.id.clone(), p);
        }
    }
}
