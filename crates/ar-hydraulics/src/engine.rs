//! Validation entry points.
//!
//! Pipeline: structural check, index, flow balance, pressure propagation,
//! nozzle and hardware checks. Only a structural failure stops early; every
//! other finding accumulates so one call returns the full picture.

use ar_project::{Discharge, Project, PumpPoint, VehicleSpec, validate_project};
use serde::Deserialize;
use serde_json::Value;

use crate::assemble::{check_nozzles, flag_uncalibrated_diameters, record_node_pressures};
use crate::balance::check_flow_balance;
use crate::network::Network;
use crate::policy::HydraulicPolicy;
use crate::propagate::propagate;
use crate::report::{Report, ValidationResult};

/// Validate a deployment with the default policy.
pub fn validate(project: &Project, vehicle: Option<&VehicleSpec>) -> ValidationResult {
    validate_with_policy(project, vehicle, &HydraulicPolicy::default())
}

pub fn validate_with_policy(
    project: &Project,
    vehicle: Option<&VehicleSpec>,
    policy: &HydraulicPolicy,
) -> ValidationResult {
    assess(project, vehicle, policy).into_result()
}

/// Run the full pipeline and keep the typed findings.
pub fn assess(project: &Project, vehicle: Option<&VehicleSpec>, policy: &HydraulicPolicy) -> Report {
    if let Err(err) = validate_project(project) {
        tracing::warn!(project = %project.id, error = %err, "project rejected");
        return Report::invalid(err.to_string());
    }
    let network = match Network::index(project) {
        Ok(network) => network,
        Err(err) => {
            tracing::warn!(project = %project.id, error = %err, "project could not be indexed");
            return Report::invalid(err.to_string());
        }
    };

    let mut report = Report::default();
    check_flow_balance(&network, vehicle, &mut report);

    let field = propagate(&network, vehicle, policy);
    check_nozzles(&network, &field, policy, &mut report);
    flag_uncalibrated_diameters(&network, policy, &mut report);
    record_node_pressures(&network, &field, &mut report);

    tracing::debug!(
        project = %project.id,
        errors = report.errors().count(),
        warnings = report.warnings().count(),
        "validation finished"
    );
    report
}

/// The parts of a vehicle document the engine reads. Descriptive fields are
/// optional so a partial vehicle still constrains the layout.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VehicleEnvelope {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    pump_curve: Vec<PumpPoint>,
    #[serde(default)]
    discharges: Vec<DischargeEnvelope>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DischargeEnvelope {
    #[serde(default)]
    name: String,
    #[serde(default)]
    diameter_mm: f64,
    max_flow_lpm: f64,
}

impl From<VehicleEnvelope> for VehicleSpec {
    fn from(envelope: VehicleEnvelope) -> Self {
        VehicleSpec {
            id: envelope.id,
            name: envelope.name,
            manufacturer: None,
            tank_liters: 0.0,
            pump_curve: envelope.pump_curve,
            discharges: envelope
                .discharges
                .into_iter()
                .map(|d| Discharge {
                    name: d.name,
                    diameter_mm: d.diameter_mm,
                    max_flow_lpm: d.max_flow_lpm,
                })
                .collect(),
            intakes: None,
            modes: Vec::new(),
            notes: None,
        }
    }
}

/// Validate untyped JSON documents, as received from the planning UI.
///
/// A project that doesn't match the schema yields the single
/// "Proyecto inválido" error. Only `pumpCurve` and `discharges` are read
/// from the vehicle; when those can't be read the vehicle is ignored.
pub fn validate_json(project: &Value, vehicle: Option<&Value>) -> ValidationResult {
    let project = match Project::deserialize(project) {
        Ok(project) => project,
        Err(err) => {
            tracing::warn!(error = %err, "project JSON does not match schema");
            return Report::invalid(err.to_string()).into_result();
        }
    };
    let vehicle = vehicle.and_then(|value| match VehicleEnvelope::deserialize(value) {
        Ok(envelope) => Some(VehicleSpec::from(envelope)),
        Err(err) => {
            tracing::warn!(error = %err, "vehicle pump curve or discharges unreadable; ignoring it");
            None
        }
    });
    validate(&project, vehicle.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{edge, node, nozzle, project, vehicle};
    use ar_project::NodeType;
    use serde_json::json;

    #[test]
    fn reference_attack_line() {
        let p = project(
            vec![node("s", NodeType::Source), nozzle("n", Some(3.5))],
            vec![edge("e", "s", "n", 100.0, 45.0, 500.0)],
        );
        let v = vehicle(&[(0.0, 10.0), (1500.0, 6.0)], &[1500.0]);
        let result = validate(&p, Some(&v));

        assert!(result.errors.is_empty(), "{:?}", result.errors);
        assert!(result.warnings.is_empty());
        let expected = 10.0 + (500.0 / 1500.0) * (6.0 - 10.0) - 0.3;
        assert!((result.pressure_at("n") - expected).abs() < 1e-9);
        assert!((result.pressure_at("n") - 8.37).abs() < 0.01);
    }

    #[test]
    fn duplicate_node_ids_short_circuit() {
        let p = project(
            vec![node("s", NodeType::Source), node("s", NodeType::Appliance)],
            vec![edge("e", "s", "s", 10.0, 50.0, 100.0)],
        );
        let result = validate(&p, None);
        assert_eq!(result.errors, vec!["Proyecto inválido"]);
        assert!(result.warnings.is_empty());
        assert!(result.pressure_at_nozzles.is_empty());
    }

    #[test]
    fn findings_accumulate_without_stopping() {
        let p = project(
            vec![
                node("s", NodeType::Source),
                node("w", NodeType::Appliance),
                nozzle("n", Some(9.0)),
            ],
            vec![
                edge("e1", "s", "w", 100.0, 50.0, 100.0),
                edge("e2", "w", "n", 100.0, 52.0, 400.0),
            ],
        );
        let report = assess(&p, None, &HydraulicPolicy::default());
        let errors: Vec<String> = report.errors().map(ToString::to_string).collect();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0], "Sale más agua de la que entra en w");
        assert!(errors[1].starts_with("Presión insuficiente en boquilla n:"));
        assert_eq!(report.warnings().count(), 2);
    }

    #[test]
    fn second_source_is_checked_but_does_not_feed_pressure() {
        let p = project(
            vec![
                node("s1", NodeType::Source),
                node("s2", NodeType::Source),
                nozzle("n1", Some(0.0)),
                nozzle("n2", Some(0.0)),
            ],
            vec![
                edge("e1", "s1", "n1", 100.0, 45.0, 500.0),
                edge("e2", "s2", "n2", 100.0, 45.0, 1800.0),
            ],
        );
        let v = vehicle(&[(0.0, 10.0)], &[1500.0]);
        let report = assess(&p, Some(&v), &HydraulicPolicy::default());

        let errors: Vec<String> = report.errors().map(ToString::to_string).collect();
        assert_eq!(errors, vec!["Fuera de capacidad de la fuente (1800 LPM > 1500 LPM)"]);
        assert!((report.node_pressures["s1"] - 10.0).abs() < 1e-9);
        assert!(!report.node_pressures.contains_key("s2"));
        assert_eq!(report.nozzle_pressures["n2"], 0.0);
    }

    #[test]
    fn policy_overrides_fallbacks() {
        let p = project(
            vec![node("s", NodeType::Source), nozzle("n", None)],
            vec![edge("e", "s", "n", 100.0, 45.0, 500.0)],
        );
        let policy = HydraulicPolicy {
            default_source_pressure_bar: 3.0,
            default_nozzle_pressure_bar: 2.8,
            ..HydraulicPolicy::default()
        };
        let result = validate_with_policy(&p, None, &policy);
        assert!((result.pressure_at("n") - 2.7).abs() < 1e-9);
        assert_eq!(
            result.errors,
            vec!["Presión insuficiente en boquilla n: 2.7 bar < 2.8 bar"]
        );
    }

    #[test]
    fn odd_port_counts_do_not_invalidate_the_project() {
        let mut s = node("s", NodeType::Source);
        s.ports.outputs = 0.5;
        let mut n = nozzle("n", None);
        n.ports.inputs = -1.0;
        let p = project(vec![s, n], vec![edge("e", "s", "n", 100.0, 45.0, 500.0)]);
        let p_json = serde_json::to_value(&p).unwrap();

        let result = validate_json(&p_json, None);
        assert!(result.errors.is_empty(), "{:?}", result.errors);
        assert!((result.pressure_at("n") - 7.7).abs() < 1e-9);
    }

    #[test]
    fn json_shape_failure_is_invalid_project() {
        let result = validate_json(&json!({ "id": "p", "nodes": [] }), None);
        assert_eq!(result.errors, vec!["Proyecto inválido"]);
    }

    #[test]
    fn json_entry_point_matches_typed_one() {
        let p = project(
            vec![node("s", NodeType::Source), nozzle("n", Some(3.5))],
            vec![edge("e", "s", "n", 100.0, 45.0, 500.0)],
        );
        let v = vehicle(&[(0.0, 10.0), (1500.0, 6.0)], &[1500.0]);
        let typed = validate(&p, Some(&v));

        let p_json = serde_json::to_value(&p).unwrap();
        let v_json = serde_json::to_value(&v).unwrap();
        assert_eq!(validate_json(&p_json, Some(&v_json)), typed);
    }

    #[test]
    fn malformed_vehicle_json_is_ignored() {
        let p = project(vec![node("s", NodeType::Source)], vec![]);
        let p_json = serde_json::to_value(&p).unwrap();
        let result = validate_json(&p_json, Some(&json!({ "pumpCurve": "nope" })));
        assert!(result.is_feasible());
    }

    #[test]
    fn partial_vehicle_json_still_limits_the_source() {
        let p = project(
            vec![node("s", NodeType::Source), nozzle("n", None)],
            vec![edge("e", "s", "n", 100.0, 45.0, 2000.0)],
        );
        let p_json = serde_json::to_value(&p).unwrap();
        let v_json = json!({
            "pumpCurve": [
                { "flowLpm": 0, "pressureBar": 3 },
                { "flowLpm": 3000, "pressureBar": 3 }
            ],
            "discharges": [{ "maxFlowLpm": 1000 }]
        });

        let result = validate_json(&p_json, Some(&v_json));
        // 3 bar from the curve, minus 0.6 * 2.0 across the hose
        assert!((result.pressure_at("n") - 1.8).abs() < 1e-9);
        assert_eq!(
            result.errors,
            vec![
                "Fuera de capacidad de la fuente (2000 LPM > 1000 LPM)",
                "Presión insuficiente en boquilla n: 1.8 bar < 3.5 bar",
            ]
        );
    }

    #[test]
    fn vehicle_json_without_engine_fields_falls_back_to_defaults() {
        let p = project(
            vec![node("s", NodeType::Source), nozzle("n", None)],
            vec![edge("e", "s", "n", 100.0, 45.0, 500.0)],
        );
        let p_json = serde_json::to_value(&p).unwrap();
        let result = validate_json(&p_json, Some(&json!({ "id": "bx", "name": "Bomba" })));
        assert!((result.pressure_at("n") - 7.7).abs() < 1e-9);
        assert!(result.is_feasible());
    }
}
