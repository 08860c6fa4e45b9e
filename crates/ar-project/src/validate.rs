//! Structural validation of projects and vehicles.
//!
//! This is the shape check that runs before any hydraulic evaluation. A
//! project that fails here is rejected as a whole; the hydraulic engine only
//! ever sees projects that pass.

use crate::schema::{EdgeDef, NodeDef, Project, VehicleSpec};
use ar_core::{ArError, ensure_finite};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum StructureError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{context}: {source}")]
    NonFinite {
        context: String,
        #[source]
        source: ArError,
    },
}

pub fn validate_project(project: &Project) -> Result<(), StructureError> {
    let mut node_ids = HashSet::new();
    for node in &project.nodes {
        if !node_ids.insert(node.id.as_str()) {
            return Err(StructureError::DuplicateId {
                id: node.id.clone(),
                context: format!("project '{}' nodes", project.name),
            });
        }
        validate_node(node)?;
    }

    for edge in &project.edges {
        validate_edge(edge)?;
    }

    Ok(())
}

pub fn validate_vehicle(vehicle: &VehicleSpec) -> Result<(), StructureError> {
    let context = format!("vehicle '{}'", vehicle.id);
    validate_finite(&context, "tankLiters", vehicle.tank_liters)?;
    for point in &vehicle.pump_curve {
        validate_finite(&context, "pumpCurve flowLpm", point.flow_lpm)?;
        validate_finite(&context, "pumpCurve pressureBar", point.pressure_bar)?;
    }
    for discharge in &vehicle.discharges {
        validate_finite(
            &format!("{context} discharge '{}'", discharge.name),
            "maxFlowLpm",
            discharge.max_flow_lpm,
        )?;
    }
    Ok(())
}

fn validate_node(node: &NodeDef) -> Result<(), StructureError> {
    let context = format!("node '{}'", node.id);
    let params = &node.params;
    for (field, value) in [
        ("diameter", params.diameter),
        ("flowTargetLpm", params.flow_target_lpm),
        ("pressure", params.pressure),
        ("lossCoefficient", params.loss_coefficient),
    ] {
        if let Some(v) = value {
            validate_finite(&context, field, v)?;
        }
    }
    validate_finite(&context, "ports.inputs", node.ports.inputs)?;
    validate_finite(&context, "ports.outputs", node.ports.outputs)?;
    Ok(())
}

fn validate_edge(edge: &EdgeDef) -> Result<(), StructureError> {
    let context = format!("edge '{}'", edge.id);
    validate_finite(&context, "diameterMm", edge.diameter_mm)?;
    validate_finite(&context, "targetFlowLpm", edge.target_flow_lpm)?;
    validate_finite(&context, "lengthMeters", edge.length_meters)?;
    if edge.length_meters < 0.0 {
        return Err(StructureError::InvalidValue {
            field: format!("{context} lengthMeters"),
            value: edge.length_meters.to_string(),
            reason: "must be non-negative".to_string(),
        });
    }
    Ok(())
}

fn validate_finite(context: &str, field: &'static str, value: f64) -> Result<(), StructureError> {
    ensure_finite(value, field)
        .map(drop)
        .map_err(|source| StructureError::NonFinite {
            context: context.to_string(),
            source,
        })
}
