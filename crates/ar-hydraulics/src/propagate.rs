//! Pressure propagation from the primary source.

use ar_core::{VertexId, non_negative};
use ar_project::{NodeDef, VehicleSpec};

use crate::friction::segment_loss;
use crate::network::Network;
use crate::policy::HydraulicPolicy;
use crate::pump_curve::PumpCurve;

/// The single source node that seeds pressure propagation.
#[derive(Debug, Clone, Copy)]
pub struct PrimarySource<'a> {
    pub node: &'a NodeDef,
    pub vertex: VertexId,
}

/// Pick the first source node in project order.
///
/// Other sources still take part in the balance checks but never seed
/// pressure; they are logged at debug level.
pub fn select_primary_source<'a>(network: &Network<'a>) -> Option<PrimarySource<'a>> {
    let mut sources = network.nodes().iter().filter(|n| n.is_source());
    let node = sources.next()?;

    let ignored: Vec<&str> = sources.map(|n| n.id.as_str()).collect();
    if !ignored.is_empty() {
        tracing::debug!(
            primary = %node.id,
            ?ignored,
            "additional sources are not used for pressure"
        );
    }

    let vertex = network.vertex(&node.id)?;
    Some(PrimarySource { node, vertex })
}

/// Discharge pressure at the source for its total outgoing flow.
pub fn source_pressure(
    network: &Network<'_>,
    source: &NodeDef,
    curve: &PumpCurve,
    policy: &HydraulicPolicy,
) -> f64 {
    let outflow = network.outflow(&source.id);
    let pressure = policy.source_pressure(curve.pressure_at(outflow));
    tracing::debug!(
        source = %source.id,
        outflow_lpm = outflow,
        curve_samples = curve.samples().len(),
        pressure_bar = pressure,
        "source pressure"
    );
    pressure
}

/// Pressure at each vertex the traversal reached (bar).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PressureField {
    by_vertex: Vec<Option<f64>>,
}

impl PressureField {
    fn with_vertices(count: usize) -> Self {
        Self {
            by_vertex: vec![None; count],
        }
    }

    pub fn get(&self, vertex: VertexId) -> Option<f64> {
        self.by_vertex.get(vertex.slot()).copied().flatten()
    }

    /// Pressure at a vertex, 0 when it was never reached.
    pub fn at_or_zero(&self, vertex: VertexId) -> f64 {
        self.get(vertex).unwrap_or(0.0)
    }

    pub fn is_reached(&self, vertex: VertexId) -> bool {
        self.get(vertex).is_some()
    }

    pub fn len(&self) -> usize {
        self.by_vertex.iter().filter(|p| p.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn set(&mut self, vertex: VertexId, pressure: f64) {
        if let Some(slot) = self.by_vertex.get_mut(vertex.slot()) {
            *slot = Some(pressure);
        }
    }
}

/// Walk the network depth-first from the primary source, dropping pressure
/// across each hose.
///
/// A vertex keeps the first pressure assigned to it; later edges into an
/// already reached vertex are ignored, which also makes cycles terminate.
/// Pressures never go below zero. Without a source the field is empty.
pub fn propagate(
    network: &Network<'_>,
    vehicle: Option<&VehicleSpec>,
    policy: &HydraulicPolicy,
) -> PressureField {
    let mut field = PressureField::with_vertices(network.graph().vertices().len());
    let Some(source) = select_primary_source(network) else {
        tracing::debug!("no source node; skipping pressure propagation");
        return field;
    };

    let curve = PumpCurve::for_vehicle(vehicle);
    field.set(
        source.vertex,
        source_pressure(network, source.node, &curve, policy),
    );

    // Explicit stack of (vertex, next outgoing edge) so visit order matches a
    // recursive walk without growing the call stack.
    let mut stack: Vec<(VertexId, usize)> = vec![(source.vertex, 0)];
    while let Some(frame) = stack.last_mut() {
        let (vertex, cursor) = *frame;
        let Some(&edge_id) = network.graph().outgoing(vertex).get(cursor) else {
            stack.pop();
            continue;
        };
        frame.1 += 1;

        let (Some(hose), Some(next)) = (network.edge_def(edge_id), network.target(edge_id)) else {
            continue;
        };
        if field.is_reached(next) {
            continue;
        }

        let pressure = non_negative(field.at_or_zero(vertex) - segment_loss(policy, hose));
        field.set(next, pressure);
        stack.push((next, 0));
    }

    tracing::debug!(reached = field.len(), "pressure propagation done");
    field
}
