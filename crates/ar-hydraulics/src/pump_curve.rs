//! Pump curve interpolation.

use std::cmp::Ordering;

use ar_project::{PumpPoint, VehicleSpec};

/// A pump performance curve: discharge pressure as a function of flow.
///
/// Samples are kept sorted ascending by flow. Sorting is stable, so samples
/// that share a flow keep the order the vehicle sheet listed them in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PumpCurve {
    samples: Vec<PumpPoint>,
}

impl PumpCurve {
    pub fn new(points: &[PumpPoint]) -> Self {
        let mut samples = points.to_vec();
        samples.sort_by(|a, b| {
            a.flow_lpm
                .partial_cmp(&b.flow_lpm)
                .unwrap_or(Ordering::Equal)
        });
        Self { samples }
    }

    /// Curve of the given vehicle; no vehicle means an empty curve.
    pub fn for_vehicle(vehicle: Option<&VehicleSpec>) -> Self {
        vehicle.map_or_else(Self::default, |v| Self::new(&v.pump_curve))
    }

    pub fn samples(&self) -> &[PumpPoint] {
        &self.samples
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Discharge pressure (bar) available at `flow_lpm`.
    ///
    /// Linear between samples, flat outside the sampled range. An empty curve
    /// yields 0; callers decide what that means.
    pub fn pressure_at(&self, flow_lpm: f64) -> f64 {
        let (Some(first), Some(last)) = (self.samples.first(), self.samples.last()) else {
            return 0.0;
        };
        if flow_lpm <= first.flow_lpm {
            return first.pressure_bar;
        }

        for pair in self.samples.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if flow_lpm >= a.flow_lpm && flow_lpm <= b.flow_lpm {
                let span = b.flow_lpm - a.flow_lpm;
                // Duplicate flow samples: treat the pair as a single point
                if span == 0.0 {
                    return a.pressure_bar;
                }
                let t = (flow_lpm - a.flow_lpm) / span;
                return a.pressure_bar + t * (b.pressure_bar - a.pressure_bar);
            }
        }

        last.pressure_bar
    }
}
