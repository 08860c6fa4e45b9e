//! Findings and the validation result handed back to callers.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// One problem detected in a deployment.
///
/// The `Display` text is the operator-facing message, in Spanish.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Finding {
    /// The project failed structural validation; nothing else was evaluated.
    InvalidProject { reason: String },

    /// A source is asked for more flow than the vehicle's discharges deliver.
    SourceOverdrawn {
        node_id: String,
        outflow_lpm: f64,
        capacity_lpm: f64,
    },

    /// An intermediate node sends out more water than it receives.
    FlowImbalance {
        node_id: String,
        label: String,
        inflow_lpm: f64,
        outflow_lpm: f64,
    },

    InsufficientPressure {
        node_id: String,
        label: String,
        achieved_bar: f64,
        required_bar: f64,
    },

    /// A hose bore has no calibrated loss factor; the default was used.
    UncalibratedDiameter { edge_id: String, diameter_mm: f64 },
}

impl Finding {
    pub fn severity(&self) -> Severity {
        match self {
            Finding::UncalibratedDiameter { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::InvalidProject { .. } => write!(f, "Proyecto inválido"),
            Finding::SourceOverdrawn {
                outflow_lpm,
                capacity_lpm,
                ..
            } => write!(
                f,
                "Fuera de capacidad de la fuente ({outflow_lpm} LPM > {capacity_lpm} LPM)"
            ),
            Finding::FlowImbalance { label, .. } => {
                write!(f, "Sale más agua de la que entra en {label}")
            }
            Finding::InsufficientPressure {
                label,
                achieved_bar,
                required_bar,
                ..
            } => write!(
                f,
                "Presión insuficiente en boquilla {label}: {} bar < {required_bar} bar",
                one_decimal(*achieved_bar)
            ),
            Finding::UncalibratedDiameter { diameter_mm, .. } => {
                write!(f, "Diámetro {diameter_mm} mm sin coeficiente calibrado")
            }
        }
    }
}

/// Format with one decimal, rounding exact ties upward.
///
/// Only values with a fractional part of .25 or .75 sit exactly on a tie;
/// `{:.1}` alone would round those to even.
fn one_decimal(v: f64) -> String {
    let quarters = v * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        return format!("{:.1}", v + 0.05);
    }
    format!("{v:.1}")
}

/// Everything an assessment produced, before flattening to messages.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub findings: Vec<Finding>,
    /// Pressure at every nozzle, reached or not (unreached nozzles read 0).
    pub nozzle_pressures: BTreeMap<String, f64>,
    /// Pressure at every declared node the propagation reached.
    pub node_pressures: BTreeMap<String, f64>,
}

impl Report {
    /// Report for a project rejected before evaluation.
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self {
            findings: vec![Finding::InvalidProject {
                reason: reason.into(),
            }],
            ..Self::default()
        }
    }

    pub fn push(&mut self, finding: Finding) {
        tracing::debug!(severity = ?finding.severity(), "{finding}");
        self.findings.push(finding);
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| !f.is_error())
    }

    pub fn is_feasible(&self) -> bool {
        self.errors().next().is_none()
    }

    /// Flatten into the message-level result, keeping detection order.
    pub fn into_result(self) -> ValidationResult {
        let mut result = ValidationResult {
            pressure_at_nozzles: self.nozzle_pressures,
            ..ValidationResult::default()
        };
        for finding in &self.findings {
            match finding.severity() {
                Severity::Error => result.errors.push(finding.to_string()),
                Severity::Warning => result.warnings.push(finding.to_string()),
            }
        }
        result
    }
}

/// Outcome of validating one deployment.
///
/// Serialized with camelCase keys so it can be handed straight back to the
/// planning UI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub pressure_at_nozzles: BTreeMap<String, f64>,
}

impl ValidationResult {
    /// Pressure at a nozzle; unknown ids read as 0.
    pub fn pressure_at(&self, nozzle_id: &str) -> f64 {
        self.pressure_at_nozzles
            .get(nozzle_id)
            .copied()
            .unwrap_or(0.0)
    }

    pub fn is_feasible(&self) -> bool {
        self.errors.is_empty()
    }
}
