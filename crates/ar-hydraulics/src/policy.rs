//! Numeric policy: loss factors and the fallback values used when an input is missing.
//!
//! Every fallback has exactly one rule:
//! - loss factor: calibrated table entry for the exact nominal diameter, else
//!   [`DEFAULT_LOSS_FACTOR`]
//! - source pressure: pump curve at the source's outflow, else (curve empty or
//!   yielding 0) [`DEFAULT_SOURCE_PRESSURE_BAR`]
//! - nozzle requirement: the node's `params.pressure`, else
//!   [`DEFAULT_NOZZLE_PRESSURE_BAR`]

use std::path::Path;

use ar_project::NodeDef;
use serde::{Deserialize, Serialize};

/// Discharge pressure assumed when the pump curve gives nothing usable (bar).
pub const DEFAULT_SOURCE_PRESSURE_BAR: f64 = 8.0;

/// Minimum working pressure for a nozzle that doesn't declare one (bar).
pub const DEFAULT_NOZZLE_PRESSURE_BAR: f64 = 3.5;

/// Loss factor for hose bores without a calibrated entry.
pub const DEFAULT_LOSS_FACTOR: f64 = 0.5;

/// Calibrated loss factors: (nominal diameter mm, bar per 100 m per 1000 LPM).
pub const CALIBRATED_LOSS_FACTORS: [(f64, f64); 5] = [
    (38.0, 0.9),
    (45.0, 0.6),
    (65.0, 0.3),
    (75.0, 0.25),
    (100.0, 0.12),
];

#[derive(thiserror::Error, Debug)]
pub enum PolicyError {
    #[error("Invalid policy value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: f64,
        reason: &'static str,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LossFactor {
    pub diameter_mm: f64,
    pub factor: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HydraulicPolicy {
    pub loss_factors: Vec<LossFactor>,
    pub default_loss_factor: f64,
    pub default_source_pressure_bar: f64,
    pub default_nozzle_pressure_bar: f64,
}

impl Default for HydraulicPolicy {
    fn default() -> Self {
        Self {
            loss_factors: CALIBRATED_LOSS_FACTORS
                .iter()
                .map(|&(diameter_mm, factor)| LossFactor {
                    diameter_mm,
                    factor,
                })
                .collect(),
            default_loss_factor: DEFAULT_LOSS_FACTOR,
            default_source_pressure_bar: DEFAULT_SOURCE_PRESSURE_BAR,
            default_nozzle_pressure_bar: DEFAULT_NOZZLE_PRESSURE_BAR,
        }
    }
}

impl HydraulicPolicy {
    /// Calibrated factor for this exact nominal bore, if any.
    pub fn calibrated_factor(&self, diameter_mm: f64) -> Option<f64> {
        self.loss_factors
            .iter()
            .find(|entry| entry.diameter_mm == diameter_mm)
            .map(|entry| entry.factor)
    }

    pub fn is_calibrated(&self, diameter_mm: f64) -> bool {
        self.calibrated_factor(diameter_mm).is_some()
    }

    /// Factor used for friction loss: calibrated entry, else the default.
    pub fn loss_factor(&self, diameter_mm: f64) -> f64 {
        self.calibrated_factor(diameter_mm)
            .unwrap_or(self.default_loss_factor)
    }

    /// Pressure at the source given what the pump curve produced.
    ///
    /// A zero (or NaN) reading means "no usable curve" and falls back.
    pub fn source_pressure(&self, from_curve: f64) -> f64 {
        if from_curve == 0.0 || from_curve.is_nan() {
            self.default_source_pressure_bar
        } else {
            from_curve
        }
    }

    /// Minimum pressure a nozzle must receive.
    pub fn required_nozzle_pressure(&self, nozzle: &NodeDef) -> f64 {
        nozzle
            .params
            .pressure
            .unwrap_or(self.default_nozzle_pressure_bar)
    }

    /// Check that every number is finite and non-negative.
    pub fn validate(&self) -> Result<(), PolicyError> {
        let mut checks = vec![
            ("default_loss_factor".to_string(), self.default_loss_factor),
            (
                "default_source_pressure_bar".to_string(),
                self.default_source_pressure_bar,
            ),
            (
                "default_nozzle_pressure_bar".to_string(),
                self.default_nozzle_pressure_bar,
            ),
        ];
        for entry in &self.loss_factors {
            checks.push((format!("loss_factors[{}].factor", entry.diameter_mm), entry.factor));
            checks.push((
                format!("loss_factors[{}].diameter_mm", entry.diameter_mm),
                entry.diameter_mm,
            ));
        }

        for (field, value) in checks {
            if !value.is_finite() || value < 0.0 {
                return Err(PolicyError::InvalidValue {
                    field,
                    value,
                    reason: "must be non-negative and finite",
                });
            }
        }
        Ok(())
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, PolicyError> {
        let policy: Self = serde_yaml::from_str(content)?;
        policy.validate()?;
        Ok(policy)
    }

    /// Load a policy file; `.json` is read as JSON, anything else as YAML.
    pub fn load(path: &Path) -> Result<Self, PolicyError> {
        let content = std::fs::read_to_string(path)?;
        if path.extension().is_some_and(|ext| ext == "json") {
            let policy: Self = serde_json::from_str(&content)?;
            policy.validate()?;
            Ok(policy)
        } else {
            Self::from_yaml_str(&content)
        }
    }
}
