//! ar-hydraulics: feasibility engine for firefighting water-delivery layouts.
//!
//! Given a deployment project (equipment nodes joined by hoses) and an optional
//! pump vehicle, decides whether the layout can deliver the planned flows at
//! working pressure:
//! - Flow balance: no node sends out more than it receives; sources stay
//!   within the vehicle's discharge capacity
//! - Pressure: pump curve at the source, friction loss along each hose,
//!   required pressure at every nozzle
//! - Hardware: hose bores without a calibrated loss factor
//!
//! A separate [`audit`] pass reports equipment coupling problems.
//!
//! # Example
//!
//! ```
//! use ar_hydraulics::validate;
//! use ar_project::{EdgeDef, LatLng, NodeDef, NodeParams, NodeType, Ports, Project};
//!
//! let node = |id: &str, node_type| NodeDef {
//!     id: id.into(),
//!     node_type,
//!     label: id.into(),
//!     position: LatLng::default(),
//!     params: NodeParams::default(),
//!     ports: Ports::default(),
//!     variant: None,
//!     stats: None,
//!     connections: None,
//! };
//!
//! let mut project = Project::new("Ataque");
//! project.nodes = vec![node("carro", NodeType::Source), node("piton", NodeType::Nozzle)];
//! project.edges = vec![EdgeDef {
//!     id: "linea".into(),
//!     from: "carro".into(),
//!     to: "piton".into(),
//!     geometry: vec![],
//!     length_meters: 100.0,
//!     diameter_mm: 45.0,
//!     target_flow_lpm: 500.0,
//! }];
//!
//! let result = validate(&project, None);
//! assert!(result.errors.is_empty());
//! assert!((result.pressure_at("piton") - 7.7).abs() < 1e-9);
//! ```

pub mod assemble;
pub mod audit;
pub mod balance;
pub mod engine;
pub mod friction;
pub mod network;
pub mod policy;
pub mod propagate;
pub mod pump_curve;
pub mod report;

#[cfg(test)]
mod testing;

pub use audit::{Advisory, audit_connections, can_couple};
pub use engine::{assess, validate, validate_json, validate_with_policy};
pub use network::Network;
pub use policy::{HydraulicPolicy, LossFactor, PolicyError};
pub use propagate::{PressureField, PrimarySource, propagate, select_primary_source};
pub use pump_curve::PumpCurve;
pub use report::{Finding, Report, Severity, ValidationResult};
