//! ar-core: stable foundation for armada.
//!
//! Contains:
//! - units (uom SI types + pressure readout conversions)
//! - numeric (Real + finiteness check + zero clamp)
//! - ids (compact index-based IDs for graph objects)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{ArError, ArResult};
pub use ids::*;
pub use numeric::*;
pub use units::*;
