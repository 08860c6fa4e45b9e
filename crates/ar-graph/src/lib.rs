//! ar-graph: index-based deployment graph for armada.
//!
//! Provides:
//! - String-key interning into compact vertex IDs
//! - Directed edge list with by-source / by-target adjacency
//! - Incremental graph builder with structural checks
//!
//! Vertices are keyed by the equipment id used in project files. Edges may
//! reference keys that no declared node carries; such keys still get a vertex
//! so lookups degrade to empty adjacency instead of failing.
//!
//! # Example
//!
//! ```
//! use ar_graph::GraphBuilder;
//!
//! let mut builder = GraphBuilder::new();
//! builder.declare("pump");
//! builder.declare("nozzle");
//! builder.add_edge("pump", "nozzle");
//! let graph = builder.build().unwrap();
//!
//! let pump = graph.vertex("pump").unwrap();
//! assert_eq!(graph.outgoing(pump).len(), 1);
//! assert_eq!(graph.incoming(pump).len(), 0);
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub mod indexing;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::GraphBuilder;
pub use error::GraphError;
pub use graph::{Edge, Graph, Vertex};
pub use indexing::KeyIndex;
