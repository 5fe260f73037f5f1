//! All data types for the weighted digraph library.

pub mod edge;
pub mod error;
pub mod node;
pub mod position;

pub use edge::EdgeData;
pub use error::{GraphError, GraphResult};
pub use node::NodeData;
pub use position::Position;

/// Identity of a vertex, unique within one graph.
pub type NodeId = i64;

/// Value held by the algorithm scratch fields when a node has not been reached.
pub const UNVISITED: i64 = -1;

/// Weight reported by shortest-path queries when no path exists.
pub const NO_PATH: f64 = f64::INFINITY;
