//! Directed weighted arc.

use super::NodeId;

/// A directed relationship between two vertices.
#[derive(Debug, Clone)]
pub struct EdgeData {
    /// Source node ID.
    pub(crate) src: NodeId,
    /// Destination node ID.
    pub(crate) dest: NodeId,
    /// Non-negative cost of traversing the edge.
    pub(crate) weight: f64,
    /// Caller-defined payload.
    pub info: String,
    /// Caller-defined marker.
    pub tag: i64,
}

impl EdgeData {
    pub(crate) fn new(src: NodeId, dest: NodeId, weight: f64) -> Self {
        Self {
            src,
            dest,
            weight,
            info: String::new(),
            tag: 0,
        }
    }

    /// Source node ID.
    pub fn src(&self) -> NodeId {
        self.src
    }

    /// Destination node ID.
    pub fn dest(&self) -> NodeId {
        self.dest
    }

    /// Edge weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl PartialEq for EdgeData {
    fn eq(&self, other: &Self) -> bool {
        self.src == other.src && self.dest == other.dest && self.weight == other.weight
    }
}

impl std::fmt::Display for EdgeData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} ({})", self.src, self.dest, self.weight)
    }
}
