//! Vertex record.

use super::{NodeId, Position, UNVISITED};

/// A vertex owned by a [`DiGraph`](crate::graph::DiGraph).
///
/// `visited`, `discovery` and `lowlink` are scratch fields written by the
/// algorithms. They are reset at the start of every run and are not part of
/// equality.
#[derive(Debug, Clone)]
pub struct NodeData {
    /// Unique identifier within the owning graph.
    pub(crate) id: NodeId,
    /// Optional location, used for plotting.
    pub(crate) pos: Option<Position>,
    /// Caller-defined payload.
    pub info: String,
    /// Caller-defined marker.
    pub tag: i64,
    pub(crate) visited: bool,
    pub(crate) discovery: i64,
    pub(crate) lowlink: i64,
}

impl NodeData {
    pub(crate) fn new(id: NodeId, pos: Option<Position>) -> Self {
        Self {
            id,
            pos,
            info: String::new(),
            tag: 0,
            visited: false,
            discovery: UNVISITED,
            lowlink: UNVISITED,
        }
    }

    /// The node identity.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The node position, if one was supplied.
    pub fn pos(&self) -> Option<Position> {
        self.pos
    }

    /// Whether the last algorithm run reached this node.
    pub fn visited(&self) -> bool {
        self.visited
    }

    /// Discovery index from the last component search, or [`UNVISITED`].
    pub fn discovery(&self) -> i64 {
        self.discovery
    }

    /// Lowlink from the last component search, or [`UNVISITED`].
    pub fn lowlink(&self) -> i64 {
        self.lowlink
    }

    pub(crate) fn reset_scratch(&mut self) {
        self.visited = false;
        self.discovery = UNVISITED;
        self.lowlink = UNVISITED;
    }
}

impl PartialEq for NodeData {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.pos == other.pos
    }
}

impl std::fmt::Display for NodeData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.pos {
            Some(pos) => write!(f, "Node {} at {}", self.id, pos),
            None => write!(f, "Node {}", self.id),
        }
    }
}
