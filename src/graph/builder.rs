//! Fluent API for building DiGraph instances.

use crate::types::{NodeId, Position};

use super::DiGraph;

/// Fluent builder for constructing a [`DiGraph`].
///
/// Nodes are added before edges regardless of call order, so an edge may be
/// declared before its endpoints.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<(NodeId, Option<Position>)>,
    edges: Vec<(NodeId, NodeId, f64)>,
}

impl GraphBuilder {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node without a position.
    pub fn node(mut self, id: NodeId) -> Self {
        self.nodes.push((id, None));
        self
    }

    /// Add a node at a position.
    pub fn node_at(mut self, id: NodeId, pos: impl Into<Position>) -> Self {
        self.nodes.push((id, Some(pos.into())));
        self
    }

    /// Add nodes `from..=to` without positions.
    pub fn nodes(mut self, from: NodeId, to: NodeId) -> Self {
        self.nodes.extend((from..=to).map(|id| (id, None)));
        self
    }

    /// Add a directed edge.
    pub fn edge(mut self, src: NodeId, dest: NodeId, weight: f64) -> Self {
        self.edges.push((src, dest, weight));
        self
    }

    /// Build the final graph. Duplicate nodes and rejected edges are skipped.
    pub fn build(self) -> DiGraph {
        let mut graph = DiGraph::new();
        for (id, pos) in self.nodes {
            if !graph.add_node(id, pos) {
                log::warn!("builder: duplicate node {} skipped", id);
            }
        }
        for (src, dest, weight) in self.edges {
            if !graph.add_edge(src, dest, weight) {
                log::warn!("builder: edge {} -> {} ({}) skipped", src, dest, weight);
            }
        }
        graph
    }
}
