//! Core graph structure: nodes and edges with two-way adjacency indexes.

use indexmap::IndexMap;

use crate::types::{EdgeData, NodeData, NodeId, Position};

/// Edges incident to one vertex, keyed by the neighbor's ID.
pub type Adjacency = IndexMap<NodeId, EdgeData>;

/// An in-memory directed weighted graph.
///
/// All cross references are by [`NodeId`]. Vertices and adjacency maps keep
/// insertion order, so iteration (and therefore algorithm output) is
/// deterministic for a given sequence of mutations.
#[derive(Debug, Clone, Default)]
pub struct DiGraph {
    /// All nodes, indexed by ID.
    pub(crate) nodes: IndexMap<NodeId, NodeData>,
    /// Edges leaving each node: src -> (dest -> edge).
    pub(crate) outgoing: IndexMap<NodeId, Adjacency>,
    /// Edges entering each node: dest -> (src -> edge).
    pub(crate) incoming: IndexMap<NodeId, Adjacency>,
    edge_count: usize,
    mod_count: u64,
}

impl DiGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Number of state-changing mutations applied so far.
    pub fn modification_count(&self) -> u64 {
        self.mod_count
    }

    /// Add a vertex. Returns `false` if the ID is already taken.
    pub fn add_node(&mut self, id: NodeId, pos: Option<Position>) -> bool {
        if self.nodes.contains_key(&id) {
            return false;
        }
        self.nodes.insert(id, NodeData::new(id, pos));
        self.outgoing.insert(id, Adjacency::new());
        self.incoming.insert(id, Adjacency::new());
        self.mod_count += 1;
        log::trace!("added node {}", id);
        true
    }

    /// Remove a vertex together with every edge touching it.
    ///
    /// Counts as a single modification regardless of how many edges go with it.
    pub fn remove_node(&mut self, id: NodeId) -> bool {
        if self.nodes.shift_remove(&id).is_none() {
            return false;
        }

        let out = self.outgoing.shift_remove(&id).unwrap_or_default();
        for dest in out.keys() {
            if let Some(adj) = self.incoming.get_mut(dest) {
                adj.shift_remove(&id);
            }
        }
        let inc = self.incoming.shift_remove(&id).unwrap_or_default();
        for src in inc.keys() {
            if let Some(adj) = self.outgoing.get_mut(src) {
                adj.shift_remove(&id);
            }
        }

        self.edge_count -= out.len() + inc.len();
        self.mod_count += 1;
        log::trace!(
            "removed node {} with {} edges",
            id,
            out.len() + inc.len()
        );
        true
    }

    /// Connect `src` to `dest`.
    ///
    /// Returns `true` only when a new edge is created. Re-adding an existing
    /// pair with a different weight updates the weight in place and returns
    /// `false`; the update still counts as a modification. Negative or
    /// non-finite weights, self-loops and missing endpoints are rejected.
    pub fn add_edge(&mut self, src: NodeId, dest: NodeId, weight: f64) -> bool {
        if !(weight >= 0.0 && weight.is_finite()) || src == dest {
            return false;
        }
        if !self.nodes.contains_key(&src) || !self.nodes.contains_key(&dest) {
            return false;
        }

        let Some(out) = self.outgoing.get_mut(&src) else {
            return false;
        };
        if let Some(existing) = out.get_mut(&dest) {
            if existing.weight == weight {
                return false;
            }
            existing.weight = weight;
            if let Some(back) = self
                .incoming
                .get_mut(&dest)
                .and_then(|adj| adj.get_mut(&src))
            {
                back.weight = weight;
            }
            self.mod_count += 1;
            log::trace!("updated edge {} -> {} to weight {}", src, dest, weight);
            return false;
        }

        let edge = EdgeData::new(src, dest, weight);
        out.insert(dest, edge.clone());
        self.incoming.entry(dest).or_default().insert(src, edge);
        self.edge_count += 1;
        self.mod_count += 1;
        log::trace!("added edge {} -> {} ({})", src, dest, weight);
        true
    }

    /// Remove the edge from `src` to `dest`. Returns `false` if there is none.
    pub fn remove_edge(&mut self, src: NodeId, dest: NodeId) -> bool {
        let removed = self
            .outgoing
            .get_mut(&src)
            .and_then(|adj| adj.shift_remove(&dest))
            .is_some();
        if !removed {
            return false;
        }
        if let Some(adj) = self.incoming.get_mut(&dest) {
            adj.shift_remove(&src);
        }
        self.edge_count -= 1;
        self.mod_count += 1;
        log::trace!("removed edge {} -> {}", src, dest);
        true
    }

    /// Whether the vertex exists.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Whether an edge from `src` to `dest` exists.
    pub fn has_edge(&self, src: NodeId, dest: NodeId) -> bool {
        self.get_edge(src, dest).is_some()
    }

    /// Get the edge from `src` to `dest`.
    pub fn get_edge(&self, src: NodeId, dest: NodeId) -> Option<&EdgeData> {
        self.outgoing.get(&src)?.get(&dest)
    }

    /// Get a node by ID.
    pub fn get_node(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(&id)
    }

    /// Get a node by ID for editing its payload fields.
    pub fn get_node_mut(&mut self, id: NodeId) -> Option<&mut NodeData> {
        self.nodes.get_mut(&id)
    }

    /// Set the payload string of an edge. Returns `false` if the edge is missing.
    pub fn set_edge_info(&mut self, src: NodeId, dest: NodeId, info: &str) -> bool {
        self.edit_edge(src, dest, |edge| edge.info = info.to_string())
    }

    /// Set the marker of an edge. Returns `false` if the edge is missing.
    pub fn set_edge_tag(&mut self, src: NodeId, dest: NodeId, tag: i64) -> bool {
        self.edit_edge(src, dest, |edge| edge.tag = tag)
    }

    // Payload edits are applied to both adjacency copies of the edge.
    fn edit_edge(&mut self, src: NodeId, dest: NodeId, edit: impl Fn(&mut EdgeData)) -> bool {
        let Some(edge) = self.outgoing.get_mut(&src).and_then(|a| a.get_mut(&dest)) else {
            return false;
        };
        edit(edge);
        if let Some(back) = self.incoming.get_mut(&dest).and_then(|a| a.get_mut(&src)) {
            edit(back);
        }
        true
    }

    /// Edges leaving `id`, keyed by destination. `None` if the node is absent.
    pub fn all_out_edges_of_node(&self, id: NodeId) -> Option<&Adjacency> {
        self.outgoing.get(&id)
    }

    /// Edges entering `id`, keyed by source. `None` if the node is absent.
    pub fn all_in_edges_of_node(&self, id: NodeId) -> Option<&Adjacency> {
        self.incoming.get(&id)
    }

    /// All vertices in insertion order.
    pub fn get_all_v(&self) -> &IndexMap<NodeId, NodeData> {
        &self.nodes
    }

    /// All vertex IDs in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    /// Every edge, grouped by source in vertex order.
    pub fn edges(&self) -> impl Iterator<Item = &EdgeData> + '_ {
        self.outgoing.values().flat_map(|adj| adj.values())
    }

    /// Clear the algorithm scratch fields on every node.
    pub fn reset_scratch(&mut self) {
        for node in self.nodes.values_mut() {
            node.reset_scratch();
        }
    }
}

/// Structural equality: same vertices (ID and position) and same weighted
/// edges. Modification counters and payloads are ignored.
impl PartialEq for DiGraph {
    fn eq(&self, other: &Self) -> bool {
        if self.node_count() != other.node_count() || self.edge_count != other.edge_count {
            return false;
        }
        let same_nodes = self
            .nodes
            .iter()
            .all(|(id, node)| other.nodes.get(id) == Some(node));
        same_nodes
            && self
                .edges()
                .all(|e| other.get_edge(e.src, e.dest).map(|o| o.weight) == Some(e.weight))
    }
}

impl std::fmt::Display for DiGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "DiGraph[nodes: {}, edges: {}, mc: {}]",
            self.node_count(),
            self.edge_count,
            self.mod_count
        )
    }
}
