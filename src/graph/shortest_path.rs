//! Single-pair shortest path (Dijkstra).

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};

use crate::types::{NodeId, NO_PATH};

use super::DiGraph;

/// Result of a shortest-path query.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    /// Total weight of the path, or [`NO_PATH`] when unreachable.
    pub weight: f64,
    /// Node IDs from source to destination, empty when unreachable.
    pub path: Vec<NodeId>,
}

impl ShortestPath {
    /// The result reported for missing endpoints and unreachable targets.
    pub fn none() -> Self {
        Self {
            weight: NO_PATH,
            path: Vec::new(),
        }
    }

    /// Whether a path was found.
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Split into `(weight, path)`.
    pub fn into_parts(self) -> (f64, Vec<NodeId>) {
        (self.weight, self.path)
    }
}

/// Min-heap entry ordered by accumulated weight.
#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    cost: f64,
    node: NodeId,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cost.total_cmp(&other.cost) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost.total_cmp(&other.cost)
    }
}

/// Find the lightest path from `src` to `dest`.
///
/// Settled nodes are marked `visited`; all scratch fields are reset first.
/// Equal-weight alternatives are resolved by heap order.
pub fn shortest_path(graph: &mut DiGraph, src: NodeId, dest: NodeId) -> ShortestPath {
    if !graph.contains_node(src) || !graph.contains_node(dest) {
        return ShortestPath::none();
    }
    if src == dest {
        return ShortestPath {
            weight: 0.0,
            path: vec![src],
        };
    }

    graph.reset_scratch();
    let DiGraph {
        nodes, outgoing, ..
    } = graph;

    let mut dist: HashMap<NodeId, f64> = HashMap::new();
    let mut parent: HashMap<NodeId, NodeId> = HashMap::new();
    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();
    let mut settled = 0usize;

    dist.insert(src, 0.0);
    heap.push(Reverse(HeapEntry {
        cost: 0.0,
        node: src,
    }));

    while let Some(Reverse(HeapEntry { cost, node })) = heap.pop() {
        let Some(current) = nodes.get_mut(&node) else {
            continue;
        };
        // Stale entry left behind by a later improvement.
        if current.visited {
            continue;
        }
        current.visited = true;
        settled += 1;

        if node == dest {
            log::debug!(
                "dijkstra {} -> {}: weight {} after settling {} nodes",
                src,
                dest,
                cost,
                settled
            );
            return ShortestPath {
                weight: cost,
                path: rebuild_path(&parent, src, dest),
            };
        }

        let Some(adj) = outgoing.get(&node) else {
            continue;
        };
        for (&next, edge) in adj {
            if nodes.get(&next).is_some_and(|n| n.visited) {
                continue;
            }
            let candidate = cost + edge.weight;
            let improves = dist.get(&next).map_or(true, |&known| candidate < known);
            if improves {
                dist.insert(next, candidate);
                parent.insert(next, node);
                heap.push(Reverse(HeapEntry {
                    cost: candidate,
                    node: next,
                }));
            }
        }
    }

    log::debug!(
        "dijkstra {} -> {}: unreachable after settling {} nodes",
        src,
        dest,
        settled
    );
    ShortestPath::none()
}

/// Weight of the lightest path, or [`NO_PATH`].
pub fn shortest_path_distance(graph: &mut DiGraph, src: NodeId, dest: NodeId) -> f64 {
    shortest_path(graph, src, dest).weight
}

fn rebuild_path(parent: &HashMap<NodeId, NodeId>, src: NodeId, dest: NodeId) -> Vec<NodeId> {
    let mut path = vec![dest];
    let mut current = dest;
    while current != src {
        match parent.get(&current) {
            Some(&prev) => {
                path.push(prev);
                current = prev;
            }
            None => return Vec::new(),
        }
    }
    path.reverse();
    path
}
