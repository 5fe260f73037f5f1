//! Strongly connected components (Tarjan, explicit stack).

use crate::types::{NodeId, UNVISITED};

use super::digraph::Adjacency;
use super::DiGraph;

/// A suspended visit: the node and the index of the next out-edge to examine.
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: NodeId,
    cursor: usize,
}

fn neighbor(adj: Option<&Adjacency>, cursor: usize) -> Option<NodeId> {
    adj?.get_index(cursor).map(|(&id, _)| id)
}

/// Partition every vertex into strongly connected components.
///
/// Roots are taken in vertex insertion order and out-edges in adjacency
/// order. Components are returned in completion order; within a component
/// nodes appear in the order they were popped (reverse discovery).
///
/// The traversal keeps its own frame stack, so long chains do not grow the
/// native call stack. Node scratch fields hold the discovery index, lowlink
/// and on-stack marker, and are reset before the run.
pub fn strongly_connected_components(graph: &mut DiGraph) -> Vec<Vec<NodeId>> {
    graph.reset_scratch();
    let DiGraph {
        nodes, outgoing, ..
    } = graph;

    let roots: Vec<NodeId> = nodes.keys().copied().collect();
    let mut counter: i64 = 0;
    let mut stack: Vec<NodeId> = Vec::new();
    let mut frames: Vec<Frame> = Vec::new();
    let mut components: Vec<Vec<NodeId>> = Vec::new();

    for root in roots {
        if nodes[&root].discovery != UNVISITED {
            continue;
        }
        frames.push(Frame {
            node: root,
            cursor: 0,
        });

        while let Some(Frame { node, mut cursor }) = frames.pop() {
            let adj = outgoing.get(&node);

            if cursor == 0 {
                let entry = &mut nodes[&node];
                entry.discovery = counter;
                entry.lowlink = counter;
                entry.visited = true;
                counter += 1;
                stack.push(node);
            } else if let Some(child) = neighbor(adj, cursor - 1) {
                // Returning from the child visited at `cursor - 1`.
                let child_low = nodes[&child].lowlink;
                let entry = &mut nodes[&node];
                entry.lowlink = entry.lowlink.min(child_low);
            }

            let mut descend = None;
            while let Some(next) = neighbor(adj, cursor) {
                let target = &nodes[&next];
                if target.discovery == UNVISITED {
                    descend = Some(next);
                    break;
                }
                if target.visited {
                    let disc = target.discovery;
                    let entry = &mut nodes[&node];
                    entry.lowlink = entry.lowlink.min(disc);
                }
                cursor += 1;
            }

            if let Some(next) = descend {
                frames.push(Frame {
                    node,
                    cursor: cursor + 1,
                });
                frames.push(Frame {
                    node: next,
                    cursor: 0,
                });
                continue;
            }

            let entry = &nodes[&node];
            if entry.lowlink == entry.discovery {
                let mut component = Vec::new();
                while let Some(member) = stack.pop() {
                    nodes[&member].visited = false;
                    component.push(member);
                    if member == node {
                        break;
                    }
                }
                components.push(component);
            }
        }
    }

    log::debug!(
        "tarjan: {} components over {} nodes",
        components.len(),
        counter
    );
    components
}

/// The component containing `id`, or `None` if the node is absent.
pub fn component_of(graph: &mut DiGraph, id: NodeId) -> Option<Vec<NodeId>> {
    if !graph.contains_node(id) {
        return None;
    }
    strongly_connected_components(graph)
        .into_iter()
        .find(|component| component.contains(&id))
}
