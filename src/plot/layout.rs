//! Position resolution for plotting.

use std::collections::HashSet;
use std::f64::consts::TAU;

use crate::graph::DiGraph;
use crate::types::NodeId;

/// A node resolved to plane coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
    /// `true` when the node had no position and one was generated.
    pub synthesized: bool,
}

/// Everything a renderer needs: one point per node and one arrow per edge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotScene {
    pub points: Vec<PlotPoint>,
    pub arrows: Vec<(NodeId, NodeId)>,
}

impl PlotScene {
    /// Resolve every node of `graph` to a point.
    ///
    /// Nodes without a position are spread on a ring around the bounding box
    /// of the positioned ones, in vertex order. No two points share exact
    /// coordinates. The graph itself is left untouched.
    pub fn from_graph(graph: &DiGraph) -> Self {
        let mut taken: HashSet<(u64, u64)> = HashSet::new();
        let mut points = Vec::with_capacity(graph.node_count());

        let known: Vec<(f64, f64)> = graph
            .get_all_v()
            .values()
            .filter_map(|n| n.pos().map(|p| (p.x, p.y)))
            .collect();
        let missing = graph.node_count() - known.len();
        let (cx, cy, radius) = ring_for(&known, missing);

        let mut slot = 0usize;
        for node in graph.get_all_v().values() {
            let (x, y, synthesized) = match node.pos() {
                Some(p) => (p.x, p.y, false),
                None => {
                    let angle = TAU * slot as f64 / missing.max(1) as f64;
                    slot += 1;
                    let mut x = cx + radius * angle.cos();
                    let y = cy + radius * angle.sin();
                    while x.is_finite() && taken.contains(&key(x, y)) {
                        x += nudge(x);
                    }
                    (x, y, true)
                }
            };
            taken.insert(key(x, y));
            points.push(PlotPoint {
                id: node.id(),
                x,
                y,
                synthesized,
            });
        }

        let arrows = graph.edges().map(|e| (e.src(), e.dest())).collect();
        Self { points, arrows }
    }

    /// Look up the point of a node.
    pub fn point(&self, id: NodeId) -> Option<&PlotPoint> {
        self.points.iter().find(|p| p.id == id)
    }
}

fn key(x: f64, y: f64) -> (u64, u64) {
    (x.to_bits(), y.to_bits())
}

// Step along x that always lands on a different float, even where the
// spacing between adjacent values exceeds 1.
fn nudge(x: f64) -> f64 {
    (x.abs() * f64::EPSILON * 2.0).max(1.0)
}

// Center and radius of the ring used for nodes without a position.
fn ring_for(known: &[(f64, f64)], missing: usize) -> (f64, f64, f64) {
    if known.is_empty() {
        let radius = (missing as f64 * 10.0 / TAU).max(1.0);
        return (radius, radius, radius);
    }
    let (mut min_x, mut min_y) = (f64::MAX, f64::MAX);
    let (mut max_x, mut max_y) = (f64::MIN, f64::MIN);
    for &(x, y) in known {
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }
    let half_diag = ((max_x - min_x).hypot(max_y - min_y)) / 2.0;
    (
        (min_x + max_x) / 2.0,
        (min_y + max_y) / 2.0,
        (half_diag * 1.25).max(1.0),
    )
}
