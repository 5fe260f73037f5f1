//! Phase 2 tests: shortest path and strongly connected components.

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use weighted_digraph::graph::{
    component_of, shortest_path, strongly_connected_components, DiGraph, GraphBuilder,
    ShortestPath,
};
use weighted_digraph::types::{NO_PATH, UNVISITED};

// ==================== Helper ====================

fn assert_weight(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected weight {}, got {}",
        expected,
        actual
    );
}

/// Cycle 1→2→3→4→1 with chord 4→2, cycle 5→6→7→5 with tail 7→8.
fn two_cycles() -> DiGraph {
    GraphBuilder::new()
        .nodes(1, 8)
        .edge(1, 2, 5.0)
        .edge(2, 3, 6.0)
        .edge(3, 4, 7.0)
        .edge(4, 1, 8.0)
        .edge(4, 2, 8.0)
        .edge(5, 6, 8.0)
        .edge(6, 7, 8.0)
        .edge(7, 5, 8.0)
        .edge(7, 8, 8.0)
        .build()
}

fn random_graph(seed: u64, nodes: i64, edges: usize) -> DiGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = DiGraph::new();
    for id in 0..nodes {
        graph.add_node(id, None);
    }
    while graph.edge_count() < edges {
        let src = rng.gen_range(0..nodes);
        let dest = rng.gen_range(0..nodes);
        if src != dest && !graph.has_edge(src, dest) {
            graph.add_edge(src, dest, rng.gen_range(0.1..20.0));
        }
    }
    graph
}

/// Bellman-Ford style relaxation, used as a reference for random graphs.
fn reference_distance(graph: &DiGraph, src: i64, dest: i64) -> f64 {
    let mut dist = std::collections::HashMap::new();
    for id in graph.node_ids() {
        dist.insert(id, f64::INFINITY);
    }
    dist.insert(src, 0.0);
    for _ in 0..graph.node_count() {
        let mut changed = false;
        for edge in graph.edges() {
            let candidate = dist[&edge.src()] + edge.weight();
            if candidate < dist[&edge.dest()] {
                dist.insert(edge.dest(), candidate);
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
    dist[&dest]
}

// ==================== Shortest Path Tests ====================

#[test]
fn test_shortest_path_prefers_lighter_detour() {
    let mut graph = GraphBuilder::new()
        .nodes(1, 5)
        .edge(1, 2, 3.0)
        .edge(1, 3, 0.5)
        .edge(3, 2, 0.3)
        .build();
    let result = shortest_path(&mut graph, 1, 2);
    assert_weight(result.weight, 0.8);
    assert_eq!(result.path, vec![1, 3, 2]);
}

#[test]
fn test_shortest_path_longer_chains() {
    let mut graph = GraphBuilder::new()
        .nodes(1, 5)
        .edge(1, 2, 1.0)
        .edge(2, 5, 14.0)
        .edge(1, 3, 2.0)
        .edge(1, 5, 16.0)
        .edge(2, 3, 4.0)
        .edge(3, 4, 1.0)
        .edge(4, 5, 4.0)
        .build();
    let result = shortest_path(&mut graph, 1, 5);
    assert_weight(result.weight, 7.0);
    assert_eq!(result.path, vec![1, 3, 4, 5]);

    let mut graph = GraphBuilder::new()
        .nodes(1, 6)
        .edge(1, 2, 1.0)
        .edge(2, 3, 0.5)
        .edge(3, 4, 0.6)
        .edge(4, 5, 12.0)
        .edge(4, 6, 1.0)
        .edge(6, 5, 3.0)
        .build();
    let result = shortest_path(&mut graph, 1, 5);
    assert_weight(result.weight, 6.1);
    assert_eq!(result.path, vec![1, 2, 3, 4, 6, 5]);
}

#[test]
fn test_shortest_path_to_self() {
    let mut graph = GraphBuilder::new().nodes(1, 2).edge(1, 2, 1.0).build();
    let result = shortest_path(&mut graph, 1, 1);
    assert_eq!(result.weight, 0.0);
    assert_eq!(result.path, vec![1]);
    assert!(result.is_found());
}

#[test]
fn test_shortest_path_missing_nodes() {
    let mut graph = GraphBuilder::new().nodes(1, 2).build();
    assert_eq!(shortest_path(&mut graph, 1, 6), ShortestPath::none());
    assert_eq!(shortest_path(&mut graph, 6, 1), ShortestPath::none());
    assert_eq!(shortest_path(&mut graph, 6, 6), ShortestPath::none());
}

#[test]
fn test_shortest_path_unreachable() {
    let mut graph = GraphBuilder::new().nodes(1, 3).edge(2, 1, 1.0).build();
    let result = shortest_path(&mut graph, 1, 2);
    assert_eq!(result.weight, NO_PATH);
    assert!(result.path.is_empty());
    assert!(!result.is_found());
    assert_eq!(result.into_parts(), (f64::INFINITY, vec![]));
}

#[test]
fn test_shortest_path_zero_weight_edges() {
    let mut graph = GraphBuilder::new()
        .nodes(1, 3)
        .edge(1, 2, 0.0)
        .edge(2, 3, 0.0)
        .edge(1, 3, 1.0)
        .build();
    let result = shortest_path(&mut graph, 1, 3);
    assert_eq!(result.weight, 0.0);
    assert_eq!(result.path, vec![1, 2, 3]);
}

#[test]
fn test_shortest_path_respects_direction() {
    let mut graph = GraphBuilder::new()
        .nodes(1, 3)
        .edge(1, 2, 1.0)
        .edge(3, 2, 1.0)
        .build();
    assert!(!shortest_path(&mut graph, 1, 3).is_found());
    assert!(shortest_path(&mut graph, 3, 2).is_found());
}

#[test]
fn test_shortest_path_after_weight_update() {
    let mut graph = GraphBuilder::new()
        .nodes(1, 3)
        .edge(1, 2, 1.0)
        .edge(2, 3, 1.0)
        .edge(1, 3, 5.0)
        .build();
    assert_eq!(shortest_path(&mut graph, 1, 3).path, vec![1, 2, 3]);

    graph.add_edge(1, 3, 1.5);
    let result = shortest_path(&mut graph, 1, 3);
    assert_eq!(result.path, vec![1, 3]);
    assert_weight(result.weight, 1.5);
}

#[test]
fn test_shortest_path_marks_settled_nodes() {
    let mut graph = GraphBuilder::new()
        .nodes(1, 4)
        .edge(1, 2, 1.0)
        .edge(2, 3, 1.0)
        .build();
    shortest_path(&mut graph, 1, 3);
    assert!(graph.get_node(1).unwrap().visited());
    assert!(graph.get_node(2).unwrap().visited());
    assert!(graph.get_node(3).unwrap().visited());
    assert!(!graph.get_node(4).unwrap().visited());

    // A second run starts from clean scratch fields.
    shortest_path(&mut graph, 4, 1);
    assert!(!graph.get_node(2).unwrap().visited());
}

#[test]
fn test_shortest_path_does_not_modify_graph() {
    let mut graph = two_cycles();
    let mc = graph.modification_count();
    shortest_path(&mut graph, 1, 4);
    strongly_connected_components(&mut graph);
    assert_eq!(graph.modification_count(), mc);
}

#[test]
fn test_shortest_path_matches_reference_on_random_graphs() {
    for seed in 0..5 {
        let mut graph = random_graph(seed, 40, 160);
        for (src, dest) in [(0, 39), (5, 17), (12, 3), (20, 21)] {
            let expected = reference_distance(&graph, src, dest);
            let result = shortest_path(&mut graph, src, dest);
            if expected.is_infinite() {
                assert!(!result.is_found());
                continue;
            }
            assert_weight(result.weight, expected);

            // The reported path must exist and add up to the reported weight.
            let mut total = 0.0;
            for hop in result.path.windows(2) {
                total += graph.get_edge(hop[0], hop[1]).unwrap().weight();
            }
            assert_weight(total, result.weight);
            assert_eq!(result.path.first(), Some(&src));
            assert_eq!(result.path.last(), Some(&dest));
        }
    }
}

// ==================== SCC Tests ====================

#[test]
fn test_scc_partition() {
    let mut graph = two_cycles();
    let components = strongly_connected_components(&mut graph);
    assert_eq!(components, vec![vec![4, 3, 2, 1], vec![8], vec![7, 6, 5]]);
}

#[test]
fn test_scc_of_single_node() {
    let mut graph = two_cycles();
    assert_eq!(component_of(&mut graph, 6), Some(vec![7, 6, 5]));
    assert_eq!(component_of(&mut graph, 8), Some(vec![8]));
    assert_eq!(component_of(&mut graph, 1), Some(vec![4, 3, 2, 1]));
    assert_eq!(component_of(&mut graph, 99), None);
}

#[test]
fn test_scc_singletons_without_cycles() {
    let mut graph = GraphBuilder::new()
        .nodes(1, 4)
        .edge(1, 2, 1.0)
        .edge(2, 3, 1.0)
        .edge(3, 4, 1.0)
        .build();
    let components = strongly_connected_components(&mut graph);
    assert_eq!(components, vec![vec![4], vec![3], vec![2], vec![1]]);
}

#[test]
fn test_scc_empty_graph() {
    let mut graph = DiGraph::new();
    assert!(strongly_connected_components(&mut graph).is_empty());
}

#[test]
fn test_scc_two_node_cycle() {
    let mut graph = GraphBuilder::new()
        .nodes(1, 3)
        .edge(1, 2, 1.0)
        .edge(2, 1, 1.0)
        .build();
    let components = strongly_connected_components(&mut graph);
    assert_eq!(components, vec![vec![2, 1], vec![3]]);
}

#[test]
fn test_scc_is_a_partition_on_random_graphs() {
    for seed in 10..15 {
        let mut graph = random_graph(seed, 60, 90);
        let components = strongly_connected_components(&mut graph);

        let mut seen: Vec<i64> = components.iter().flatten().copied().collect();
        seen.sort_unstable();
        let mut all: Vec<i64> = graph.node_ids().collect();
        all.sort_unstable();
        assert_eq!(seen, all);

        // Members of one component reach each other.
        for component in &components {
            let head = component[0];
            for &member in component {
                assert!(shortest_path(&mut graph, head, member).is_found());
                assert!(shortest_path(&mut graph, member, head).is_found());
            }
        }
    }
}

#[test]
fn test_scc_runs_are_independent() {
    let mut graph = two_cycles();
    let first = strongly_connected_components(&mut graph);
    let second = strongly_connected_components(&mut graph);
    assert_eq!(first, second);

    graph.remove_edge(4, 1);
    let third = strongly_connected_components(&mut graph);
    assert_eq!(third, vec![vec![4, 3, 2], vec![1], vec![8], vec![7, 6, 5]]);
}

#[test]
fn test_scc_scratch_fields_after_run() {
    let mut graph = two_cycles();
    strongly_connected_components(&mut graph);
    for node in graph.get_all_v().values() {
        assert_ne!(node.discovery(), UNVISITED);
        assert!(node.lowlink() <= node.discovery());
        // Everything has been popped off the traversal stack.
        assert!(!node.visited());
    }
    assert_eq!(graph.get_node(1).unwrap().discovery(), 0);
    assert_eq!(graph.get_node(5).unwrap().lowlink(), 4);
}

#[test]
fn test_scc_long_chain_does_not_overflow() {
    let mut graph = DiGraph::new();
    let n = 200_000;
    for id in 0..n {
        graph.add_node(id, None);
    }
    for id in 0..n - 1 {
        graph.add_edge(id, id + 1, 1.0);
    }
    graph.add_edge(n - 1, 0, 1.0);

    let components = strongly_connected_components(&mut graph);
    assert_eq!(components.len(), 1);
    assert_eq!(components[0].len(), n as usize);
}

#[test]
fn test_scc_long_acyclic_chain() {
    let mut graph = DiGraph::new();
    let n = 100_000;
    for id in 0..n {
        graph.add_node(id, None);
    }
    for id in 0..n - 1 {
        graph.add_edge(id, id + 1, 1.0);
    }
    let components = strongly_connected_components(&mut graph);
    assert_eq!(components.len(), n as usize);
    assert_eq!(components[0], vec![n - 1]);
}
