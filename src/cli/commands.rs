//! CLI command implementations.

use std::path::Path;

use crate::format::{JsonReader, JsonWriter};
use crate::graph::{self, DiGraph};
use crate::plot::{self, PlotScene};
use crate::types::{GraphError, GraphResult, NodeId, Position};

fn save(graph: &DiGraph, path: &Path) -> GraphResult<()> {
    JsonWriter::new().pretty(true).write_to_file(Some(graph), path)
}

/// Create a new empty graph file.
pub fn cmd_create(path: &Path) -> GraphResult<()> {
    JsonWriter::new().write_to_file(None, path)?;
    println!("Created {}", path.display());
    Ok(())
}

/// Display summary information about a graph file.
pub fn cmd_info(path: &Path, json: bool) -> GraphResult<()> {
    let graph = JsonReader::read_from_file(path)?;
    let file_size = std::fs::metadata(path)?.len();
    let positioned = graph
        .get_all_v()
        .values()
        .filter(|n| n.pos().is_some())
        .count();

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
            "positioned_nodes": positioned,
            "file_size": file_size,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Nodes: {}", graph.node_count());
        println!("Edges: {}", graph.edge_count());
        println!("Positioned nodes: {}", positioned);
        println!("File size: {}", format_size(file_size));
    }
    Ok(())
}

/// Parse a `x,y,z` position argument.
pub fn parse_position(text: &str) -> GraphResult<Position> {
    text.parse()
}

/// Add a node to the graph.
pub fn cmd_add_node(path: &Path, id: NodeId, pos: Option<Position>, json: bool) -> GraphResult<()> {
    let mut graph = JsonReader::read_from_file(path)?;
    let added = graph.add_node(id, pos);
    if added {
        save(&graph, path)?;
    }

    if json {
        println!("{}", serde_json::json!({"id": id, "added": added}));
    } else if added {
        println!("Added node {} to {}", id, path.display());
    } else {
        println!("Node {} already exists", id);
    }
    Ok(())
}

/// Add or re-weight an edge.
pub fn cmd_add_edge(
    path: &Path,
    src: NodeId,
    dest: NodeId,
    weight: f64,
    json: bool,
) -> GraphResult<()> {
    let mut graph = JsonReader::read_from_file(path)?;
    let before = graph.modification_count();
    let added = graph.add_edge(src, dest, weight);
    let changed = graph.modification_count() != before;
    if !changed {
        return Err(GraphError::EdgeRejected { src, dest });
    }
    save(&graph, path)?;

    if json {
        println!(
            "{}",
            serde_json::json!({"src": src, "dest": dest, "weight": weight, "added": added})
        );
    } else if added {
        println!("Linked {} -> {} ({})", src, dest, weight);
    } else {
        println!("Updated {} -> {} to weight {}", src, dest, weight);
    }
    Ok(())
}

/// Remove a node and its edges.
pub fn cmd_remove_node(path: &Path, id: NodeId, json: bool) -> GraphResult<()> {
    let mut graph = JsonReader::read_from_file(path)?;
    let edges_before = graph.edge_count();
    if !graph.remove_node(id) {
        return Err(GraphError::NodeNotFound(id));
    }
    save(&graph, path)?;

    let dropped = edges_before - graph.edge_count();
    if json {
        println!("{}", serde_json::json!({"id": id, "edges_removed": dropped}));
    } else {
        println!("Removed node {} and {} edges", id, dropped);
    }
    Ok(())
}

/// Remove a single edge.
pub fn cmd_remove_edge(path: &Path, src: NodeId, dest: NodeId, json: bool) -> GraphResult<()> {
    let mut graph = JsonReader::read_from_file(path)?;
    if !graph.remove_edge(src, dest) {
        return Err(GraphError::EdgeNotFound { src, dest });
    }
    save(&graph, path)?;

    if json {
        println!("{}", serde_json::json!({"src": src, "dest": dest, "removed": true}));
    } else {
        println!("Removed edge {} -> {}", src, dest);
    }
    Ok(())
}

/// Print the shortest path between two nodes.
pub fn cmd_path(path: &Path, src: NodeId, dest: NodeId, json: bool) -> GraphResult<()> {
    let mut graph = JsonReader::read_from_file(path)?;
    for id in [src, dest] {
        if !graph.contains_node(id) {
            return Err(GraphError::NodeNotFound(id));
        }
    }
    let result = graph::shortest_path(&mut graph, src, dest);

    if json {
        // JSON has no infinity; unreachable is reported as a null weight.
        let weight = result.is_found().then_some(result.weight);
        println!(
            "{}",
            serde_json::json!({"src": src, "dest": dest, "weight": weight, "path": result.path})
        );
    } else if result.is_found() {
        let hops: Vec<String> = result.path.iter().map(|id| id.to_string()).collect();
        println!("{} (weight {})", hops.join(" -> "), result.weight);
    } else {
        println!("No path from {} to {}", src, dest);
    }
    Ok(())
}

/// Print strongly connected components, or the one containing `node`.
pub fn cmd_scc(path: &Path, node: Option<NodeId>, json: bool) -> GraphResult<()> {
    let mut graph = JsonReader::read_from_file(path)?;
    let components = match node {
        Some(id) => {
            let component =
                graph::component_of(&mut graph, id).ok_or(GraphError::NodeNotFound(id))?;
            vec![component]
        }
        None => graph::strongly_connected_components(&mut graph),
    };

    if json {
        println!("{}", serde_json::json!({"components": components}));
    } else {
        println!("{} component(s):", components.len());
        for component in &components {
            let ids: Vec<String> = component.iter().map(|id| id.to_string()).collect();
            println!("  [{}]", ids.join(", "));
        }
    }
    Ok(())
}

/// Render the graph as SVG.
pub fn cmd_plot(path: &Path, out: &Path) -> GraphResult<()> {
    let graph = JsonReader::read_from_file(path)?;
    let scene = PlotScene::from_graph(&graph);
    plot::write_svg(&scene, out)?;
    let synthesized = scene.points.iter().filter(|p| p.synthesized).count();
    println!(
        "Plotted {} nodes ({} placed automatically) to {}",
        scene.points.len(),
        synthesized,
        out.display()
    );
    Ok(())
}

/// Detailed statistics about the graph.
pub fn cmd_stats(path: &Path, json: bool) -> GraphResult<()> {
    let mut graph = JsonReader::read_from_file(path)?;

    let node_count = graph.node_count();
    let edge_count = graph.edge_count();
    let avg_edges = if node_count > 0 {
        edge_count as f64 / node_count as f64
    } else {
        0.0
    };
    let max_out = graph
        .node_ids()
        .filter_map(|id| graph.all_out_edges_of_node(id).map(|adj| adj.len()))
        .max()
        .unwrap_or(0);
    let max_in = graph
        .node_ids()
        .filter_map(|id| graph.all_in_edges_of_node(id).map(|adj| adj.len()))
        .max()
        .unwrap_or(0);
    let total_weight: f64 = graph.edges().map(|e| e.weight()).sum();
    let components = graph::strongly_connected_components(&mut graph);
    let largest = components.iter().map(Vec::len).max().unwrap_or(0);

    if json {
        let info = serde_json::json!({
            "nodes": node_count,
            "edges": edge_count,
            "avg_edges_per_node": avg_edges,
            "max_out_degree": max_out,
            "max_in_degree": max_in,
            "total_weight": total_weight,
            "components": components.len(),
            "largest_component": largest,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("Graph Statistics:");
        println!("  Nodes: {}", node_count);
        println!("  Edges: {}", edge_count);
        println!("  Avg edges per node: {:.2}", avg_edges);
        println!("  Max out-degree: {}", max_out);
        println!("  Max in-degree: {}", max_in);
        println!("  Total weight: {:.3}", total_weight);
        println!("  Strongly connected components: {}", components.len());
        println!("  Largest component: {} nodes", largest);
    }
    Ok(())
}

fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
