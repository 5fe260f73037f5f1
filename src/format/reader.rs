//! Reads JSON graph files into an in-memory graph.

use std::io::Read;
use std::path::Path;

use crate::graph::DiGraph;
use crate::types::GraphResult;

use super::schema::GraphRecord;

/// Reader for JSON graph files.
pub struct JsonReader;

impl JsonReader {
    /// Read a JSON graph file.
    pub fn read_from_file(path: &Path) -> GraphResult<DiGraph> {
        let data = std::fs::read_to_string(path)?;
        log::debug!("reading graph from {} ({} bytes)", path.display(), data.len());
        Self::read_from_str(&data)
    }

    /// Read from any reader.
    pub fn read_from(reader: &mut impl Read) -> GraphResult<DiGraph> {
        let mut data = String::new();
        reader.read_to_string(&mut data)?;
        Self::read_from_str(&data)
    }

    /// Parse a JSON document.
    ///
    /// The whole document is validated before the graph is assembled, so an
    /// error never yields a partially populated graph.
    pub fn read_from_str(data: &str) -> GraphResult<DiGraph> {
        let record: Option<GraphRecord> = serde_json::from_str(data)?;
        let Some(record) = record else {
            return Ok(DiGraph::new());
        };

        let mut nodes = Vec::with_capacity(record.nodes.len());
        for node in &record.nodes {
            let pos = node.pos.as_ref().map(|p| p.resolve()).transpose()?;
            nodes.push((node, pos));
        }

        let mut graph = DiGraph::new();
        for (node, pos) in nodes {
            if !graph.add_node(node.key, pos) {
                log::warn!("duplicate node {} ignored", node.key);
                continue;
            }
            if let Some(entry) = graph.get_node_mut(node.key) {
                entry.info = node.info.clone();
                entry.tag = node.tag;
            }
        }

        for edge in &record.edges {
            if !graph.add_edge(edge.src, edge.dest, edge.weight) {
                log::warn!(
                    "edge {} -> {} ({}) ignored",
                    edge.src,
                    edge.dest,
                    edge.weight
                );
                continue;
            }
            if !edge.info.is_empty() {
                graph.set_edge_info(edge.src, edge.dest, &edge.info);
            }
            if edge.tag != 0 {
                graph.set_edge_tag(edge.src, edge.dest, edge.tag);
            }
        }

        log::debug!(
            "loaded graph: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}
