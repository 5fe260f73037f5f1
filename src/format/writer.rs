//! Writes JSON graph files from an in-memory graph.

use std::io::Write;
use std::path::Path;

use crate::graph::DiGraph;
use crate::types::{GraphError, GraphResult};

use super::schema::{EdgeRecord, GraphRecord, NodeRecord, PosRecord};

/// Writer for JSON graph files.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonWriter {
    pretty: bool,
}

impl JsonWriter {
    /// Create a writer producing compact JSON.
    pub fn new() -> Self {
        Self::default()
    }

    /// Indent the output.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Write a graph (or the absence of one) to a file.
    pub fn write_to_file(&self, graph: Option<&DiGraph>, path: &Path) -> GraphResult<()> {
        // Serialize first so a rejected graph never truncates an existing file.
        let mut buf = Vec::new();
        self.write_to(graph, &mut buf)?;
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        writer.write_all(&buf)?;
        writer.flush()?;
        log::debug!("wrote graph to {}", path.display());
        Ok(())
    }

    /// Write to any writer.
    ///
    /// Fails with [`GraphError::MalformedPosition`] if a node position has an
    /// infinite or NaN coordinate, since JSON cannot represent it.
    pub fn write_to(&self, graph: Option<&DiGraph>, writer: &mut impl Write) -> GraphResult<()> {
        let record = graph
            .filter(|g| g.node_count() > 0)
            .map(to_record)
            .transpose()?;
        if self.pretty {
            serde_json::to_writer_pretty(writer, &record)?;
        } else {
            serde_json::to_writer(writer, &record)?;
        }
        Ok(())
    }

    /// Serialize to a string.
    pub fn to_string(&self, graph: Option<&DiGraph>) -> GraphResult<String> {
        let mut buf = Vec::new();
        self.write_to(graph, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

fn to_record(graph: &DiGraph) -> GraphResult<GraphRecord> {
    let nodes = graph
        .get_all_v()
        .values()
        .map(|n| {
            let pos = match n.pos() {
                Some(p) if !p.is_finite() => {
                    return Err(GraphError::MalformedPosition(p.to_string()));
                }
                p => p.map(|p| PosRecord::Triple(p.to_array())),
            };
            Ok(NodeRecord {
                key: n.id(),
                pos,
                info: n.info.clone(),
                tag: n.tag,
            })
        })
        .collect::<GraphResult<Vec<_>>>()?;
    let edges = graph
        .edges()
        .map(|e| EdgeRecord {
            src: e.src(),
            dest: e.dest(),
            weight: e.weight(),
            info: e.info.clone(),
            tag: e.tag,
        })
        .collect();
    Ok(GraphRecord { nodes, edges })
}
