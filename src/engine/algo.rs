//! Algorithm facade: owns one graph and runs queries, persistence and
//! plotting against it.

use std::path::Path;

use crate::format::{JsonReader, JsonWriter};
use crate::graph::{self, DiGraph, ShortestPath};
use crate::plot::{self, PlotScene};
use crate::types::{NodeData, NodeId};

/// Runs algorithms over an optional graph.
///
/// Without a graph every query returns its empty result. Persistence errors
/// are logged and reported as `false`.
#[derive(Debug, Clone, Default)]
pub struct GraphAlgo {
    graph: Option<DiGraph>,
}

impl GraphAlgo {
    /// Create a facade with no graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a facade over `graph`.
    pub fn with_graph(graph: DiGraph) -> Self {
        Self { graph: Some(graph) }
    }

    /// Replace the held graph.
    pub fn init(&mut self, graph: DiGraph) {
        self.graph = Some(graph);
    }

    /// The held graph.
    pub fn get_graph(&self) -> Option<&DiGraph> {
        self.graph.as_ref()
    }

    /// The held graph, for mutation.
    pub fn get_graph_mut(&mut self) -> Option<&mut DiGraph> {
        self.graph.as_mut()
    }

    /// Give up the held graph.
    pub fn take_graph(&mut self) -> Option<DiGraph> {
        self.graph.take()
    }

    /// Lightest path from `src` to `dest`; see [`graph::shortest_path`].
    pub fn shortest_path(&mut self, src: NodeId, dest: NodeId) -> ShortestPath {
        match self.graph.as_mut() {
            Some(g) => graph::shortest_path(g, src, dest),
            None => ShortestPath::none(),
        }
    }

    /// The strongly connected component containing `id`.
    ///
    /// Empty when there is no graph or no such node.
    pub fn connected_component(&mut self, id: NodeId) -> Vec<NodeData> {
        let Some(g) = self.graph.as_mut() else {
            return Vec::new();
        };
        let ids = graph::component_of(g, id).unwrap_or_default();
        resolve(g, &ids)
    }

    /// Every strongly connected component; see
    /// [`graph::strongly_connected_components`] for the ordering.
    pub fn connected_components(&mut self) -> Vec<Vec<NodeData>> {
        let Some(g) = self.graph.as_mut() else {
            return Vec::new();
        };
        graph::strongly_connected_components(g)
            .iter()
            .map(|ids| resolve(g, ids))
            .collect()
    }

    /// Replace the held graph with the contents of a JSON file.
    ///
    /// On failure the held graph becomes a fresh empty graph.
    pub fn load_from_json(&mut self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        match JsonReader::read_from_file(path) {
            Ok(g) => {
                self.graph = Some(g);
                true
            }
            Err(e) => {
                log::error!("failed to load {}: {}", path.display(), e);
                self.graph = Some(DiGraph::new());
                false
            }
        }
    }

    /// Write the held graph to a JSON file.
    pub fn save_to_json(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        match JsonWriter::new().write_to_file(self.graph.as_ref(), path) {
            Ok(()) => true,
            Err(e) => {
                log::error!("failed to save {}: {}", path.display(), e);
                false
            }
        }
    }

    /// Positions and arrows for drawing the held graph.
    pub fn plot_scene(&self) -> Option<PlotScene> {
        self.graph.as_ref().map(PlotScene::from_graph)
    }

    /// Draw the held graph as SVG at `path`.
    pub fn plot_graph(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        let Some(scene) = self.plot_scene() else {
            log::warn!("nothing to plot: no graph loaded");
            return false;
        };
        match plot::write_svg(&scene, path) {
            Ok(()) => true,
            Err(e) => {
                log::error!("failed to plot {}: {}", path.display(), e);
                false
            }
        }
    }
}

impl PartialEq for GraphAlgo {
    fn eq(&self, other: &Self) -> bool {
        self.graph == other.graph
    }
}

fn resolve(graph: &DiGraph, ids: &[NodeId]) -> Vec<NodeData> {
    ids.iter()
        .filter_map(|&id| graph.get_node(id).cloned())
        .collect()
}
