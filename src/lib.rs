//! Weighted digraph: an in-memory directed, weighted graph with shortest-path
//! and strongly-connected-component algorithms.
//!
//! Graphs are built through [`DiGraph`] mutations (or [`GraphBuilder`]),
//! queried directly or through the [`GraphAlgo`] facade, persisted as JSON
//! and rendered as SVG.
//!
//! # Example
//!
//! ```
//! use weighted_digraph::{GraphAlgo, GraphBuilder};
//!
//! let graph = GraphBuilder::new()
//!     .nodes(1, 3)
//!     .edge(1, 2, 3.0)
//!     .edge(1, 3, 0.5)
//!     .edge(3, 2, 0.25)
//!     .build();
//!
//! let mut algo = GraphAlgo::with_graph(graph);
//! let result = algo.shortest_path(1, 2);
//! assert_eq!(result.path, vec![1, 3, 2]);
//! assert_eq!(result.weight, 0.75);
//! ```

pub mod cli;
pub mod engine;
pub mod format;
pub mod graph;
pub mod plot;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::GraphAlgo;
pub use format::{JsonReader, JsonWriter};
pub use graph::{
    component_of, shortest_path, strongly_connected_components, Adjacency, DiGraph, GraphBuilder,
    ShortestPath,
};
pub use plot::{PlotPoint, PlotScene};
pub use types::{
    EdgeData, GraphError, GraphResult, NodeData, NodeId, Position, NO_PATH, UNVISITED,
};
