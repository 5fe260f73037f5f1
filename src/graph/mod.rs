//! In-memory graph storage and the algorithms that run over it.

pub mod builder;
pub mod components;
pub mod digraph;
pub mod shortest_path;

pub use builder::GraphBuilder;
pub use components::{component_of, strongly_connected_components};
pub use digraph::{Adjacency, DiGraph};
pub use shortest_path::{shortest_path, shortest_path_distance, ShortestPath};
