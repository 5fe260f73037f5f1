//! High-level operations over a held graph.

pub mod algo;

pub use algo::GraphAlgo;
