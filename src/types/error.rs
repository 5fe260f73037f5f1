//! Error types for the weighted digraph library.

use thiserror::Error;

use super::NodeId;

/// All errors that can occur while reading, writing or editing a graph file.
///
/// Structural graph operations never produce these; they report failure via
/// `bool` returns instead. This type covers the I/O and CLI layers.
#[derive(Error, Debug)]
pub enum GraphError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The JSON document could not be parsed or produced.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A node position could not be parsed.
    #[error("Malformed position: {0:?}")]
    MalformedPosition(String),

    /// Node not found by ID.
    #[error("Node ID {0} not found")]
    NodeNotFound(NodeId),

    /// No edge between the given endpoints.
    #[error("No edge from {src} to {dest}")]
    EdgeNotFound { src: NodeId, dest: NodeId },

    /// The graph refused an edge (self-loop, negative weight, missing endpoint or unchanged weight).
    #[error("Edge {src} -> {dest} rejected")]
    EdgeRejected { src: NodeId, dest: NodeId },
}

/// Convenience result type for graph I/O operations.
pub type GraphResult<T> = Result<T, GraphError>;
