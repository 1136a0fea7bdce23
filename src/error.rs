//! Crate error type.

use std::io;

use crate::graph::NodeId;

/// Errors raised while loading a graph, validating a run, or reporting.
#[derive(Debug, thiserror::Error)]
pub enum JabejaError {
    #[error("graph parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("node {node} references missing neighbor {neighbor}")]
    DanglingNeighbor { node: NodeId, neighbor: NodeId },

    #[error("duplicate node id {0}")]
    DuplicateNode(NodeId),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[cfg(feature = "serde")]
    #[error("report encoding failed: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Shorthand for results carrying a [`JabejaError`].
pub type Result<T> = std::result::Result<T, JabejaError>;
