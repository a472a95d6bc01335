//! Error types for the digraph-tool library.

use thiserror::Error;

/// Invalid input while constructing a node.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NodeError {
    /// The node content is blank.
    #[error("The node must not be empty")]
    EmptyContent,

    /// The node identifier is empty.
    #[error("The node identifier must be filled in")]
    EmptyId,
}

/// Invalid input while constructing an edge.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EdgeError {
    /// No starting node id given.
    #[error("The starting node must be defined")]
    EmptyStart,

    /// No ending node id given.
    #[error("The ending node must be defined")]
    EmptyEnd,

    /// The edge identifier is empty.
    #[error("The edge identifier must be filled in")]
    EmptyId,
}

/// Structural violations against the graph's invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A node with this id is already present.
    #[error("The node '{0}' already exists")]
    DuplicateNode(String),

    /// An edge with this id is already present.
    #[error("The edge '{0}' already exists")]
    DuplicateEdge(String),

    /// No node with this id.
    #[error("The node '{0}' doesn't exist in graph")]
    NodeNotFound(String),

    /// No edge with this id.
    #[error("The edge '{0}' doesn't exist in graph")]
    EdgeNotFound(String),

    /// The operation is reserved and not available yet.
    #[error("Unsupported operation: {0}")]
    Unsupported(&'static str),
}

/// Coarse classification of a [`DigraphError`], for callers that branch on kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Node,
    Edge,
    Graph,
    Io,
    Script,
}

/// All errors that can occur in the digraph-tool library.
#[derive(Error, Debug)]
pub enum DigraphError {
    #[error(transparent)]
    Node(#[from] NodeError),

    #[error(transparent)]
    Edge(#[from] EdgeError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Script could not be parsed.
    #[error("Invalid script: {0}")]
    Script(#[from] serde_json::Error),
}

impl DigraphError {
    /// The kind of failure, independent of its message.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Node(_) => ErrorKind::Node,
            Self::Edge(_) => ErrorKind::Edge,
            Self::Graph(_) => ErrorKind::Graph,
            Self::Io(_) => ErrorKind::Io,
            Self::Script(_) => ErrorKind::Script,
        }
    }
}

/// Convenience result type for digraph-tool operations.
pub type DigraphResult<T> = Result<T, DigraphError>;
