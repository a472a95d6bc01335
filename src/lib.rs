//! digraph-tool — a small in-memory directed graph.
//!
//! Nodes carry an opaque payload and a unique string id. Edges join two
//! nodes by id, carry a weight, and are always treated as directed
//! start -> end. The [`Graph`] owns everything and keeps every edge
//! pointing at live nodes by removing a node's edges along with it.

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{Graph, GraphBuilder};
pub use types::{
    DigraphError, DigraphResult, Edge, EdgeError, ErrorKind, GraphError, Node, NodeError,
    Payload, DEFAULT_WEIGHT,
};
