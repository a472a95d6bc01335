//! All data types for the digraph-tool library.

pub mod edge;
pub mod error;
pub mod node;
pub mod payload;

pub use edge::Edge;
pub use error::{DigraphError, DigraphResult, EdgeError, ErrorKind, GraphError, NodeError};
pub use node::Node;
pub use payload::Payload;

/// Weight given to edges created without an explicit one.
pub const DEFAULT_WEIGHT: f64 = 1.0;
