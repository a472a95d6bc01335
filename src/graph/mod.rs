//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod digraph;

pub use builder::GraphBuilder;
pub use digraph::Graph;
