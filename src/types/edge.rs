//! The core edge struct.

use serde::Serialize;

/// A directed connection between two nodes.
///
/// Endpoints are held as node ids, not references: the owning graph resolves
/// them on demand and removes the edge whenever either endpoint goes away.
/// The id and endpoints are fixed once the edge exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    id: String,
    start: String,
    end: String,
    weight: f64,
    bidirectional: bool,
}

impl Edge {
    pub(crate) fn new(
        start: impl Into<String>,
        end: impl Into<String>,
        id: impl Into<String>,
        weight: f64,
    ) -> Self {
        Self {
            id: id.into(),
            start: start.into(),
            end: end.into(),
            weight,
            bidirectional: false,
        }
    }

    /// Edge identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Id of the node which begins the edge.
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Id of the node which terminates the edge.
    pub fn end(&self) -> &str {
        &self.end
    }

    /// The edge's weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }

    /// Whether the edge is flagged as undirected. Queries ignore this flag.
    pub fn is_bidirectional(&self) -> bool {
        self.bidirectional
    }

    pub fn set_bidirectional(&mut self, bidirectional: bool) {
        self.bidirectional = bidirectional;
    }

    /// True if either endpoint is `node_id`.
    pub fn touches(&self, node_id: &str) -> bool {
        self.start == node_id || self.end == node_id
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} --{}--> {}", self.start, self.id, self.end)
    }
}
