//! Fluent API for building Graph instances.

use crate::types::{DigraphResult, Payload, DEFAULT_WEIGHT};

use super::Graph;

struct PendingEdge {
    start: String,
    end: String,
    id: String,
    weight: f64,
}

/// Fluent builder for constructing a [`Graph`].
///
/// Declarations are queued and only validated by [`GraphBuilder::build`]:
/// all nodes first, then all edges, each in declaration order.
pub struct GraphBuilder<T> {
    nodes: Vec<(T, String)>,
    edges: Vec<PendingEdge>,
}

impl<T: Payload> GraphBuilder<T> {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Queue a node.
    pub fn node(&mut self, content: T, id: impl Into<String>) -> &mut Self {
        self.nodes.push((content, id.into()));
        self
    }

    /// Queue a directed edge with an explicit weight.
    pub fn edge(
        &mut self,
        start: impl Into<String>,
        end: impl Into<String>,
        id: impl Into<String>,
        weight: f64,
    ) -> &mut Self {
        self.edges.push(PendingEdge {
            start: start.into(),
            end: end.into(),
            id: id.into(),
            weight,
        });
        self
    }

    /// Queue a directed edge with the default weight.
    pub fn connect(
        &mut self,
        start: impl Into<String>,
        end: impl Into<String>,
        id: impl Into<String>,
    ) -> &mut Self {
        self.edge(start, end, id, DEFAULT_WEIGHT)
    }

    /// Build the final Graph. The first failing declaration aborts the build.
    pub fn build(self) -> DigraphResult<Graph<T>> {
        let mut graph = Graph::new();
        for (content, id) in self.nodes {
            graph.add_node(content, id)?;
        }
        for edge in self.edges {
            graph.add_unidirectional_edge(&edge.start, &edge.end, edge.id, edge.weight)?;
        }
        Ok(graph)
    }
}

impl<T: Payload> Default for GraphBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
