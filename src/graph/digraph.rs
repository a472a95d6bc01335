//! Core graph structure — nodes + edges keyed by id, in insertion order.

use indexmap::IndexMap;

use crate::types::{
    DigraphResult, Edge, EdgeError, GraphError, Node, NodeError, Payload, DEFAULT_WEIGHT,
};

/// The owning container for nodes and the directed edges between them.
///
/// Node ids are unique, edge ids are unique, and every edge's endpoints are
/// nodes currently in the graph. Removing a node removes the edges touching
/// it first, so the last property holds across every public operation.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    /// All nodes, keyed by id, in insertion order.
    nodes: IndexMap<String, Node<T>>,
    /// All edges, keyed by id, in insertion order.
    edges: IndexMap<String, Edge>,
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Graph<T> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            nodes: IndexMap::new(),
            edges: IndexMap::new(),
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<T>> {
        self.nodes.values()
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// Check if the node belongs to the graph.
    pub fn is_node(&self, node_id: &str) -> bool {
        self.nodes.contains_key(node_id)
    }

    /// Check if the edge belongs to the graph.
    pub fn is_edge(&self, edge_id: &str) -> bool {
        self.edges.contains_key(edge_id)
    }

    /// Add a directed edge from `start_id` to `end_id`.
    ///
    /// Endpoint ids are only looked up, so they are borrowed; the edge id is
    /// stored, so it is taken by value like the node id in [`Graph::add_node`].
    ///
    /// Input is validated in order: empty start, empty end, empty edge id,
    /// duplicate edge id, unknown start node, unknown end node. Nothing is
    /// inserted unless every check passes.
    pub fn add_unidirectional_edge(
        &mut self,
        start_id: &str,
        end_id: &str,
        edge_id: impl Into<String>,
        weight: f64,
    ) -> DigraphResult<()> {
        let edge_id = edge_id.into();

        if start_id.is_empty() {
            return Err(EdgeError::EmptyStart.into());
        }
        if end_id.is_empty() {
            return Err(EdgeError::EmptyEnd.into());
        }
        if edge_id.is_empty() {
            return Err(EdgeError::EmptyId.into());
        }
        if self.is_edge(&edge_id) {
            return Err(GraphError::DuplicateEdge(edge_id).into());
        }

        // Resolve both endpoints before touching the edge table
        let start = self.get_node(start_id)?.id().to_owned();
        let end = self.get_node(end_id)?.id().to_owned();

        log::debug!("Added edge {} ({} -> {}, weight {})", edge_id, start, end, weight);
        self.edges
            .insert(edge_id.clone(), Edge::new(start, end, edge_id, weight));
        Ok(())
    }

    /// Add a directed edge with [`DEFAULT_WEIGHT`].
    pub fn connect(
        &mut self,
        start_id: &str,
        end_id: &str,
        edge_id: impl Into<String>,
    ) -> DigraphResult<()> {
        self.add_unidirectional_edge(start_id, end_id, edge_id, DEFAULT_WEIGHT)
    }

    /// Add a bidirectional edge in the graph.
    ///
    /// Not available yet: always fails with [`GraphError::Unsupported`] and
    /// leaves the graph untouched, whatever the arguments.
    pub fn add_bidirectional_edge(
        &mut self,
        _start_id: &str,
        _end_id: &str,
        _edge_id: impl Into<String>,
        _weight: f64,
    ) -> DigraphResult<()> {
        Err(GraphError::Unsupported("bidirectional edges").into())
    }

    /// Get a node by id.
    pub fn get_node(&self, node_id: &str) -> DigraphResult<&Node<T>> {
        self.nodes
            .get(node_id)
            .ok_or_else(|| GraphError::NodeNotFound(node_id.to_owned()).into())
    }

    /// Get a node by id (mutable). Only the content can be changed through it.
    pub fn get_node_mut(&mut self, node_id: &str) -> DigraphResult<&mut Node<T>> {
        self.nodes
            .get_mut(node_id)
            .ok_or_else(|| GraphError::NodeNotFound(node_id.to_owned()).into())
    }

    /// Get an edge by id.
    pub fn get_edge(&self, edge_id: &str) -> DigraphResult<&Edge> {
        self.edges
            .get(edge_id)
            .ok_or_else(|| GraphError::EdgeNotFound(edge_id.to_owned()).into())
    }

    /// Get an edge by id (mutable). Only weight and the bidirectional flag can be changed.
    pub fn get_edge_mut(&mut self, edge_id: &str) -> DigraphResult<&mut Edge> {
        self.edges
            .get_mut(edge_id)
            .ok_or_else(|| GraphError::EdgeNotFound(edge_id.to_owned()).into())
    }

    /// Remove a specific edge, returning it.
    pub fn remove_edge(&mut self, edge_id: &str) -> DigraphResult<Edge> {
        let edge = self
            .edges
            .shift_remove(edge_id)
            .ok_or_else(|| GraphError::EdgeNotFound(edge_id.to_owned()))?;
        log::debug!("Removed edge {}", edge_id);
        Ok(edge)
    }

    /// Remove a node and all its edges, returning the node.
    pub fn remove_node(&mut self, node_id: &str) -> DigraphResult<Node<T>> {
        // Validate before any removal so a miss leaves both tables intact
        if !self.is_node(node_id) {
            return Err(GraphError::NodeNotFound(node_id.to_owned()).into());
        }

        let before = self.edges.len();
        self.edges.retain(|edge_id, edge| {
            let touches = edge.touches(node_id);
            if touches {
                log::trace!("Cascading removal of edge {}", edge_id);
            }
            !touches
        });

        let node = self
            .nodes
            .shift_remove(node_id)
            .ok_or_else(|| GraphError::NodeNotFound(node_id.to_owned()))?;
        log::debug!(
            "Removed node {} and {} edge(s)",
            node_id,
            before - self.edges.len()
        );
        Ok(node)
    }

    /// Get all edges leaving this node, in insertion order.
    pub fn edges_from(&self, node_id: &str) -> Vec<&Edge> {
        self.edges.values().filter(|e| e.start() == node_id).collect()
    }

    /// Get all edges that point TO this node, in insertion order.
    pub fn edges_to(&self, node_id: &str) -> Vec<&Edge> {
        self.edges.values().filter(|e| e.end() == node_id).collect()
    }

    /// Start nodes of every edge ending at `node_id`.
    ///
    /// One entry per edge, so parallel edges from the same node yield it
    /// more than once. Unknown ids yield an empty list.
    pub fn get_predecessors(&self, node_id: &str) -> Vec<&Node<T>> {
        self.edges_to(node_id)
            .into_iter()
            .filter_map(|e| self.nodes.get(e.start()))
            .collect()
    }

    /// End nodes of every edge starting at `node_id`. Same policy as
    /// [`Graph::get_predecessors`].
    pub fn get_successors(&self, node_id: &str) -> Vec<&Node<T>> {
        self.edges_from(node_id)
            .into_iter()
            .filter_map(|e| self.nodes.get(e.end()))
            .collect()
    }

    /// Drop every node and edge.
    pub fn clear(&mut self) {
        self.edges.clear();
        self.nodes.clear();
    }
}

impl<T: Payload> Graph<T> {
    /// Add a node in the graph.
    ///
    /// Fails with [`NodeError`] on blank content or an empty id (content is
    /// checked first), and with [`GraphError::DuplicateNode`] if the id is taken.
    pub fn add_node(&mut self, content: T, node_id: impl Into<String>) -> DigraphResult<()> {
        if content.is_blank() {
            return Err(NodeError::EmptyContent.into());
        }

        let node_id = node_id.into();
        if node_id.is_empty() {
            return Err(NodeError::EmptyId.into());
        }
        if self.is_node(&node_id) {
            return Err(GraphError::DuplicateNode(node_id).into());
        }

        log::debug!("Added node {}", node_id);
        self.nodes
            .insert(node_id.clone(), Node::new(content, node_id));
        Ok(())
    }
}
