//! JSON operation scripts replayed against an in-memory graph.
//!
//! A script is a JSON array of objects tagged by `"op"`:
//!
//! ```json
//! [
//!   {"op": "add_node", "id": "A", "content": "payload-A"},
//!   {"op": "add_node", "id": "B", "content": {"name": "b"}},
//!   {"op": "add_edge", "start": "A", "end": "B", "id": "e1", "weight": 2.5},
//!   {"op": "successors", "id": "A"}
//! ]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::graph::Graph;
use crate::types::{DigraphResult, Edge, Node, DEFAULT_WEIGHT};

fn default_weight() -> f64 {
    DEFAULT_WEIGHT
}

/// One graph operation in a script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Op {
    AddNode {
        id: String,
        content: Value,
    },
    AddEdge {
        start: String,
        end: String,
        id: String,
        #[serde(default = "default_weight")]
        weight: f64,
    },
    AddBidirectionalEdge {
        #[serde(default)]
        start: String,
        #[serde(default)]
        end: String,
        #[serde(default)]
        id: String,
        #[serde(default = "default_weight")]
        weight: f64,
    },
    RemoveNode {
        id: String,
    },
    RemoveEdge {
        id: String,
    },
    GetNode {
        id: String,
    },
    GetEdge {
        id: String,
    },
    IsNode {
        id: String,
    },
    IsEdge {
        id: String,
    },
    Predecessors {
        id: String,
    },
    Successors {
        id: String,
    },
}

impl Op {
    /// The `"op"` tag of this operation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddNode { .. } => "add_node",
            Self::AddEdge { .. } => "add_edge",
            Self::AddBidirectionalEdge { .. } => "add_bidirectional_edge",
            Self::RemoveNode { .. } => "remove_node",
            Self::RemoveEdge { .. } => "remove_edge",
            Self::GetNode { .. } => "get_node",
            Self::GetEdge { .. } => "get_edge",
            Self::IsNode { .. } => "is_node",
            Self::IsEdge { .. } => "is_edge",
            Self::Predecessors { .. } => "predecessors",
            Self::Successors { .. } => "successors",
        }
    }
}

/// What a single operation produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Outcome {
    /// A mutation succeeded.
    Applied,
    Node(Node<Value>),
    Edge(Edge),
    Flag(bool),
    /// Node ids, in edge-insertion order.
    Nodes(Vec<String>),
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Applied => write!(f, "ok"),
            Self::Node(node) => write!(f, "{} = {}", node.id(), node.content()),
            Self::Edge(edge) => write!(f, "{} (weight {})", edge, edge.weight()),
            Self::Flag(flag) => write!(f, "{}", flag),
            Self::Nodes(ids) => write!(f, "[{}]", ids.join(", ")),
        }
    }
}

/// Parse a script from JSON text.
pub fn parse(text: &str) -> DigraphResult<Vec<Op>> {
    Ok(serde_json::from_str(text)?)
}

/// Read and parse a script file.
pub fn load(path: &Path) -> DigraphResult<Vec<Op>> {
    let text = std::fs::read_to_string(path)?;
    parse(&text)
}

fn ids(nodes: Vec<&Node<Value>>) -> Vec<String> {
    nodes.into_iter().map(|n| n.id().to_owned()).collect()
}

/// Apply one operation to the graph.
pub fn apply(graph: &mut Graph<Value>, op: &Op) -> DigraphResult<Outcome> {
    let outcome = match op {
        Op::AddNode { id, content } => {
            graph.add_node(content.clone(), id.as_str())?;
            Outcome::Applied
        }
        Op::AddEdge {
            start,
            end,
            id,
            weight,
        } => {
            graph.add_unidirectional_edge(start, end, id.as_str(), *weight)?;
            Outcome::Applied
        }
        Op::AddBidirectionalEdge {
            start,
            end,
            id,
            weight,
        } => {
            graph.add_bidirectional_edge(start, end, id.as_str(), *weight)?;
            Outcome::Applied
        }
        Op::RemoveNode { id } => {
            graph.remove_node(id)?;
            Outcome::Applied
        }
        Op::RemoveEdge { id } => {
            graph.remove_edge(id)?;
            Outcome::Applied
        }
        Op::GetNode { id } => Outcome::Node(graph.get_node(id)?.clone()),
        Op::GetEdge { id } => Outcome::Edge(graph.get_edge(id)?.clone()),
        Op::IsNode { id } => Outcome::Flag(graph.is_node(id)),
        Op::IsEdge { id } => Outcome::Flag(graph.is_edge(id)),
        Op::Predecessors { id } => Outcome::Nodes(ids(graph.get_predecessors(id))),
        Op::Successors { id } => Outcome::Nodes(ids(graph.get_successors(id))),
    };
    Ok(outcome)
}

/// Apply every operation in order, stopping at the first failure.
pub fn execute(graph: &mut Graph<Value>, ops: &[Op]) -> DigraphResult<Vec<Outcome>> {
    ops.iter().map(|op| apply(graph, op)).collect()
}
