//! Graph vertex holding an opaque payload.

use serde::Serialize;

/// A node in the graph: a unique string id plus a payload the graph never inspects.
///
/// Nodes are only created through [`crate::Graph::add_node`]. The id is fixed
/// from then on; the content can be changed freely.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node<T> {
    id: String,
    content: T,
}

impl<T> Node<T> {
    pub(crate) fn new(content: T, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content,
        }
    }

    /// Node identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The object contained in the node.
    pub fn content(&self) -> &T {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut T {
        &mut self.content
    }

    pub fn set_content(&mut self, content: T) {
        self.content = content;
    }

    /// Swap in new content, returning the previous payload.
    pub fn replace_content(&mut self, content: T) -> T {
        std::mem::replace(&mut self.content, content)
    }

    pub fn into_content(self) -> T {
        self.content
    }
}
