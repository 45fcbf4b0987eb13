//! Owned binary tree node
//!
//! Node = identifier + exclusive links to at most two children
//! No parent pointers; the tree owns its nodes transitively,
//! so sharing and cycles are impossible by construction.

use std::fmt;

/// A single tree node
///
/// The identifier equals the node's 1-based rank in the input range,
/// so for a balanced build every left descendant carries a smaller id
/// and every right descendant a larger one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Identifier (1-based, unique within the tree)
    pub id: u64,

    /// Left child
    pub left: Option<Box<Node>>,

    /// Right child
    pub right: Option<Box<Node>>,
}

impl Node {
    /// Create a detached node with no children
    pub fn new(id: u64) -> Self {
        Self {
            id,
            left: None,
            right: None,
        }
    }

    /// Check if leaf (no children)
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Subtree size in nodes, including self
    pub fn size(&self) -> usize {
        1 + self.left.as_deref().map_or(0, Node::size)
            + self.right.as_deref().map_or(0, Node::size)
    }

    /// Subtree height in levels
    ///
    /// A single node has height 1 (levels, not edges).
    pub fn height(&self) -> usize {
        let left = self.left.as_deref().map_or(0, Node::height);
        let right = self.right.as_deref().map_or(0, Node::height);
        1 + left.max(right)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.id)
    }
}
