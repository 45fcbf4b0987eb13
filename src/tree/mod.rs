//! Height-balanced binary tree over a contiguous identifier range
//!
//! Construction is a recursive midpoint split over the ordered id list:
//! the element at index ⌊len/2⌋ becomes the root, everything before it
//! the left subtree, everything after it the right subtree.
//!
//! The split works on index ranges, never on copied sub-lists, so total
//! memory stays O(n) and recursion depth stays O(log n).

mod node;
pub mod traversal;

pub use node::Node;

use crate::{CanopyError, MAX_NODES};

/// Balanced binary tree built from the range `1..=n`
///
/// Immutable after construction; one tree per request, discarded after
/// the traversal/height/layout queries it was built for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    root: Option<Box<Node>>,
    len: usize,
}

impl Tree {
    /// Build a balanced tree over ids `1..=n`
    ///
    /// `n = 0` yields the empty tree. The same `n` always yields an
    /// isomorphic tree: identical shape and id placement.
    pub fn balanced(n: usize) -> Self {
        Self {
            root: build_range(1, n as u64 + 1),
            len: n,
        }
    }

    /// Build a balanced tree, rejecting node counts above [`MAX_NODES`]
    ///
    /// Oversized requests fail loudly at the interface instead of being
    /// silently truncated.
    pub fn try_balanced(n: usize) -> Result<Self, CanopyError> {
        if n > MAX_NODES {
            return Err(CanopyError::TooManyNodes(n));
        }
        Ok(Self::balanced(n))
    }

    /// Root node, if the tree is non-empty
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the tree holds no nodes
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Tree height in levels
    ///
    /// Empty tree has height 0, a single node height 1.
    pub fn height(&self) -> usize {
        self.root.as_deref().map_or(0, Node::height)
    }

    /// Preorder identifier sequence via an explicit stack
    pub fn preorder_iterative(&self) -> Vec<u64> {
        traversal::preorder_iterative(self.root())
    }

    /// Preorder identifier sequence via structural recursion
    pub fn preorder_recursive(&self) -> Vec<u64> {
        traversal::preorder_recursive(self.root())
    }

    /// Directed `(parent, child)` edges in depth-first order
    ///
    /// This is the edge list a rendering surface draws, one arrow per
    /// child link, labeled by node identifier.
    pub fn edges(&self) -> Vec<(u64, u64)> {
        let mut edges = Vec::with_capacity(self.len.saturating_sub(1));
        if let Some(root) = self.root() {
            collect_edges(root, &mut edges);
        }
        edges
    }
}

/// Midpoint split over the half-open id range `[lo, hi)`
///
/// Ids are their own indices here, so the node at the floor midpoint is
/// the root of the range. Even-length ranges pick the *second* element
/// of the middle pair (0-based ⌊len/2⌋), leaving the smaller half on
/// the left.
fn build_range(lo: u64, hi: u64) -> Option<Box<Node>> {
    if lo >= hi {
        return None;
    }
    let mid = lo + (hi - lo) / 2;
    let mut node = Box::new(Node::new(mid));
    node.left = build_range(lo, mid);
    node.right = build_range(mid + 1, hi);
    Some(node)
}

fn collect_edges(node: &Node, out: &mut Vec<(u64, u64)>) {
    if let Some(left) = node.left.as_deref() {
        out.push((node.id, left.id));
        collect_edges(left, out);
    }
    if let Some(right) = node.right.as_deref() {
        out.push((node.id, right.id));
        collect_edges(right, out);
    }
}
