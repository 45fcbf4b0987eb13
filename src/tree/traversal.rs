//! Preorder traversal, two independent algorithms
//!
//! Both variants must produce identical sequences for any tree. The
//! iterative one trades call-stack recursion for an explicit LIFO
//! stack; pushing the right child before the left is what makes the
//! left subtree pop first and reproduces preorder.

use super::Node;

/// Preorder via an explicit stack
///
/// Stack depth is bounded by the tree height, not the node count, so
/// this variant is the safe choice near the interface bound.
pub fn preorder_iterative(root: Option<&Node>) -> Vec<u64> {
    let mut out = Vec::new();
    let mut stack = Vec::new();
    if let Some(node) = root {
        stack.push(node);
    }
    while let Some(node) = stack.pop() {
        out.push(node.id);
        if let Some(right) = node.right.as_deref() {
            stack.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            stack.push(left);
        }
    }
    out
}

/// Preorder via structural recursion: self, left subtree, right subtree
pub fn preorder_recursive(root: Option<&Node>) -> Vec<u64> {
    let mut out = Vec::new();
    if let Some(node) = root {
        preorder_into(node, &mut out);
    }
    out
}

fn preorder_into(node: &Node, out: &mut Vec<u64>) {
    out.push(node.id);
    if let Some(left) = node.left.as_deref() {
        preorder_into(left, out);
    }
    if let Some(right) = node.right.as_deref() {
        preorder_into(right, out);
    }
}

/// In-order identifier sequence
///
/// Strictly increasing for any tree built by [`Tree::balanced`], since
/// the midpoint split keeps left ids below and right ids above the root.
///
/// [`Tree::balanced`]: super::Tree::balanced
pub fn inorder(root: Option<&Node>) -> Vec<u64> {
    let mut out = Vec::new();
    if let Some(node) = root {
        inorder_into(node, &mut out);
    }
    out
}

fn inorder_into(node: &Node, out: &mut Vec<u64>) {
    if let Some(left) = node.left.as_deref() {
        inorder_into(left, out);
    }
    out.push(node.id);
    if let Some(right) = node.right.as_deref() {
        inorder_into(right, out);
    }
}
