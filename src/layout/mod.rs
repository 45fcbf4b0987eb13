//! 2-D tree layout for rendering
//!
//! Two passes over the tree:
//! 1. Depth profile: per-depth node counts; the widest level sets the
//!    horizontal extent of the drawing.
//! 2. Recursive placement: each node is centered in its span, and the
//!    span is halved for its children. Depth descends in negative y.

pub mod sizing;

pub use sizing::{size_tier, SizeTier};

use std::collections::HashMap;

use crate::tree::Node;

/// A node's position on the rendering surface
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct Point {
    /// Horizontal coordinate (midpoint of the node's span)
    pub x: f64,

    /// Vertical coordinate (0 at the root, `-depth * vert_gap` below)
    pub y: f64,
}

/// Per-depth node counts, indexed by depth from the root
///
/// Historically used to size canvases; the placement pass only needs
/// the maximum entry, but the full profile is kept available.
pub fn depth_profile(root: Option<&Node>) -> Vec<usize> {
    let mut levels = Vec::new();
    if let Some(node) = root {
        count_levels(node, 0, &mut levels);
    }
    levels
}

fn count_levels(node: &Node, depth: usize, levels: &mut Vec<usize>) {
    if levels.len() <= depth {
        levels.resize(depth + 1, 0);
    }
    levels[depth] += 1;
    if let Some(left) = node.left.as_deref() {
        count_levels(left, depth + 1, levels);
    }
    if let Some(right) = node.right.as_deref() {
        count_levels(right, depth + 1, levels);
    }
}

/// Assign a coordinate to every node
///
/// The root takes the span `[0, max_width]` at y = 0. At each node the
/// first child *present* takes the left half-span and the second the
/// right half-span, one `vert_gap` further down. Slot assignment is by
/// presence order, not left/right identity: an only child always lands
/// in the left slot, even when it is structurally a right child.
///
/// Absent root yields an empty mapping.
pub fn positions(root: Option<&Node>, vert_gap: f64) -> HashMap<u64, Point> {
    let mut pos = HashMap::new();
    let Some(node) = root else {
        return pos;
    };
    let max_width = depth_profile(root).into_iter().max().unwrap_or(0) as f64;
    place(node, 0.0, max_width, 0.0, vert_gap, &mut pos);
    pos
}

fn place(
    node: &Node,
    left: f64,
    right: f64,
    vert_loc: f64,
    vert_gap: f64,
    pos: &mut HashMap<u64, Point>,
) {
    let mid = (left + right) / 2.0;
    pos.insert(node.id, Point { x: mid, y: vert_loc });

    let mut children = node.left.as_deref().into_iter().chain(node.right.as_deref());
    if let Some(first) = children.next() {
        place(first, left, mid, vert_loc - vert_gap, vert_gap, pos);
    }
    if let Some(second) = children.next() {
        place(second, mid, right, vert_loc - vert_gap, vert_gap, pos);
    }
}
