//! # Balanced binary tree construction, traversal, and 2-D layout
//!
//! This library builds a height-balanced binary tree over `n`
//! sequentially numbered nodes and answers the queries a rendering
//! caller needs:
//!
//! 1. **Construction**: recursive midpoint split over the ordered id
//!    range, left-biased on even lengths
//! 2. **Traversal**: preorder by two independent algorithms (explicit
//!    stack and structural recursion) that always agree
//! 3. **Height**: levels from root to deepest leaf
//! 4. **Layout**: per-node `(x, y)` coordinates from recursive
//!    horizontal span splitting, plus a display size tier
//!
//! Every operation is a blocking pure computation; each request builds
//! a fresh tree, queries it, and discards it. No state survives a call.
//!
//! ## Usage Example
//!
//! ```
//! use canopy::{layout_report, Tree};
//!
//! let tree = Tree::balanced(7);
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.preorder_iterative(), vec![4, 2, 1, 3, 6, 5, 7]);
//!
//! let report = layout_report(&tree, 0.5).unwrap();
//! assert_eq!(report.positions.len(), 7);
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

pub mod layout; // Coordinate assignment and display sizing
pub mod tree;   // Balanced construction and traversal

// Re-exports for convenience
pub use layout::{depth_profile, positions, size_tier, Point, SizeTier};
pub use tree::traversal::{inorder, preorder_iterative, preorder_recursive};
pub use tree::{Node, Tree};

use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

/// Largest node count accepted at the interface
///
/// Keeps resource exhaustion a loud boundary failure rather than a
/// silent truncation somewhere inside the build.
pub const MAX_NODES: usize = 1_000_000;

/// Largest tree the layout pipeline will lay out for drawing
pub const DISPLAY_THRESHOLD: usize = 127;

/// Errors raised at the library boundary
///
/// The core queries themselves are total: an absent root is valid
/// input everywhere, never an error.
#[derive(Error, Debug)]
pub enum CanopyError {
    /// Requested node count exceeds [`MAX_NODES`]
    #[error("node count {0} exceeds the supported maximum {MAX_NODES}")]
    TooManyNodes(usize),

    /// Tree is too large to lay out for display
    #[error("layout supports at most {DISPLAY_THRESHOLD} nodes, got {0}")]
    TooLargeToDisplay(usize),
}

/// Everything a rendering surface needs to draw one tree
#[derive(Debug, Clone)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct LayoutReport {
    /// Node identifier → drawing coordinate
    pub positions: HashMap<u64, Point>,

    /// Directed `(parent, child)` edges in depth-first order
    pub edges: Vec<(u64, u64)>,

    /// Marker and font sizing for this node count
    pub tier: SizeTier,
}

/// Lay out a tree for display
///
/// Combines the placement pass, the edge list, and the size tier into
/// one report. Trees above [`DISPLAY_THRESHOLD`] are refused; the
/// traversal and height queries remain available for them.
pub fn layout_report(tree: &Tree, vert_gap: f64) -> Result<LayoutReport, CanopyError> {
    if tree.len() > DISPLAY_THRESHOLD {
        return Err(CanopyError::TooLargeToDisplay(tree.len()));
    }

    let positions = layout::positions(tree.root(), vert_gap);
    debug!(
        nodes = tree.len(),
        height = tree.height(),
        vert_gap,
        "laid out tree"
    );

    Ok(LayoutReport {
        positions,
        edges: tree.edges(),
        tier: layout::size_tier(tree.len()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_covers_every_node() {
        let tree = Tree::balanced(15);
        let report = layout_report(&tree, 0.5).unwrap();
        assert_eq!(report.positions.len(), 15);
        assert_eq!(report.edges.len(), 14);
        assert_eq!(report.tier, size_tier(15));
    }

    #[test]
    fn test_report_refuses_oversized_tree() {
        let tree = Tree::balanced(DISPLAY_THRESHOLD + 1);
        assert!(matches!(
            layout_report(&tree, 0.5),
            Err(CanopyError::TooLargeToDisplay(_))
        ));
    }

    #[test]
    fn test_report_for_empty_tree() {
        let tree = Tree::balanced(0);
        let report = layout_report(&tree, 0.5).unwrap();
        assert!(report.positions.is_empty());
        assert!(report.edges.is_empty());
    }
}
