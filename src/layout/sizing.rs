//! Display size tiers
//!
//! Marker and label sizes shrink in fixed steps as the node count
//! grows, so small trees render large and legible while wide trees
//! still fit the surface. Pure step function, total over all counts.

/// Marker and label sizing for one rendered tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct SizeTier {
    /// Marker (node circle) size, in renderer units
    pub marker_size: u32,

    /// Label font size, in points
    pub font_size: u32,
}

/// Map a node count to its display tier
pub fn size_tier(node_count: usize) -> SizeTier {
    let (marker_size, font_size) = match node_count {
        0..=1 => (4000, 40),
        2..=3 => (3500, 35),
        4..=7 => (3000, 30),
        8..=15 => (2500, 25),
        16..=31 => (800, 15),
        32..=63 => (180, 9),
        _ => (40, 4),
    };
    SizeTier {
        marker_size,
        font_size,
    }
}
