use proptest::prelude::*;

use canopy::{depth_profile, inorder, positions, Node, Tree};

fn subtree_sizes_balanced(node: &Node) -> bool {
    let left = node.left.as_deref().map_or(0, Node::size);
    let right = node.right.as_deref().map_or(0, Node::size);
    if left.abs_diff(right) > 1 {
        return false;
    }
    node.left.as_deref().map_or(true, subtree_sizes_balanced)
        && node.right.as_deref().map_or(true, subtree_sizes_balanced)
}

proptest! {
    #[test]
    fn preorder_variants_agree(n in 0usize..512) {
        let tree = Tree::balanced(n);
        let iterative = tree.preorder_iterative();
        let recursive = tree.preorder_recursive();
        prop_assert_eq!(&iterative, &recursive, "variants must match");
        prop_assert_eq!(iterative.len(), n, "sequence must visit every node");
    }

    #[test]
    fn preorder_covers_id_range_exactly_once(n in 0usize..512) {
        let mut ids = Tree::balanced(n).preorder_iterative();
        ids.sort_unstable();
        let expected: Vec<u64> = (1..=n as u64).collect();
        prop_assert_eq!(ids, expected);
    }

    #[test]
    fn every_subtree_is_balanced(n in 1usize..512) {
        let tree = Tree::balanced(n);
        prop_assert!(subtree_sizes_balanced(tree.root().unwrap()));
    }

    #[test]
    fn height_is_ceil_log2(n in 0usize..4096) {
        let tree = Tree::balanced(n);
        // ceil(log2(n + 1)) without going through floats
        let expected = (n + 1).next_power_of_two().trailing_zeros() as usize;
        prop_assert_eq!(tree.height(), expected, "height wrong for n={}", n);
    }

    #[test]
    fn inorder_is_strictly_increasing(n in 0usize..512) {
        let tree = Tree::balanced(n);
        let ids = inorder(tree.root());
        prop_assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert_eq!(ids.len(), n);
    }

    #[test]
    fn layout_places_every_node(n in 0usize..128, gap in 0.01f64..10.0) {
        let tree = Tree::balanced(n);
        let pos = positions(tree.root(), gap);
        prop_assert_eq!(pos.len(), n);

        let profile = depth_profile(tree.root());
        prop_assert_eq!(profile.iter().sum::<usize>(), n);

        // y is quantized to whole multiples of the gap, one per level
        for point in pos.values() {
            let depth = (-point.y / gap).round();
            prop_assert!((point.y + depth * gap).abs() < 1e-9);
            prop_assert!((depth as usize) < profile.len().max(1));
        }
    }

    #[test]
    fn children_sit_one_gap_below_parents(n in 1usize..128) {
        let tree = Tree::balanced(n);
        let pos = positions(tree.root(), 0.5);
        for (parent, child) in tree.edges() {
            let parent_y = pos[&parent].y;
            let child_y = pos[&child].y;
            prop_assert!((child_y - (parent_y - 0.5)).abs() < 1e-9);
        }
    }
}
