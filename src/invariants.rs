//! Assertions over the structural properties of an [`RbTree`].
//!
//! A red-black tree upholds the following properties:
//!
//!   1. Every node is either red or black.
//!   2. The root is black.
//!   3. Every absent child (leaf) is black.
//!   4. A red node has no red children.
//!   5. For each node, every path to a descendant leaf contains the same
//!      number of black nodes (the node's black-height).
//!
//! A consequence of properties 1 to 5 is that the height `h` of a tree of `n`
//! nodes satisfies `h <= 2 * log2(n + 1)`.
//!
//! Each function in this module panics when the property it checks does not
//! hold. A violation is a defect in the tree implementation, never the result
//! of caller input, so these are intended for tests and debugging only.

use std::fmt::Debug;

use crate::{
    bst::Bst,
    node::{Color, NodeId},
    RbTree,
};

/// Return the handles of all nodes reachable from the root, in pre-order.
fn preorder<K, V>(t: &Bst<K, V>) -> Vec<NodeId> {
    let mut out = Vec::with_capacity(t.len());

    let mut stack = t.root().into_iter().collect::<Vec<_>>();
    while let Some(id) = stack.pop() {
        out.push(id);

        // Prepare to visit the children
        stack.extend(t.right(id).into_iter().chain(t.left(id)));
    }

    out
}

/// Property 1: every node is either red or black.
pub fn assert_node_colors<K, V>(t: &RbTree<K, V>) {
    let t = t.bst();
    for id in preorder(t) {
        assert!(matches!(t[id].color(), Color::Red | Color::Black));
    }
}

/// Property 2: the root, if any, is black and has no parent.
pub fn assert_black_root<K, V>(t: &RbTree<K, V>) {
    let t = t.bst();
    if let Some(root) = t.root() {
        assert_eq!(t[root].color(), Color::Black, "red root");
        assert!(t[root].parent().is_none(), "root has a parent");
    }
}

/// Property 3: every leaf is black.
///
/// Leaves are represented by absent children, which are always considered
/// black, so this always holds.
pub fn assert_black_leaves<K, V>(_t: &RbTree<K, V>) {}

/// Property 4: no red node has a red parent.
pub fn assert_no_red_red<K, V>(t: &RbTree<K, V>) {
    let t = t.bst();
    for id in preorder(t) {
        if t.is_red(Some(id)) {
            let parent = t
                .parent(id)
                .expect("red node without a parent (red root)");
            assert!(
                t.is_black(Some(parent)),
                "consecutive red nodes {parent:?} -> {id:?}"
            );
        }
    }
}

/// Property 5: compute the black-height of the tree, asserting that the
/// left and right black-heights of every node are equal.
///
/// Absent leaves count as one black node, so an empty tree has a
/// black-height of 1.
pub fn black_height<K, V>(t: &RbTree<K, V>) -> usize {
    fn recurse<K, V>(t: &Bst<K, V>, id: Option<NodeId>) -> usize {
        let Some(id) = id else {
            return 1;
        };

        let left = recurse(t, t.left(id));
        let right = recurse(t, t.right(id));
        assert_eq!(
            left, right,
            "different left and right black-heights for {id:?}"
        );

        left + usize::from(t.is_black(Some(id)))
    }

    recurse(t.bst(), t.root())
}

/// Assert the height of the tree does not exceed `2 * log2(n + 1)`.
pub fn assert_height_bound<K, V>(t: &RbTree<K, V>) {
    let n = t.len();
    if n == 0 {
        return;
    }

    let height = t.height();
    let bound = 2.0 * ((n + 1) as f64).log2();
    assert!(
        height as f64 <= bound,
        "height {height} exceeds bound {bound} for {n} nodes"
    );
}

/// Assert the in-order traversal of the tree yields keys in non-decreasing
/// order, and that no child is on the wrong side of its parent.
///
/// Rotations may move a key equal to its parent into the left subtree, so
/// equal keys are accepted on either side.
pub fn assert_bst_order<K, V>(t: &RbTree<K, V>)
where
    K: Ord + Debug,
{
    let keys = t.iter().map(|(k, _)| k).collect::<Vec<_>>();
    for window in keys.windows(2) {
        assert!(window[0] <= window[1], "keys out of order: {window:?}");
    }

    let t = t.bst();
    for id in preorder(t) {
        if let Some(left) = t.left(id) {
            assert!(
                t[left].key() <= t[id].key(),
                "left child {:?} greater than parent {:?}",
                t[left].key(),
                t[id].key(),
            );
        }
        if let Some(right) = t.right(id) {
            assert!(
                t[right].key() >= t[id].key(),
                "right child {:?} less than parent {:?}",
                t[right].key(),
                t[id].key(),
            );
        }
    }
}

/// Assert every child links back to its parent.
pub fn assert_links<K, V>(t: &RbTree<K, V>) {
    let t = t.bst();
    for id in preorder(t) {
        for child in [t.left(id), t.right(id)].into_iter().flatten() {
            assert_eq!(t.parent(child), Some(id), "broken parent link");
        }
    }
}

/// Assert the tracked node count matches the number of reachable nodes.
pub fn assert_count<K, V>(t: &RbTree<K, V>) {
    assert_eq!(t.len(), t.size(), "tracked count differs from tree size");
    assert_eq!(t.is_empty(), t.root().is_none());
}

/// Assert all of the above properties hold.
pub fn assert_rb_properties<K, V>(t: &RbTree<K, V>)
where
    K: Ord + Debug,
{
    assert_links(t);
    assert_count(t);
    assert_bst_order(t);
    assert_height_bound(t);
    assert_node_colors(t);
    assert_black_root(t);
    assert_black_leaves(t);
    assert_no_red_red(t);
    black_height(t);
}
