//! The uncoloured binary search tree layer.
//!
//! Nodes live in a [`Slab`] arena and link to each other by [`NodeId`]. This
//! layer maintains the BST ordering and the parent/child link symmetry, and
//! never reads or writes a node's colour except through the accessors used
//! by the red-black layer.

use std::{
    borrow::Borrow,
    cmp::Ordering,
    ops::{Index, IndexMut},
};

use slab::Slab;

use crate::node::{Color, Node, NodeId};

#[derive(Debug, Clone)]
pub(crate) struct Bst<K, V> {
    nodes: Slab<Node<K, V>>,
    root: Option<NodeId>,

    /// The number of nodes linked into the tree.
    n: usize,
}

impl<K, V> Default for Bst<K, V> {
    fn default() -> Self {
        Self {
            nodes: Slab::new(),
            root: None,
            n: 0,
        }
    }
}

impl<K, V> Index<NodeId> for Bst<K, V> {
    type Output = Node<K, V>;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}

impl<K, V> IndexMut<NodeId> for Bst<K, V> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        &mut self.nodes[id.0]
    }
}

impl<K, V> Bst<K, V> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            root: None,
            n: 0,
        }
    }

    pub(crate) fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub(crate) fn set_root(&mut self, root: Option<NodeId>) {
        self.root = root;
    }

    pub(crate) fn len(&self) -> usize {
        self.n
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&Node<K, V>> {
        self.nodes.get(id.0)
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<K, V>> {
        self.nodes.get_mut(id.0)
    }

    /// Find a node with a key equal to `key`.
    ///
    /// When duplicate keys exist, the first match encountered descending
    /// from the root is returned.
    pub(crate) fn search<Q>(&self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut ptr = self.root;

        while let Some(id) = ptr {
            let n = &self[id];
            ptr = match key.cmp(n.key().borrow()) {
                Ordering::Less => n.left,
                Ordering::Equal => return Some(id),
                Ordering::Greater => n.right,
            };
        }

        None
    }

    /// Link `node` into the tree as a leaf, descending from the root.
    ///
    /// Keys equal to an existing key are placed in its right subtree.
    ///
    /// The caller is responsible for `node` being unlinked.
    pub(crate) fn insert(&mut self, node: Node<K, V>) -> NodeId
    where
        K: Ord,
    {
        debug_assert!(node.is_unlinked());

        // Find the parent of the new leaf, and which side it hangs off.
        let mut parent = None;
        let mut ptr = self.root;
        while let Some(id) = ptr {
            let n = &self[id];
            let go_left = node.key() < n.key();
            parent = Some((id, go_left));
            ptr = if go_left { n.left } else { n.right };
        }

        let id = NodeId(self.nodes.insert(node));
        match parent {
            None => self.root = Some(id),
            Some((p, true)) => self[p].left = Some(id),
            Some((p, false)) => self[p].right = Some(id),
        }
        self[id].parent = parent.map(|(p, _)| p);

        self.n += 1;
        id
    }

    /// Remove the node `id` from the arena, returning it with all links
    /// cleared.
    ///
    /// The caller must already have unlinked `id` from its neighbours.
    pub(crate) fn take(&mut self, id: NodeId) -> Node<K, V> {
        debug_assert!(self[id].left.is_none() || self[id].right.is_none());
        debug_assert_ne!(self.root, Some(id));

        let mut node = self.nodes.remove(id.0);
        node.unlink();

        self.n -= 1;
        node
    }

    /// Return the node holding the minimum key in the subtree rooted at
    /// `id`.
    pub(crate) fn minimum(&self, id: NodeId) -> NodeId {
        let mut id = id;
        while let Some(left) = self[id].left {
            id = left;
        }
        id
    }

    /// Return the in-order successor of `id`, if any.
    pub(crate) fn successor(&self, id: NodeId) -> Option<NodeId> {
        if let Some(right) = self[id].right {
            return Some(self.minimum(right));
        }

        // Otherwise the successor is the first ancestor reached from a left
        // subtree.
        let mut child = id;
        let mut ptr = self[id].parent;
        while let Some(p) = ptr {
            if self[p].left == Some(child) {
                return Some(p);
            }
            child = p;
            ptr = self[p].parent;
        }

        None
    }

    pub(crate) fn parent(&self, id: NodeId) -> Option<NodeId> {
        self[id].parent
    }

    pub(crate) fn left(&self, id: NodeId) -> Option<NodeId> {
        self[id].left
    }

    pub(crate) fn right(&self, id: NodeId) -> Option<NodeId> {
        self[id].right
    }

    /// The colour of `id`, with an absent node being a black leaf.
    pub(crate) fn color(&self, id: Option<NodeId>) -> Color {
        id.map(|v| self[v].color).unwrap_or(Color::Black)
    }

    pub(crate) fn is_red(&self, id: Option<NodeId>) -> bool {
        self.color(id) == Color::Red
    }

    pub(crate) fn is_black(&self, id: Option<NodeId>) -> bool {
        self.color(id) == Color::Black
    }

    pub(crate) fn set_color(&mut self, id: NodeId, color: Color) {
        self[id].color = color;
    }

    pub(crate) fn is_left_child(&self, id: NodeId) -> bool {
        self.parent(id)
            .map(|p| self[p].left == Some(id))
            .unwrap_or_default()
    }

    /// The other child of `id`'s parent.
    pub(crate) fn sibling(&self, id: NodeId) -> Option<NodeId> {
        let p = self.parent(id)?;
        if self[p].left == Some(id) {
            self[p].right
        } else {
            self[p].left
        }
    }

    pub(crate) fn grandparent(&self, id: NodeId) -> Option<NodeId> {
        self.parent(id).and_then(|p| self.parent(p))
    }

    pub(crate) fn uncle(&self, id: NodeId) -> Option<NodeId> {
        self.parent(id).and_then(|p| self.sibling(p))
    }

    /// Replace the link from `parent` to `old` with a link to `new`, or
    /// replace the root if `parent` is [`None`].
    ///
    /// The parent link of `new` is not modified.
    pub(crate) fn replace_child(
        &mut self,
        parent: Option<NodeId>,
        old: NodeId,
        new: Option<NodeId>,
    ) {
        match parent {
            None => {
                debug_assert_eq!(self.root, Some(old));
                self.root = new;
            }
            Some(p) if self[p].left == Some(old) => self[p].left = new,
            Some(p) => {
                debug_assert_eq!(self[p].right, Some(old));
                self[p].right = new;
            }
        }
    }

    /// Left rotate the subtree rooted at `x` around the pivot point `P`.
    ///
    /// ```text
    ///
    ///      x
    ///     / \                               P
    ///    1   P         Rotate Left        /   \
    ///       / \      --------------->    x     y
    ///      2   y                        / \   / \
    ///         / \                      1   2 3   4
    ///        3   4
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `x` has no right pointer (cannot be rotated).
    pub(crate) fn left_rotate(&mut self, x: NodeId) {
        let p = self[x].right.expect("left rotation requires a right child");

        let inner = self[p].left;
        self[x].right = inner;
        if let Some(v) = inner {
            self[v].parent = Some(x);
        }

        let parent = self[x].parent;
        self.replace_child(parent, x, Some(p));
        self[p].parent = parent;

        self[p].left = Some(x);
        self[x].parent = Some(p);
    }

    /// Right rotate the subtree rooted at `y` around the pivot point `P`.
    ///
    /// ```text
    ///          y
    ///         / \                           P
    ///        P   4     Rotate Right       /   \
    ///       / \      --------------->    x     y
    ///      x   3                        / \   / \
    ///     / \                          1   2 3   4
    ///    1   2
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `y` has no left pointer (cannot be rotated).
    pub(crate) fn right_rotate(&mut self, y: NodeId) {
        let p = self[y].left.expect("right rotation requires a left child");

        let inner = self[p].right;
        self[y].left = inner;
        if let Some(v) = inner {
            self[v].parent = Some(y);
        }

        let parent = self[y].parent;
        self.replace_child(parent, y, Some(p));
        self[p].parent = parent;

        self[p].right = Some(y);
        self[y].parent = Some(p);
    }

    /// Exchange the tree positions of `u` and its in-order successor `s`.
    ///
    /// After the swap `s` occupies the position `u` held (with `u`'s
    /// children), and `u` occupies the position `s` held, inheriting `s`'s
    /// right subtree. Both handles continue to address their own keys.
    /// Colours are left untouched.
    ///
    /// ```text
    ///        u                     s
    ///       / \                   / \
    ///      a   r                 a   r
    ///         /     --------->      /
    ///        s                     u
    ///         \                     \
    ///          b                     b
    /// ```
    ///
    /// `u` must have a right subtree, and `s` must be its minimum.
    pub(crate) fn swap_with_successor(&mut self, u: NodeId, s: NodeId) {
        debug_assert_eq!(self[u].right.map(|r| self.minimum(r)), Some(s));
        debug_assert!(self[s].left.is_none());

        let u_parent = self[u].parent;
        let u_left = self[u].left;
        let u_right = self[u].right;
        let s_parent = self[s].parent;
        let s_right = self[s].right;

        // Place "s" into the position of "u".
        self.replace_child(u_parent, u, Some(s));
        self[s].parent = u_parent;

        self[s].left = u_left;
        if let Some(v) = u_left {
            self[v].parent = Some(s);
        }

        if u_right == Some(s) {
            // "s" was the direct right child of "u", so "u" hangs off the
            // right of "s" after the swap.
            self[s].right = Some(u);
            self[u].parent = Some(s);
        } else {
            self[s].right = u_right;
            if let Some(v) = u_right {
                self[v].parent = Some(s);
            }

            // "s" is the left-most node of the right subtree of "u", and is
            // therefore a left child of a node other than "u".
            let sp = s_parent.expect("successor below the right child has a parent");
            debug_assert_eq!(self[sp].left, Some(s));
            self[sp].left = Some(u);
            self[u].parent = Some(sp);
        }

        // Move "u" into the old position of "s".
        self[u].left = None;
        self[u].right = s_right;
        if let Some(v) = s_right {
            self[v].parent = Some(u);
        }
    }

    /// The number of nodes on the longest root-to-leaf path.
    ///
    /// An empty tree has a height of 0, a single node a height of 1.
    pub(crate) fn height(&self) -> usize {
        let mut max = 0;

        let mut stack = self.root.map(|v| (v, 1)).into_iter().collect::<Vec<_>>();
        while let Some((id, depth)) = stack.pop() {
            max = max.max(depth);

            let n = &self[id];
            stack.extend(n.left.iter().chain(n.right.iter()).map(|&v| (v, depth + 1)));
        }

        max
    }

    /// The number of nodes reachable from the root.
    ///
    /// Unlike [`Bst::len()`] this walks the tree.
    pub(crate) fn size(&self) -> usize {
        let mut count = 0;

        let mut stack = self.root.into_iter().collect::<Vec<_>>();
        while let Some(id) = stack.pop() {
            count += 1;

            let n = &self[id];
            stack.extend(n.left.iter().chain(n.right.iter()));
        }

        count
    }
}
