use std::borrow::Borrow;

use log::{debug, trace};

use crate::{
    bst::Bst,
    dot,
    error::{Error, Result},
    iter::Iter,
    node::{Color, Node, NodeId},
};

/// A red-black tree mapping keys of type `K` to values of type `V`.
///
/// Duplicate keys are permitted and are ordered after the existing equal
/// keys.
#[derive(Debug, Clone)]
pub struct RbTree<K, V = ()>(Bst<K, V>);

impl<K, V> Default for RbTree<K, V> {
    fn default() -> Self {
        Self(Default::default())
    }
}

impl<K, V> RbTree<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct an empty tree with space for `capacity` nodes before
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Bst::with_capacity(capacity))
    }

    /// The number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The number of nodes reachable from the root, computed by walking the
    /// tree.
    pub fn size(&self) -> usize {
        self.0.size()
    }

    /// The number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        self.0.height()
    }

    pub fn root(&self) -> Option<NodeId> {
        self.0.root()
    }

    /// Return the [`Node`] addressed by `id`, if it is linked into this tree.
    pub fn node(&self, id: NodeId) -> Option<&Node<K, V>> {
        self.0.get(id)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<K, V>> {
        self.0.get_mut(id)
    }

    /// The handle of the node holding the smallest key.
    pub fn minimum(&self) -> Option<NodeId> {
        self.0.root().map(|v| self.0.minimum(v))
    }

    /// The in-order successor of `id`, if any.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not linked into this tree.
    pub fn successor(&self, id: NodeId) -> Option<NodeId> {
        self.0.successor(id)
    }

    /// Iterate over all `(key, value)` tuples in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        Iter::new(&self.0).map(|n| (n.key(), n.value()))
    }

    /// Render the tree in the Graphviz `dot` format, with each node filled
    /// with its colour.
    pub fn to_dot(&self) -> String
    where
        K: std::fmt::Display,
    {
        dot::print_dot(&self.0)
    }

    pub(crate) fn bst(&self) -> &Bst<K, V> {
        &self.0
    }
}

impl<K, V> RbTree<K, V>
where
    K: Ord,
{
    /// Return the handle of a node with a key equal to `key`.
    ///
    /// When duplicate keys exist, the match nearest the root is returned.
    pub fn search<Q>(&self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.0.search(key)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key).map(|v| self.0[v].value())
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key).is_some()
    }

    /// Insert `key` and `value` into the tree, returning the handle of the
    /// new node.
    pub fn insert(&mut self, key: K, value: V) -> NodeId {
        self.link(Node::new(key, value))
    }

    /// Insert a caller-supplied [`Node`], such as one previously returned by
    /// [`RbTree::remove()`].
    ///
    /// Returns [`Error::InvalidArgument`] if `node` has a parent or child
    /// link.
    pub fn insert_node(&mut self, node: Node<K, V>) -> Result<NodeId> {
        if !node.is_unlinked() {
            return Err(Error::InvalidArgument(
                "node to insert has a parent or children",
            ));
        }

        Ok(self.link(node))
    }

    fn link(&mut self, mut node: Node<K, V>) -> NodeId {
        debug!("insert into tree of {} nodes", self.len());

        node.color = Color::Red;
        let id = self.0.insert(node);
        self.fix_insertion(id);
        id
    }

    /// Restore the red-black properties after linking the red node `u`.
    fn fix_insertion(&mut self, u: NodeId) {
        let t = &mut self.0;
        let mut u = u;

        loop {
            // Case 1: "u" is the root.
            let Some(p) = t.parent(u) else {
                trace!("insert fixup: recolour root");
                t.set_color(u, Color::Black);
                return;
            };

            // Case 2: no consecutive reds were introduced.
            if t.is_black(Some(p)) {
                trace!("insert fixup: black parent");
                return;
            }

            // The parent is red, and therefore not the root.
            let g = t.grandparent(u).expect("red parent cannot be the root");

            // Case 3: red parent and red uncle.
            //
            // Push the red up to the grandparent, which may now be in
            // violation with its own parent.
            let uncle = t.uncle(u);
            if let Some(uncle) = uncle.filter(|&v| t.is_red(Some(v))) {
                trace!("insert fixup: red uncle");
                t.set_color(p, Color::Black);
                t.set_color(uncle, Color::Black);
                t.set_color(g, Color::Red);
                u = g;
                continue;
            }

            // Case 4: red parent and black (or absent) uncle.
            let parent_is_left = t.is_left_child(p);
            let u_is_left = t.is_left_child(u);

            match (parent_is_left, u_is_left) {
                // Zig-zag: rotate "u" above its parent to form a zig-zig
                // shape, and resolve that with the old parent as the new
                // bottom node.
                (true, false) => {
                    trace!("insert fixup: left-right zig-zag");
                    t.left_rotate(p);
                    u = p;
                }
                (false, true) => {
                    trace!("insert fixup: right-left zig-zag");
                    t.right_rotate(p);
                    u = p;
                }

                // Zig-zig: the grandparent is black, rotate the parent above
                // it and swap their colours.
                (true, true) => {
                    trace!("insert fixup: left-left zig-zig");
                    t.right_rotate(g);
                    t.set_color(p, Color::Black);
                    t.set_color(g, Color::Red);
                    return;
                }
                (false, false) => {
                    trace!("insert fixup: right-right zig-zig");
                    t.left_rotate(g);
                    t.set_color(p, Color::Black);
                    t.set_color(g, Color::Red);
                    return;
                }
            }
        }
    }

    /// Remove a node with a key equal to `key`, returning it fully unlinked.
    ///
    /// When duplicate keys exist, the match nearest the root is removed.
    /// Returns [`Error::NotFound`] if no node holds `key`.
    pub fn remove<Q>(&mut self, key: &Q) -> Result<Node<K, V>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let id = self.search(key).ok_or(Error::NotFound)?;
        self.remove_node(id)
    }

    /// Remove the node addressed by `id`, returning it fully unlinked.
    ///
    /// Returns [`Error::InvalidArgument`] if `id` does not address a node in
    /// this tree. Every node in the arena is linked into the tree, so a live
    /// handle is always removable.
    pub fn remove_node(&mut self, id: NodeId) -> Result<Node<K, V>> {
        if self.0.get(id).is_none() {
            return Err(Error::InvalidArgument("node is not in the tree"));
        }

        debug!("remove {id:?} from tree of {} nodes", self.len());

        let u = id;
        let t = &mut self.0;

        // A node with two children is swapped with its successor, which has
        // at most one child. The colours are swapped too, so the colour
        // structure of the tree positions is unchanged and "u" is now at the
        // bottom of the tree.
        if let (Some(_), Some(right)) = (t.left(u), t.right(u)) {
            let s = t.minimum(right);
            t.swap_with_successor(u, s);

            let (u_color, s_color) = (t.color(Some(u)), t.color(Some(s)));
            t.set_color(u, s_color);
            t.set_color(s, u_color);
        }

        // Invariant: "u" has at most one child.
        debug_assert!(t.left(u).is_none() || t.right(u).is_none());

        let parent = t.parent(u);
        let child = t.left(u).or(t.right(u));

        match (t.color(Some(u)), child) {
            // A red node with a single child would have unequal black-heights
            // for its two subtrees, so a red node here is always a leaf, and
            // never the root.
            (Color::Red, None) => {
                debug_assert!(parent.is_some());
                t.replace_child(parent, u, None);
            }
            (Color::Red, Some(_)) => {
                unreachable!("red node with a single child")
            }

            // A black node with a single child is spliced out, and the (red)
            // child painted black to keep the black-height of the path.
            (Color::Black, Some(c)) => {
                debug_assert!(t.is_red(Some(c)));
                t.replace_child(parent, u, Some(c));
                t[c].parent = parent;
                t.set_color(c, Color::Black);
            }

            (Color::Black, None) => match parent {
                None => t.set_root(None),
                Some(_) => {
                    // "u" is a black leaf, and removing it shortens every
                    // path through it by one black node. Repair the tree
                    // with "u" still linked, then unlink it from wherever
                    // the fixup moved it to.
                    self.fix_removal(u);

                    let t = &mut self.0;
                    let parent = t.parent(u);
                    t.replace_child(parent, u, None);
                }
            },
        }

        Ok(self.0.take(u))
    }

    /// Restore the black-height property for the black leaf `v`, which is
    /// about to be removed.
    ///
    /// The sibling of `v` (and of each ancestor visited) is never absent: a
    /// missing sibling would have a black-height lower than the subtree
    /// containing the black `v`, contradicting the black-height property.
    fn fix_removal(&mut self, v: NodeId) {
        let t = &mut self.0;
        let mut v = v;

        loop {
            // Case 1: "v" is the root, and all paths are short by one black
            // node.
            let Some(p) = t.parent(v) else {
                trace!("remove fixup: reached root");
                return;
            };

            // Case 2: red sibling.
            //
            // Rotate the sibling above the parent so that "v" has a black
            // sibling, and fall through to the remaining cases.
            let s = t.sibling(v).expect("black-height guarantees a sibling");
            if t.is_red(Some(s)) {
                trace!("remove fixup: red sibling");
                debug_assert!(t.is_black(Some(p)));

                t.set_color(s, Color::Black);
                t.set_color(p, Color::Red);
                if t.is_left_child(v) {
                    t.left_rotate(p);
                } else {
                    t.right_rotate(p);
                }
            }

            let v_is_left = t.is_left_child(v);
            let s = t.sibling(v).expect("black-height guarantees a sibling");
            debug_assert!(t.is_black(Some(s)));

            // The nephew nearest "v", and the one furthest away.
            let (near, far) = if v_is_left {
                (t.left(s), t.right(s))
            } else {
                (t.right(s), t.left(s))
            };
            let nephews_black = t.is_black(near) && t.is_black(far);

            // Case 3: parent, sibling and nephews are black.
            //
            // Paint the sibling red so both subtrees of the parent are short
            // by one, and continue with the parent as the deficient node.
            if t.is_black(Some(p)) && nephews_black {
                trace!("remove fixup: black parent, sibling and nephews");
                t.set_color(s, Color::Red);
                v = p;
                continue;
            }

            // Case 4: red parent, black sibling and nephews.
            //
            // Exchanging the colours of the parent and sibling adds a black
            // node to paths through "v" without changing the sibling side.
            if t.is_red(Some(p)) && nephews_black {
                trace!("remove fixup: red parent, black sibling and nephews");
                t.set_color(s, Color::Red);
                t.set_color(p, Color::Black);
                return;
            }

            // Case 5: the near nephew is red and the far nephew is black.
            //
            // Rotate the near nephew above the sibling, so that the sibling
            // has a red far child.
            if let Some(near) = near.filter(|&n| t.is_red(Some(n)) && t.is_black(far)) {
                trace!("remove fixup: red near nephew");
                t.set_color(s, Color::Red);
                t.set_color(near, Color::Black);
                if v_is_left {
                    t.right_rotate(s);
                } else {
                    t.left_rotate(s);
                }
            }

            // Case 6: the far nephew is red.
            //
            // Rotate the sibling above the parent, giving it the parent's
            // colour, while the parent (now above "v") and the far nephew
            // become black.
            trace!("remove fixup: red far nephew");
            let s = t.sibling(v).expect("black-height guarantees a sibling");
            let far = if v_is_left { t.right(s) } else { t.left(s) };
            let far = far.expect("far nephew is red after case 5");
            debug_assert!(t.is_red(Some(far)));

            let (p_color, s_color) = (t.color(Some(p)), t.color(Some(s)));
            t.set_color(p, s_color);
            t.set_color(s, p_color);
            t.set_color(far, Color::Black);
            if v_is_left {
                t.left_rotate(p);
            } else {
                t.right_rotate(p);
            }
            return;
        }
    }
}

impl<K, V> FromIterator<(K, V)> for RbTree<K, V>
where
    K: Ord,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut t = Self::default();
        t.extend(iter);
        t
    }
}

impl<K, V> Extend<(K, V)> for RbTree<K, V>
where
    K: Ord,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}
