/// The colour of a [`Node`].
///
/// Absent children are treated as [`Color::Black`] leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

/// A stable handle addressing a [`Node`] linked into an [`RbTree`].
///
/// A handle remains valid (and continues to address the same key) across
/// rotations and successor substitution, until the node it addresses is
/// removed. Handles to removed nodes may later be reused by newly inserted
/// nodes.
///
/// [`RbTree`]: crate::RbTree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

/// A single key/value entry in an [`RbTree`], and its position in the tree.
///
/// Links are indices into the owning tree's arena; the parent link is a
/// back-reference only. A node obtained from a removal has all three links
/// cleared and may be inserted again with [`RbTree::insert_node()`].
///
/// [`RbTree`]: crate::RbTree
/// [`RbTree::insert_node()`]: crate::RbTree::insert_node
#[derive(Debug, Clone)]
pub struct Node<K, V> {
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,

    pub(crate) color: Color,

    key: K,
    value: V,
}

impl<K, V> Node<K, V> {
    /// Construct a new, unlinked [`Node`].
    ///
    /// The colour is assigned when the node is inserted.
    pub fn new(key: K, value: V) -> Self {
        Self {
            parent: None,
            left: None,
            right: None,
            color: Color::Red,
            key,
            value,
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    /// Returns true if this node holds no parent or child link.
    pub fn is_unlinked(&self) -> bool {
        self.parent.is_none() && self.left.is_none() && self.right.is_none()
    }

    /// Clear all links of this node.
    pub(crate) fn unlink(&mut self) {
        self.parent = None;
        self.left = None;
        self.right = None;
    }

    /// Explode this [`Node`] into the key and value it contains.
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_unlinked() {
        let n = Node::new(42, "bananas");

        assert!(n.is_unlinked());
        assert_eq!(*n.key(), 42);
        assert_eq!(*n.value(), "bananas");
        assert_eq!(n.into_parts(), (42, "bananas"));
    }

    #[test]
    fn test_unlink() {
        let mut n = Node::new(1, ());
        n.parent = Some(NodeId(3));
        n.right = Some(NodeId(7));
        assert!(!n.is_unlinked());

        n.unlink();
        assert!(n.is_unlinked());
    }
}
