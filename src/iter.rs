use crate::{
    bst::Bst,
    node::{Node, NodeId},
};

/// An in-order iterator over the [`Node`] instances of a tree.
#[derive(Debug)]
pub(crate) struct Iter<'a, K, V> {
    tree: &'a Bst<K, V>,
    stack: Vec<NodeId>,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(tree: &'a Bst<K, V>) -> Self {
        let mut this = Self {
            tree,
            stack: vec![],
        };

        // Descend down the left side of the tree.
        this.push_subtree(tree.root());

        this
    }

    fn push_subtree(&mut self, subtree_root: Option<NodeId>) {
        let mut ptr = subtree_root;

        while let Some(v) = ptr {
            self.stack.push(v);
            ptr = self.tree.left(v);
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = &'a Node<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.stack.pop()?;

        // Descend down the left side of the right hand child of this node, if
        // any.
        self.push_subtree(self.tree.right(v));

        let tree = self.tree;
        Some(&tree[v])
    }
}
