//! An arena-backed red-black tree.
//!
//! [`RbTree`] is an ordered binary search tree that stays balanced by
//! colouring each node red or black, and repairing the colouring with
//! rotations after each insert and removal. Lookups, inserts and removals are
//! all `O(log n)`.
//!
//! Nodes are stored in an arena and addressed by [`NodeId`] handles, which
//! stay valid across rebalancing until the node they address is removed.
//!
//! ```
//! use redblack::{Color, RbTree};
//!
//! let mut t = RbTree::new();
//! for k in [12, 14, 28] {
//!     t.insert(k, ());
//! }
//!
//! // The tree rotated to keep 14 at the root.
//! let root = t.node(t.root().unwrap()).unwrap();
//! assert_eq!(*root.key(), 14);
//! assert_eq!(root.color(), Color::Black);
//!
//! // Removed nodes are returned unlinked from the tree.
//! let n = t.remove(&12).unwrap();
//! assert!(n.is_unlinked());
//! assert_eq!(t.len(), 2);
//!
//! redblack::invariants::assert_rb_properties(&t);
//! ```
//!
//! The [`invariants`] module provides assertions over each red-black
//! property, for use in tests.

mod bst;
mod dot;
mod error;
mod iter;
mod node;
mod tree;

pub mod invariants;

pub use error::*;
pub use node::*;
pub use tree::*;

#[cfg(test)]
mod test_utils;

