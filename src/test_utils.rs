use std::ops::RangeInclusive;

use proptest::prelude::*;

/// The domain of generated keys.
///
/// A small key domain encourages multiple operations to act on the same key,
/// and generates plenty of duplicates.
const KEY_DOMAIN: RangeInclusive<i32> = -100..=100;

/// Generate arbitrary keys from [`KEY_DOMAIN`].
pub(crate) fn arbitrary_key() -> impl Strategy<Value = i32> {
    KEY_DOMAIN
}

#[derive(Debug, Clone)]
pub(crate) enum Op {
    Insert(i32),
    Search(i32),
    Remove(i32),
}

/// Generate tree operations, weighted towards inserts so the tree grows
/// during a run.
pub(crate) fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => arbitrary_key().prop_map(Op::Insert),
        1 => arbitrary_key().prop_map(Op::Search),
        2 => arbitrary_key().prop_map(Op::Remove),
    ]
}
