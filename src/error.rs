use thiserror::Error;

/// Errors returned by [`RbTree`] mutations.
///
/// Structural invariant violations are not represented here, they indicate
/// a defect in the balancing logic and panic instead.
///
/// [`RbTree`]: crate::RbTree
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The supplied node or handle cannot be used for the requested
    /// operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// No node with the requested key exists in the tree.
    #[error("no node found with the requested key")]
    NotFound,
}

/// A specialised [`Result`](std::result::Result) for tree operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
