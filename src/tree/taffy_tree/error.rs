//! The engine's only recoverable error domain — everything else is clamped
//! to a neutral default at the point of use, never surfaced as an `Err`.

use crate::tree::NodeId;
use core::fmt;

/// An error returned by a fallible [`TaffyTree`](crate::TaffyTree) method.
/// Every variant names a consumer-supplied index/id that didn't resolve —
/// there is no variant for malformed style values, because those are
/// clamped rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaffyError {
    /// A child index was out of bounds for the given parent
    ChildIndexOutOfBounds {
        /// The parent node queried
        parent: NodeId,
        /// The index that was requested
        child_index: usize,
        /// The number of children `parent` actually has
        child_count: usize,
    },
    /// The given node does not belong to this tree (never allocated, or already removed)
    InvalidInputNode(NodeId),
}

impl fmt::Display for TaffyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChildIndexOutOfBounds { parent, child_index, child_count } => write!(
                f,
                "Index (is {child_index}) should be < child_count ({child_count}) for parent node {parent:?}"
            ),
            Self::InvalidInputNode(node) => write!(f, "Node {node:?} is not present in this tree"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TaffyError {}

/// A specialized `Result` type for fallible [`TaffyTree`](crate::TaffyTree) operations.
pub type TaffyResult<T> = Result<T, TaffyError>;
