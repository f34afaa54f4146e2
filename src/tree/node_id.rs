//! The opaque handle consumers use to refer to a node.

use slotmap::DefaultKey;

/// A lightweight, copyable identifier for a node stored in a [`TaffyTree`](crate::TaffyTree).
///
/// Backed by a `slotmap::DefaultKey` rather than a raw index/pointer: nodes
/// are allocated in an arena and referred to by index, which removes the
/// owning/non-owning parent reference cycle entirely (the tree owns all
/// storage; a `NodeId` is just a generational index into it) and makes
/// stale-id reuse after `remove` detectable rather than silently aliasing a
/// new node.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(DefaultKey);

impl NodeId {
    /// Constructs a new `NodeId` from the provided `u64`. Only used by tests
    /// and internal bookkeeping (e.g. `ChildrenCache`'s empty sentinel) —
    /// consumers should treat `NodeId`s as fully opaque.
    pub(crate) fn new(val: u64) -> Self {
        Self(slotmap::KeyData::from_ffi(val).into())
    }
}

impl From<DefaultKey> for NodeId {
    fn from(key: DefaultKey) -> Self {
        Self(key)
    }
}
impl From<NodeId> for DefaultKey {
    fn from(id: NodeId) -> Self {
        id.0
    }
}
