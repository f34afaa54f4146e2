//! The driver contract: everything a layout algorithm needs from its host
//! tree, expressed as traits so `compute_flexbox_layout` etc. are generic
//! over any tree shape, not hardwired to [`crate::TaffyTree`].

use crate::geometry::Size;
use crate::style::{AvailableSpace, Style};
use crate::tree::cache::Cache;
use crate::tree::layout::{Layout, LayoutInput, LayoutOutput};
use crate::tree::NodeId;

/// The subset of tree access a layout algorithm needs while it's still
/// computing a node's own size — before that node's final position (and
/// its children's final positions) are known. This is what
/// `compute_flexbox_layout` is generic over, so it can recurse into
/// children via `compute_child_layout` without needing a `&mut` borrow of
/// anything beyond "the tree".
pub trait LayoutPartialTree {
    /// The iterator type returned by `child_ids`
    type ChildIter<'a>: Iterator<Item = NodeId>
    where
        Self: 'a;

    /// Iterates the node's children, resolving any `Display::Contents`
    /// descendants transparently so the iterator only ever yields nodes
    /// that actually participate in layout.
    fn child_ids(&self, parent: NodeId) -> Self::ChildIter<'_>;

    /// The number of (resolved) children `child_ids` would yield
    fn child_count(&self, parent: NodeId) -> usize;

    /// The `index`'th (resolved) child
    fn get_child_id(&self, parent: NodeId, index: usize) -> NodeId;

    /// This node's style
    fn get_style(&self, node: NodeId) -> &Style;

    /// Mutable access to this node's fingerprint cache
    fn get_cache_mut(&mut self, node: NodeId) -> &mut Cache;

    /// Mutable access to this node's *unrounded* layout — the working
    /// geometry written during the recursive descent, before the
    /// root-level rounding pass
    fn get_unrounded_layout_mut(&mut self, node: NodeId) -> &mut Layout;

    /// Recursively lays out (or measures) `child` under `inputs`, going
    /// through the cache and dispatching to the appropriate algorithm —
    /// the entry point every algorithm uses to size its children: recurse
    /// for internal nodes, measure for leaves.
    fn compute_child_layout(&mut self, child: NodeId, inputs: LayoutInput) -> LayoutOutput;
}

/// The full driver contract, adding access to a node's *finalized* layout —
/// only needed once a node's own size (and hence its children's positions)
/// has been committed, in the root-entry position-finalizing walk.
pub trait LayoutTree: LayoutPartialTree {
    /// This node's finalized, parent-relative layout
    fn get_final_layout(&self, node: NodeId) -> &Layout;
    /// Mutable access to this node's finalized, parent-relative layout
    fn get_final_layout_mut(&mut self, node: NodeId) -> &mut Layout;

    /// Records that `node` received a new finalized layout this pass
    /// (step 6 of the root-entry position-finalizing walk: "set
    /// `hasNewLayout` where applicable"). Default no-op, so a custom tree
    /// that doesn't track this bookkeeping isn't forced to implement it.
    fn set_has_new_layout(&mut self, _node: NodeId) {}
}

/// One pluggable sizing strategy, selected by `(Display, has_children)` in
/// `compute::compute_node_layout` — this crate implements exactly one,
/// Flexbox, plus the trivial Leaf/Hidden cases.
pub trait LayoutAlgorithm {
    /// A human-readable name for this algorithm, used by the `debug` trace
    const NAME: &'static str;

    /// Computes (and persists) a node's layout, including its children's
    fn perform_layout(
        tree: &mut impl LayoutPartialTree,
        node: NodeId,
        known_dimensions: Size<Option<f32>>,
        parent_size: Size<Option<f32>>,
        available_space: Size<AvailableSpace>,
        sizing_mode: crate::tree::layout::SizingMode,
    ) -> LayoutOutput;

    /// Computes a node's size only, without persisting a layout. Used when
    /// a parent is still resolving flex-basis/hypothetical sizes for its
    /// children and doesn't yet want to commit.
    fn measure_size(
        tree: &mut impl LayoutPartialTree,
        node: NodeId,
        known_dimensions: Size<Option<f32>>,
        parent_size: Size<Option<f32>>,
        available_space: Size<AvailableSpace>,
        sizing_mode: crate::tree::layout::SizingMode,
    ) -> Size<f32>;
}
