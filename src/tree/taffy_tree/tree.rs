//! The default node tree: storage, tree mutation, and the
//! [`LayoutPartialTree`]/[`LayoutTree`] glue that lets the flex algorithm
//! recurse over it.
//!
//! Per-field style setters (a Yoga-style `setWidth`/`setFlexGrow`/etc.
//! enumeration) are intentionally not implemented here beyond [`TaffyTree::style`]/
//! [`TaffyTree::set_style`]: the public style-setter surface is specified
//! only at the boundary. Every `setXxx(value)` a field-setter API would name
//! is equivalent to `tree.set_style(node, Style { xxx: value,
//! ..tree.style(node)?.clone() })`, which already carries the "same value is
//! a no-op" dirty-marking contract because `set_style` itself is gated on
//! `PartialEq`.

use core::cell::{RefCell, RefMut};

use slotmap::{DefaultKey, SlotMap, SparseSecondaryMap};

use crate::geometry::Size;
use crate::style::{AvailableSpace, BaselineFunc, Display, Style};
use crate::tree::cache::Cache;
use crate::tree::layout::{Layout, LayoutInput, LayoutOutput, RunMode};
use crate::tree::traits::{LayoutPartialTree, LayoutTree};
use crate::tree::NodeId;
use crate::util::sys::{new_vec_with_capacity, ChildrenVec, Vec};

use super::{TaffyError, TaffyResult};

/// Global configuration for a [`TaffyTree`] — currently just the rounding
/// toggle.
struct TaffyConfig {
    /// Whether `compute_layout` rounds the final tree to the point grid
    /// (default: whole units, since the target consumers are terminal UIs
    /// laying out whole cells)
    use_rounding: bool,
}
impl Default for TaffyConfig {
    fn default() -> Self {
        Self { use_rounding: true }
    }
}

/// Per-node storage: style, working/finalized layout, cache, and the bit
/// recording whether a measure callback is registered for this node.
pub(crate) struct NodeData {
    /// The node's style
    pub(crate) style: Style,
    /// The layout produced by the most recent recursive descent, before root-level rounding
    pub(crate) unrounded_layout: Layout,
    /// The rounded, consumer-visible layout
    pub(crate) final_layout: Layout,
    /// The node's bounded fingerprint cache
    pub(crate) cache: Cache,
    /// Whether a measure callback is registered for this node
    pub(crate) needs_measure: bool,
    /// An optional override of this node's baseline; defaults to the
    /// node's outer bottom edge when `None`
    pub(crate) baseline_func: Option<BaselineFunc>,
    /// Set whenever this node's `final_layout` is rewritten by a layout
    /// pass, cleared by the consumer calling `mark_has_new_layout`.
    pub(crate) has_new_layout: bool,
}
impl NodeData {
    fn new(style: Style) -> Self {
        Self {
            style,
            unrounded_layout: Layout::with_order(0),
            final_layout: Layout::with_order(0),
            cache: Cache::new(),
            needs_measure: false,
            baseline_func: None,
            has_new_layout: false,
        }
    }

    /// Invalidates this node's cache
    fn mark_dirty(&mut self) {
        self.cache.clear();
    }
}

/// Caches the resolved (Contents-flattened) children of one node, so that
/// repeated calls to `child_ids` during a single layout pass don't
/// re-walk `Display::Contents` descendants each time: the layout inner loop
/// must not allocate on a no-change re-layout, and recomputing this list is
/// the one exception, so it's memoized per node per pass.
struct ChildrenCache {
    node_id: NodeId,
    children: Vec<NodeId>,
}
impl ChildrenCache {
    fn new() -> Self {
        Self { node_id: NodeId::new(u64::MAX), children: Vec::new() }
    }
}

/// Iterates a borrowed `Vec<NodeId>` by index, so `child_ids` can return an
/// iterator without handing out a long-lived borrow of the tree.
pub struct RefCellVecIter<'a> {
    children: RefMut<'a, Vec<NodeId>>,
    index: usize,
}
impl<'a> Iterator for RefCellVecIter<'a> {
    type Item = NodeId;
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.children.get(self.index).copied();
        self.index += 1;
        item
    }
}

/// Recursively flattens `Display::Contents` nodes out of a children list,
/// splicing their own children in at the same position: a `Contents` node
/// generates no box, so layout never sees one.
fn find_children_recursive<NodeContext>(tree: &TaffyTree<NodeContext>, node: NodeId, out: &mut Vec<NodeId>) {
    for child_id in tree.children[DefaultKey::from(node)].iter() {
        let child_key: DefaultKey = (*child_id).into();
        match tree.nodes[child_key].style.display {
            Display::Contents => find_children_recursive(tree, *child_id, out),
            _ => out.push(*child_id),
        }
    }
}

/// A view over a [`TaffyTree`] bundling it with the caller's measure
/// function for the duration of one `compute_layout` call — this is the
/// only place a measure closure exists, which is also why the engine cannot
/// be re-entered from inside one: the closure only ever receives
/// `Option<&mut NodeContext>`, never the tree.
pub(crate) struct TaffyView<'t, NodeContext, MeasureFunction>
where
    MeasureFunction: FnMut(Size<Option<f32>>, Size<AvailableSpace>, NodeId, Option<&mut NodeContext>) -> Size<f32>,
{
    pub(crate) taffy: &'t mut TaffyTree<NodeContext>,
    pub(crate) measure_function: MeasureFunction,
    node_children_cache: RefCell<ChildrenCache>,
}
impl<'t, NodeContext, MeasureFunction> TaffyView<'t, NodeContext, MeasureFunction>
where
    MeasureFunction: FnMut(Size<Option<f32>>, Size<AvailableSpace>, NodeId, Option<&mut NodeContext>) -> Size<f32>,
{
    fn new(taffy: &'t mut TaffyTree<NodeContext>, measure_function: MeasureFunction) -> Self {
        Self { taffy, measure_function, node_children_cache: RefCell::new(ChildrenCache::new()) }
    }

    fn resolve_children(&self, node: NodeId) -> RefMut<'_, Vec<NodeId>> {
        let mut cache = self.node_children_cache.borrow_mut();
        if cache.node_id != node {
            cache.node_id = node;
            cache.children.clear();
            find_children_recursive(self.taffy, node, &mut cache.children);
        }
        RefMut::map(cache, |c| &mut c.children)
    }
}

impl<'t, NodeContext, MeasureFunction> LayoutPartialTree for TaffyView<'t, NodeContext, MeasureFunction>
where
    MeasureFunction: FnMut(Size<Option<f32>>, Size<AvailableSpace>, NodeId, Option<&mut NodeContext>) -> Size<f32>,
{
    type ChildIter<'a> = RefCellVecIter<'a> where Self: 'a;

    fn child_ids(&self, node: NodeId) -> Self::ChildIter<'_> {
        RefCellVecIter { children: self.resolve_children(node), index: 0 }
    }

    fn child_count(&self, node: NodeId) -> usize {
        self.resolve_children(node).len()
    }

    fn get_child_id(&self, node: NodeId, index: usize) -> NodeId {
        self.resolve_children(node)[index]
    }

    fn get_style(&self, node: NodeId) -> &Style {
        &self.taffy.nodes[DefaultKey::from(node)].style
    }

    fn get_cache_mut(&mut self, node: NodeId) -> &mut Cache {
        &mut self.taffy.nodes[DefaultKey::from(node)].cache
    }

    fn get_unrounded_layout_mut(&mut self, node: NodeId) -> &mut Layout {
        &mut self.taffy.nodes[DefaultKey::from(node)].unrounded_layout
    }

    fn compute_child_layout(&mut self, node: NodeId, inputs: LayoutInput) -> LayoutOutput {
        use crate::compute::{compute_cached_layout, compute_flexbox_layout, compute_hidden_layout, compute_leaf_layout};

        if inputs.run_mode == RunMode::PerformHiddenLayout {
            return compute_hidden_layout(self, node);
        }

        compute_cached_layout(self, node, inputs, |tree, node, inputs| {
            let node_key: DefaultKey = node.into();
            let display_mode = tree.taffy.nodes[node_key].style.display;
            let has_children = tree.child_count(node) > 0;

            match (display_mode, has_children) {
                (Display::None, _) => compute_hidden_layout(tree, node),
                (Display::Contents, _) => {
                    *tree.get_unrounded_layout_mut(node) = Layout::with_order(0);
                    tree.get_cache_mut(node).clear();
                    LayoutOutput::HIDDEN
                }
                (Display::Flex, true) => compute_flexbox_layout(tree, node, inputs),
                (_, false) => {
                    let needs_measure = tree.taffy.nodes[node_key].needs_measure;
                    let style = tree.taffy.nodes[node_key].style.clone();
                    let baseline_func = tree.taffy.nodes[node_key].baseline_func.as_ref();
                    if needs_measure {
                        let node_context = tree.taffy.node_context_data.get_mut(node_key);
                        let measure_function = &mut tree.measure_function;
                        compute_leaf_layout(node, inputs, &style, baseline_func, |known_dimensions, available_space| {
                            (measure_function)(known_dimensions, available_space, node, node_context)
                        })
                    } else {
                        compute_leaf_layout(node, inputs, &style, baseline_func, |_, _| Size::ZERO)
                    }
                }
            }
        })
    }
}

impl<'t, NodeContext, MeasureFunction> LayoutTree for TaffyView<'t, NodeContext, MeasureFunction>
where
    MeasureFunction: FnMut(Size<Option<f32>>, Size<AvailableSpace>, NodeId, Option<&mut NodeContext>) -> Size<f32>,
{
    fn get_final_layout(&self, node: NodeId) -> &Layout {
        &self.taffy.nodes[DefaultKey::from(node)].final_layout
    }
    fn get_final_layout_mut(&mut self, node: NodeId) -> &mut Layout {
        &mut self.taffy.nodes[DefaultKey::from(node)].final_layout
    }
    fn set_has_new_layout(&mut self, node: NodeId) {
        self.taffy.nodes[DefaultKey::from(node)].has_new_layout = true;
    }
}

/// A tree of styled nodes, ready to be laid out. `NodeContext` is an
/// optional consumer-supplied payload attached to nodes that register a
/// measure callback — most consumers can ignore it and use the default `()`.
pub struct TaffyTree<NodeContext = ()> {
    pub(crate) nodes: SlotMap<DefaultKey, NodeData>,
    pub(crate) node_context_data: SparseSecondaryMap<DefaultKey, NodeContext>,
    pub(crate) children: SlotMap<DefaultKey, ChildrenVec<NodeId>>,
    pub(crate) parents: SlotMap<DefaultKey, Option<NodeId>>,
    config: TaffyConfig,
}

impl<NodeContext> Default for TaffyTree<NodeContext> {
    fn default() -> Self {
        Self::with_capacity(16)
    }
}

impl<NodeContext> TaffyTree<NodeContext> {
    /// Creates a new, empty tree with a default capacity of 16 nodes
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new, empty tree that can store `capacity` nodes before reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: SlotMap::with_capacity(capacity),
            node_context_data: SparseSecondaryMap::with_capacity(capacity),
            children: SlotMap::with_capacity(capacity),
            parents: SlotMap::with_capacity(capacity),
            config: TaffyConfig::default(),
        }
    }

    /// Enables rounding of the final layout to the point grid. Enabled by
    /// default.
    pub fn enable_rounding(&mut self) {
        self.config.use_rounding = true;
    }

    /// Disables rounding of the final layout to the point grid
    pub fn disable_rounding(&mut self) {
        self.config.use_rounding = false;
    }

    /// Creates and adds a new unattached leaf node, returning its `NodeId`
    pub fn new_leaf(&mut self, style: Style) -> TaffyResult<NodeId> {
        let id: NodeId = self.nodes.insert(NodeData::new(style)).into();
        let _ = self.children.insert(new_vec_with_capacity(0));
        let _ = self.parents.insert(None);
        Ok(id)
    }

    /// Creates and adds a new unattached leaf node with a measure callback
    /// context attached
    pub fn new_leaf_with_context(&mut self, style: Style, context: NodeContext) -> TaffyResult<NodeId> {
        let mut data = NodeData::new(style);
        data.needs_measure = true;
        let key = self.nodes.insert(data);
        self.node_context_data.insert(key, context);
        let _ = self.children.insert(new_vec_with_capacity(0));
        let _ = self.parents.insert(None);
        Ok(key.into())
    }

    /// Creates and adds a new node with the given `children` already attached
    pub fn new_with_children(&mut self, style: Style, children: &[NodeId]) -> TaffyResult<NodeId> {
        let id: NodeId = self.nodes.insert(NodeData::new(style)).into();
        for child in children {
            self.parents[DefaultKey::from(*child)] = Some(id);
        }
        let _ = self.children.insert(children.iter().copied().collect());
        let _ = self.parents.insert(None);
        Ok(id)
    }

    /// Drops every node in the tree
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.node_context_data.clear();
        self.children.clear();
        self.parents.clear();
    }

    /// Removes a single node from the tree, detaching it from its parent.
    /// Does not recursively remove its children —
    /// callers that want a recursive free should walk `children` themselves
    /// before calling this, which is also how a caller chooses whether
    /// orphaned children stay addressable.
    pub fn remove(&mut self, node: NodeId) -> TaffyResult<NodeId> {
        let key = DefaultKey::from(node);
        if let Some(parent) = self.parents.get(key).copied().flatten() {
            if let Some(siblings) = self.children.get_mut(DefaultKey::from(parent)) {
                siblings.retain(|n| *n != node);
            }
        }
        if let Some(children) = self.children.get(key) {
            for child in children.iter().copied() {
                self.parents[DefaultKey::from(child)] = None;
            }
        }
        self.children.remove(key);
        self.parents.remove(key);
        self.node_context_data.remove(key);
        self.nodes.remove(key).ok_or(TaffyError::InvalidInputNode(node))?;
        Ok(node)
    }

    /// Sets (or clears, with `None`) the measure context for `node`
    pub fn set_node_context(&mut self, node: NodeId, context: Option<NodeContext>) -> TaffyResult<()> {
        let key = DefaultKey::from(node);
        match context {
            Some(context) => {
                self.nodes[key].needs_measure = true;
                self.node_context_data.insert(key, context);
            }
            None => {
                self.nodes[key].needs_measure = false;
                self.node_context_data.remove(key);
            }
        }
        self.mark_dirty(node)
    }

    /// Mutable access to `node`'s measure context, if any
    pub fn get_node_context_mut(&mut self, node: NodeId) -> Option<&mut NodeContext> {
        self.node_context_data.get_mut(DefaultKey::from(node))
    }

    /// Sets (or clears) `node`'s baseline callback
    pub fn set_node_baseline_function(&mut self, node: NodeId, f: Option<BaselineFunc>) -> TaffyResult<()> {
        self.nodes[DefaultKey::from(node)].baseline_func = f;
        self.mark_dirty(node)
    }

    /// Appends `child` to the end of `parent`'s child list
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> TaffyResult<()> {
        self.parents[DefaultKey::from(child)] = Some(parent);
        self.children[DefaultKey::from(parent)].push(child);
        self.mark_dirty(parent)
    }

    /// Inserts `child` at `child_index` under `parent`, shifting later children right
    pub fn insert_child_at_index(&mut self, parent: NodeId, child_index: usize, child: NodeId) -> TaffyResult<()> {
        let parent_key = DefaultKey::from(parent);
        let child_count = self.children[parent_key].len();
        if child_index > child_count {
            return Err(TaffyError::ChildIndexOutOfBounds { parent, child_index, child_count });
        }
        self.parents[DefaultKey::from(child)] = Some(parent);
        self.children[parent_key].insert(child_index, child);
        self.mark_dirty(parent)
    }

    /// Replaces `parent`'s entire child list with `children`
    pub fn set_children(&mut self, parent: NodeId, children: &[NodeId]) -> TaffyResult<()> {
        let parent_key = DefaultKey::from(parent);
        for child in &self.children[parent_key] {
            self.parents[DefaultKey::from(*child)] = None;
        }
        for child in children {
            self.parents[DefaultKey::from(*child)] = Some(parent);
        }
        let slot = &mut self.children[parent_key];
        slot.clear();
        slot.extend_from_slice(children);
        self.mark_dirty(parent)
    }

    /// Detaches `child` from `parent` without deleting it from the tree
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> TaffyResult<NodeId> {
        let index = self.children[DefaultKey::from(parent)]
            .iter()
            .position(|n| *n == child)
            .ok_or(TaffyError::InvalidInputNode(child))?;
        self.remove_child_at_index(parent, index)
    }

    /// Detaches the child at `child_index` from `parent`
    pub fn remove_child_at_index(&mut self, parent: NodeId, child_index: usize) -> TaffyResult<NodeId> {
        let parent_key = DefaultKey::from(parent);
        let child_count = self.children[parent_key].len();
        if child_index >= child_count {
            return Err(TaffyError::ChildIndexOutOfBounds { parent, child_index, child_count });
        }
        let child = self.children[parent_key].remove(child_index);
        self.parents[DefaultKey::from(child)] = None;
        self.mark_dirty(parent)?;
        Ok(child)
    }

    /// Replaces the child at `child_index` with `new_child`, detaching the old one
    pub fn replace_child_at_index(
        &mut self,
        parent: NodeId,
        child_index: usize,
        new_child: NodeId,
    ) -> TaffyResult<NodeId> {
        let parent_key = DefaultKey::from(parent);
        let child_count = self.children[parent_key].len();
        if child_index >= child_count {
            return Err(TaffyError::ChildIndexOutOfBounds { parent, child_index, child_count });
        }
        self.parents[DefaultKey::from(new_child)] = Some(parent);
        let old_child = core::mem::replace(&mut self.children[parent_key][child_index], new_child);
        self.parents[DefaultKey::from(old_child)] = None;
        self.mark_dirty(parent)?;
        Ok(old_child)
    }

    /// The child of `parent` at `index`
    pub fn child_at_index(&self, parent: NodeId, index: usize) -> TaffyResult<NodeId> {
        let parent_key = DefaultKey::from(parent);
        let child_count = self.children[parent_key].len();
        if index >= child_count {
            return Err(TaffyError::ChildIndexOutOfBounds { parent, child_index: index, child_count });
        }
        Ok(self.children[parent_key][index])
    }

    /// The total number of nodes ever allocated and still present in the tree
    pub fn total_node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The number of (unresolved — `Display::Contents` children are not
    /// flattened here) children of `parent`
    pub fn child_count(&self, parent: NodeId) -> TaffyResult<usize> {
        self.children.get(DefaultKey::from(parent)).map(|c| c.len()).ok_or(TaffyError::InvalidInputNode(parent))
    }

    /// `parent`'s raw (unresolved) children, in insertion order
    pub fn children(&self, parent: NodeId) -> TaffyResult<Vec<NodeId>> {
        self.children
            .get(DefaultKey::from(parent))
            .map(|c| c.iter().copied().collect())
            .ok_or(TaffyError::InvalidInputNode(parent))
    }

    /// `node`'s parent, if it has one
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.parents.get(DefaultKey::from(node)).copied().flatten()
    }

    /// Replaces `node`'s style wholesale. A no-op (no dirty-marking) if the
    /// new style is equal to the current one.
    pub fn set_style(&mut self, node: NodeId, style: Style) -> TaffyResult<()> {
        let key = DefaultKey::from(node);
        if !self.nodes.contains_key(key) {
            return Err(TaffyError::InvalidInputNode(node));
        }
        if self.nodes[key].style != style {
            self.nodes[key].style = style;
            self.mark_dirty(node)?;
        }
        Ok(())
    }

    /// `node`'s current style
    pub fn style(&self, node: NodeId) -> TaffyResult<&Style> {
        self.nodes.get(DefaultKey::from(node)).map(|n| &n.style).ok_or(TaffyError::InvalidInputNode(node))
    }

    /// `node`'s computed layout, relative to its parent's content box, as of
    /// the last `compute_layout` call
    pub fn layout(&self, node: NodeId) -> TaffyResult<&Layout> {
        self.nodes.get(DefaultKey::from(node)).map(|n| &n.final_layout).ok_or(TaffyError::InvalidInputNode(node))
    }

    /// Marks `node` and every ancestor up to the root as dirty. Pure tail
    /// recursion up the parent chain, so it cannot
    /// overflow on any tree this crate can otherwise represent (no cycles
    /// are representable — see [`NodeId`]).
    pub fn mark_dirty(&mut self, node: NodeId) -> TaffyResult<()> {
        let key: DefaultKey = DefaultKey::from(node);
        if !self.nodes.contains_key(key) {
            return Err(TaffyError::InvalidInputNode(node));
        }
        self.nodes[key].mark_dirty();
        if let Some(Some(parent)) = self.parents.get(key).copied() {
            self.mark_dirty(parent)?;
        }
        Ok(())
    }

    /// True if `node`'s layout cache is empty, i.e. it must be recomputed
    /// on the next `compute_layout`
    pub fn dirty(&self, node: NodeId) -> TaffyResult<bool> {
        self.nodes.get(DefaultKey::from(node)).map(|n| n.cache.is_empty()).ok_or(TaffyError::InvalidInputNode(node))
    }

    /// True if `node` received a new finalized layout during the most
    /// recent `compute_layout` call and a consumer hasn't yet acknowledged
    /// it via `mark_has_new_layout`.
    pub fn has_new_layout(&self, node: NodeId) -> TaffyResult<bool> {
        self.nodes.get(DefaultKey::from(node)).map(|n| n.has_new_layout).ok_or(TaffyError::InvalidInputNode(node))
    }

    /// Clears `node`'s new-layout flag, acknowledging that a consumer has
    /// observed its current `layout()`.
    pub fn mark_has_new_layout(&mut self, node: NodeId) -> TaffyResult<()> {
        let key = DefaultKey::from(node);
        self.nodes.get_mut(key).ok_or(TaffyError::InvalidInputNode(node))?.has_new_layout = false;
        Ok(())
    }

    /// Computes (and persists) `node`'s layout and that of its whole subtree
    /// under `available_space`, invoking `measure_function` for any leaf
    /// that has a measure context registered.
    pub fn compute_layout_with_measure<MeasureFunction>(
        &mut self,
        node: NodeId,
        available_space: Size<AvailableSpace>,
        measure_function: MeasureFunction,
    ) -> TaffyResult<()>
    where
        MeasureFunction: FnMut(Size<Option<f32>>, Size<AvailableSpace>, NodeId, Option<&mut NodeContext>) -> Size<f32>,
    {
        if !self.nodes.contains_key(DefaultKey::from(node)) {
            return Err(TaffyError::InvalidInputNode(node));
        }
        let use_rounding = self.config.use_rounding;
        let mut view = TaffyView::new(self, measure_function);
        crate::compute::compute_root_layout(&mut view, node, available_space);
        if use_rounding {
            crate::compute::round_layout(&mut view, node);
        }
        Ok(())
    }

    /// `compute_layout_with_measure` for trees with no measured leaves
    pub fn compute_layout(&mut self, node: NodeId, available_space: Size<AvailableSpace>) -> TaffyResult<()> {
        self.compute_layout_with_measure(node, available_space, |_, _, _, _| Size::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Display;
    use crate::style_helpers::*;

    fn size_measure_function(
        known_dimensions: Size<Option<f32>>,
        _available_space: Size<AvailableSpace>,
        _node_id: NodeId,
        node_context: Option<&mut Size<f32>>,
    ) -> Size<f32> {
        let context_size = node_context.map(|s| *s).unwrap_or(Size::ZERO);
        Size {
            width: known_dimensions.width.unwrap_or(context_size.width),
            height: known_dimensions.height.unwrap_or(context_size.height),
        }
    }

    #[test]
    fn new_should_allocate_default_capacity() {
        const DEFAULT_CAPACITY: usize = 16;
        let taffy: TaffyTree = TaffyTree::new();
        assert!(taffy.children.capacity() >= DEFAULT_CAPACITY);
        assert!(taffy.parents.capacity() >= DEFAULT_CAPACITY);
        assert!(taffy.nodes.capacity() >= DEFAULT_CAPACITY);
    }

    #[test]
    fn test_new_leaf() {
        let mut taffy: TaffyTree = TaffyTree::new();
        let node = taffy.new_leaf(Style::default()).unwrap();
        assert_eq!(taffy.child_count(node).unwrap(), 0);
    }

    #[test]
    fn new_leaf_with_context() {
        let mut taffy: TaffyTree<Size<f32>> = TaffyTree::new();
        let node = taffy.new_leaf_with_context(Style::default(), Size::ZERO).unwrap();
        assert_eq!(taffy.child_count(node).unwrap(), 0);
    }

    #[test]
    fn test_new_with_children() {
        let mut taffy: TaffyTree = TaffyTree::new();
        let child0 = taffy.new_leaf(Style::default()).unwrap();
        let child1 = taffy.new_leaf(Style::default()).unwrap();
        let node = taffy.new_with_children(Style::default(), &[child0, child1]).unwrap();
        assert_eq!(taffy.child_count(node).unwrap(), 2);
        assert_eq!(taffy.children(node).unwrap()[0], child0);
        assert_eq!(taffy.children(node).unwrap()[1], child1);
    }

    #[test]
    fn remove_node_should_detach_hierarchy() {
        let mut taffy: TaffyTree = TaffyTree::new();
        let node2 = taffy.new_leaf(Style::default()).unwrap();
        let node1 = taffy.new_with_children(Style::default(), &[node2]).unwrap();
        let node0 = taffy.new_with_children(Style::default(), &[node1]).unwrap();
        assert_eq!(taffy.children(node0).unwrap().as_slice(), &[node1]);
        assert_eq!(taffy.children(node1).unwrap().as_slice(), &[node2]);

        let _ = taffy.remove(node1).unwrap();

        assert!(taffy.children(node0).unwrap().is_empty());
        assert!(taffy.children(node2).unwrap().is_empty());
    }

    #[test]
    fn set_style_is_noop_for_equal_style() {
        let mut taffy: TaffyTree = TaffyTree::new();
        let node = taffy.new_leaf(Style::default()).unwrap();
        taffy.compute_layout(node, Size::MAX_CONTENT).unwrap();
        assert!(!taffy.dirty(node).unwrap());

        taffy.set_style(node, Style::default()).unwrap();
        assert!(!taffy.dirty(node).unwrap(), "setting an equal style must not mark the node dirty");

        let mut other = Style::default();
        other.flex_grow = 1.0;
        taffy.set_style(node, other).unwrap();
        assert!(taffy.dirty(node).unwrap(), "setting a different style must mark the node dirty");
    }

    #[test]
    fn add_insert_remove_child() {
        let mut taffy: TaffyTree = TaffyTree::new();
        let node = taffy.new_leaf(Style::default()).unwrap();
        let child0 = taffy.new_leaf(Style::default()).unwrap();
        taffy.add_child(node, child0).unwrap();
        assert_eq!(taffy.child_count(node).unwrap(), 1);

        let child1 = taffy.new_leaf(Style::default()).unwrap();
        taffy.insert_child_at_index(node, 0, child1).unwrap();
        assert_eq!(taffy.children(node).unwrap(), vec![child1, child0]);

        taffy.remove_child(node, child1).unwrap();
        assert_eq!(taffy.children(node).unwrap(), vec![child0]);
    }

    #[test]
    fn set_measure() {
        let mut taffy: TaffyTree<Size<f32>> = TaffyTree::new();
        let node = taffy.new_leaf_with_context(Style::default(), Size { width: 200.0, height: 200.0 }).unwrap();
        taffy.compute_layout_with_measure(node, Size::MAX_CONTENT, size_measure_function).unwrap();
        assert_eq!(taffy.layout(node).unwrap().size.width, 200.0);

        taffy.set_node_context(node, Some(Size { width: 100.0, height: 100.0 })).unwrap();
        taffy.compute_layout_with_measure(node, Size::MAX_CONTENT, size_measure_function).unwrap();
        assert_eq!(taffy.layout(node).unwrap().size.width, 100.0);
    }

    #[test]
    fn display_none_produces_zero_size() {
        let mut taffy: TaffyTree = TaffyTree::new();
        let mut style = Style::default();
        style.display = Display::None;
        style.size = Size { width: length(100.0), height: length(100.0) };
        let node = taffy.new_leaf(style).unwrap();
        taffy.compute_layout(node, Size::MAX_CONTENT).unwrap();
        assert_eq!(taffy.layout(node).unwrap().size, Size::ZERO);
    }

    #[test]
    fn display_contents_splices_children() {
        let mut taffy: TaffyTree = TaffyTree::new();
        let mut leaf_style = Style::default();
        leaf_style.size = Size { width: length(10.0), height: length(10.0) };
        let leaf = taffy.new_leaf(leaf_style).unwrap();

        let mut contents_style = Style::default();
        contents_style.display = Display::Contents;
        let contents = taffy.new_with_children(contents_style, &[leaf]).unwrap();

        let mut root_style = Style::default();
        root_style.flex_direction = crate::style::FlexDirection::Row;
        let root = taffy.new_with_children(root_style, &[contents]).unwrap();

        taffy.compute_layout(root, Size::MAX_CONTENT).unwrap();
        assert_eq!(taffy.layout(leaf).unwrap().size, Size { width: 10.0, height: 10.0 });
    }
}
