//! The types that flow between `compute_node_layout` and the layout
//! algorithms: what a node was asked to become (`LayoutInput`) and what it
//! decided it is (`LayoutOutput`), plus the node's persisted, parent-relative
//! result (`Layout`).

use crate::geometry::{Line, Point, Size};
use crate::style::{AvailableSpace, Direction};

/// A node's computed geometry, relative to its parent's content box:
/// `(left, top, width, height)` — `direction` isn't stored here; it's
/// resolved fresh on each layout pass from [`LayoutInput::resolved_direction`]
/// instead, so a style change on an ancestor is picked up without any extra
/// invalidation bookkeeping.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    /// The relative ordering of the node. Nodes with a higher order should
    /// be rendered on top of those with a lower order, matching insertion
    /// order by default
    pub order: u32,
    /// The top-left corner of the node, relative to its parent's content box
    pub location: Point<f32>,
    /// The width and height of the node
    pub size: Size<f32>,
}
impl Layout {
    /// A `Layout` at the origin with zero size and the given `order`
    pub fn with_order(order: u32) -> Self {
        Self { order, location: Point::ZERO, size: Size::ZERO }
    }
}

/// Distinguishes a first-pass (hypothetical) layout from a second pass where
/// the parent has already decided this node's size and is asking it to
/// commit to that size ("parent override").
///
/// `InherentSize` is cacheable under the hypothetical inputs the child was
/// asked to size itself to; `ContentSize` is cacheable under the overridden
/// `known_dimensions` the parent will actually write into the computed
/// rectangle, which is what makes the second cache entry the outputs the
/// parent accepts without modification.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SizingMode {
    /// Size the node from its own inherent (style-driven or intrinsic) size
    InherentSize,
    /// Size the node to the `known_dimensions` the caller has already fixed
    ContentSize,
}

/// Whether `compute_node_layout` should write the result into the node's
/// persisted layout (`PerformLayout`) or merely report a size without
/// writing anything (`ComputeSize`) — used when a parent needs a child's
/// hypothetical main size during flex-basis resolution without committing
/// to it yet. `PerformHiddenLayout` forces the `Display::None` zero-size
/// path regardless of the node's own `display`, used when an ancestor is
/// already `Display::None`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RunMode {
    /// Compute and persist the node's layout
    PerformLayout,
    /// Compute a size only, without persisting anything
    ComputeSize,
    /// Force the hidden (zero-size) layout, persisting it
    PerformHiddenLayout,
}

/// The full set of inputs a layout algorithm needs to size and (optionally)
/// position a node's children.
#[derive(Copy, Clone, Debug)]
pub struct LayoutInput {
    /// Dimensions already fixed by the caller, if any (parent override: set
    /// when `sizing_mode` is `ContentSize`)
    pub known_dimensions: Size<Option<f32>>,
    /// The parent's own size, for resolving this node's percentage values against
    pub parent_size: Size<Option<f32>>,
    /// The space available to size into — definite, min-content, or max-content
    pub available_space: Size<AvailableSpace>,
    /// Whether to perform and persist a full layout, or just report a size
    pub run_mode: RunMode,
    /// Whether this is a hypothetical sizing pass or a parent-committed one
    pub sizing_mode: SizingMode,
    /// Per-axis: whether this node's margins may collapse with its in-flow
    /// children's margins. Always `Line::FALSE` for flex containers — this
    /// field only matters for the block algorithm this crate does not
    /// implement, but is threaded through `LayoutInput` so the
    /// [`LayoutPartialTree`](crate::tree::LayoutPartialTree) trait shape
    /// doesn't need to special-case flex.
    pub vertical_margins_are_collapsible: Line<bool>,
    /// The direction this node inherits `Direction::Inherit` from.
    /// `Inherit` takes the nearest ancestor's resolved direction, or LTR at
    /// the root. Each node resolves its own
    /// effective direction as `style.direction`, falling back to this field
    /// when that's `Inherit`, then passes its own resolved value down to
    /// its children's `LayoutInput`.
    pub resolved_direction: Direction,
}
impl LayoutInput {
    /// The root-entry inputs: nothing known yet, sized exactly to `available_space`.
    pub const fn hidden() -> Self {
        Self {
            known_dimensions: Size { width: None, height: None },
            parent_size: Size { width: None, height: None },
            available_space: Size { width: AvailableSpace::MaxContent, height: AvailableSpace::MaxContent },
            run_mode: RunMode::PerformHiddenLayout,
            sizing_mode: SizingMode::InherentSize,
            vertical_margins_are_collapsible: Line { start: false, end: false },
            resolved_direction: Direction::Ltr,
        }
    }
}

/// What a layout algorithm reports back for a node: its size, and (for
/// baseline alignment) the offset of its first baseline on each axis, if it
/// has one.
#[derive(Copy, Clone, Debug, Default)]
pub struct LayoutOutput {
    /// The border-box size the algorithm computed for the node
    pub size: Size<f32>,
    /// The offset of the node's first baseline from its own top/left edge, per axis
    pub first_baselines: Point<Option<f32>>,
}
impl LayoutOutput {
    /// A zero-size output with no baseline, used for `Display::None` nodes
    pub const HIDDEN: Self = Self { size: Size::ZERO, first_baselines: Point { x: None, y: None } };

    /// An output with just a size and no baseline information
    pub fn from_size(size: Size<f32>) -> Self {
        Self { size, first_baselines: Point { x: None, y: None } }
    }
}
impl From<LayoutOutput> for Size<f32> {
    fn from(output: LayoutOutput) -> Self {
        output.size
    }
}
