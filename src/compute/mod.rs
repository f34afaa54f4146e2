//! The layout driver: the cache-probing dispatch wrapper every node goes
//! through, the root entry point, and the post-order rounding pass. The
//! actual sizing strategies live in [`leaf`] and [`flexbox`].

mod flexbox;
mod leaf;

pub(crate) use flexbox::compute_flexbox_layout;
pub(crate) use leaf::{compute_hidden_layout, compute_leaf_layout};

use crate::geometry::{Line, Point, Size};
use crate::style::AvailableSpace;
use crate::trace::{record_event, TraceEvent};
use crate::tree::{Layout, LayoutInput, LayoutOutput, LayoutPartialTree, LayoutTree, NodeId, RunMode, SizingMode};
use crate::util::sys::round;

/// Lays out the whole tree rooted at `root`, sizing it to `available_space`
/// and writing its own (unrounded) layout at the origin — there is no parent
/// to position it relative to.
pub(crate) fn compute_root_layout(tree: &mut impl LayoutPartialTree, root: NodeId, available_space: Size<AvailableSpace>) {
    let inputs = LayoutInput {
        known_dimensions: Size::NONE,
        parent_size: Size::NONE,
        available_space,
        run_mode: RunMode::PerformLayout,
        sizing_mode: SizingMode::InherentSize,
        vertical_margins_are_collapsible: Line::FALSE,
        resolved_direction: crate::style::Direction::Ltr,
    };
    let output = tree.compute_child_layout(root, inputs);
    *tree.get_unrounded_layout_mut(root) = Layout { order: 0, location: Point::ZERO, size: output.size };
}

/// The cache-probe-then-dispatch wrapper every node goes through on its way
/// to an algorithm: if a cache entry matches every input field, the cached
/// output is returned without recomputing.
///
/// A `ComputeSize` request against a childless node is answered identically
/// by a full layout, so it's downgraded to `PerformLayout` before the probe —
/// this lets a leaf's single measurement populate the one cache slot a
/// subsequent `PerformLayout` call for the same node would also hit, instead
/// of the two run modes fighting over the ring buffer.
pub(crate) fn compute_cached_layout<Tree: LayoutPartialTree>(
    tree: &mut Tree,
    node: NodeId,
    inputs: LayoutInput,
    compute_uncached: impl FnOnce(&mut Tree, NodeId, LayoutInput) -> LayoutOutput,
) -> LayoutOutput {
    record_event(TraceEvent::LayoutEnter { node, run_mode: inputs.run_mode, sizing_mode: inputs.sizing_mode });
    if inputs.sizing_mode == SizingMode::ContentSize {
        record_event(TraceEvent::ParentOverride { node });
    }

    let cache_run_mode =
        if tree.child_count(node) == 0 && inputs.run_mode == RunMode::ComputeSize {
            RunMode::PerformLayout
        } else {
            inputs.run_mode
        };

    if let Some(cached) = tree.get_cache_mut(node).get(inputs.known_dimensions, inputs.available_space, cache_run_mode) {
        record_event(TraceEvent::FingerprintHit { node });
        record_event(TraceEvent::LayoutExit { node });
        return cached;
    }
    record_event(TraceEvent::FingerprintMiss { node });

    let output = compute_uncached(tree, node, LayoutInput { run_mode: cache_run_mode, ..inputs });

    tree.get_cache_mut(node).store(inputs.known_dimensions, inputs.available_space, cache_run_mode, output);

    record_event(TraceEvent::LayoutExit { node });
    output
}

/// Rounds every node's unrounded layout onto the pixel grid, writing the
/// result into each node's finalized layout. Rounding is done in terms of
/// each node's *absolute* position, derived top-down, rather than
/// independently per node: rounding
/// `location` and `size` separately can open or close a 1px gap between
/// adjacent rounded boxes whose unrounded edges were exactly touching, the
/// same class of bug Yoga's rounding pass
/// (`Yoga.c`, `YGRoundToPixelGrid`) was written to avoid.
pub(crate) fn round_layout(tree: &mut impl LayoutTree, node: NodeId) {
    round_layout_inner(tree, node, 0.0, 0.0);
}

fn round_layout_inner(tree: &mut impl LayoutTree, node: NodeId, cumulative_x: f32, cumulative_y: f32) {
    let unrounded = *tree.get_unrounded_layout_mut(node);
    let abs_x = cumulative_x + unrounded.location.x;
    let abs_y = cumulative_y + unrounded.location.y;

    let final_layout = tree.get_final_layout_mut(node);
    final_layout.order = unrounded.order;
    final_layout.location.x = round(abs_x) - round(cumulative_x);
    final_layout.location.y = round(abs_y) - round(cumulative_y);
    final_layout.size.width = round(abs_x + unrounded.size.width) - round(abs_x);
    final_layout.size.height = round(abs_y + unrounded.size.height) - round(abs_y);
    tree.set_has_new_layout(node);

    for index in 0..tree.child_count(node) {
        let child = tree.get_child_id(node, index);
        round_layout_inner(tree, child, abs_x, abs_y);
    }
}
