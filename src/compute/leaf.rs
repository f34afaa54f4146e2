//! Leaf measurement: sizing a node with no in-flow children, honoring a
//! consumer-supplied measure callback when one is registered.

use crate::geometry::{Point, Size};
use crate::style::{AvailableSpace, BaselineFunc, Style};
use crate::trace::{record_event, TraceEvent};
use crate::tree::{Layout, LayoutInput, LayoutOutput, NodeId};
use crate::util::sys::f32_max;
use crate::util::{MaybeApplyAspectRatio, MaybeMath, MaybeResolve, ResolveOrZero};

/// Applies a node's baseline override, if it has one, to an otherwise-final
/// `LayoutOutput`. With no override, `first_baselines` stays `None` on both
/// axes and callers fall back to the node's own outer bottom edge.
fn with_baseline(mut output: LayoutOutput, baseline_func: Option<&BaselineFunc>) -> LayoutOutput {
    if let Some(f) = baseline_func {
        let baseline = f(output.size);
        output.first_baselines = Point { x: Some(baseline), y: Some(baseline) };
    }
    output
}

/// Computes the size of a leaf node: either the resolved explicit
/// width/height, or the output of `measure` clamped to the node's min/max
/// and the available space's `AtMost`/`Exactly`/`Undefined` semantics.
/// `measure` receives known dimensions with padding and border already
/// excluded, matching the content-box contract a measure callback expects.
///
/// `measure` must not be called with a negative size and must not be trusted
/// to return one: a measured negative output is clamped to zero.
pub(crate) fn compute_leaf_layout(
    node: NodeId,
    inputs: LayoutInput,
    style: &Style,
    baseline_func: Option<&BaselineFunc>,
    measure: impl FnOnce(Size<Option<f32>>, Size<AvailableSpace>) -> Size<f32>,
) -> LayoutOutput {
    let LayoutInput { known_dimensions, parent_size, available_space, .. } = inputs;

    let aspect_ratio = style.aspect_ratio;
    let margin = style.margin.resolve_or_zero(parent_size.width);
    let padding = style.padding.resolve_or_zero(parent_size.width);
    let border = style.border.resolve_or_zero(parent_size.width);
    let padding_border_sum = (padding + border).sum_axes();

    let node_size = known_dimensions.or(style
        .size
        .maybe_resolve(parent_size)
        .maybe_apply_aspect_ratio(aspect_ratio));
    let node_min_size = style.min_size.maybe_resolve(parent_size).maybe_apply_aspect_ratio(aspect_ratio);
    let node_max_size = style.max_size.maybe_resolve(parent_size).maybe_apply_aspect_ratio(aspect_ratio);

    // No measure function: the node's size is its resolved style size (content box padded back out to border box), or zero.
    if node_size.width.is_some() && node_size.height.is_some() {
        let size = node_size
            .maybe_clamp(node_min_size, node_max_size)
            .maybe_max(padding_border_sum.map(Some))
            .map(|dim| dim.unwrap_or(0.0));
        return with_baseline(LayoutOutput::from_size(size), baseline_func);
    }

    // Resolve the content-box available space we'll ask the measure function to size into.
    let available_space_for_measure = Size {
        width: available_space.width.maybe_sub(margin.horizontal_axis_sum()).maybe_sub(padding_border_sum.width),
        height: available_space.height.maybe_sub(margin.vertical_axis_sum()).maybe_sub(padding_border_sum.height),
    };
    let known_dimensions_for_measure =
        node_size.maybe_clamp(node_min_size, node_max_size).maybe_sub(padding_border_sum.map(Some));

    record_event(TraceEvent::MeasureCall { node });
    let measured_size = measure(known_dimensions_for_measure, available_space_for_measure);
    let measured_size =
        Size { width: f32_max(measured_size.width, 0.0), height: f32_max(measured_size.height, 0.0) };

    let size = node_size
        .unwrap_or(measured_size.maybe_add(padding_border_sum.map(Some)))
        .maybe_clamp(node_min_size, node_max_size)
        .maybe_max(padding_border_sum.map(Some))
        .map(|dim| dim.unwrap_or(0.0));

    with_baseline(LayoutOutput::from_size(size), baseline_func)
}

/// The `Display::None` zero-size path: this node and its whole subtree are
/// collapsed to a `0x0` box and recursively marked so.
pub(crate) fn compute_hidden_layout<Tree: crate::tree::LayoutPartialTree>(
    tree: &mut Tree,
    node: crate::tree::NodeId,
) -> LayoutOutput {
    *tree.get_unrounded_layout_mut(node) = Layout::with_order(0);
    tree.get_cache_mut(node).clear();

    for index in 0..tree.child_count(node) {
        let child = tree.get_child_id(node, index);
        let _ = tree.compute_child_layout(child, LayoutInput::hidden());
    }

    LayoutOutput::HIDDEN
}
