//! Out-of-flow positioning for `Position::Absolute` children. Runs once the
//! container's own final size is settled, after in-flow sizing/positioning
//! is done.

use crate::geometry::{Line, Point, Rect, Size};
use crate::style::{Direction, LengthPercentageAuto, Position};
use crate::tree::{Layout, LayoutInput, LayoutPartialTree, NodeId, RunMode, SizingMode};
use crate::util::sys::f32_max;
use crate::util::{MaybeApplyAspectRatio, MaybeMath, MaybeResolve, ResolveOrZero};

/// Resolves a pair of opposing auto margins against the free space between
/// two resolved insets. This engine centers an absolutely positioned child
/// when both of its margins on an axis are `auto` (CSS's actual rule),
/// rather than Yoga's behaviour of treating auto margins on absolute
/// children as zero.
fn split_auto_margins(start_auto: bool, end_auto: bool, start: f32, end: f32, free: Option<f32>) -> (f32, f32) {
    match (start_auto, end_auto, free) {
        (true, true, Some(free)) => {
            let half = f32_max(free, 0.0) / 2.0;
            (half, half)
        }
        (true, false, Some(free)) => (f32_max(free, 0.0), end),
        (false, true, Some(free)) => (start, f32_max(free, 0.0)),
        _ => (start, end),
    }
}

/// Lays out every `Position::Absolute` child of `node` against its padded
/// content box. `container_size` is the node's own final border-box size;
/// `container_content_box_size` is that minus padding and border.
pub(crate) fn perform_absolute_layout_on_absolute_children(
    tree: &mut impl LayoutPartialTree,
    node: NodeId,
    container_size: Size<f32>,
    container_content_box_size: Size<f32>,
    padding_border: Rect<f32>,
    resolved_direction: Direction,
) {
    let child_count = tree.child_count(node);
    for index in 0..child_count {
        let child = tree.get_child_id(node, index);
        let child_style = tree.get_style(child).clone();
        if child_style.position != Position::Absolute {
            continue;
        }

        let parent_size = Size { width: Some(container_size.width), height: Some(container_size.height) };
        let aspect_ratio = child_style.aspect_ratio;

        let left = child_style.inset.left.maybe_resolve(parent_size.width);
        let right = child_style.inset.right.maybe_resolve(parent_size.width);
        let top = child_style.inset.top.maybe_resolve(parent_size.height);
        let bottom = child_style.inset.bottom.maybe_resolve(parent_size.height);

        // A size derived from both insets (prefer the leading edge and derive
        // size from the trailing edge when size is auto) only applies when
        // the style doesn't already give an explicit size.
        let inset_derived_width = left.zip(right).map(|(l, r)| f32_max(container_size.width - l - r, 0.0));
        let inset_derived_height = top.zip(bottom).map(|(t, b)| f32_max(container_size.height - t - b, 0.0));

        let style_size = child_style.size.maybe_resolve(parent_size).maybe_apply_aspect_ratio(aspect_ratio);
        let min_size = child_style.min_size.maybe_resolve(parent_size).maybe_apply_aspect_ratio(aspect_ratio);
        let max_size = child_style.max_size.maybe_resolve(parent_size).maybe_apply_aspect_ratio(aspect_ratio);

        let known_dimensions = Size {
            width: style_size.width.or(inset_derived_width),
            height: style_size.height.or(inset_derived_height),
        }
        .maybe_clamp(min_size, max_size);

        let available_space = container_content_box_size.map(crate::style::AvailableSpace::Definite);

        let inputs = LayoutInput {
            known_dimensions,
            parent_size,
            available_space,
            run_mode: RunMode::PerformLayout,
            sizing_mode: SizingMode::ContentSize,
            vertical_margins_are_collapsible: Line::FALSE,
            resolved_direction,
        };
        let output = tree.compute_child_layout(child, inputs);
        let size = Size {
            width: known_dimensions.width.unwrap_or(output.size.width),
            height: known_dimensions.height.unwrap_or(output.size.height),
        };

        let margin = child_style.margin.resolve_or_zero(parent_size.width);
        let margin_is_auto = Rect {
            left: matches!(child_style.margin.left, LengthPercentageAuto::Auto),
            right: matches!(child_style.margin.right, LengthPercentageAuto::Auto),
            top: matches!(child_style.margin.top, LengthPercentageAuto::Auto),
            bottom: matches!(child_style.margin.bottom, LengthPercentageAuto::Auto),
        };

        let free_width = left.zip(right).map(|(l, r)| container_size.width - l - r - size.width);
        let free_height = top.zip(bottom).map(|(t, b)| container_size.height - t - b - size.height);

        let (margin_left, margin_right) =
            split_auto_margins(margin_is_auto.left, margin_is_auto.right, margin.left, margin.right, free_width);
        let (margin_top, margin_bottom) =
            split_auto_margins(margin_is_auto.top, margin_is_auto.bottom, margin.top, margin.bottom, free_height);

        let x = match (left, right) {
            (Some(l), _) => l + margin_left,
            (None, Some(r)) => container_size.width - r - size.width - margin_right,
            (None, None) => padding_border.left + margin_left,
        };
        let y = match (top, bottom) {
            (Some(t), _) => t + margin_top,
            (None, Some(b)) => container_size.height - b - size.height - margin_bottom,
            (None, None) => padding_border.top + margin_top,
        };

        *tree.get_unrounded_layout_mut(child) = Layout { order: index as u32, location: Point { x, y }, size };
    }
}
