//! The flexbox algorithm: flex-basis resolution, main-axis grow/shrink
//! resolution, cross-axis sizing and alignment, absolute positioning. This
//! is the one non-trivial [`crate::tree::LayoutAlgorithm`] this crate
//! implements — leaves and hidden nodes are handled directly by
//! [`crate::compute::leaf`].

mod absolute;

pub(crate) use absolute::perform_absolute_layout_on_absolute_children;

use crate::geometry::{Line, Point, Rect, Size};
use crate::style::{
    AlignContent, AlignItems, AvailableSpace, Direction, Display, FlexDirection, FlexWrap, JustifyContent,
    LengthPercentageAuto, Overflow, Position, Style,
};
use crate::tree::{Layout, LayoutInput, LayoutOutput, LayoutPartialTree, NodeId, RunMode, SizingMode};
use crate::util::sys::{f32_max, new_vec_with_capacity, Vec};
use crate::util::{MaybeApplyAspectRatio, MaybeMath, MaybeResolve, ResolveOrZero};

fn size_from_main_cross<T>(dir: FlexDirection, main: T, cross: T) -> Size<T> {
    if dir.is_row() { Size { width: main, height: cross } } else { Size { width: cross, height: main } }
}

fn point_from_main_cross(dir: FlexDirection, main: f32, cross: f32) -> Point<f32> {
    if dir.is_row() { Point { x: main, y: cross } } else { Point { x: cross, y: main } }
}

fn overflow_main(style: &Style, dir: FlexDirection) -> Overflow {
    if dir.is_row() { style.overflow.x } else { style.overflow.y }
}

/// One in-flow flex item, carrying every intermediate value the algorithm's
/// phases need. All sizes are border-box, matching the convention
/// [`LayoutInput::known_dimensions`] uses.
struct FlexItem {
    node: NodeId,
    order: u32,

    min_size: Size<Option<f32>>,
    max_size: Size<Option<f32>>,

    margin: Rect<f32>,
    margin_is_auto: Rect<bool>,
    padding_border: Rect<f32>,

    align_self: AlignItems,
    flex_grow: f32,
    flex_shrink: f32,

    flex_basis: f32,
    hypothetical_main: f32,
    hypothetical_cross: f32,

    target_main: f32,
    target_cross: f32,

    baseline: f32,
    violation: f32,
    frozen: bool,

    offset_main: f32,
    offset_cross: f32,
}
impl FlexItem {
    fn margin_main_sum(&self, dir: FlexDirection) -> f32 {
        self.margin.main_start(dir) + self.margin.main_end(dir)
    }
    fn margin_cross_sum(&self, dir: FlexDirection) -> f32 {
        self.margin.cross_start(dir) + self.margin.cross_end(dir)
    }
    fn hypothetical_outer_main(&self, dir: FlexDirection) -> f32 {
        self.hypothetical_main + self.margin_main_sum(dir)
    }
}

struct FlexLine {
    items: Vec<FlexItem>,
    cross_size: f32,
    offset_cross: f32,
}

pub(crate) fn compute_flexbox_layout(
    tree: &mut impl LayoutPartialTree,
    node: NodeId,
    inputs: LayoutInput,
) -> LayoutOutput {
    let style = tree.get_style(node).clone();
    let LayoutInput { known_dimensions, parent_size, available_space, run_mode, resolved_direction, .. } = inputs;
    let resolved_direction = match style.direction {
        Direction::Inherit => resolved_direction,
        explicit => explicit,
    };

    let aspect_ratio = style.aspect_ratio;
    let padding = style.padding.resolve_or_zero(parent_size.width);
    let border = style.border.resolve_or_zero(parent_size.width);
    let padding_border = padding + border;
    let padding_border_size = padding_border.sum_axes();

    let node_size = known_dimensions.or(style.size.maybe_resolve(parent_size).maybe_apply_aspect_ratio(aspect_ratio));
    let node_min_size = style.min_size.maybe_resolve(parent_size).maybe_apply_aspect_ratio(aspect_ratio);
    let node_max_size = style.max_size.maybe_resolve(parent_size).maybe_apply_aspect_ratio(aspect_ratio);

    if run_mode == RunMode::ComputeSize {
        if let (Some(width), Some(height)) = (node_size.width, node_size.height) {
            let size = Size { width, height }
                .maybe_clamp(node_min_size, node_max_size)
                .maybe_max(padding_border_size.map(Some))
                .map(|d| d.unwrap_or(0.0));
            return LayoutOutput::from_size(size);
        }
    }

    compute_preliminary(
        tree,
        node,
        &style,
        node_size,
        node_min_size,
        node_max_size,
        padding_border,
        padding_border_size,
        run_mode,
        resolved_direction,
    )
}

fn compute_preliminary(
    tree: &mut impl LayoutPartialTree,
    node: NodeId,
    style: &Style,
    node_size: Size<Option<f32>>,
    node_min_size: Size<Option<f32>>,
    node_max_size: Size<Option<f32>>,
    padding_border: Rect<f32>,
    padding_border_size: Size<f32>,
    run_mode: RunMode,
    resolved_direction: Direction,
) -> LayoutOutput {
    let dir = style.flex_direction;

    let node_inner_size = node_size.maybe_sub(padding_border_size.map(Some));
    let container_main_available_space: AvailableSpace = node_inner_size
        .main(dir)
        .map(AvailableSpace::Definite)
        .unwrap_or(AvailableSpace::MaxContent);
    let container_cross_available_space: AvailableSpace = node_inner_size
        .cross(dir)
        .map(AvailableSpace::Definite)
        .unwrap_or(AvailableSpace::MaxContent);

    let gap = Size {
        width: style.gap.column.resolve_or_zero(node_inner_size.width),
        height: style.gap.row.resolve_or_zero(node_inner_size.height),
    };
    let gap_main = gap.main(dir);
    let gap_cross = gap.cross(dir);

    let mut items = generate_flex_items(tree, node, style, node_inner_size);
    for item in items.iter_mut() {
        determine_flex_base_size(
            tree,
            dir,
            item,
            container_main_available_space,
            container_cross_available_space,
            node_inner_size,
            resolved_direction,
        );
    }

    let mut lines = generate_flex_lines(items, dir, style.flex_wrap, container_main_available_space, gap_main);

    for line in lines.iter_mut() {
        let line_main_inner_size = node_inner_size.main(dir).unwrap_or_else(|| {
            line.items.iter().map(|i| i.hypothetical_outer_main(dir)).sum::<f32>()
                + gap_main * (line.items.len().saturating_sub(1)) as f32
        });
        let margin_sum: f32 = line.items.iter().map(|i| i.margin_main_sum(dir)).sum();
        resolve_flexible_lengths(&mut line.items, dir, line_main_inner_size - margin_sum - gap_main * (line.items.len().saturating_sub(1)) as f32);
    }

    for line in lines.iter_mut() {
        determine_hypothetical_cross_size(
            tree,
            &mut line.items,
            dir,
            container_cross_available_space,
            node_inner_size,
            resolved_direction,
        );
    }

    // Baseline items may grow `hypothetical_cross` to line up on the line's
    // common baseline, so this runs before line cross sizes are folded up.
    calculate_baselines(tree, &mut lines, dir, node_inner_size, resolved_direction);

    for line in lines.iter_mut() {
        line.cross_size =
            line.items.iter().map(|i| i.hypothetical_cross + i.margin_cross_sum(dir)).fold(0.0_f32, f32_max);
    }

    let container_main_inner_size = node_inner_size.main(dir).unwrap_or_else(|| {
        lines
            .iter()
            .map(|l| {
                l.items.iter().map(|i| i.hypothetical_outer_main(dir)).sum::<f32>()
                    + gap_main * (l.items.len().saturating_sub(1)) as f32
            })
            .fold(0.0_f32, f32_max)
    });

    let single_line_stretch = style.flex_wrap == FlexWrap::NoWrap && node_inner_size.cross(dir).is_some();
    let container_cross_inner_size = node_inner_size.cross(dir).unwrap_or_else(|| {
        let line_count = lines.len();
        lines.iter().map(|l| l.cross_size).sum::<f32>() + gap_cross * (line_count.saturating_sub(1)) as f32
    });

    determine_cross_size(&mut lines, container_cross_inner_size, single_line_stretch);
    align_flex_items_per_line(&mut lines, dir);
    align_flex_lines_per_align_content(&mut lines, container_cross_inner_size, gap_cross, style.align_content);

    for line in lines.iter_mut() {
        justify_and_position_main_axis(&mut line.items, dir, container_main_inner_size, gap_main, style.justify_content);
    }

    let container_main_size =
        (container_main_inner_size + padding_border_size.main(dir)).maybe_clamp(node_min_size.main(dir), node_max_size.main(dir));
    let container_cross_size = (container_cross_inner_size + padding_border_size.cross(dir))
        .maybe_clamp(node_min_size.cross(dir), node_max_size.cross(dir));
    let container_size = size_from_main_cross(dir, container_main_size, container_cross_size);

    let mut first_baselines = Point { x: None, y: None };
    // Mirrors the x-coordinate of every in-flow row child for RTL containers.
    // Absolute children resolve position from explicit inset edges instead,
    // so they aren't mirrored here.
    let mirror_row = dir.is_row() && resolved_direction == Direction::Rtl;

    if run_mode == RunMode::PerformLayout {
        for line in lines.iter() {
            for item in line.items.iter() {
                let known_dimensions = size_from_main_cross(dir, Some(item.target_main), Some(item.target_cross));
                let inputs = LayoutInput {
                    known_dimensions,
                    parent_size: container_size.map(Some),
                    available_space: known_dimensions.map(AvailableSpace::from),
                    run_mode: RunMode::PerformLayout,
                    sizing_mode: SizingMode::ContentSize,
                    vertical_margins_are_collapsible: Line::FALSE,
                    resolved_direction,
                };
                let output = tree.compute_child_layout(item.node, inputs);

                let location_main = padding_border.main_start(dir) + item.offset_main;
                let location_cross = padding_border.cross_start(dir) + line.offset_cross + item.offset_cross;
                let mut location = point_from_main_cross(dir, location_main, location_cross);
                if mirror_row {
                    location.x = container_size.width - location.x - output.size.width;
                }

                *tree.get_unrounded_layout_mut(item.node) = Layout { order: item.order, location, size: output.size };
            }
        }

        let container_content_box_size = Size {
            width: f32_max(container_size.width - padding_border_size.width, 0.0),
            height: f32_max(container_size.height - padding_border_size.height, 0.0),
        };
        perform_absolute_layout_on_absolute_children(
            tree,
            node,
            container_size,
            container_content_box_size,
            padding_border,
            resolved_direction,
        );

        if let Some(first_item) = lines.first().and_then(|l| l.items.first()) {
            let line = &lines[0];
            let baseline_cross = line.offset_cross + first_item.offset_cross + first_item.baseline;
            first_baselines = point_from_main_cross(dir, 0.0, baseline_cross).map(Some);
            if dir.is_row() {
                first_baselines.x = None;
            } else {
                first_baselines.y = None;
            }
        }
    }

    LayoutOutput { size: container_size, first_baselines }
}

/// Collects every in-flow (`Position::Relative`, `Display != None`) child as
/// a [`FlexItem`], resolving the style values that don't depend on the main
/// axis solver.
fn generate_flex_items(
    tree: &mut impl LayoutPartialTree,
    node: NodeId,
    container_style: &Style,
    node_inner_size: Size<Option<f32>>,
) -> Vec<FlexItem> {
    let child_count = tree.child_count(node);
    let mut items = new_vec_with_capacity(child_count);

    for index in 0..child_count {
        let child = tree.get_child_id(node, index);
        let child_style = tree.get_style(child).clone();

        if child_style.display == Display::None || child_style.position == Position::Absolute {
            continue;
        }

        let aspect_ratio = child_style.aspect_ratio;
        let margin = child_style.margin.resolve_or_zero(node_inner_size.width);
        let margin_is_auto = Rect {
            left: matches!(child_style.margin.left, LengthPercentageAuto::Auto),
            right: matches!(child_style.margin.right, LengthPercentageAuto::Auto),
            top: matches!(child_style.margin.top, LengthPercentageAuto::Auto),
            bottom: matches!(child_style.margin.bottom, LengthPercentageAuto::Auto),
        };
        let padding = child_style.padding.resolve_or_zero(node_inner_size.width);
        let border = child_style.border.resolve_or_zero(node_inner_size.width);

        let min_size = child_style.min_size.maybe_resolve(node_inner_size).maybe_apply_aspect_ratio(aspect_ratio);
        let max_size = child_style.max_size.maybe_resolve(node_inner_size).maybe_apply_aspect_ratio(aspect_ratio);

        let align_self = child_style.align_self.or(container_style.align_items).unwrap_or(AlignItems::Stretch);

        items.push(FlexItem {
            node: child,
            order: index as u32,
            min_size,
            max_size,
            margin,
            margin_is_auto,
            padding_border: padding + border,
            align_self,
            flex_grow: f32_max(child_style.flex_grow, 0.0),
            flex_shrink: f32_max(child_style.flex_shrink, 0.0),
            flex_basis: 0.0,
            hypothetical_main: 0.0,
            hypothetical_cross: 0.0,
            target_main: 0.0,
            target_cross: 0.0,
            baseline: 0.0,
            violation: 0.0,
            frozen: false,
            offset_main: 0.0,
            offset_cross: 0.0,
        });
    }

    items
}

fn measure_child(
    tree: &mut impl LayoutPartialTree,
    node: NodeId,
    known_dimensions: Size<Option<f32>>,
    parent_size: Size<Option<f32>>,
    available_space: Size<AvailableSpace>,
    resolved_direction: Direction,
) -> Size<f32> {
    let inputs = LayoutInput {
        known_dimensions,
        parent_size,
        available_space,
        run_mode: RunMode::ComputeSize,
        sizing_mode: SizingMode::InherentSize,
        vertical_margins_are_collapsible: Line::FALSE,
        resolved_direction,
    };
    tree.compute_child_layout(node, inputs).size
}

/// Resolves `item`'s flex-basis and hypothetical main size: explicit
/// `flex-basis`, falling back to the main-axis `size` dimension, falling
/// back to a max-content measurement. The automatic minimum main size is a
/// min-content measurement unless the item is a scroll container, in which
/// case it is zero.
fn determine_flex_base_size(
    tree: &mut impl LayoutPartialTree,
    dir: FlexDirection,
    item: &mut FlexItem,
    container_main_available_space: AvailableSpace,
    container_cross_available_space: AvailableSpace,
    node_inner_size: Size<Option<f32>>,
    resolved_direction: Direction,
) {
    let child_style = tree.get_style(item.node).clone();
    let _ = container_main_available_space;

    let style_flex_basis = child_style.flex_basis.maybe_resolve(node_inner_size.main(dir));
    let style_main_size = child_style.size.main(dir).maybe_resolve(node_inner_size.main(dir));

    let flex_basis = style_flex_basis.or(style_main_size).unwrap_or_else(|| {
        let available_space = size_from_main_cross(dir, AvailableSpace::MaxContent, container_cross_available_space);
        measure_child(tree, item.node, Size::NONE, node_inner_size, available_space, resolved_direction).main(dir)
    });
    item.flex_basis = flex_basis;

    let explicit_min_main = item.min_size.main(dir);
    let min_main = explicit_min_main.unwrap_or_else(|| {
        if overflow_main(&child_style, dir).is_scroll_container() {
            0.0
        } else {
            let available_space = size_from_main_cross(dir, AvailableSpace::MinContent, container_cross_available_space);
            measure_child(tree, item.node, Size::NONE, node_inner_size, available_space, resolved_direction).main(dir)
        }
    });

    item.hypothetical_main = flex_basis.maybe_clamp(Some(min_main), item.max_size.main(dir));
}

/// Breaks `items` into flex lines: `FlexWrap::NoWrap` always produces exactly
/// one line; otherwise a new line starts whenever the next item would
/// overflow the main axis.
fn generate_flex_lines(
    items: Vec<FlexItem>,
    dir: FlexDirection,
    wrap: FlexWrap,
    main_axis_available_space: AvailableSpace,
    gap_main: f32,
) -> Vec<FlexLine> {
    if wrap == FlexWrap::NoWrap {
        return vec![FlexLine { items, cross_size: 0.0, offset_cross: 0.0 }];
    }

    let available = match main_axis_available_space.into_option() {
        Some(available) => available,
        None => return vec![FlexLine { items, cross_size: 0.0, offset_cross: 0.0 }],
    };

    let mut lines = Vec::new();
    let mut current: Vec<FlexItem> = Vec::new();
    let mut current_main: f32 = 0.0;

    for item in items {
        let item_main = item.hypothetical_outer_main(dir);
        if !current.is_empty() && current_main + gap_main + item_main > available {
            lines.push(FlexLine { items: core::mem::take(&mut current), cross_size: 0.0, offset_cross: 0.0 });
            current_main = 0.0;
        }
        current_main += (if current.is_empty() { 0.0 } else { gap_main }) + item_main;
        current.push(item);
    }
    if !current.is_empty() {
        lines.push(FlexLine { items: current, cross_size: 0.0, offset_cross: 0.0 });
    }

    if wrap == FlexWrap::WrapReverse {
        lines.reverse();
    }

    lines
}

/// Distributes free main-axis space among a line's items via `flex-grow`/
/// `flex-shrink`, clamping any item that hits its min/max and freezing it,
/// then redistributing the remainder among the items still unfrozen — CSS
/// Flexbox's "clamp-and-freeze" fixed-point iteration (§9.7). Bounded to
/// `items.len() + 1` rounds: each round freezes at least one more item or
/// the loop exits on zero violation, so it cannot spin.
fn resolve_flexible_lengths(items: &mut [FlexItem], dir: FlexDirection, main_inner_size: f32) {
    let n = items.len();
    if n == 0 {
        return;
    }

    for item in items.iter_mut() {
        item.target_main = item.hypothetical_main;
    }

    let total_hypothetical: f32 = items.iter().map(|i| i.hypothetical_main).sum();
    let initial_free_space = main_inner_size - total_hypothetical;
    let growing = initial_free_space > 0.0;

    for item in items.iter_mut() {
        item.frozen = if growing { item.flex_grow <= 0.0 } else { item.flex_shrink <= 0.0 };
    }

    for _ in 0..=n {
        if items.iter().all(|i| i.frozen) {
            break;
        }

        let used_main: f32 = items.iter().map(|i| i.target_main).sum();
        let remaining_free_space = main_inner_size - used_main;

        let sum_factors: f32 = if growing {
            items.iter().filter(|i| !i.frozen).map(|i| i.flex_grow).sum()
        } else {
            items.iter().filter(|i| !i.frozen).map(|i| i.flex_shrink * i.flex_basis).sum()
        };
        if sum_factors <= 0.0 {
            break;
        }

        let mut any_violation = false;
        for item in items.iter_mut().filter(|i| !i.frozen) {
            let delta = if growing {
                remaining_free_space * (item.flex_grow / sum_factors)
            } else {
                remaining_free_space * (item.flex_shrink * item.flex_basis / sum_factors)
            };
            let unclamped = item.hypothetical_main + delta;
            let clamped = unclamped.maybe_clamp(item.min_size.main(dir), item.max_size.main(dir));
            item.violation = clamped - unclamped;
            item.target_main = clamped;
            if item.violation != 0.0 {
                any_violation = true;
            }
        }

        if !any_violation {
            break;
        }

        for item in items.iter_mut().filter(|i| !i.frozen) {
            if item.violation != 0.0 {
                item.frozen = true;
            }
        }
    }
}

/// Measures each item's cross size now that `target_main` is fixed: a
/// min/max-clamped intrinsic measurement taken with the main axis pinned to
/// the item's resolved flex length.
fn determine_hypothetical_cross_size(
    tree: &mut impl LayoutPartialTree,
    items: &mut [FlexItem],
    dir: FlexDirection,
    container_cross_available_space: AvailableSpace,
    node_inner_size: Size<Option<f32>>,
    resolved_direction: Direction,
) {
    for item in items.iter_mut() {
        let known_dimensions = size_from_main_cross(dir, Some(item.target_main), None);
        let available_space =
            size_from_main_cross(dir, AvailableSpace::Definite(item.target_main), container_cross_available_space);
        let measured =
            measure_child(tree, item.node, known_dimensions, node_inner_size, available_space, resolved_direction);
        item.hypothetical_cross = measured.cross(dir).maybe_clamp(item.min_size.cross(dir), item.max_size.cross(dir));
    }
}

/// Computes each baseline-aligned item's first baseline and grows its
/// `hypothetical_cross` to the line's shared ascent, so the line packs every
/// baseline item flush against the same line.
fn calculate_baselines(
    tree: &mut impl LayoutPartialTree,
    lines: &mut [FlexLine],
    dir: FlexDirection,
    node_inner_size: Size<Option<f32>>,
    resolved_direction: Direction,
) {
    for line in lines.iter_mut() {
        for item in line.items.iter_mut() {
            if item.align_self != AlignItems::Baseline {
                continue;
            }

            let known_dimensions = size_from_main_cross(dir, Some(item.target_main), Some(item.hypothetical_cross));
            let inputs = LayoutInput {
                known_dimensions,
                parent_size: node_inner_size,
                available_space: known_dimensions.map(AvailableSpace::from),
                run_mode: RunMode::PerformLayout,
                sizing_mode: SizingMode::InherentSize,
                vertical_margins_are_collapsible: Line::FALSE,
                resolved_direction,
            };
            let output = tree.compute_child_layout(item.node, inputs);
            let baseline = if dir.is_row() { output.first_baselines.y } else { output.first_baselines.x };
            item.baseline = baseline.unwrap_or(item.hypothetical_cross);
        }

        let max_baseline =
            line.items.iter().filter(|i| i.align_self == AlignItems::Baseline).map(|i| i.baseline).fold(0.0_f32, f32_max);

        for item in line.items.iter_mut() {
            if item.align_self == AlignItems::Baseline {
                item.hypothetical_cross += f32_max(max_baseline - item.baseline, 0.0);
            }
        }
    }
}

/// Finalizes each line's cross size: a single `NoWrap` line with a definite
/// container cross size stretches to fill it; otherwise a line's cross size
/// is already the largest of its items' hypothetical outer cross sizes,
/// computed by the caller before this runs.
fn determine_cross_size(lines: &mut [FlexLine], container_cross_inner_size: f32, single_line_stretch: bool) {
    if single_line_stretch {
        if let [line] = lines {
            line.cross_size = container_cross_inner_size;
        }
    }
}

/// Positions every item within its line on the cross axis per its resolved
/// `align-self`.
fn align_flex_items_per_line(lines: &mut [FlexLine], dir: FlexDirection) {
    for line in lines.iter_mut() {
        let line_cross = line.cross_size;
        for item in line.items.iter_mut() {
            let margin_start = item.margin.cross_start(dir);
            let outer_hypothetical_cross = item.hypothetical_cross + item.margin_cross_sum(dir);
            let free = f32_max(line_cross - outer_hypothetical_cross, 0.0);

            match item.align_self {
                AlignItems::Start | AlignItems::FlexStart | AlignItems::Baseline => {
                    item.target_cross = item.hypothetical_cross;
                    item.offset_cross = margin_start;
                }
                AlignItems::End | AlignItems::FlexEnd => {
                    item.target_cross = item.hypothetical_cross;
                    item.offset_cross = free + margin_start;
                }
                AlignItems::Center => {
                    item.target_cross = item.hypothetical_cross;
                    item.offset_cross = free / 2.0 + margin_start;
                }
                AlignItems::Stretch => {
                    item.target_cross =
                        f32_max(line_cross - item.margin_cross_sum(dir), 0.0).maybe_clamp(item.min_size.cross(dir), item.max_size.cross(dir));
                    item.offset_cross = margin_start;
                }
            }
        }
    }
}

/// Distributes lines across the container's cross axis per `align-content`:
/// `Stretch` first grows every line's cross size to absorb the container's
/// leftover cross space, then lines are packed or spaced the same way
/// `justify-content` packs items on the main axis.
fn align_flex_lines_per_align_content(
    lines: &mut [FlexLine],
    container_cross_inner_size: f32,
    gap_cross: f32,
    align_content: Option<AlignContent>,
) {
    let line_count = lines.len();
    if line_count == 0 {
        return;
    }
    let align_content = align_content.unwrap_or(AlignContent::Stretch);

    let used: f32 = lines.iter().map(|l| l.cross_size).sum::<f32>() + gap_cross * (line_count - 1) as f32;
    let free = f32_max(container_cross_inner_size - used, 0.0);

    if align_content == AlignContent::Stretch && free > 0.0 {
        let extra = free / line_count as f32;
        for line in lines.iter_mut() {
            line.cross_size += extra;
        }
    }

    let used: f32 = lines.iter().map(|l| l.cross_size).sum::<f32>() + gap_cross * (line_count - 1) as f32;
    let free = container_cross_inner_size - used;

    let (mut cursor, gap_between) = match align_content {
        AlignContent::FlexStart | AlignContent::Stretch => (0.0, gap_cross),
        AlignContent::FlexEnd => (free, gap_cross),
        AlignContent::Center => (free / 2.0, gap_cross),
        AlignContent::SpaceBetween => {
            (0.0, if line_count > 1 { gap_cross + free / (line_count - 1) as f32 } else { gap_cross })
        }
        AlignContent::SpaceAround => {
            let per = free / line_count as f32;
            (per / 2.0, gap_cross + per)
        }
        AlignContent::SpaceEvenly => {
            let per = free / (line_count + 1) as f32;
            (per, gap_cross + per)
        }
    };

    for line in lines.iter_mut() {
        line.offset_cross = cursor;
        cursor += line.cross_size + gap_between;
    }
}

/// Positions every item within a line on the main axis per `justify-content`,
/// except that free space absorbed by `auto` margins takes priority over
/// `justify-content` for that line entirely (CSS Flexbox §9.7).
fn justify_and_position_main_axis(
    items: &mut [FlexItem],
    dir: FlexDirection,
    container_main_inner_size: f32,
    gap_main: f32,
    justify_content: Option<JustifyContent>,
) {
    let n = items.len();
    if n == 0 {
        return;
    }

    let total_auto_margins: u32 = items
        .iter()
        .map(|i| {
            (if i.margin_is_auto.main_start(dir) { 1 } else { 0 }) + (if i.margin_is_auto.main_end(dir) { 1 } else { 0 })
        })
        .sum();

    let used: f32 =
        items.iter().map(|i| i.target_main + i.margin_main_sum(dir)).sum::<f32>() + gap_main * (n - 1) as f32;
    let free = f32_max(container_main_inner_size - used, 0.0);

    if total_auto_margins > 0 {
        let per_auto = free / total_auto_margins as f32;
        let mut cursor = 0.0_f32;
        for item in items.iter_mut() {
            let margin_start = if item.margin_is_auto.main_start(dir) { per_auto } else { item.margin.main_start(dir) };
            let margin_end = if item.margin_is_auto.main_end(dir) { per_auto } else { item.margin.main_end(dir) };
            cursor += margin_start;
            item.offset_main = cursor;
            cursor += item.target_main + margin_end + gap_main;
        }
        return;
    }

    let justify = justify_content.unwrap_or(JustifyContent::FlexStart);
    let (mut cursor, gap_between) = match justify {
        JustifyContent::FlexStart => (0.0, gap_main),
        JustifyContent::FlexEnd => (free, gap_main),
        JustifyContent::Center => (free / 2.0, gap_main),
        JustifyContent::SpaceBetween => (0.0, if n > 1 { gap_main + free / (n - 1) as f32 } else { gap_main }),
        JustifyContent::SpaceAround => {
            let per = free / n as f32;
            (per / 2.0, gap_main + per)
        }
        JustifyContent::SpaceEvenly => {
            let per = free / (n + 1) as f32;
            (per, gap_main + per)
        }
    };

    for item in items.iter_mut() {
        cursor += item.margin.main_start(dir);
        item.offset_main = cursor;
        cursor += item.target_main + item.margin.main_end(dir) + gap_between;
    }
}
