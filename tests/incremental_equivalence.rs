//! Incremental layout equals fresh layout, the cardinal correctness
//! property: applying a sequence of mutations to a tree and recomputing must
//! match building a fresh tree with the same final style and laying it out
//! once. Fuzzed against ≥500 seeded trees so the property isn't just
//! checked on a handful of hand-picked shapes.

use flexcell::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const SEEDS: u64 = 500;

fn random_style(rng: &mut ChaCha8Rng) -> Style {
    let flex_direction = match rng.gen_range(0..4) {
        0 => FlexDirection::Row,
        1 => FlexDirection::Column,
        2 => FlexDirection::RowReverse,
        _ => FlexDirection::ColumnReverse,
    };
    let flex_wrap = if rng.gen_bool(0.3) { FlexWrap::Wrap } else { FlexWrap::NoWrap };
    let justify_content = if rng.gen_bool(0.5) {
        Some(match rng.gen_range(0..5) {
            0 => JustifyContent::FlexStart,
            1 => JustifyContent::FlexEnd,
            2 => JustifyContent::Center,
            3 => JustifyContent::SpaceBetween,
            _ => JustifyContent::SpaceAround,
        })
    } else {
        None
    };

    Style {
        flex_direction,
        flex_wrap,
        justify_content,
        flex_grow: if rng.gen_bool(0.4) { rng.gen_range(0.0..3.0) } else { 0.0 },
        flex_shrink: if rng.gen_bool(0.4) { rng.gen_range(0.0..3.0) } else { 1.0 },
        size: Size {
            width: if rng.gen_bool(0.5) { length(rng.gen_range(1.0..100.0)) } else { auto() },
            height: if rng.gen_bool(0.5) { length(rng.gen_range(1.0..100.0)) } else { auto() },
        },
        margin: Rect {
            left: length(rng.gen_range(0.0..5.0)),
            right: length(rng.gen_range(0.0..5.0)),
            top: length(rng.gen_range(0.0..5.0)),
            bottom: length(rng.gen_range(0.0..5.0)),
        },
        ..Default::default()
    }
}

/// Builds a shallow random tree (one container, 0-5 leaf children), runs
/// `mutations` style-reassignments against random children in between two
/// layout passes, and returns the final rectangles for every node in a
/// stable (insertion) order.
fn build_and_layout(seed: u64, mutate: bool) -> Vec<Layout> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut tree: TaffyTree<()> = TaffyTree::new();

    let child_count = rng.gen_range(0..6);
    let mut children = Vec::new();
    let mut final_styles = Vec::new();
    for _ in 0..child_count {
        final_styles.push(random_style(&mut rng));
    }

    if mutate {
        // Seed every child with a throwaway style, lay out, mutate each to
        // its final style (marking it dirty implicitly via `set_style`),
        // then lay out again.
        for style in &final_styles {
            let _ = style;
            children.push(tree.new_leaf(Style::default()).unwrap());
        }
        let root = tree.new_with_children(Style::default(), &children).unwrap();
        tree.compute_layout(root, Size::MAX_CONTENT).unwrap();

        for (child, style) in children.iter().zip(final_styles.iter()) {
            tree.set_style(*child, style.clone()).unwrap();
        }
        tree.compute_layout(root, Size::MAX_CONTENT).unwrap();

        let mut out = vec![*tree.layout(root).unwrap()];
        out.extend(children.iter().map(|c| *tree.layout(*c).unwrap()));
        out
    } else {
        for style in &final_styles {
            children.push(tree.new_leaf(style.clone()).unwrap());
        }
        let root = tree.new_with_children(Style::default(), &children).unwrap();
        tree.compute_layout(root, Size::MAX_CONTENT).unwrap();

        let mut out = vec![*tree.layout(root).unwrap()];
        out.extend(children.iter().map(|c| *tree.layout(*c).unwrap()));
        out
    }
}

#[test]
fn incremental_layout_matches_fresh_layout() {
    for seed in 0..SEEDS {
        let incremental = build_and_layout(seed, true);
        let fresh = build_and_layout(seed, false);
        assert_eq!(incremental, fresh, "mismatch for seed {seed}");
    }
}

#[test]
fn resize_round_trip_returns_to_original_rectangles() {
    let mut tree: TaffyTree<()> = TaffyTree::new();
    let child = tree.new_leaf(Style { flex_grow: 1.0, ..Default::default() }).unwrap();
    let root = tree
        .new_with_children(Style { size: Size { width: auto(), height: length(10.0) }, ..Default::default() }, &[child])
        .unwrap();

    tree.compute_layout(root, Size { width: AvailableSpace::Definite(50.0), height: AvailableSpace::MaxContent }).unwrap();
    let at_w1 = *tree.layout(child).unwrap();

    tree.compute_layout(root, Size { width: AvailableSpace::Definite(80.0), height: AvailableSpace::MaxContent }).unwrap();
    tree.compute_layout(root, Size { width: AvailableSpace::Definite(50.0), height: AvailableSpace::MaxContent }).unwrap();
    let back_at_w1 = *tree.layout(child).unwrap();

    assert_eq!(at_w1, back_at_w1);
}
