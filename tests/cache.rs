//! Layout/measurement cache regression tests: a clean subtree must not be
//! recomputed or re-measured, dirtying a node must force exactly that
//! subtree to recompute, and parent-overridden known dimensions must not be
//! served from a cache entry that doesn't match them.

use core::cell::Cell;
use flexcell::prelude::*;
use flexcell::trace::{diff_traces, enable_trace, take_trace, TraceEvent};

#[test]
fn clean_relayout_does_not_remeasure() {
    let calls = Cell::new(0u32);
    let mut tree: TaffyTree<()> = TaffyTree::new();
    let leaf = tree.new_leaf(Style::default()).unwrap();
    let root = tree.new_with_children(Style::default(), &[leaf]).unwrap();

    let measure = |_: Size<Option<f32>>, _: Size<AvailableSpace>, _: NodeId, _: Option<&mut ()>| {
        calls.set(calls.get() + 1);
        Size { width: 10.0, height: 10.0 }
    };

    tree.compute_layout_with_measure(root, Size::MAX_CONTENT, measure).unwrap();
    let first_call_count = calls.get();
    assert!(first_call_count > 0);

    tree.compute_layout_with_measure(root, Size::MAX_CONTENT, measure).unwrap();
    assert_eq!(calls.get(), first_call_count, "a clean second pass must not re-invoke measure");
}

#[test]
fn dirtying_one_child_does_not_remeasure_its_clean_sibling() {
    let sibling_calls = Cell::new(0u32);
    let mut tree: TaffyTree<()> = TaffyTree::new();
    let dirtied = tree.new_leaf(Style { flex_grow: 1.0, ..Default::default() }).unwrap();
    let sibling = tree.new_leaf(Style::default()).unwrap();
    let root = tree
        .new_with_children(Style { size: Size { width: auto(), height: length(20.0) }, ..Default::default() }, &[dirtied, sibling])
        .unwrap();

    let measure = |_: Size<Option<f32>>, _: Size<AvailableSpace>, node: NodeId, _: Option<&mut ()>| {
        if node == sibling {
            sibling_calls.set(sibling_calls.get() + 1);
        }
        Size { width: 10.0, height: 10.0 }
    };

    tree.compute_layout_with_measure(root, Size::MAX_CONTENT, measure).unwrap();
    let after_first = sibling_calls.get();

    tree.mark_dirty(dirtied).unwrap();
    tree.compute_layout_with_measure(root, Size::MAX_CONTENT, measure).unwrap();

    assert_eq!(sibling_calls.get(), after_first, "dirtying one child must not force its clean sibling to re-measure");
}

#[test]
fn repeated_clean_layout_hits_the_fingerprint_cache() {
    let mut tree: TaffyTree<()> = TaffyTree::new();
    let leaf = tree.new_leaf(Style { size: Size { width: length(10.0), height: length(10.0) }, ..Default::default() }).unwrap();
    let root = tree.new_with_children(Style::default(), &[leaf]).unwrap();

    tree.compute_layout(root, Size::MAX_CONTENT).unwrap();

    enable_trace();
    tree.compute_layout(root, Size::MAX_CONTENT).unwrap();
    let second_pass = take_trace();

    assert!(
        second_pass.iter().any(|e| matches!(e, TraceEvent::FingerprintHit { .. })),
        "a second clean layout pass should hit the cache at least once, got {second_pass:?}"
    );
    assert!(
        !second_pass.iter().any(|e| matches!(e, TraceEvent::FingerprintMiss { .. })),
        "a second clean layout pass should miss nothing, got {second_pass:?}"
    );
}

#[test]
fn traces_of_two_fresh_identical_layouts_are_identical() {
    let build = || {
        let mut tree: TaffyTree<()> = TaffyTree::new();
        let leaf = tree.new_leaf(Style { flex_grow: 1.0, ..Default::default() }).unwrap();
        let root = tree
            .new_with_children(Style { size: Size { width: length(50.0), height: length(20.0) }, ..Default::default() }, &[leaf])
            .unwrap();
        (tree, root)
    };

    let (mut tree_a, root_a) = build();
    enable_trace();
    tree_a.compute_layout(root_a, Size::MAX_CONTENT).unwrap();
    let trace_a = take_trace();

    let (mut tree_b, root_b) = build();
    enable_trace();
    tree_b.compute_layout(root_b, Size::MAX_CONTENT).unwrap();
    let trace_b = take_trace();

    assert_eq!(diff_traces(&trace_a, &trace_b), None);
}
