//! End-to-end layout scenarios.

use flexcell::prelude::*;

fn layout(tree: &TaffyTree<()>, node: NodeId) -> (f32, f32, f32, f32) {
    let l = tree.layout(node).unwrap();
    (l.location.x, l.location.y, l.size.width, l.size.height)
}

#[test]
fn column_with_fixed_flex_fixed() {
    let mut tree: TaffyTree<()> = TaffyTree::new();

    let top = tree.new_leaf(Style { size: Size { width: auto(), height: length(1.0) }, ..Default::default() }).unwrap();
    let middle = tree
        .new_leaf(Style { flex_grow: 1.0, size: Size { width: auto(), height: auto() }, ..Default::default() })
        .unwrap();
    let bottom =
        tree.new_leaf(Style { size: Size { width: auto(), height: length(1.0) }, ..Default::default() }).unwrap();

    let root = tree
        .new_with_children(
            Style {
                flex_direction: FlexDirection::Column,
                size: Size { width: length(80.0), height: length(24.0) },
                ..Default::default()
            },
            &[top, middle, bottom],
        )
        .unwrap();

    tree.compute_layout(root, Size::MAX_CONTENT).unwrap();

    assert_eq!(layout(&tree, top), (0.0, 0.0, 80.0, 1.0));
    assert_eq!(layout(&tree, middle), (0.0, 1.0, 80.0, 22.0));
    assert_eq!(layout(&tree, bottom), (0.0, 23.0, 80.0, 1.0));
}

#[test]
fn row_with_equal_grow() {
    let mut tree: TaffyTree<()> = TaffyTree::new();

    let a = tree.new_leaf(Style { flex_grow: 1.0, ..Default::default() }).unwrap();
    let b = tree.new_leaf(Style { flex_grow: 1.0, ..Default::default() }).unwrap();

    let root = tree
        .new_with_children(
            Style {
                flex_direction: FlexDirection::Row,
                size: Size { width: length(80.0), height: length(24.0) },
                ..Default::default()
            },
            &[a, b],
        )
        .unwrap();

    tree.compute_layout(root, Size::MAX_CONTENT).unwrap();

    assert_eq!(layout(&tree, a), (0.0, 0.0, 40.0, 24.0));
    assert_eq!(layout(&tree, b), (40.0, 0.0, 40.0, 24.0));
}

#[test]
fn space_between() {
    let mut tree: TaffyTree<()> = TaffyTree::new();

    let a = tree.new_leaf(Style { size: Size { width: length(20.0), height: auto() }, ..Default::default() }).unwrap();
    let b = tree.new_leaf(Style { size: Size { width: length(20.0), height: auto() }, ..Default::default() }).unwrap();

    let root = tree
        .new_with_children(
            Style {
                flex_direction: FlexDirection::Row,
                justify_content: Some(JustifyContent::SpaceBetween),
                size: Size { width: length(80.0), height: auto() },
                ..Default::default()
            },
            &[a, b],
        )
        .unwrap();

    tree.compute_layout(root, Size::MAX_CONTENT).unwrap();

    assert_eq!(tree.layout(a).unwrap().location.x, 0.0);
    assert_eq!(tree.layout(b).unwrap().location.x, 60.0);
}

#[test]
fn wrap() {
    let mut tree: TaffyTree<()> = TaffyTree::new();

    let children: Vec<NodeId> = (0..3)
        .map(|_| {
            tree.new_leaf(Style { size: Size { width: length(40.0), height: length(20.0) }, ..Default::default() })
                .unwrap()
        })
        .collect();

    let root = tree
        .new_with_children(
            Style {
                flex_direction: FlexDirection::Row,
                flex_wrap: FlexWrap::Wrap,
                size: Size { width: length(100.0), height: length(100.0) },
                ..Default::default()
            },
            &children,
        )
        .unwrap();

    tree.compute_layout(root, Size::MAX_CONTENT).unwrap();

    let locations: Vec<(f32, f32)> = children.iter().map(|c| {
        let l = tree.layout(*c).unwrap();
        (l.location.x, l.location.y)
    }).collect();
    assert_eq!(locations, vec![(0.0, 0.0), (40.0, 0.0), (0.0, 20.0)]);
}

#[test]
fn border_and_padding_shrinks_content_box() {
    let mut tree: TaffyTree<()> = TaffyTree::new();

    let child = tree.new_leaf(Style { flex_grow: 1.0, ..Default::default() }).unwrap();

    let root = tree
        .new_with_children(
            Style {
                size: Size { width: length(80.0), height: length(24.0) },
                border: Rect { left: length(1.0), right: length(1.0), top: length(1.0), bottom: length(1.0) },
                ..Default::default()
            },
            &[child],
        )
        .unwrap();

    tree.compute_layout(root, Size::MAX_CONTENT).unwrap();

    assert_eq!(layout(&tree, child), (1.0, 1.0, 78.0, 22.0));
}

#[test]
fn overflow_hidden_clamps_grow_child_below_content_size() {
    let mut tree: TaffyTree<()> = TaffyTree::new();

    let grandchildren: Vec<NodeId> =
        (0..30).map(|_| tree.new_leaf(Style { size: Size { width: auto(), height: length(1.0) }, ..Default::default() }).unwrap()).collect();

    let overflowing = tree
        .new_with_children(
            Style {
                flex_direction: FlexDirection::Column,
                flex_grow: 1.0,
                overflow: Point { x: Overflow::Visible, y: Overflow::Hidden },
                ..Default::default()
            },
            &grandchildren,
        )
        .unwrap();

    let root = tree
        .new_with_children(
            Style {
                flex_direction: FlexDirection::Column,
                size: Size { width: auto(), height: length(10.0) },
                ..Default::default()
            },
            &[overflowing],
        )
        .unwrap();

    tree.compute_layout(root, Size::MAX_CONTENT).unwrap();

    // Diverges from Yoga, which would let the 30 height=1 children establish
    // an automatic minimum main size of 30 and grow the container to fit.
    assert_eq!(tree.layout(overflowing).unwrap().size.height, 10.0);
}

#[test]
fn partial_dirty_preserves_siblings() {
    let mut tree: TaffyTree<()> = TaffyTree::new();

    let fixed = tree.new_leaf(Style { size: Size { width: length(10.0), height: length(1.0) }, ..Default::default() }).unwrap();
    let shrinkable = tree.new_leaf(Style { flex_shrink: 1.0, ..Default::default() }).unwrap();

    let root = tree
        .new_with_children(
            Style {
                flex_direction: FlexDirection::Row,
                size: Size { width: length(40.0), height: auto() },
                ..Default::default()
            },
            &[fixed, shrinkable],
        )
        .unwrap();

    tree.compute_layout(root, Size::MAX_CONTENT).unwrap();
    let before_fixed = layout(&tree, fixed);
    let before_shrinkable = layout(&tree, shrinkable);

    tree.mark_dirty(fixed).unwrap();
    tree.compute_layout(root, Size::MAX_CONTENT).unwrap();

    assert_eq!(layout(&tree, fixed), before_fixed);
    assert_eq!(layout(&tree, shrinkable), before_shrinkable);
}

#[test]
fn rtl_row_mirrors_ltr() {
    let mut tree: TaffyTree<()> = TaffyTree::new();

    let a = tree.new_leaf(Style { size: Size { width: length(30.0), height: auto() }, ..Default::default() }).unwrap();
    let b = tree.new_leaf(Style { size: Size { width: length(20.0), height: auto() }, ..Default::default() }).unwrap();

    let root_ltr = tree
        .new_with_children(
            Style {
                flex_direction: FlexDirection::Row,
                size: Size { width: length(100.0), height: length(50.0) },
                ..Default::default()
            },
            &[a, b],
        )
        .unwrap();
    tree.compute_layout(root_ltr, Size::MAX_CONTENT).unwrap();
    assert_eq!(tree.layout(a).unwrap().location.x, 0.0);
    assert_eq!(tree.layout(b).unwrap().location.x, 30.0);

    let a2 = tree.new_leaf(Style { size: Size { width: length(30.0), height: auto() }, ..Default::default() }).unwrap();
    let b2 = tree.new_leaf(Style { size: Size { width: length(20.0), height: auto() }, ..Default::default() }).unwrap();
    let root_rtl = tree
        .new_with_children(
            Style {
                flex_direction: FlexDirection::Row,
                direction: Direction::Rtl,
                size: Size { width: length(100.0), height: length(50.0) },
                ..Default::default()
            },
            &[a2, b2],
        )
        .unwrap();
    tree.compute_layout(root_rtl, Size::MAX_CONTENT).unwrap();
    assert_eq!(tree.layout(a2).unwrap().location.x, 70.0);
    assert_eq!(tree.layout(b2).unwrap().location.x, 50.0);
}
