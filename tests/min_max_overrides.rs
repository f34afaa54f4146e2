#[cfg(test)]
mod min_max_overrides {

    use flexcell::prelude::*;

    #[test]
    fn max_overrides_min() {
        let mut tree: TaffyTree<()> = TaffyTree::new();

        let child = tree
            .new_leaf(Style {
                size: Size { width: Dimension::Length(50.0), height: Dimension::Length(50.0) },
                min_size: Size { width: Dimension::Length(100.0), height: Dimension::Length(100.0) },
                max_size: Size { width: Dimension::Length(10.0), height: Dimension::Length(10.0) },
                ..Default::default()
            })
            .unwrap();

        tree.compute_layout(
            child,
            Size { width: AvailableSpace::Definite(100.0), height: AvailableSpace::Definite(100.0) },
        )
        .unwrap();

        // When min > max, max wins rather than min.
        assert_eq!(tree.layout(child).unwrap().size, Size { width: 10.0, height: 10.0 });
    }

    #[test]
    fn max_overrides_size() {
        let mut tree: TaffyTree<()> = TaffyTree::new();

        let child = tree
            .new_leaf(Style {
                size: Size { width: Dimension::Length(50.0), height: Dimension::Length(50.0) },
                max_size: Size { width: Dimension::Length(10.0), height: Dimension::Length(10.0) },
                ..Default::default()
            })
            .unwrap();

        tree.compute_layout(
            child,
            Size { width: AvailableSpace::Definite(100.0), height: AvailableSpace::Definite(100.0) },
        )
        .unwrap();

        assert_eq!(tree.layout(child).unwrap().size, Size { width: 10.0, height: 10.0 });
    }

    #[test]
    fn min_overrides_size() {
        let mut tree: TaffyTree<()> = TaffyTree::new();

        let child = tree
            .new_leaf(Style {
                size: Size { width: Dimension::Length(50.0), height: Dimension::Length(50.0) },
                min_size: Size { width: Dimension::Length(100.0), height: Dimension::Length(100.0) },
                ..Default::default()
            })
            .unwrap();

        tree.compute_layout(
            child,
            Size { width: AvailableSpace::Definite(100.0), height: AvailableSpace::Definite(100.0) },
        )
        .unwrap();

        assert_eq!(tree.layout(child).unwrap().size, Size { width: 100.0, height: 100.0 });
    }
}
