//! `flexcell` is a Yoga-compatible flexbox layout library: a tree of styled
//! nodes, a `compute_layout` entry point, and a solver with no native or
//! WebAssembly dependency. It's intended to be embedded in terminal (and
//! other) UI toolkits as the layout primitive underneath their own widget
//! tree and rendering.
//!
//! ```
//! use flexcell::prelude::*;
//!
//! let mut tree: TaffyTree<()> = TaffyTree::new();
//!
//! let child = tree.new_leaf(Style { size: Size { width: length(10.0), height: length(10.0) }, ..Default::default() }).unwrap();
//! let root = tree
//!     .new_with_children(
//!         Style { size: Size { width: length(100.0), height: length(100.0) }, ..Default::default() },
//!         &[child],
//!     )
//!     .unwrap();
//!
//! tree.compute_layout(root, Size::MAX_CONTENT).unwrap();
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![allow(clippy::needless_range_loop)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod compute;
pub mod geometry;
pub mod style;
pub mod style_helpers;
pub mod trace;
mod tree;
mod util;

pub use tree::{
    Layout, LayoutAlgorithm, LayoutInput, LayoutOutput, LayoutPartialTree, LayoutTree, NodeId, RunMode, SizingMode,
    TaffyError, TaffyResult, TaffyTree,
};

/// Commonly used types and functions, re-exported for a single `use
/// flexcell::prelude::*;` import.
pub mod prelude {
    pub use crate::geometry::{Line, Point, Rect, Size};
    pub use crate::style::{
        AlignContent, AlignItems, AlignSelf, AvailableSpace, Dimension, Direction, Display, FlexDirection, FlexWrap,
        JustifyContent, LengthPercentage, LengthPercentageAuto, Overflow, Position, Style,
    };
    pub use crate::style_helpers::{auto, length, percent, zero, TaffyMaxContent, TaffyMinContent};
    pub use crate::tree::{NodeId, TaffyError, TaffyResult, TaffyTree};
}
