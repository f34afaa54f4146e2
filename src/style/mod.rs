//! The node style record: setters and their defaults.

pub mod dimension;

pub use dimension::{Dimension, LengthPercentage, LengthPercentageAuto};

use crate::geometry::{AbsoluteAxis, Rect, Size};
use crate::style_helpers::TaffyZero;

/// Sets the layout used for a node's children.
///
/// Only `Flex` and `None` are meaningful to this engine's layout algorithms
/// — CSS Grid and Block formatting contexts are out of scope; `Contents`
/// is retained because it changes *tree shape* rather than selecting an
/// algorithm — a `Contents` node is transparent, and its children are
/// spliced into its parent's flex line as if they were its own.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Display {
    /// The node's children participate in flexbox layout
    #[default]
    Flex,
    /// The node and its subtree are not laid out or rendered (0×0, no box generated)
    None,
    /// The node generates no box of its own; its children are laid out as if
    /// they were direct children of this node's parent
    Contents,
}

/// Whether a node participates in normal in-flow layout or is taken out of
/// flow and positioned against its containing block by the absolute
/// positioner.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Position {
    /// Participates in flex-line building and main/cross-axis distribution
    #[default]
    Relative,
    /// Removed from flex-line building; positioned via `inset` against the
    /// padded content box of the nearest ancestor
    Absolute,
}

/// How a node's content that overflows its box is handled. Only the
/// automatic-minimum-main-size divergence depends on this; there is no
/// scrolling/clipping behaviour to implement.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Overflow {
    /// Content is not clipped; automatic minimum size is content-based
    #[default]
    Visible,
    /// Content is clipped; automatic minimum main size is zero
    Hidden,
    /// As `Hidden`, and a scrollbar gutter is reserved on the cross axis
    Scroll,
}
impl Overflow {
    /// True for `Hidden`/`Scroll` — the "overflow container" automatic
    /// minimum size rule
    pub fn is_scroll_container(self) -> bool {
        !matches!(self, Self::Visible)
    }
}

/// The axis flex items are laid out along, and whether that axis is reversed.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FlexDirection {
    /// Left-to-right (or right-to-left under RTL) horizontal main axis
    #[default]
    Row,
    /// Top-to-bottom vertical main axis
    Column,
    /// Right-to-left (or left-to-right under RTL) horizontal main axis
    RowReverse,
    /// Bottom-to-top vertical main axis
    ColumnReverse,
}
impl FlexDirection {
    /// True for `Row`/`RowReverse` — main axis is horizontal
    pub fn is_row(self) -> bool {
        matches!(self, Self::Row | Self::RowReverse)
    }
    /// True for `Column`/`ColumnReverse` — main axis is vertical
    pub fn is_column(self) -> bool {
        matches!(self, Self::Column | Self::ColumnReverse)
    }
    /// True for the `*Reverse` variants
    pub fn is_reverse(self) -> bool {
        matches!(self, Self::RowReverse | Self::ColumnReverse)
    }
    /// The absolute axis this direction's main axis corresponds to
    pub fn main_axis(self) -> AbsoluteAxis {
        if self.is_row() {
            AbsoluteAxis::Horizontal
        } else {
            AbsoluteAxis::Vertical
        }
    }
    /// The absolute axis this direction's cross axis corresponds to
    pub fn cross_axis(self) -> AbsoluteAxis {
        self.main_axis().other_axis()
    }
}

/// Controls whether flex items are forced onto one line or may wrap onto
/// multiple lines.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FlexWrap {
    /// All items are placed on a single line, which may overflow
    #[default]
    NoWrap,
    /// Items wrap onto additional lines as needed, lines stack forward on the cross axis
    Wrap,
    /// As `Wrap`, but lines stack in reverse order on the cross axis
    WrapReverse,
}

/// Cross-axis alignment of items within a line, and of lines within the
/// container's cross axis (`AlignContent`) — the two enums share every
/// `Start`/`End`/`Center`/`Stretch` variant so this one type backs both
/// `align-items`/`align-self` and `align-content`, matching the value space
/// CSS itself uses.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlignItems {
    /// Pack items/lines toward the start of the cross axis
    Start,
    /// Pack items/lines toward the end of the cross axis
    End,
    /// Pack items/lines toward the start of the cross axis, same as `Start`
    /// for items (kept distinct from `Start` because CSS Flexbox gives
    /// `flex-start` direction-aware semantics that `Start`/`End` do not have)
    FlexStart,
    /// As `FlexStart`, but toward the end of the flex container
    FlexEnd,
    /// Center items/lines within the available cross-axis space
    Center,
    /// Align items/lines by their first baseline
    Baseline,
    /// Stretch items/lines to fill the available cross-axis space
    #[default]
    Stretch,
}

/// Per-item override of the container's `align-items`. `None` means "inherit
/// from the parent's `align-items`" — modeled here as `Option::None` rather
/// than a dedicated `Auto` variant, since an `Option<AlignItems>` is what
/// every call site needs.
pub type AlignSelf = AlignItems;

/// Distribution of extra space between/around flex lines on the cross axis.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlignContent {
    /// Pack lines toward the start of the cross axis
    #[default]
    FlexStart,
    /// Pack lines toward the end of the cross axis
    FlexEnd,
    /// Center lines within the available cross-axis space
    Center,
    /// Stretch lines to fill the available cross-axis space
    Stretch,
    /// Distribute lines with equal space between them, none at the edges
    SpaceBetween,
    /// Distribute lines with equal space around each line (half-space at the edges)
    SpaceAround,
    /// Distribute lines with exactly equal space between and around them
    SpaceEvenly,
}

/// Distribution of extra free space among items along the main axis.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum JustifyContent {
    /// Pack items toward the start of the main axis
    #[default]
    FlexStart,
    /// Pack items toward the end of the main axis
    FlexEnd,
    /// Center items within the available main-axis space
    Center,
    /// Distribute items with equal space between them, none at the edges
    SpaceBetween,
    /// Distribute items with equal space around each item (half-space at the edges)
    SpaceAround,
    /// Distribute items with exactly equal space between and around them
    SpaceEvenly,
}

/// Text/box flow direction: `Start`/`End` resolve against this. `Inherit`
/// takes the nearest ancestor's resolved direction, or LTR at the root.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Inherit the resolved direction from the parent (LTR at the root)
    #[default]
    Inherit,
    /// Left-to-right
    Ltr,
    /// Right-to-left
    Rtl,
}

/// A definite size, or one of the two intrinsic-sizing modes a measure
/// callback or the flex solver can be invoked under, folded here into one
/// tagged type instead of a size/mode pair. `MinContent` is required so
/// intrinsic *minimum* sizing queries (used to honor `overflow: visible`'s
/// content-based automatic minimum) are distinguishable from a max-content
/// query.
///
/// This is a dedicated sentinel in place of raw `NaN`: two
/// `AvailableSpace::MaxContent` queries compare equal via `PartialEq`, so
/// cache lookups never depend on float bit patterns.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AvailableSpace {
    /// A definite, known amount of space
    Definite(f32),
    /// Size to the item's content as if it had infinite available space
    MaxContent,
    /// Size to the item's content as if it had to fit the smallest possible space
    MinContent,
}
impl AvailableSpace {
    /// `Some(value)` for `Definite`, `None` otherwise
    pub fn into_option(self) -> Option<f32> {
        match self {
            Self::Definite(value) => Some(value),
            _ => None,
        }
    }
    /// True if `self` is `Definite`
    pub fn is_definite(self) -> bool {
        matches!(self, Self::Definite(_))
    }
}
impl From<f32> for AvailableSpace {
    fn from(value: f32) -> Self {
        Self::Definite(value)
    }
}
impl From<Option<f32>> for AvailableSpace {
    fn from(value: Option<f32>) -> Self {
        match value {
            Some(value) => Self::Definite(value),
            None => Self::MaxContent,
        }
    }
}

/// A pure function computing a leaf node's intrinsic content size, given
/// known dimensions (if any) and the available space under which it's being
/// measured. Boxed so it can close over consumer state (e.g. a text
/// shaper); the engine never inspects its internals, only ever calls it and
/// caches the result.
pub type MeasureFunc = Box<dyn Fn(Size<Option<f32>>, Size<AvailableSpace>) -> Size<f32>>;

/// A function computing a node's baseline offset from its own content.
/// Defaults, when unset, to the node's outer bottom edge.
pub type BaselineFunc = Box<dyn Fn(Size<f32>) -> f32>;

/// The full styled description of a node.
///
/// Does not include the measure/baseline callbacks — those are stored
/// separately per node (see [`crate::tree::taffy_tree::TaffyTree`]) so that
/// `Style` stays `Clone`/`PartialEq`/`Debug` and, behind the `serde`
/// feature, `Serialize`/`Deserialize`.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    /// What layout strategy this node's children (if any) are laid out with
    pub display: Display,
    /// Whether this node is in-flow or taken out and positioned via `inset`
    pub position: Position,
    /// How content that overflows this node's box is handled
    pub overflow: Point2<Overflow>,
    /// Width reserved for a scrollbar gutter when `overflow` is `Scroll`
    pub scrollbar_width: f32,

    /// The direction flex items are laid out in
    pub flex_direction: FlexDirection,
    /// Whether flex items are forced onto one line or may wrap
    pub flex_wrap: FlexWrap,
    /// This item's growth factor, relative to its siblings
    pub flex_grow: f32,
    /// This item's shrink factor, relative to its siblings
    pub flex_shrink: f32,
    /// This item's flex-basis
    pub flex_basis: Dimension,

    /// This container's cross-axis alignment of its items, unless overridden per-item
    pub align_items: Option<AlignItems>,
    /// This item's override of its parent's `align_items`
    pub align_self: Option<AlignSelf>,
    /// This container's distribution of lines along the cross axis
    pub align_content: Option<AlignContent>,
    /// This container's distribution of items along the main axis
    pub justify_content: Option<JustifyContent>,

    /// The preferred width/height of this node
    pub size: Size<Dimension>,
    /// The minimum width/height of this node
    pub min_size: Size<Dimension>,
    /// The maximum width/height of this node
    pub max_size: Size<Dimension>,
    /// A preferred aspect ratio (`width / height`) for this node
    pub aspect_ratio: Option<f32>,

    /// Outer spacing, subtracted from this node's size contribution but not
    /// participating in background/border painting
    pub margin: Rect<LengthPercentageAuto>,
    /// Inner spacing, inside the border, that the content box is inset by
    pub padding: Rect<LengthPercentage>,
    /// The border widths, inset like padding but with no unit/percentage variant
    pub border: Rect<LengthPercentage>,
    /// Offsets used to position an absolutely-positioned node; ignored for in-flow nodes
    pub inset: Rect<LengthPercentageAuto>,
    /// The gap between rows/columns of flex items
    pub gap: crate::geometry::Gutter<LengthPercentage>,

    /// This node's flow direction; `Inherit` takes the parent's resolved direction
    pub direction: Direction,
}

/// A minimal `x`/`y` pair, used only for `overflow` (which is per-axis, not
/// per-edge, unlike margin/padding/border/inset).
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2<T> {
    /// The horizontal-axis value
    pub x: T,
    /// The vertical-axis value
    pub y: T,
}
impl<T: Clone> Point2<T> {
    /// Applies `f` to both fields, returning a `Point2` of the results
    pub fn map<R>(self, f: impl Fn(T) -> R) -> Point2<R> {
        Point2 { x: f(self.x), y: f(self.y) }
    }
    /// Swaps the horizontal/vertical roles of the two fields (used for
    /// scrollbar-gutter transposition)
    pub fn transpose(self) -> Point2<T> {
        Point2 { x: self.y, y: self.x }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self {
            display: Display::Flex,
            position: Position::Relative,
            overflow: Point2::default(),
            scrollbar_width: 0.0,

            flex_direction: FlexDirection::Column,
            flex_wrap: FlexWrap::NoWrap,
            flex_grow: 0.0,
            // Divergence from the CSS default of 1, matching Yoga for API
            // compatibility.
            flex_shrink: 0.0,
            flex_basis: Dimension::Auto,

            align_items: None,
            align_self: None,
            align_content: None,
            justify_content: None,

            size: Size { width: Dimension::Auto, height: Dimension::Auto },
            min_size: Size { width: Dimension::Auto, height: Dimension::Auto },
            max_size: Size { width: Dimension::Auto, height: Dimension::Auto },
            aspect_ratio: None,

            margin: Rect {
                left: LengthPercentageAuto::ZERO,
                right: LengthPercentageAuto::ZERO,
                top: LengthPercentageAuto::ZERO,
                bottom: LengthPercentageAuto::ZERO,
            },
            padding: Rect::default_lp(),
            border: Rect::default_lp(),
            inset: Rect {
                left: LengthPercentageAuto::Auto,
                right: LengthPercentageAuto::Auto,
                top: LengthPercentageAuto::Auto,
                bottom: LengthPercentageAuto::Auto,
            },
            gap: crate::geometry::Gutter { row: LengthPercentage::Length(0.0), column: LengthPercentage::Length(0.0) },

            direction: Direction::Inherit,
        }
    }
}

impl Rect<LengthPercentage> {
    /// A zeroed `Rect<LengthPercentage>`, used for the `padding`/`border` defaults
    fn default_lp() -> Self {
        Self {
            left: LengthPercentage::Length(0.0),
            right: LengthPercentage::Length(0.0),
            top: LengthPercentage::Length(0.0),
            bottom: LengthPercentage::Length(0.0),
        }
    }
}
