//! Generic geometric types: points, sizes, rects and lines, plus the small
//! set of axis-aware helpers the layout algorithms are built on.

use crate::style::{AvailableSpace, FlexDirection};
use core::ops::Add;

/// The axis that a size/length applies to, independent of flex direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AbsoluteAxis {
    /// The horizontal axis
    Horizontal,
    /// The vertical axis
    Vertical,
}
impl AbsoluteAxis {
    /// The opposite axis
    pub fn other_axis(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// An axis that a flex container lays its children along, tagged by role
/// rather than physical direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlexAxis {
    /// The axis flex items are placed along
    Main,
    /// The axis perpendicular to the main axis
    Cross,
}

/// A 2-dimensional coordinate.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point<T> {
    /// The x-coordinate
    pub x: T,
    /// The y-coordinate
    pub y: T,
}
impl Point<f32> {
    /// A point at the origin
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
}
impl<T> Point<T> {
    /// Applies `f` to both fields, returning a `Point` of the results
    pub fn map<R>(self, f: impl Fn(T) -> R) -> Point<R> {
        Point { x: f(self.x), y: f(self.y) }
    }
}

/// The width and height of a box.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size<T> {
    /// The width
    pub width: T,
    /// The height
    pub height: T,
}

impl Size<f32> {
    /// A size with zero width and height
    pub const ZERO: Self = Self { width: 0.0, height: 0.0 };

    /// The size as a [`Point`]
    pub fn as_point(self) -> Point<f32> {
        Point { x: self.width, y: self.height }
    }
}

impl Size<Option<f32>> {
    /// A size with neither dimension known
    pub const NONE: Self = Self { width: None, height: None };
}

impl Size<AvailableSpace> {
    /// An available space where both axes are [`AvailableSpace::MaxContent`]
    pub const MAX_CONTENT: Self = Self { width: AvailableSpace::MaxContent, height: AvailableSpace::MaxContent };
    /// An available space where both axes are [`AvailableSpace::MinContent`]
    pub const MIN_CONTENT: Self = Self { width: AvailableSpace::MinContent, height: AvailableSpace::MinContent };

    /// Converts to `Size<Option<f32>>`, discarding definite-ness information but keeping the value
    pub fn into_options(self) -> Size<Option<f32>> {
        Size { width: self.width.into_option(), height: self.height.into_option() }
    }
}

impl<T> Size<T> {
    /// Applies `f` to both `width` and `height`, returning a new `Size`
    pub fn map<R>(self, f: impl Fn(T) -> R) -> Size<R> {
        Size { width: f(self.width), height: f(self.height) }
    }

    /// Applies `f` only to `width`
    pub fn map_width<R>(self, f: impl Fn(T) -> R) -> Size<R>
    where
        T: Clone,
    {
        Size { width: f(self.width), height: self.height.clone() as R }
    }

    /// Combines two sizes field-wise with `f`
    pub fn zip_map<U, R>(self, other: Size<U>, f: impl Fn(T, U) -> R) -> Size<R> {
        Size { width: f(self.width, other.width), height: f(self.height, other.height) }
    }

    /// Gets the value for the named absolute axis
    pub fn get_abs(self, axis: AbsoluteAxis) -> T {
        match axis {
            AbsoluteAxis::Horizontal => self.width,
            AbsoluteAxis::Vertical => self.height,
        }
    }

    /// Gets the value for the main axis of a flex container with the given direction
    pub fn main(self, direction: FlexDirection) -> T {
        if direction.is_row() {
            self.width
        } else {
            self.height
        }
    }

    /// Gets the value for the cross axis of a flex container with the given direction
    pub fn cross(self, direction: FlexDirection) -> T {
        if direction.is_row() {
            self.height
        } else {
            self.width
        }
    }
}

impl<T: Clone> Size<T> {
    /// A `Size` with both fields set to `value`
    pub fn from_single(value: T) -> Self {
        Self { width: value.clone(), height: value }
    }
}

/// A rectangle, defined by its four edges.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect<T> {
    /// The left edge
    pub left: T,
    /// The right edge
    pub right: T,
    /// The top edge
    pub top: T,
    /// The bottom edge
    pub bottom: T,
}

impl Rect<f32> {
    /// A rect with all edges zero
    pub const ZERO: Self = Self { left: 0.0, right: 0.0, top: 0.0, bottom: 0.0 };

    /// The sum of the left and right edges
    pub fn horizontal_axis_sum(&self) -> f32 {
        self.left + self.right
    }
    /// The sum of the top and bottom edges
    pub fn vertical_axis_sum(&self) -> f32 {
        self.top + self.bottom
    }
    /// A `Size` containing the horizontal and vertical axis sums
    pub fn sum_axes(&self) -> Size<f32> {
        Size { width: self.horizontal_axis_sum(), height: self.vertical_axis_sum() }
    }
}

impl<T: Add<Output = T> + Copy> Add for Rect<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            left: self.left + rhs.left,
            right: self.right + rhs.right,
            top: self.top + rhs.top,
            bottom: self.bottom + rhs.bottom,
        }
    }
}

impl<T> Rect<T> {
    /// Applies `f` to all four edges
    pub fn map<R>(self, f: impl Fn(T) -> R) -> Rect<R> {
        Rect { left: f(self.left), right: f(self.right), top: f(self.top), bottom: f(self.bottom) }
    }

    /// Swaps the horizontal/vertical roles of this rect's edges (used for scrollbar-gutter transposition)
    pub fn transpose(self) -> Rect<T> {
        Rect { left: self.top, right: self.bottom, top: self.left, bottom: self.right }
    }
}

impl<T: Clone> Rect<T> {
    /// The leading edge for the given axis ("start" in flow order, before direction resolution)
    pub fn main_start(&self, direction: FlexDirection) -> T {
        if direction.is_row() {
            if direction.is_reverse() {
                self.right.clone()
            } else {
                self.left.clone()
            }
        } else if direction.is_reverse() {
            self.bottom.clone()
        } else {
            self.top.clone()
        }
    }
    /// The trailing edge for the main axis
    pub fn main_end(&self, direction: FlexDirection) -> T {
        if direction.is_row() {
            if direction.is_reverse() {
                self.left.clone()
            } else {
                self.right.clone()
            }
        } else if direction.is_reverse() {
            self.top.clone()
        } else {
            self.bottom.clone()
        }
    }
    /// The leading edge for the cross axis
    pub fn cross_start(&self, direction: FlexDirection) -> T {
        if direction.is_row() {
            self.top.clone()
        } else {
            self.left.clone()
        }
    }
    /// The trailing edge for the cross axis
    pub fn cross_end(&self, direction: FlexDirection) -> T {
        if direction.is_row() {
            self.bottom.clone()
        } else {
            self.right.clone()
        }
    }
}

/// A generic container holding a value for both a "start" and an "end", used
/// for line-relative values (gaps, booleans describing per-line state, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Line<T> {
    /// The value at the start
    pub start: T,
    /// The value at the end
    pub end: T,
}
impl Line<bool> {
    /// Neither end is set
    pub const FALSE: Self = Self { start: false, end: false };
    /// Both ends are set
    pub const TRUE: Self = Self { start: true, end: true };
}
impl<T> Line<T> {
    /// Applies `f` to both ends
    pub fn map<R>(self, f: impl Fn(T) -> R) -> Line<R> {
        Line { start: f(self.start), end: f(self.end) }
    }
}

/// The two gap gutters: the row gutter (between rows, i.e. gaps along the
/// block axis) and the column gutter (between columns, along the inline axis).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gutter<T> {
    /// The gap between rows
    pub row: T,
    /// The gap between columns
    pub column: T,
}
impl<T: Clone> Gutter<T> {
    /// The gap along the main axis for a flex container with the given direction
    pub fn main(&self, direction: FlexDirection) -> T {
        if direction.is_row() {
            self.column.clone()
        } else {
            self.row.clone()
        }
    }
    /// The gap along the cross axis for a flex container with the given direction
    pub fn cross(&self, direction: FlexDirection) -> T {
        if direction.is_row() {
            self.row.clone()
        } else {
            self.column.clone()
        }
    }
}
