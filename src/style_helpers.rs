//! Ergonomic constructor helpers for style values, so consumers can write
//! `length(10.0)` / `percent(0.5)` / `auto()` instead of spelling out enum
//! variants.

use crate::geometry::Size;
use crate::style::AvailableSpace;

/// A type that has a zero value, used as the additive identity for lengths.
pub trait TaffyZero {
    /// The zero value for this type
    const ZERO: Self;
}

/// A type that has an "auto" value (content-driven sizing).
pub trait TaffyAuto {
    /// The "auto" value for this type
    const AUTO: Self;
}

/// A type that has a "min-content" value.
pub trait TaffyMinContent {
    /// The "min-content" value for this type
    const MIN_CONTENT: Self;
}

/// A type that has a "max-content" value.
pub trait TaffyMaxContent {
    /// The "max-content" value for this type
    const MAX_CONTENT: Self;
}

/// A type that can be constructed from an absolute length.
pub trait FromLength {
    /// Construct `Self` from an absolute length
    fn from_length<Input: Into<f32> + Copy>(value: Input) -> Self;
}

/// A type that can be constructed from a percentage (expressed as a fraction, e.g. `0.5` = 50%).
pub trait FromPercent {
    /// Construct `Self` from a percentage fraction
    fn from_percent<Input: Into<f32> + Copy>(percent: Input) -> Self;
}

/// Constructs an absolute-length value of the target type.
pub fn length<Input: Into<f32> + Copy, T: FromLength>(value: Input) -> T {
    T::from_length(value)
}

/// Constructs a percentage value (as a fraction) of the target type.
pub fn percent<Input: Into<f32> + Copy, T: FromPercent>(percent: Input) -> T {
    T::from_percent(percent)
}

/// Constructs the "auto" value of the target type.
pub fn auto<T: TaffyAuto>() -> T {
    T::AUTO
}

/// Constructs the zero value of the target type.
pub fn zero<T: TaffyZero>() -> T {
    T::ZERO
}

impl TaffyMaxContent for AvailableSpace {
    const MAX_CONTENT: Self = Self::MaxContent;
}
impl TaffyMinContent for AvailableSpace {
    const MIN_CONTENT: Self = Self::MinContent;
}
impl TaffyMaxContent for Size<AvailableSpace> {
    const MAX_CONTENT: Self = Self { width: AvailableSpace::MaxContent, height: AvailableSpace::MaxContent };
}
impl TaffyMinContent for Size<AvailableSpace> {
    const MIN_CONTENT: Self = Self { width: AvailableSpace::MinContent, height: AvailableSpace::MinContent };
}
