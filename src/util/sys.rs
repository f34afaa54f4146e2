//! Abstractions over `std`/`alloc` collections and float helpers that don't
//! require pulling in `num-traits` for a handful of free functions.

#[cfg(feature = "std")]
pub(crate) use std::vec::Vec;

#[cfg(not(feature = "std"))]
pub(crate) use alloc::vec::Vec;

/// The Vec implementation used to store a node's children and flex lines/items.
/// A fixed-capacity backstop isn't used here because trees in this crate's
/// target use case are shallow but can have unbounded fan-out (e.g. a
/// scrollable list of rows).
pub(crate) type ChildrenVec<T> = Vec<T>;

/// Returns the greater of two floats, treating NaN as `b`.
#[inline(always)]
pub(crate) fn f32_max(a: f32, b: f32) -> f32 {
    if a > b {
        a
    } else {
        b
    }
}

/// Returns the lesser of two floats, treating NaN as `b`.
#[inline(always)]
pub(crate) fn f32_min(a: f32, b: f32) -> f32 {
    if a < b {
        a
    } else {
        b
    }
}

/// Absolute value without pulling in `num-traits::Signed` for `f32` alone.
#[inline(always)]
pub(crate) fn abs(val: f32) -> f32 {
    if val < 0.0 {
        -val
    } else {
        val
    }
}

/// Rounds a float to the nearest integer, matching Yoga's point-grid
/// rounding behavior (default: whole units, since terminal cells have no
/// sub-unit granularity).
#[inline(always)]
pub(crate) fn round(val: f32) -> f32 {
    #[cfg(feature = "std")]
    {
        val.round()
    }
    #[cfg(not(feature = "std"))]
    {
        // `f32::round` requires libm without std; truncate-towards-nearest by hand.
        let floor = (val as i64) as f32;
        let diff = val - floor;
        if diff >= 0.5 {
            floor + 1.0
        } else if diff <= -0.5 {
            floor - 1.0
        } else {
            floor
        }
    }
}

/// A new `Vec` with the given capacity pre-reserved.
#[inline(always)]
pub(crate) fn new_vec_with_capacity<T>(capacity: usize) -> Vec<T> {
    Vec::with_capacity(capacity)
}
