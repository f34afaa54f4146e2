//! Traits for resolving styled values against a containing block, and for
//! doing arithmetic on `Option<f32>`/[`AvailableSpace`] without a thicket of
//! `match` at every call site.

use crate::geometry::{Rect, Size};
use crate::style::dimension::{Dimension, LengthPercentage, LengthPercentageAuto};
use crate::style::AvailableSpace;
use crate::util::sys::{f32_max, f32_min};

/// Resolves `Self` against a reference context, producing `Option<f32>` —
/// `None` means "auto"/"undefined".
pub(crate) trait MaybeResolve<In, Out> {
    /// Resolve `self` against `context`
    fn maybe_resolve(self, context: In) -> Out;
}

impl MaybeResolve<Option<f32>, Option<f32>> for Dimension {
    fn maybe_resolve(self, context: Option<f32>) -> Option<f32> {
        match self {
            Dimension::Length(len) => Some(len),
            Dimension::Percent(pct) => context.map(|ctx| ctx * pct),
            Dimension::Auto => None,
        }
    }
}

impl MaybeResolve<Option<f32>, Option<f32>> for LengthPercentage {
    fn maybe_resolve(self, context: Option<f32>) -> Option<f32> {
        match self {
            LengthPercentage::Length(len) => Some(len),
            LengthPercentage::Percent(pct) => context.map(|ctx| ctx * pct),
        }
    }
}

impl MaybeResolve<Option<f32>, Option<f32>> for LengthPercentageAuto {
    fn maybe_resolve(self, context: Option<f32>) -> Option<f32> {
        match self {
            LengthPercentageAuto::Length(len) => Some(len),
            LengthPercentageAuto::Percent(pct) => context.map(|ctx| ctx * pct),
            LengthPercentageAuto::Auto => None,
        }
    }
}

impl MaybeResolve<Size<Option<f32>>, Size<Option<f32>>> for Size<Dimension> {
    fn maybe_resolve(self, context: Size<Option<f32>>) -> Size<Option<f32>> {
        Size { width: self.width.maybe_resolve(context.width), height: self.height.maybe_resolve(context.height) }
    }
}

/// Resolves `Self`, treating `Auto`/unresolvable percentages as zero rather
/// than `None`. Used for margin/padding/border, which always contribute a
/// concrete (possibly zero) offset to box geometry.
pub(crate) trait ResolveOrZero<In, Out> {
    /// Resolve `self` against `context`, defaulting to zero where unresolvable
    fn resolve_or_zero(self, context: In) -> Out;
}

impl ResolveOrZero<Option<f32>, f32> for LengthPercentageAuto {
    fn resolve_or_zero(self, context: Option<f32>) -> f32 {
        self.maybe_resolve(context).unwrap_or(0.0)
    }
}
impl ResolveOrZero<Option<f32>, f32> for LengthPercentage {
    fn resolve_or_zero(self, context: Option<f32>) -> f32 {
        self.maybe_resolve(context).unwrap_or(0.0)
    }
}
impl<In: Copy, Out: Default, T: ResolveOrZero<In, Out> + Copy> ResolveOrZero<In, Rect<Out>> for Rect<T> {
    fn resolve_or_zero(self, context: In) -> Rect<Out> {
        Rect {
            left: self.left.resolve_or_zero(context),
            right: self.right.resolve_or_zero(context),
            top: self.top.resolve_or_zero(context),
            bottom: self.bottom.resolve_or_zero(context),
        }
    }
}

/// Arithmetic over `Option<f32>` that propagates `None` ("auto"/"undefined")
/// rather than panicking or silently treating it as zero.
pub(crate) trait MaybeMath<In, Out> {
    /// `self + rhs`, `None` if either side is `None`
    fn maybe_add(self, rhs: In) -> Out;
    /// `self - rhs`, `None` if either side is `None`
    fn maybe_sub(self, rhs: In) -> Out;
    /// Clamp `self` between `min` and `max`, either of which may be absent.
    /// If `max < min`, `max` wins: min is applied first, then max, so an
    /// inverted pair collapses to `max` rather than `min`.
    fn maybe_clamp(self, min: In, max: In) -> Out;
    /// `self` if `Some` and greater, else `rhs`
    fn maybe_max(self, rhs: In) -> Out;
    /// `self` if `Some` and lesser, else `rhs`
    fn maybe_min(self, rhs: In) -> Out;
}

impl MaybeMath<Option<f32>, Option<f32>> for Option<f32> {
    fn maybe_add(self, rhs: Option<f32>) -> Option<f32> {
        match (self, rhs) {
            (Some(a), Some(b)) => Some(a + b),
            (Some(a), None) => Some(a),
            (None, Some(b)) => Some(b),
            (None, None) => None,
        }
    }
    fn maybe_sub(self, rhs: Option<f32>) -> Option<f32> {
        match (self, rhs) {
            (Some(a), Some(b)) => Some(a - b),
            (Some(a), None) => Some(a),
            (None, _) => None,
        }
    }
    fn maybe_clamp(self, min: Option<f32>, max: Option<f32>) -> Option<f32> {
        self.map(|val| {
            let mut val = val;
            if let Some(min) = min {
                val = f32_max(val, min);
            }
            if let Some(max) = max {
                val = f32_min(val, max);
            }
            val
        })
    }
    fn maybe_max(self, rhs: Option<f32>) -> Option<f32> {
        match (self, rhs) {
            (Some(a), Some(b)) => Some(f32_max(a, b)),
            (a, None) => a,
            (None, b) => b,
        }
    }
    fn maybe_min(self, rhs: Option<f32>) -> Option<f32> {
        match (self, rhs) {
            (Some(a), Some(b)) => Some(f32_min(a, b)),
            (a, None) => a,
            (None, b) => b,
        }
    }
}

impl MaybeMath<f32, f32> for f32 {
    fn maybe_add(self, rhs: f32) -> f32 {
        self + rhs
    }
    fn maybe_sub(self, rhs: f32) -> f32 {
        self - rhs
    }
    fn maybe_clamp(self, min: f32, max: f32) -> f32 {
        f32_min(f32_max(self, min), max)
    }
    fn maybe_max(self, rhs: f32) -> f32 {
        f32_max(self, rhs)
    }
    fn maybe_min(self, rhs: f32) -> f32 {
        f32_min(self, rhs)
    }
}

impl MaybeMath<Option<f32>, f32> for f32 {
    fn maybe_add(self, rhs: Option<f32>) -> f32 {
        rhs.map(|rhs| self + rhs).unwrap_or(self)
    }
    fn maybe_sub(self, rhs: Option<f32>) -> f32 {
        rhs.map(|rhs| self - rhs).unwrap_or(self)
    }
    fn maybe_clamp(self, min: Option<f32>, max: Option<f32>) -> f32 {
        let mut val = self;
        if let Some(min) = min {
            val = f32_max(val, min);
        }
        if let Some(max) = max {
            val = f32_min(val, max);
        }
        val
    }
    fn maybe_max(self, rhs: Option<f32>) -> f32 {
        rhs.map(|rhs| f32_max(self, rhs)).unwrap_or(self)
    }
    fn maybe_min(self, rhs: Option<f32>) -> f32 {
        rhs.map(|rhs| f32_min(self, rhs)).unwrap_or(self)
    }
}

impl<In: Copy, Out, T: MaybeMath<In, Out> + Copy> MaybeMath<Size<In>, Size<Out>> for Size<T> {
    fn maybe_add(self, rhs: Size<In>) -> Size<Out> {
        Size { width: self.width.maybe_add(rhs.width), height: self.height.maybe_add(rhs.height) }
    }
    fn maybe_sub(self, rhs: Size<In>) -> Size<Out> {
        Size { width: self.width.maybe_sub(rhs.width), height: self.height.maybe_sub(rhs.height) }
    }
    fn maybe_clamp(self, min: Size<In>, max: Size<In>) -> Size<Out> {
        Size { width: self.width.maybe_clamp(min.width, max.width), height: self.height.maybe_clamp(min.height, max.height) }
    }
    fn maybe_max(self, rhs: Size<In>) -> Size<Out> {
        Size { width: self.width.maybe_max(rhs.width), height: self.height.maybe_max(rhs.height) }
    }
    fn maybe_min(self, rhs: Size<In>) -> Size<Out> {
        Size { width: self.width.maybe_min(rhs.width), height: self.height.maybe_min(rhs.height) }
    }
}

impl MaybeMath<f32, AvailableSpace> for AvailableSpace {
    fn maybe_add(self, rhs: f32) -> AvailableSpace {
        match self {
            AvailableSpace::Definite(val) => AvailableSpace::Definite(val + rhs),
            other => other,
        }
    }
    fn maybe_sub(self, rhs: f32) -> AvailableSpace {
        match self {
            AvailableSpace::Definite(val) => AvailableSpace::Definite(val - rhs),
            other => other,
        }
    }
    fn maybe_clamp(self, min: f32, max: f32) -> AvailableSpace {
        match self {
            AvailableSpace::Definite(val) => AvailableSpace::Definite(val.maybe_clamp(min, max)),
            other => other,
        }
    }
    fn maybe_max(self, rhs: f32) -> AvailableSpace {
        match self {
            AvailableSpace::Definite(val) => AvailableSpace::Definite(f32_max(val, rhs)),
            other => other,
        }
    }
    fn maybe_min(self, rhs: f32) -> AvailableSpace {
        match self {
            AvailableSpace::Definite(val) => AvailableSpace::Definite(f32_min(val, rhs)),
            other => other,
        }
    }
}

impl MaybeMath<Option<f32>, AvailableSpace> for AvailableSpace {
    fn maybe_add(self, rhs: Option<f32>) -> AvailableSpace {
        match rhs {
            Some(rhs) => self.maybe_add(rhs),
            None => self,
        }
    }
    fn maybe_sub(self, rhs: Option<f32>) -> AvailableSpace {
        match rhs {
            Some(rhs) => self.maybe_sub(rhs),
            None => self,
        }
    }
    fn maybe_clamp(self, min: Option<f32>, max: Option<f32>) -> AvailableSpace {
        match self {
            AvailableSpace::Definite(val) => AvailableSpace::Definite(val.maybe_clamp(min, max)),
            other => other,
        }
    }
    fn maybe_max(self, rhs: Option<f32>) -> AvailableSpace {
        match rhs {
            Some(rhs) => self.maybe_max(rhs),
            None => self,
        }
    }
    fn maybe_min(self, rhs: Option<f32>) -> AvailableSpace {
        match rhs {
            Some(rhs) => self.maybe_min(rhs),
            None => self,
        }
    }
}

/// Applies an `aspect-ratio` style to a partially-known `Size`, deriving
/// whichever axis is unset from the axis that is set.
pub(crate) trait MaybeApplyAspectRatio {
    /// Derive the unset axis from the set one, given `aspect_ratio = width / height`
    fn maybe_apply_aspect_ratio(self, aspect_ratio: Option<f32>) -> Self;
}
impl MaybeApplyAspectRatio for Size<Option<f32>> {
    fn maybe_apply_aspect_ratio(self, aspect_ratio: Option<f32>) -> Self {
        match (aspect_ratio, self.width, self.height) {
            (Some(ratio), Some(width), None) => Size { width: Some(width), height: Some(width / ratio) },
            (Some(ratio), None, Some(height)) => Size { width: Some(height * ratio), height: Some(height) },
            _ => self,
        }
    }
}
