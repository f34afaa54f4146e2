//! Small internal helpers shared by the style resolver and layout algorithms.
//! Nothing in this module is part of the public API.

pub(crate) mod resolve;
pub(crate) mod sys;

#[cfg(feature = "debug")]
pub(crate) mod debug;

pub(crate) use resolve::{MaybeApplyAspectRatio, MaybeMath, MaybeResolve, ResolveOrZero};
