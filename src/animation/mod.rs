//! Idle motion ("wobble") for drawn illustrations.
//!
//! Each wobble tick rolls a fresh random [`WobbleDelta`] per idle target,
//! composes it onto the target's current transform and hands the result
//! to a [`Tween`]. Targets that drift past the buffered canvas edge are
//! wrapped around to the opposite side when `reEnter` is set.

pub mod delta;
pub mod overflow;
mod runner;
mod wobble;

pub use delta::{calculate_anim, WobbleDelta};
pub use overflow::{check_overflow, reset_if_overflowed, Overflow};
pub use runner::{lerp_affine, Tween};
pub use wobble::WobbleEngine;
