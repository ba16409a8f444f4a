//! Shared utilities: easing curves and the wobble tick timer.

pub mod easing;
pub mod tick_timer;
