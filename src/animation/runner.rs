//! Tween runner: drives one transform animation to completion.

use glam::{Affine2, Mat2};
use web_time::{Duration, Instant};

use crate::scene::AnimTarget;
use crate::surface::NodeId;
use crate::util::easing::EasingFunction;

/// Element-wise linear interpolation between two affine transforms.
#[must_use]
pub fn lerp_affine(from: &Affine2, to: &Affine2, t: f32) -> Affine2 {
    Affine2 {
        matrix2: Mat2::from_cols(
            from.matrix2.x_axis.lerp(to.matrix2.x_axis, t),
            from.matrix2.y_axis.lerp(to.matrix2.y_axis, t),
        ),
        translation: from.translation.lerp(to.translation, t),
    }
}

/// A transform animation in flight.
///
/// There is no way to cancel a tween: it always runs to its target.
#[derive(Debug, Clone)]
pub struct Tween {
    /// Registry slot that owns the animating flag.
    pub(crate) target: AnimTarget,
    /// Surface node being transformed.
    pub(crate) node: NodeId,
    /// When the tween started.
    start_time: Instant,
    /// Total duration.
    duration: Duration,
    /// Curve applied to progress.
    easing: EasingFunction,
    /// Transform at the start.
    from: Affine2,
    /// Transform at completion.
    to: Affine2,
}

impl Tween {
    /// Tween `node` from `from` to `to`, starting at `start_time`.
    #[must_use]
    pub fn new(
        target: AnimTarget,
        node: NodeId,
        (from, to): (Affine2, Affine2),
        duration: Duration,
        easing: EasingFunction,
        start_time: Instant,
    ) -> Self {
        Self {
            target,
            node,
            start_time,
            duration,
            easing,
            from,
            to,
        }
    }

    /// Normalized progress (0.0 to 1.0).
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.start_time);
        if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        }
    }

    /// Whether the tween has reached its target.
    #[must_use]
    pub fn is_complete(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Transform at `now`. Exactly the target once complete.
    #[must_use]
    pub fn sample(&self, now: Instant) -> Affine2 {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.to;
        }
        lerp_affine(&self.from, &self.to, self.easing.evaluate(t))
    }

    /// Target transform.
    #[must_use]
    pub fn destination(&self) -> Affine2 {
        self.to
    }
}
