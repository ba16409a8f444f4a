//! Per-tick randomized transform deltas.

use glam::{Affine2, Vec2};
use rand::Rng;
use web_time::Duration;

use crate::options::{AnimSettings, Scaling};

/// Shortest and longest base tween duration, in milliseconds, before
/// `speedFactor` is applied.
const BASE_DURATION_MS: (f32, f32) = (200.0, 700.0);

/// One wobble: a relative transform and how long to take applying it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WobbleDelta {
    /// Horizontal step.
    pub x: f32,
    /// Vertical step.
    pub y: f32,
    /// Rotation step in degrees.
    pub r: f32,
    /// Scale factor.
    pub s: f32,
    /// Tween duration.
    pub duration: Duration,
}

impl WobbleDelta {
    /// Compose onto `current`: translate, then rotate, then scale, all in
    /// the element's local frame.
    #[must_use]
    pub fn apply(&self, current: Affine2) -> Affine2 {
        current
            * Affine2::from_translation(Vec2::new(self.x, self.y))
            * Affine2::from_angle(self.r.to_radians())
            * Affine2::from_scale(Vec2::splat(self.s))
    }
}

/// Roll the trigger and, if it fires, draw a fresh delta.
///
/// The trigger probability is `restlessness / 2`. Disabled channels stay
/// neutral (no translation, no rotation, scale 1).
pub fn calculate_anim<R: Rng + ?Sized>(
    settings: &AnimSettings,
    rng: &mut R,
) -> Option<WobbleDelta> {
    if rng.random::<f32>() >= settings.restlessness / 2.0 {
        return None;
    }

    let intensity = settings.intensity;
    let tendency = settings.tendency;

    let (x, y) = if settings.movement {
        let x = biased_step(tendency.x, intensity, rng);
        let y = biased_step(tendency.y, intensity, rng);
        (x, y)
    } else {
        (0.0, 0.0)
    };

    let r = if settings.rotate {
        biased_step(tendency.r, intensity, rng)
    } else {
        0.0
    };

    let s = if settings.pulse {
        let Scaling { min, max } = settings.scaling;
        rng.random::<f32>() * (max - min) + min
    } else {
        1.0
    };

    let (shortest, longest) = BASE_DURATION_MS;
    let millis = settings.speed_factor
        * (rng.random::<f32>() * (longest - shortest) + shortest);
    let duration =
        Duration::try_from_secs_f32(millis.max(0.0) / 1000.0).unwrap_or_default();

    Some(WobbleDelta {
        x,
        y,
        r,
        s,
        duration,
    })
}

/// A biased axis draws from `[0, tendency * intensity)`. An unbiased axis
/// flips a coin for the sign and draws a magnitude below `intensity`.
fn biased_step<R: Rng + ?Sized>(tendency: f32, intensity: f32, rng: &mut R) -> f32 {
    if tendency != 0.0 {
        return rng.random::<f32>() * tendency * intensity;
    }
    if rng.random_bool(0.5) {
        -rng.random::<f32>() * intensity
    } else {
        rng.random::<f32>() * intensity
    }
}
