//! Easing curves for wobble tweens.
//!
//! The named curves follow the classic SVG animation helper set, so
//! configs written for it keep their feel. Config strings may carry the
//! `mina.` namespace prefix.

use std::f32::consts::PI;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

const BACK_OVERSHOOT: f32 = 1.701_58;

/// Easing function variants for tween curves.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    #[serde(alias = "mina.linear")]
    Linear,
    /// Slow start: `t^1.7`.
    #[serde(alias = "mina.easein")]
    EaseIn,
    /// Slow end: `t^0.48`.
    #[serde(alias = "mina.easeout")]
    EaseOut,
    /// Slow start and end (cubic-root solved bezier).
    #[default]
    #[serde(alias = "mina.easeinout")]
    EaseInOut,
    /// Pulls back before moving forward.
    #[serde(alias = "mina.backin")]
    BackIn,
    /// Overshoots the target then settles.
    #[serde(alias = "mina.backout")]
    BackOut,
    /// Decaying oscillation around the target.
    #[serde(alias = "mina.elastic")]
    Elastic,
    /// Bounces against the target.
    #[serde(alias = "mina.bounce")]
    Bounce,
}

impl EasingFunction {
    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0]. Every curve maps 0 to 0 and 1 to 1;
    /// the back/elastic curves may leave [0, 1] in between.
    #[must_use]
    pub fn evaluate(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::EaseIn => t.powf(1.7),
            Self::EaseOut => t.powf(0.48),
            Self::EaseInOut => ease_in_out(t),
            Self::BackIn => {
                if t == 1.0 {
                    return 1.0;
                }
                t * t * ((BACK_OVERSHOOT + 1.0) * t - BACK_OVERSHOOT)
            }
            Self::BackOut => {
                if t == 0.0 {
                    return 0.0;
                }
                let t = t - 1.0;
                t * t * ((BACK_OVERSHOOT + 1.0) * t + BACK_OVERSHOOT) + 1.0
            }
            Self::Elastic => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                2f32.powf(-10.0 * t) * ((t - 0.075) * (2.0 * PI) / 0.3).sin()
                    + 1.0
            }
            Self::Bounce => bounce(t),
        }
    }
}

fn ease_in_out(t: f32) -> f32 {
    if t == 1.0 {
        return 1.0;
    }
    let q = 0.48 - t / 1.04;
    let root = (0.1734 + q * q).sqrt();
    let x = (root - q).cbrt();
    let y = (-root - q).cbrt();
    let s = x + y + 0.5;
    (1.0 - s) * 3.0 * s * s + s * s * s
}

fn bounce(t: f32) -> f32 {
    const S: f32 = 7.5625;
    const P: f32 = 2.75;

    if t < 1.0 / P {
        S * t * t
    } else if t < 2.0 / P {
        let t = t - 1.5 / P;
        S * t * t + 0.75
    } else if t < 2.5 / P {
        let t = t - 2.25 / P;
        S * t * t + 0.9375
    } else {
        let t = t - 2.625 / P;
        S * t * t + 0.984_375
    }
}
