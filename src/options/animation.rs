use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::merge::merge;
use crate::error::DriftError;
use crate::util::easing::EasingFunction;

/// Directional bias per axis. Zero means unbiased, symmetric jitter; the
/// sign picks the direction and the magnitude scales the step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
pub struct Tendency {
    /// Horizontal bias.
    pub x: f32,
    /// Vertical bias.
    pub y: f32,
    /// Rotational bias.
    pub r: f32,
}

/// Scale range for pulsing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct Scaling {
    /// Lower bound (inclusive).
    pub min: f32,
    /// Upper bound (exclusive).
    pub max: f32,
}

impl Default for Scaling {
    fn default() -> Self {
        Self {
            min: 0.95,
            max: 1.05,
        }
    }
}

/// Idle motion settings for one illustration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct AnimSettings {
    /// Wrap to the opposite edge after drifting past the buffered bounds.
    pub re_enter: bool,
    /// Randomly rescale within [`Scaling`] on each wobble.
    pub pulse: bool,
    /// Translate on each wobble.
    #[serde(rename = "move")]
    pub movement: bool,
    /// Rotate on each wobble.
    pub rotate: bool,
    /// Curve used for every wobble tween.
    pub easing_curve: EasingFunction,
    /// Trigger probability per tick, doubled (1 is a coin flip).
    #[schemars(range(min = 0.0, max = 2.0))]
    pub restlessness: f32,
    /// Multiplier on the randomized tween duration.
    pub speed_factor: f32,
    /// Upper bound on the per-tick step.
    pub intensity: f32,
    /// Directional bias.
    pub tendency: Tendency,
    /// Margin past the canvas edge before re-entry kicks in.
    pub negative_buffer_space: f32,
    /// Pulse range.
    pub scaling: Scaling,
}

impl Default for AnimSettings {
    fn default() -> Self {
        Self {
            re_enter: false,
            pulse: false,
            movement: true,
            rotate: false,
            easing_curve: EasingFunction::EaseInOut,
            restlessness: 1.0,
            speed_factor: 7.0,
            intensity: 10.0,
            tendency: Tendency::default(),
            negative_buffer_space: 100.0,
            scaling: Scaling::default(),
        }
    }
}

impl AnimSettings {
    /// Merge a partial settings object over `self`, field by field.
    pub fn merged_with(&self, overrides: &Value) -> Result<Self, DriftError> {
        let base = serde_json::to_value(self)?;
        Ok(serde_json::from_value(merge(overrides, &base))?)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn partial_overrides_keep_remaining_defaults() {
        let defaults = AnimSettings::default();
        let merged = defaults
            .merged_with(&json!({
                "rotate": true,
                "tendency": { "x": 2 },
                "easingCurve": "mina.bounce"
            }))
            .unwrap();
        assert!(merged.rotate);
        assert!(merged.movement);
        assert_eq!(merged.tendency, Tendency { x: 2.0, y: 0.0, r: 0.0 });
        assert_eq!(merged.easing_curve, EasingFunction::Bounce);
        assert_eq!(merged.intensity, 10.0);
    }

    #[test]
    fn move_field_uses_its_config_name() {
        let value = serde_json::to_value(AnimSettings::default()).unwrap();
        assert_eq!(value["move"], json!(true));
        assert!(value.get("movement").is_none());
    }

    #[test]
    fn wrongly_typed_override_is_an_error() {
        let result = AnimSettings::default()
            .merged_with(&json!({ "intensity": "lots" }));
        assert!(matches!(result, Err(DriftError::ConfigParse(_))));
    }
}
