use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::animation::AnimSettings;
use super::merge::merge;
use crate::error::DriftError;

/// Canvas background: `false` for none, or a fill string (a `#` color or a
/// gradient spec).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(untagged)]
pub enum Background {
    /// `false` disables the background. `true` is accepted but carries no
    /// fill, so it draws nothing either.
    Toggle(bool),
    /// Fill for the full-canvas background rect.
    Fill(String),
}

impl Background {
    /// The fill to draw, if any.
    #[must_use]
    pub fn fill(&self) -> Option<&str> {
        match self {
            Self::Fill(fill) if !fill.is_empty() => Some(fill),
            _ => None,
        }
    }
}

impl Default for Background {
    fn default() -> Self {
        Self::Toggle(false)
    }
}

/// Settings applied to an illustration when its config entry leaves them
/// out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ObjectSettings {
    /// Scale unit.
    pub em: f32,
    /// Fill string.
    pub background: String,
    /// Idle motion settings.
    pub animation: AnimSettings,
}

impl Default for ObjectSettings {
    fn default() -> Self {
        Self {
            em: 1.0,
            background: "#000".to_owned(),
            animation: AnimSettings::default(),
        }
    }
}

/// Process-wide render settings, fixed once the stage is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Render", inline)]
#[serde(rename_all = "camelCase")]
pub struct RenderConfig {
    /// Run the idle-motion timer.
    pub wobble: bool,
    /// Milliseconds between wobble ticks.
    pub wobble_interval_ms: u64,
    /// Canvas background.
    pub background: Background,
    /// Fallbacks for every illustration entry.
    pub default_object_settings: ObjectSettings,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            wobble: false,
            wobble_interval_ms: 2000,
            background: Background::default(),
            default_object_settings: ObjectSettings::default(),
        }
    }
}

impl RenderConfig {
    /// Build from a user-supplied partial `renderConfig`, merged over the
    /// defaults. Unknown keys are ignored.
    pub fn from_overrides(overrides: &Value) -> Result<Self, DriftError> {
        let base = serde_json::to_value(Self::default())?;
        Ok(serde_json::from_value(merge(overrides, &base))?)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_overrides_give_defaults() {
        let config = RenderConfig::from_overrides(&Value::Null).unwrap();
        assert_eq!(config, RenderConfig::default());
    }

    #[test]
    fn nested_default_animation_is_merged() {
        let config = RenderConfig::from_overrides(&json!({
            "wobble": true,
            "background": "l(0, 0, 1, 1)#fff-#000",
            "defaultObjectSettings": {
                "animation": { "pulse": true, "scaling": { "max": 1.2 } }
            }
        }))
        .unwrap();
        assert!(config.wobble);
        assert_eq!(config.wobble_interval_ms, 2000);
        assert_eq!(config.background.fill(), Some("l(0, 0, 1, 1)#fff-#000"));
        let anim = &config.default_object_settings.animation;
        assert!(anim.pulse);
        assert_eq!(anim.scaling.min, 0.95);
        assert_eq!(anim.scaling.max, 1.2);
        assert_eq!(config.default_object_settings.em, 1.0);
    }

    #[test]
    fn background_toggle_has_no_fill() {
        assert_eq!(Background::Toggle(false).fill(), None);
        assert_eq!(Background::Toggle(true).fill(), None);
        assert_eq!(Background::Fill("#123".to_owned()).fill(), Some("#123"));
    }
}
