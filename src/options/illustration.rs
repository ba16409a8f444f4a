use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::animation::AnimSettings;
use crate::error::DriftError;

/// Type name of entries drawn straight from their `path`.
pub const RAW_TYPE: &str = "raw";

/// Position and rotation with every field optional. Missing fields are
/// filled from a random placement.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
pub struct PartialPlacement {
    /// Horizontal position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    /// Vertical position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
    /// Rotation in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r: Option<f32>,
}

/// Per-entry animation: `true`/`false` or a partial settings object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum AnimationSetting {
    /// `false` disables idle motion, `true` uses the defaults.
    Toggle(bool),
    /// Partial settings merged over the defaults.
    Custom(Map<String, Value>),
}

/// One illustration to draw.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IllustrationEntry {
    /// `"raw"` or the name of a registered shape constructor.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Logical name linking the drawn element back to this entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// SVG path data, required for raw entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Placement; missing fields are randomized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<PartialPlacement>,
    /// Fill string (`#` color or gradient spec).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Scale unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub em: Option<f32>,
    /// Idle motion. Absent means the default settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<AnimationSetting>,
}

impl IllustrationEntry {
    /// Whether this entry is drawn straight from its path.
    #[must_use]
    pub fn is_raw(&self) -> bool {
        self.kind.as_deref() == Some(RAW_TYPE)
    }

    /// Effective animation settings: `None` when disabled, otherwise the
    /// entry's settings merged over `defaults`.
    pub fn resolve_animation(
        &self,
        defaults: &AnimSettings,
    ) -> Result<Option<AnimSettings>, DriftError> {
        match &self.animation {
            Some(AnimationSetting::Toggle(false)) => Ok(None),
            None | Some(AnimationSetting::Toggle(true)) => {
                Ok(Some(defaults.clone()))
            }
            Some(AnimationSetting::Custom(partial)) => {
                let partial = Value::Object(partial.clone());
                defaults.merged_with(&partial).map(Some)
            }
        }
    }
}

/// First entry whose name is `name`. Config order decides name collisions.
#[must_use]
pub fn find_entry<'a>(
    entries: &'a [IllustrationEntry],
    name: &str,
) -> Option<&'a IllustrationEntry> {
    entries.iter().find(|e| e.name.as_deref() == Some(name))
}
