//! Stage configuration with JSON and TOML support.
//!
//! A config has four sections: `canvas` (logical size and placement
//! buffer), `debug`, `renderConfig` (timer, background and per-object
//! defaults) and `illuConfig` (the illustrations to draw). `renderConfig`
//! may be partial: it is merged over the defaults with [`merge`] before
//! being typed. `illuConfig` entries are taken as written.

mod animation;
mod canvas;
mod debug;
mod illustration;
pub mod merge;
mod render;

use std::path::Path;

pub use animation::{AnimSettings, Scaling, Tendency};
pub use canvas::CanvasOptions;
pub use debug::DebugOptions;
pub use illustration::{
    find_entry, AnimationSetting, IllustrationEntry, PartialPlacement,
    RAW_TYPE,
};
pub use merge::merge;
pub use render::{Background, ObjectSettings, RenderConfig};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::DriftError;

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, PartialEq, Default, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Logical canvas size and placement buffer.
    pub canvas: CanvasOptions,
    /// Diagnostic toggles.
    pub debug: DebugOptions,
    /// Render settings, merged over the defaults.
    pub render_config: RenderConfig,
    /// Illustrations to draw.
    pub illu_config: Vec<IllustrationEntry>,
}

/// Wire form of [`Config`], before `renderConfig` is merged.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConfig {
    #[serde(default)]
    canvas: CanvasOptions,
    #[serde(default)]
    debug: DebugOptions,
    #[serde(default)]
    render_config: Value,
    #[serde(default)]
    illu_config: Vec<IllustrationEntry>,
}

impl TryFrom<RawConfig> for Config {
    type Error = DriftError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        Ok(Self {
            canvas: raw.canvas,
            debug: raw.debug,
            render_config: RenderConfig::from_overrides(&raw.render_config)?,
            illu_config: raw.illu_config,
        })
    }
}

impl<'de> Deserialize<'de> for Config {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        let raw = RawConfig::deserialize(deserializer)?;
        Self::try_from(raw).map_err(serde::de::Error::custom)
    }
}

impl Config {
    /// Generate JSON Schema describing the config.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Parse a JSON config.
    pub fn from_json_str(content: &str) -> Result<Self, DriftError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parse a TOML config.
    pub fn from_toml_str(content: &str) -> Result<Self, DriftError> {
        toml::from_str(content)
            .map_err(|e| DriftError::ConfigParse(e.to_string()))
    }

    /// Load a config file. `.json` files are parsed as JSON, everything
    /// else as TOML.
    pub fn load(path: &Path) -> Result<Self, DriftError> {
        let content = std::fs::read_to_string(path).map_err(DriftError::Io)?;
        if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    /// Save the config as pretty-printed TOML.
    pub fn save(&self, path: &Path) -> Result<(), DriftError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| DriftError::ConfigParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(DriftError::Io)?;
        }
        std::fs::write(path, content).map_err(DriftError::Io)
    }
}
