use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Logical canvas dimensions.
///
/// The canvas is scaled to fit the host display, so these are units rather
/// than pixels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Canvas", inline)]
#[serde(default, rename_all = "camelCase")]
pub struct CanvasOptions {
    /// Canvas width in units.
    #[schemars(title = "Width", range(min = 1.0))]
    pub width: f32,
    /// Canvas height in units.
    #[schemars(title = "Height", range(min = 1.0))]
    pub height: f32,
    /// Margin outside the canvas that random placement may use.
    #[schemars(title = "Placement Buffer", range(min = 0.0))]
    pub negative_buffer_space: f32,
}

impl Default for CanvasOptions {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 750.0,
            negative_buffer_space: 100.0,
        }
    }
}
