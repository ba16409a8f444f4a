use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Diagnostic toggles.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[schemars(title = "Debug", inline)]
#[serde(default)]
pub struct DebugOptions {
    /// Emit draw/tick diagnostics through `log`. When off, nothing is
    /// logged at all, including skipped entries.
    #[schemars(title = "Verbose")]
    pub verbose: bool,
}
