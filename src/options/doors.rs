use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Doors", inline)]
#[serde(default)]
/// Sliding-door demonstration parameters.
pub struct DoorOptions {
    /// How long the right door stays slid behind the left one, in
    /// milliseconds.
    #[schemars(title = "Slide Hold (ms)", range(min = 0, max = 10000), extend("step" = 100))]
    pub slide_delay_ms: u64,
    /// Right-door x offset while slid behind the left door.
    #[schemars(skip)]
    pub slide_offset: f32,
    /// Right-door x offset at rest.
    #[schemars(skip)]
    pub open_offset: f32,
}

impl Default for DoorOptions {
    fn default() -> Self {
        Self {
            slide_delay_ms: 3000,
            slide_offset: -0.1,
            open_offset: 1.45,
        }
    }
}
