use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::clamp::PITCH_LIMIT;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Interaction", inline)]
#[serde(default)]
/// Drag-to-rotate tuning.
pub struct InteractionOptions {
    /// Radians of rotation per pixel of drag.
    #[schemars(title = "Rotate Speed", range(min = 0.001, max = 0.05), extend("step" = 0.001))]
    pub rotate_sensitivity: f32,
    /// Symmetric bound on the cabinet's pitch, in radians.
    #[schemars(skip)]
    pub pitch_limit: f32,
}

impl Default for InteractionOptions {
    fn default() -> Self {
        Self {
            rotate_sensitivity: 0.01,
            pitch_limit: PITCH_LIMIT,
        }
    }
}
