use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::clamp::{MAX_CAMERA_DISTANCE, MIN_CAMERA_DISTANCE};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection, zoom bounds and home pose.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 110.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Canonical camera position restored by "reset view".
    #[schemars(skip)]
    pub home_position: [f32; 3],
    /// Closest allowed distance from the origin.
    #[schemars(title = "Min Distance", range(min = 0.5, max = 10.0), extend("step" = 0.5))]
    pub min_distance: f32,
    /// Farthest allowed distance from the origin.
    #[schemars(title = "Max Distance", range(min = 5.0, max = 50.0), extend("step" = 0.5))]
    pub max_distance: f32,
    /// Position multiplier applied by "zoom in" and wheel-up.
    #[schemars(skip)]
    pub zoom_in_factor: f32,
    /// Position multiplier applied by "zoom out" and wheel-down.
    #[schemars(skip)]
    pub zoom_out_factor: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 75.0,
            znear: 0.1,
            zfar: 1000.0,
            home_position: [4.0, 3.0, 4.0],
            min_distance: MIN_CAMERA_DISTANCE,
            max_distance: MAX_CAMERA_DISTANCE,
            zoom_in_factor: 0.9,
            zoom_out_factor: 1.1,
        }
    }
}
