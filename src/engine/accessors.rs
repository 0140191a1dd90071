//! Read-only views and option updates for CabinetViewer

use super::CabinetViewer;
use crate::camera::Camera;
use crate::options::Options;
use crate::scene::CabinetScene;
use crate::view::{DoorSlide, LayoutMode, Orientation, ViewerState};

impl CabinetViewer {
    /// Current cabinet rotation.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.state.orientation
    }

    /// The camera as it will be drawn.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.state.rig.camera
    }

    /// Camera distance from the origin.
    #[must_use]
    pub fn camera_distance(&self) -> f32 {
        self.state.rig.distance()
    }

    /// Current layout.
    #[must_use]
    pub fn layout(&self) -> LayoutMode {
        self.state.layout()
    }

    /// Whether the exploded layout is showing.
    #[must_use]
    pub fn is_exploded(&self) -> bool {
        self.state.is_exploded()
    }

    /// Current door-slide state.
    #[must_use]
    pub fn door_slide(&self) -> DoorSlide {
        self.state.door_slide()
    }

    /// Full view state.
    #[must_use]
    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    /// The scene being driven.
    #[must_use]
    pub fn scene(&self) -> &CabinetScene {
        &self.scene
    }

    /// Last accepted viewport size.
    #[must_use]
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Active options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace the options. Orientation, zoom, layout and a pending door
    /// slide are kept; bounds are re-applied to them.
    pub fn set_options(&mut self, options: Options) {
        self.state.apply_options(&options);
        self.state.sync_orientation(&mut self.scene);
        self.options = options;
    }
}
