//! View state: orientation, camera, layout and the door slide.
//!
//! [`ViewerState`] is the single owner of every mutable transform the
//! viewer drives. The layout operations write part positions straight into
//! a [`CabinetScene`]; a part missing from the scene is skipped silently.
//! Layout mode and door slide are orthogonal: switching layouts never
//! touches the door, and showing the doors never changes the layout.

/// Sliding-door timer.
pub mod doors;
/// Assembled and exploded position tables.
pub mod layout;
/// Cabinet group rotation.
pub mod orientation;

use glam::Vec2;
use web_time::Instant;

pub use doors::{DoorSlide, DoorSlider};
pub use layout::{LayoutMode, LayoutTable, Part};
pub use orientation::Orientation;

use crate::camera::CameraRig;
use crate::options::Options;
use crate::scene::cabinet::{DOORS, LEFT_DOOR, RIGHT_DOOR};
use crate::scene::{CabinetScene, NodeId};
use crate::util::clamp::clamp_pitch;

/// Everything the user can change about how the cabinet is presented.
#[derive(Debug, Clone)]
pub struct ViewerState {
    /// Rotation of the cabinet group.
    pub orientation: Orientation,
    /// Orbit camera.
    pub rig: CameraRig,
    layout: LayoutMode,
    doors: DoorSlider,
    rotate_sensitivity: f32,
    pitch_limit: f32,
}

impl ViewerState {
    /// Fresh state: assembled, unrotated, camera at home.
    #[must_use]
    pub fn new(options: &Options, aspect: f32) -> Self {
        Self {
            orientation: Orientation::IDENTITY,
            rig: CameraRig::new(&options.camera, aspect),
            layout: LayoutMode::Assembled,
            doors: DoorSlider::new(&options.doors),
            rotate_sensitivity: options.interaction.rotate_sensitivity,
            pitch_limit: options.interaction.pitch_limit,
        }
    }

    /// Re-read tunables without resetting what the user has done.
    pub fn apply_options(&mut self, options: &Options) {
        self.rig.apply_options(&options.camera);
        self.doors.apply_options(&options.doors);
        self.rotate_sensitivity = options.interaction.rotate_sensitivity;
        self.pitch_limit = options.interaction.pitch_limit;
        self.orientation.pitch =
            clamp_pitch(self.orientation.pitch, self.pitch_limit);
    }

    /// Current layout.
    #[must_use]
    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    /// Whether the exploded layout is showing.
    #[must_use]
    pub fn is_exploded(&self) -> bool {
        self.layout == LayoutMode::Exploded
    }

    /// Current door-slide state.
    #[must_use]
    pub fn door_slide(&self) -> DoorSlide {
        self.doors.state()
    }

    /// Turn the cabinet by a drag of `delta` pixels.
    pub fn rotate(&mut self, delta: Vec2) {
        self.orientation
            .apply_drag(delta, self.rotate_sensitivity, self.pitch_limit);
    }

    /// Switch to the exploded layout. Re-applies positions if already
    /// exploded.
    pub fn show_exploded(&mut self, scene: &mut CabinetScene) {
        self.apply_layout(LayoutMode::Exploded, scene);
    }

    /// Switch to the assembled layout. Re-applies positions if already
    /// assembled.
    pub fn show_assembled(&mut self, scene: &mut CabinetScene) {
        self.apply_layout(LayoutMode::Assembled, scene);
    }

    fn apply_layout(&mut self, mode: LayoutMode, scene: &mut CabinetScene) {
        self.layout = mode;
        let mut missing = 0usize;
        for (part, position) in mode.table().iter() {
            if !scene.set_position_by_name(part.name(), position) {
                missing += 1;
            }
        }
        log::debug!("layout {mode:?} applied ({missing} parts missing)");
    }

    /// Slide the right door behind the left one; it returns to rest once
    /// the configured delay has elapsed and [`tick`](Self::tick) is called.
    ///
    /// Does nothing (and returns `false`) unless both doors are in the
    /// scene.
    pub fn show_doors(&mut self, scene: &mut CabinetScene, now: Instant) -> bool {
        let Some((_, right)) = door_pair(scene) else {
            log::trace!("doors not in scene; skipping slide");
            return false;
        };
        let offset = self.doors.start(now);
        set_door_x(scene, right, offset);
        true
    }

    /// Drop a pending door return, leaving the door where it is.
    pub fn cancel_door_slide(&mut self) -> bool {
        self.doors.cancel()
    }

    /// Zero the orientation and put the camera back at home. Layout and
    /// doors are untouched.
    pub fn reset_view(&mut self) {
        self.orientation.reset();
        self.rig.reset_pose();
    }

    /// Advance timers to `now`. Returns `true` if the door returned to
    /// rest during this call.
    pub fn tick(&mut self, scene: &mut CabinetScene, now: Instant) -> bool {
        let Some(offset) = self.doors.poll(now) else {
            return false;
        };
        if let Some((_, right)) = door_pair(scene) {
            set_door_x(scene, right, offset);
        }
        true
    }

    /// Push the orientation onto the scene's root group.
    pub fn sync_orientation(&self, scene: &mut CabinetScene) {
        let root = scene.root();
        let _ = scene.set_rotation(root, self.orientation.to_euler());
    }
}

/// Both sliding doors, looked up inside the doors group only.
fn door_pair(scene: &CabinetScene) -> Option<(NodeId, NodeId)> {
    let doors = scene.find(DOORS)?;
    Some((
        scene.find_in(doors, LEFT_DOOR)?,
        scene.find_in(doors, RIGHT_DOOR)?,
    ))
}

fn set_door_x(scene: &mut CabinetScene, door: NodeId, x: f32) {
    if let Some(node) = scene.node(door) {
        let mut position = node.position;
        position.x = x;
        let _ = scene.set_position(door, position);
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;
    use web_time::Duration;

    use super::*;
    use crate::scene::{build_cabinet, NodeSpec};

    fn setup() -> (ViewerState, CabinetScene) {
        (ViewerState::new(&Options::default(), 1.0), build_cabinet())
    }

    fn right_door_x(scene: &CabinetScene) -> f32 {
        scene.node_by_name(RIGHT_DOOR).unwrap().position.x
    }

    #[test]
    fn exploded_then_assembled_restores_every_part() {
        let (mut state, mut scene) = setup();
        state.show_exploded(&mut scene);
        state.show_exploded(&mut scene);
        state.show_assembled(&mut scene);
        state.show_exploded(&mut scene);
        state.show_assembled(&mut scene);
        for (part, position) in layout::ASSEMBLED.iter() {
            assert_eq!(scene.node_by_name(part.name()).unwrap().position, position);
        }
        assert_eq!(state.layout(), LayoutMode::Assembled);
    }

    #[test]
    fn exploded_writes_exploded_positions() {
        let (mut state, mut scene) = setup();
        state.show_exploded(&mut scene);
        assert!(state.is_exploded());
        for (part, position) in layout::EXPLODED.iter() {
            assert_eq!(scene.node_by_name(part.name()).unwrap().position, position);
        }
    }

    #[test]
    fn missing_parts_are_skipped() {
        let mut state = ViewerState::new(&Options::default(), 1.0);
        let mut scene = CabinetScene::new("cabinet");
        let _ = scene.add(
            scene.root(),
            NodeSpec::group().named("base").at(Vec3::ZERO),
        );
        state.show_exploded(&mut scene);
        assert_eq!(
            scene.node_by_name("base").unwrap().position,
            Vec3::new(0.0, -2.5, -1.0)
        );
        assert!(state.is_exploded());
    }

    #[test]
    fn doors_slide_then_return_after_delay() {
        let (mut state, mut scene) = setup();
        let t0 = Instant::now();
        assert!(state.show_doors(&mut scene, t0));
        assert_eq!(right_door_x(&scene), -0.1);
        assert!(!state.tick(&mut scene, t0 + Duration::from_millis(1000)));
        assert_eq!(right_door_x(&scene), -0.1);
        assert!(state.tick(&mut scene, t0 + Duration::from_millis(3000)));
        assert_eq!(right_door_x(&scene), 1.45);
    }

    #[test]
    fn doors_need_both_panels() {
        let mut state = ViewerState::new(&Options::default(), 1.0);
        let mut scene = CabinetScene::new("cabinet");
        let _ = scene.add(scene.root(), NodeSpec::group().named(RIGHT_DOOR));
        assert!(!state.show_doors(&mut scene, Instant::now()));
        assert_eq!(state.door_slide(), DoorSlide::Closed);
    }

    #[test]
    fn doors_outside_the_doors_group_are_not_slid() {
        let mut state = ViewerState::new(&Options::default(), 1.0);
        let mut scene = CabinetScene::new("cabinet");
        let root = scene.root();
        let _ = scene.add(root, NodeSpec::group().named(DOORS));
        let _ = scene.add(root, NodeSpec::group().named(LEFT_DOOR));
        let stray = scene
            .add(root, NodeSpec::group().named(RIGHT_DOOR).at(Vec3::X))
            .unwrap();
        assert!(!state.show_doors(&mut scene, Instant::now()));
        assert_eq!(scene.node(stray).unwrap().position, Vec3::X);
        assert_eq!(state.door_slide(), DoorSlide::Closed);
    }

    #[test]
    fn door_slide_survives_layout_changes() {
        let (mut state, mut scene) = setup();
        let t0 = Instant::now();
        let _ = state.show_doors(&mut scene, t0);
        state.show_exploded(&mut scene);
        state.reset_view();
        assert!(matches!(state.door_slide(), DoorSlide::Sliding { .. }));
        assert!(state.tick(&mut scene, t0 + Duration::from_secs(3)));
        assert_eq!(right_door_x(&scene), 1.45);
        assert!(state.is_exploded());
    }

    #[test]
    fn reset_view_restores_orientation_and_camera() {
        let (mut state, _) = setup();
        state.rotate(Vec2::new(500.0, -300.0));
        state.rig.zoom_in();
        state.reset_view();
        assert_eq!(state.orientation, Orientation::IDENTITY);
        assert_eq!(state.rig.camera.eye, Vec3::new(4.0, 3.0, 4.0));
        assert_eq!(state.rig.camera.target, Vec3::ZERO);
    }

    #[test]
    fn sync_orientation_rotates_root() {
        let (mut state, mut scene) = setup();
        state.rotate(Vec2::new(100.0, 50.0));
        state.sync_orientation(&mut scene);
        let root = scene.node(scene.root()).unwrap();
        assert!(root.rotation.abs_diff_eq(Vec3::new(0.5, 1.0, 0.0), 1e-6));
    }
}
