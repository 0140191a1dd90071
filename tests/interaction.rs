//! End-to-end interaction scenarios driven through `CabinetViewer`.

#![allow(clippy::unwrap_used)]

use glam::Vec3;
use vitrina::options::{CameraOptions, Options};
use vitrina::renderer::{Frame, LogRenderer};
use vitrina::scene::cabinet::{BASE, DOORS, RIGHT_DOOR};
use vitrina::view::{DoorSlide, LayoutMode};
use vitrina::{CabinetViewer, InputEvent, ViewerCommand};
use web_time::{Duration, Instant};

fn drag(viewer: &mut CabinetViewer, from: (f32, f32), to: (f32, f32)) {
    let _ = viewer.handle_input(InputEvent::PointerDown { x: from.0, y: from.1 });
    let _ = viewer.handle_input(InputEvent::PointerMove { x: to.0, y: to.1 });
    let _ = viewer.handle_input(InputEvent::PointerUp);
}

fn position_of(viewer: &CabinetViewer, name: &str) -> Vec3 {
    viewer.scene().node_by_name(name).unwrap().position
}

/// Viewer whose camera starts `distance` units straight out along +z.
fn viewer_at_distance(distance: f32) -> CabinetViewer {
    let options = Options {
        camera: CameraOptions {
            home_position: [0.0, 0.0, distance],
            ..CameraOptions::default()
        },
        ..Options::default()
    };
    CabinetViewer::new(options, (800, 600))
}

#[test]
fn mouse_drag_rotates_the_cabinet() {
    let mut viewer = CabinetViewer::default();
    drag(&mut viewer, (100.0, 100.0), (200.0, 150.0));

    let orientation = viewer.orientation();
    assert!((orientation.yaw - 1.0).abs() < 1e-5);
    assert!((orientation.pitch - 0.5).abs() < 1e-5);
    assert_eq!(orientation.roll, 0.0);

    let root = viewer.scene().node(viewer.scene().root()).unwrap();
    assert!(root.rotation.abs_diff_eq(Vec3::new(0.5, 1.0, 0.0), 1e-5));
}

#[test]
fn pitch_stays_bounded_under_large_drags() {
    let mut viewer = CabinetViewer::default();
    let limit = std::f32::consts::FRAC_PI_3;

    drag(&mut viewer, (0.0, 0.0), (0.0, 5000.0));
    assert!((viewer.orientation().pitch - limit).abs() < 1e-6);

    drag(&mut viewer, (0.0, 5000.0), (0.0, -20000.0));
    assert!((viewer.orientation().pitch + limit).abs() < 1e-6);
}

#[test]
fn moves_after_release_are_ignored() {
    let mut viewer = CabinetViewer::default();
    drag(&mut viewer, (0.0, 0.0), (50.0, 0.0));
    let before = viewer.orientation();
    let _ = viewer.handle_input(InputEvent::PointerMove { x: 400.0, y: 400.0 });
    assert_eq!(viewer.orientation(), before);
}

#[test]
fn wheel_step_scales_camera_distance() {
    let mut viewer = viewer_at_distance(5.0);
    assert!(viewer.handle_input(InputEvent::Wheel { delta_y: 120.0 }));
    assert!((viewer.camera_distance() - 5.5).abs() < 1e-4);

    let _ = viewer.handle_input(InputEvent::Wheel { delta_y: -120.0 });
    assert!((viewer.camera_distance() - 4.95).abs() < 1e-4);
}

#[test]
fn zoom_stops_at_bounds() {
    let mut viewer = CabinetViewer::default();
    for _ in 0..100 {
        viewer.zoom_in();
    }
    assert!((viewer.camera_distance() - 2.0).abs() < 1e-4);

    for _ in 0..100 {
        viewer.zoom_out();
    }
    assert!((viewer.camera_distance() - 15.0).abs() < 1e-3);
}

#[test]
fn layout_switches_are_idempotent() {
    let mut viewer = CabinetViewer::default();
    viewer.show_exploded();
    viewer.show_exploded();
    assert!(viewer.is_exploded());
    assert_eq!(position_of(&viewer, BASE), Vec3::new(0.0, -2.5, -1.0));
    assert_eq!(position_of(&viewer, DOORS), Vec3::new(0.0, 0.0, 3.0));

    viewer.show_assembled();
    viewer.show_assembled();
    assert_eq!(viewer.layout(), LayoutMode::Assembled);
    assert_eq!(position_of(&viewer, BASE), Vec3::new(0.0, -1.375, 0.0));
    assert_eq!(position_of(&viewer, DOORS), Vec3::ZERO);
}

#[test]
fn reset_view_keeps_layout() {
    let mut viewer = CabinetViewer::default();
    drag(&mut viewer, (0.0, 0.0), (300.0, -80.0));
    viewer.zoom_out();
    viewer.show_exploded();

    viewer.reset_view();
    assert_eq!(viewer.orientation().pitch, 0.0);
    assert_eq!(viewer.orientation().yaw, 0.0);
    assert_eq!(viewer.camera().eye, Vec3::new(4.0, 3.0, 4.0));
    assert!(viewer.is_exploded());
}

#[test]
fn two_finger_touch_does_not_rotate() {
    let mut viewer = CabinetViewer::default();
    assert!(viewer.handle_input(InputEvent::TouchStart {
        touches: 2,
        x: 10.0,
        y: 10.0,
    }));
    assert!(viewer.handle_input(InputEvent::TouchMove {
        touches: 2,
        x: 200.0,
        y: 200.0,
    }));
    assert!(viewer.handle_input(InputEvent::TouchEnd));
    assert_eq!(viewer.orientation().yaw, 0.0);
    assert_eq!(viewer.orientation().pitch, 0.0);
}

#[test]
fn single_finger_touch_rotates() {
    let mut viewer = CabinetViewer::default();
    let _ = viewer.handle_input(InputEvent::TouchStart {
        touches: 1,
        x: 0.0,
        y: 0.0,
    });
    let _ = viewer.handle_input(InputEvent::TouchMove {
        touches: 1,
        x: 50.0,
        y: 0.0,
    });
    let _ = viewer.handle_input(InputEvent::TouchEnd);
    assert!((viewer.orientation().yaw - 0.5).abs() < 1e-5);
}

#[test]
fn doors_slide_and_return() {
    let mut viewer = CabinetViewer::default();
    let t0 = Instant::now();
    viewer.execute_at(ViewerCommand::ShowDoors, t0);
    assert_eq!(position_of(&viewer, RIGHT_DOOR).x, -0.1);
    assert!(matches!(viewer.door_slide(), DoorSlide::Sliding { .. }));

    assert!(!viewer.tick(t0 + Duration::from_millis(2999)));
    assert_eq!(position_of(&viewer, RIGHT_DOOR).x, -0.1);

    assert!(viewer.tick(t0 + Duration::from_millis(3000)));
    assert_eq!(position_of(&viewer, RIGHT_DOOR).x, 1.45);
    assert_eq!(viewer.door_slide(), DoorSlide::Closed);
}

#[test]
fn cancelled_slide_leaves_door_in_place() {
    let mut viewer = CabinetViewer::default();
    let t0 = Instant::now();
    viewer.execute_at(ViewerCommand::ShowDoors, t0);
    viewer.execute(ViewerCommand::CancelDoorSlide);
    assert!(!viewer.tick(t0 + Duration::from_secs(10)));
    assert_eq!(position_of(&viewer, RIGHT_DOOR).x, -0.1);
}

#[test]
fn bound_keys_execute_actions() {
    let mut viewer = CabinetViewer::default();
    assert!(viewer.handle_key_press("KeyE"));
    assert!(viewer.is_exploded());
    assert!(viewer.handle_key_press("KeyA"));
    assert!(!viewer.is_exploded());
    assert!(!viewer.handle_key_press("KeyQ"));
}

#[test]
fn zero_height_resize_is_ignored() {
    let mut viewer = CabinetViewer::default();
    let aspect = viewer.camera().aspect;
    viewer.resize(640, 0);
    assert_eq!(viewer.viewport(), (1280, 720));
    assert_eq!(viewer.camera().aspect, aspect);

    viewer.resize(600, 600);
    assert_eq!(viewer.viewport(), (600, 600));
    assert_eq!(viewer.camera().aspect, 1.0);
}

#[test]
fn render_reports_dirty_frames_once() {
    let mut viewer = CabinetViewer::default();
    let mut dirty = Vec::new();
    let mut record = |frame: &Frame<'_>| dirty.push(frame.dirty);

    viewer.render(&mut record);
    viewer.show_exploded();
    viewer.render(&mut record);
    viewer.render(&mut record);
    assert_eq!(dirty, vec![false, true, false]);

    let mut backend = LogRenderer::new();
    viewer.render(&mut backend);
    assert_eq!(backend.frames(), 1);
}

#[test]
fn zero_size_construction_uses_default_viewport() {
    let viewer = CabinetViewer::new(Options::default(), (0, 0));
    assert_eq!(viewer.viewport(), (1280, 720));
    let (width, height) = viewer.viewport();
    assert_eq!(viewer.camera().aspect, width as f32 / height as f32);
}

#[test]
fn far_home_position_stays_bounded_after_reset() {
    let mut viewer = viewer_at_distance(40.0);
    assert!(viewer.camera_distance() <= 15.0 + 1e-4);
    viewer.zoom_in();
    viewer.reset_view();
    assert!(viewer.camera_distance() <= 15.0 + 1e-4);
}
