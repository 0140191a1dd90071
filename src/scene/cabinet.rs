//! Static cabinet model.
//!
//! Dimensions are the real cabinet's centimetres scaled by 1/20 (a 120 cm
//! wide base becomes 6 units). Every part the view-state machine moves is
//! named; tracks, grilles and connector pins are anonymous decoration.

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

use super::{CabinetScene, Light, Material, NodeId, NodeSpec, Primitive};

/// Root group carrying the user's orientation.
pub const CABINET: &str = "cabinet";
/// Bottom panel.
pub const BASE: &str = "base";
/// Right side panel.
pub const RIGHT_SIDE: &str = "rightSide";
/// Top rail of the front frame.
pub const FRAME_TOP: &str = "frameTop";
/// Bottom rail of the front frame.
pub const FRAME_BOTTOM: &str = "frameBottom";
/// Left stile of the front frame.
pub const FRAME_LEFT: &str = "frameLeft";
/// Group holding both sliding doors.
pub const DOORS: &str = "doors";
/// Rear sliding door.
pub const LEFT_DOOR: &str = "leftDoor";
/// Front sliding door, the one that slides.
pub const RIGHT_DOOR: &str = "rightDoor";

const MDF: Material = Material::new(0x00f5_f5f5);
const LAMINATE: Material = Material::new(0x00ff_ffff);
const EDGE: Material = Material::new(0x00dd_dddd);
const GRILLE: Material = Material::new(0x0088_8888);
const CONNECTOR: Material = Material::new(0x00ff_6b6b);

fn cuboid(x: f32, y: f32, z: f32) -> Primitive {
    Primitive::Cuboid {
        size: Vec3::new(x, y, z),
    }
}

/// Build the cabinet scene in its assembled layout, with lights.
#[must_use]
pub fn build_cabinet() -> CabinetScene {
    let mut scene = CabinetScene::new(CABINET);
    let root = scene.root();

    add_panels(&mut scene, root);
    add_front_frame(&mut scene, root);
    add_tracks(&mut scene, root);
    add_doors(&mut scene, root);
    add_connectors(&mut scene, root);
    add_lights(&mut scene);

    scene.mark_rendered();
    scene
}

fn add_panels(scene: &mut CabinetScene, root: NodeId) {
    let _ = scene.add(
        root,
        NodeSpec::mesh(cuboid(6.0, 0.09, 2.25), MDF)
            .named(BASE)
            .at(Vec3::new(0.0, -1.375, 0.0)),
    );
    let _ = scene.add(
        root,
        NodeSpec::mesh(cuboid(0.09, 2.75, 2.25), MDF)
            .named(RIGHT_SIDE)
            .at(Vec3::new(3.0, 0.0, 0.0)),
    );
}

fn add_front_frame(scene: &mut CabinetScene, root: NodeId) {
    let _ = scene.add(
        root,
        NodeSpec::mesh(cuboid(6.0, 0.09, 0.09), MDF)
            .named(FRAME_TOP)
            .at(Vec3::new(0.0, 1.375, 1.1)),
    );
    let _ = scene.add(
        root,
        NodeSpec::mesh(cuboid(6.0, 0.09, 0.09), MDF)
            .named(FRAME_BOTTOM)
            .at(Vec3::new(0.0, -1.375, 1.1)),
    );
    let _ = scene.add(
        root,
        NodeSpec::mesh(cuboid(0.09, 2.75, 0.09), MDF)
            .named(FRAME_LEFT)
            .at(Vec3::new(-3.0, 0.0, 1.1)),
    );
}

fn add_tracks(scene: &mut CabinetScene, root: NodeId) {
    for y in [1.3, -1.3] {
        let _ = scene.add(
            root,
            NodeSpec::mesh(cuboid(5.8, 0.05, 0.05), EDGE)
                .at(Vec3::new(0.0, y, 1.05)),
        );
    }
}

fn add_doors(scene: &mut CabinetScene, root: NodeId) {
    let Some(doors) = scene.add(root, NodeSpec::group().named(DOORS)) else {
        return;
    };
    // The right door sits slightly proud of the left so it can slide over.
    let panels = [
        (LEFT_DOOR, Vec3::new(-1.45, 0.0, 1.125)),
        (RIGHT_DOOR, Vec3::new(1.45, 0.0, 1.15)),
    ];
    for (name, position) in panels {
        let door = scene.add(
            doors,
            NodeSpec::mesh(cuboid(3.1, 2.5, 0.05), LAMINATE)
                .named(name)
                .at(position),
        );
        if let Some(door) = door {
            let _ = scene.add(
                door,
                NodeSpec::mesh(
                    Primitive::Plane {
                        width: 2.0,
                        height: 0.4,
                    },
                    GRILLE,
                )
                .at(Vec3::new(0.0, -0.8, 0.026)),
            );
        }
    }
}

fn add_connectors(scene: &mut CabinetScene, root: NodeId) {
    let pin = Primitive::Cylinder {
        radius: 0.02,
        height: 0.1,
    };
    let placements = [
        (Vec3::new(2.9, -1.325, 0.0), Vec3::new(0.0, 0.0, FRAC_PI_2)),
        (Vec3::new(-2.9, -1.325, 0.0), Vec3::new(0.0, 0.0, FRAC_PI_2)),
        (Vec3::new(2.9, 0.0, 1.05), Vec3::new(FRAC_PI_2, 0.0, 0.0)),
        (Vec3::new(-2.9, 0.0, 1.05), Vec3::new(FRAC_PI_2, 0.0, 0.0)),
    ];
    for (position, rotation) in placements {
        let _ = scene.add(
            root,
            NodeSpec::mesh(pin, CONNECTOR).at(position).rotated(rotation),
        );
    }
}

fn add_lights(scene: &mut CabinetScene) {
    scene.add_light(Light::Ambient {
        color: 0x0040_4040,
        intensity: 0.8,
    });
    scene.add_light(Light::Directional {
        color: 0x00ff_ffff,
        intensity: 1.0,
        position: Vec3::new(5.0, 5.0, 5.0),
        cast_shadow: true,
    });
    scene.add_light(Light::Directional {
        color: 0x00ff_ffff,
        intensity: 0.5,
        position: Vec3::new(-5.0, 3.0, -5.0),
        cast_shadow: false,
    });
}
