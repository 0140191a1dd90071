//! Drag-driven rotation of the cabinet group.

use glam::{EulerRot, Quat, Vec2, Vec3};

use crate::util::clamp::{clamp_pitch, wrap_angle};

/// Rotation applied to the cabinet group, in radians.
///
/// `pitch` is kept within the configured limit, `yaw` is kept in
/// `(-π, π]`. `roll` is never driven by input; it exists so a reset can
/// zero all three axes of the group's rotation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    /// Rotation about the x axis (vertical drag).
    pub pitch: f32,
    /// Rotation about the y axis (horizontal drag).
    pub yaw: f32,
    /// Rotation about the z axis.
    pub roll: f32,
}

impl Orientation {
    /// No rotation.
    pub const IDENTITY: Self = Self {
        pitch: 0.0,
        yaw: 0.0,
        roll: 0.0,
    };

    /// Apply a drag of `delta` pixels: horizontal motion turns yaw,
    /// vertical motion turns pitch.
    pub fn apply_drag(&mut self, delta: Vec2, sensitivity: f32, pitch_limit: f32) {
        self.yaw = wrap_angle(self.yaw + delta.x * sensitivity);
        self.pitch = clamp_pitch(self.pitch + delta.y * sensitivity, pitch_limit);
    }

    /// Back to [`Orientation::IDENTITY`].
    pub fn reset(&mut self) {
        *self = Self::IDENTITY;
    }

    /// Euler angles as (x, y, z) for a scene node's rotation.
    #[must_use]
    pub fn to_euler(self) -> Vec3 {
        Vec3::new(self.pitch, self.yaw, self.roll)
    }

    /// Equivalent quaternion (x, y, z application order).
    #[must_use]
    pub fn to_quat(self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.pitch, self.yaw, self.roll)
    }
}
