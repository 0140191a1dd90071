//! Pure bounding functions for the cabinet orientation and camera distance.

use std::f32::consts::{FRAC_PI_3, PI, TAU};

use glam::Vec3;

/// Default bound on the cabinet's pitch, in radians (60°).
pub const PITCH_LIMIT: f32 = FRAC_PI_3;
/// Closest the camera may get to the origin.
pub const MIN_CAMERA_DISTANCE: f32 = 2.0;
/// Farthest the camera may get from the origin.
pub const MAX_CAMERA_DISTANCE: f32 = 15.0;

/// Clamp `pitch` to `[-limit, limit]`.
///
/// The sign of `limit` is ignored so a misconfigured negative limit still
/// produces a symmetric range.
#[must_use]
pub fn clamp_pitch(pitch: f32, limit: f32) -> f32 {
    let limit = limit.abs();
    pitch.clamp(-limit, limit)
}

/// Normalize an angle into `(-π, π]`.
///
/// Long drag sessions would otherwise accumulate yaw without bound and
/// lose f32 precision.
#[must_use]
pub fn wrap_angle(angle: f32) -> f32 {
    if !angle.is_finite() {
        return angle;
    }
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Rescale `position` along its radial direction so its length lies in
/// `[min, max]`.
///
/// A zero-length or non-finite position has no direction to rescale along
/// and is returned unchanged.
#[must_use]
pub fn clamp_distance(position: Vec3, min: f32, max: f32) -> Vec3 {
    let distance = position.length();
    if distance == 0.0 || !distance.is_finite() {
        return position;
    }
    if distance < min {
        position / distance * min
    } else if distance > max {
        position / distance * max
    } else {
        position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pitch_within_limit_is_unchanged() {
        assert_eq!(clamp_pitch(0.5, PITCH_LIMIT), 0.5);
        assert_eq!(clamp_pitch(-0.5, PITCH_LIMIT), -0.5);
    }

    #[test]
    fn pitch_is_clamped_both_ways() {
        assert_eq!(clamp_pitch(10.0, PITCH_LIMIT), PITCH_LIMIT);
        assert_eq!(clamp_pitch(-10.0, PITCH_LIMIT), -PITCH_LIMIT);
    }

    #[test]
    fn negative_limit_is_treated_as_magnitude() {
        assert_eq!(clamp_pitch(2.0, -1.0), 1.0);
        assert_eq!(clamp_pitch(-2.0, -1.0), -1.0);
    }

    #[test]
    fn wrap_angle_keeps_small_angles() {
        assert!((wrap_angle(1.0) - 1.0).abs() < 1e-6);
        assert!((wrap_angle(-1.0) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn wrap_angle_folds_full_turns() {
        assert!((wrap_angle(TAU + 0.25) - 0.25).abs() < 1e-5);
        assert!((wrap_angle(-TAU - 0.25) + 0.25).abs() < 1e-5);
        let big = wrap_angle(1000.0);
        assert!(big > -PI && big <= PI);
    }

    #[test]
    fn wrap_angle_maps_minus_pi_to_pi() {
        assert!((wrap_angle(-PI) - PI).abs() < 1e-6);
    }

    #[test]
    fn distance_inside_range_is_untouched() {
        let p = Vec3::new(0.0, 0.0, 5.0);
        assert_eq!(clamp_distance(p, 2.0, 15.0), p);
    }

    #[test]
    fn distance_below_floor_is_raised() {
        let p = clamp_distance(Vec3::new(0.5, 0.0, 0.0), 2.0, 15.0);
        assert!((p.length() - 2.0).abs() < 1e-6);
        assert!(p.x > 0.0);
    }

    #[test]
    fn distance_above_ceiling_is_lowered_preserving_direction() {
        let p = clamp_distance(Vec3::new(30.0, 0.0, 40.0), 2.0, 15.0);
        assert!((p.length() - 15.0).abs() < 1e-5);
        assert!((p.x / p.z - 0.75).abs() < 1e-6);
    }

    #[test]
    fn zero_position_is_left_alone() {
        assert_eq!(clamp_distance(Vec3::ZERO, 2.0, 15.0), Vec3::ZERO);
    }
}
