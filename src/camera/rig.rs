//! Radial zoom, home pose and projection bookkeeping for the orbit camera.

use glam::Vec3;

use super::core::Camera;
use crate::options::CameraOptions;
use crate::util::clamp::clamp_distance;

/// Owns the [`Camera`] and enforces its distance bounds.
///
/// The camera always looks at the origin; zoom scales the eye position
/// along its radial vector and re-clamps it into
/// `[min_distance, max_distance]`.
#[derive(Debug, Clone)]
pub struct CameraRig {
    /// The camera being driven.
    pub camera: Camera,
    home: Vec3,
    min_distance: f32,
    max_distance: f32,
    zoom_in_factor: f32,
    zoom_out_factor: f32,
}

impl CameraRig {
    /// Create a rig at the home pose for a viewport of the given aspect.
    #[must_use]
    pub fn new(options: &CameraOptions, aspect: f32) -> Self {
        let mut rig = Self {
            camera: Camera::from_options(options, aspect),
            home: Vec3::from_array(options.home_position),
            min_distance: options.min_distance,
            max_distance: options.max_distance,
            zoom_in_factor: options.zoom_in_factor,
            zoom_out_factor: options.zoom_out_factor,
        };
        rig.apply_options(options);
        rig
    }

    /// Re-read bounds, factors and projection parameters. The current eye
    /// position is kept but re-clamped into the new bounds.
    pub fn apply_options(&mut self, options: &CameraOptions) {
        let (min, max) = if options.min_distance <= options.max_distance {
            (options.min_distance, options.max_distance)
        } else {
            log::warn!(
                "camera min_distance {} exceeds max_distance {}; swapping",
                options.min_distance,
                options.max_distance
            );
            (options.max_distance, options.min_distance)
        };
        self.min_distance = min;
        self.max_distance = max;
        let home = Vec3::from_array(options.home_position);
        self.home = clamp_distance(home, min, max);
        if self.home != home {
            log::warn!(
                "camera home_position {home:?} lies outside [{min}, {max}]; \
                 using {:?}",
                self.home
            );
        }
        self.zoom_in_factor = options.zoom_in_factor;
        self.zoom_out_factor = options.zoom_out_factor;
        self.camera.fovy = options.fovy;
        self.camera.znear = options.znear;
        self.camera.zfar = options.zfar;
        self.camera.eye = clamp_distance(self.camera.eye, min, max);
    }

    /// Scale the eye position by `factor` (> 1 moves away, < 1 moves
    /// closer), then clamp the distance.
    ///
    /// Non-finite or non-positive factors are ignored.
    pub fn zoom(&mut self, factor: f32) {
        if !factor.is_finite() || factor <= 0.0 {
            log::debug!("ignoring zoom factor {factor}");
            return;
        }
        let scaled = self.camera.eye * factor;
        self.camera.eye =
            clamp_distance(scaled, self.min_distance, self.max_distance);
        self.camera.target = Vec3::ZERO;
    }

    /// One step closer.
    pub fn zoom_in(&mut self) {
        self.zoom(self.zoom_in_factor);
    }

    /// One step farther.
    pub fn zoom_out(&mut self) {
        self.zoom(self.zoom_out_factor);
    }

    /// Return to the home position looking at the origin, regardless of
    /// zoom history.
    pub fn reset_pose(&mut self) {
        self.camera.eye = self.home;
        self.camera.target = Vec3::ZERO;
        self.camera.up = Vec3::Y;
    }

    /// Update the aspect ratio for a viewport of `width` x `height`.
    ///
    /// Returns `false` and leaves the projection untouched when either
    /// dimension is zero (e.g. a minimized window), which would otherwise
    /// produce an infinite or NaN aspect.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            log::debug!("ignoring degenerate viewport {width}x{height}");
            return false;
        }
        self.camera.aspect = width as f32 / height as f32;
        true
    }

    /// Current eye distance from the origin.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.camera.eye.length()
    }

    /// Allowed distance range.
    #[must_use]
    pub fn distance_bounds(&self) -> (f32, f32) {
        (self.min_distance, self.max_distance)
    }
}
