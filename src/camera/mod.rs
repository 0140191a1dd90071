//! Camera system for viewing the cabinet.
//!
//! Provides a perspective camera that always looks at the origin and a rig
//! that zooms it along its radial vector within fixed bounds.

/// Core camera struct and projection math.
pub mod core;
/// Zoom, reset and resize handling.
pub mod rig;

pub use self::core::Camera;
pub use rig::CameraRig;
