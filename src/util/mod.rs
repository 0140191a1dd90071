//! Shared utilities.
//!
//! Pure transform-bounding helpers used by the gesture and camera layers.

pub mod clamp;
