//! The draw-call seam between the viewer and a rendering backend.
//!
//! The viewer does not rasterize anything itself. Once per tick it hands
//! the backend a [`Frame`] borrowing the scene and camera; the backend
//! draws it synchronously and returns nothing.

mod log_backend;

use glam::Mat4;

pub use log_backend::LogRenderer;

use crate::camera::Camera;
use crate::scene::CabinetScene;

/// Everything a backend needs to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Scene with the cabinet's current transforms.
    pub scene: &'a CabinetScene,
    /// Camera to draw from.
    pub camera: &'a Camera,
    /// Precomputed `projection * view`.
    pub view_proj: Mat4,
    /// Viewport size in physical pixels.
    pub viewport: (u32, u32),
    /// Whether the scene changed since the previous frame.
    pub dirty: bool,
}

/// A rendering engine that can draw a [`Frame`].
pub trait RenderBackend {
    /// Draw one frame. Called exactly once per tick.
    fn draw(&mut self, frame: &Frame<'_>);
}

impl<F> RenderBackend for F
where
    F: FnMut(&Frame<'_>),
{
    fn draw(&mut self, frame: &Frame<'_>) {
        self(frame);
    }
}
