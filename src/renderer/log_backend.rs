use super::{Frame, RenderBackend};
use crate::scene::Primitive;

/// Backend that draws nothing and logs what it would draw.
///
/// Useful for headless runs and for wiring a host before a real
/// rasterizer is attached.
#[derive(Debug, Default, Clone)]
pub struct LogRenderer {
    frames: u64,
}

impl LogRenderer {
    /// Create a renderer that has drawn nothing yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames drawn so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl RenderBackend for LogRenderer {
    fn draw(&mut self, frame: &Frame<'_>) {
        self.frames += 1;
        if !frame.dirty {
            return;
        }
        let meshes = frame
            .scene
            .nodes()
            .iter()
            .filter(|n| n.primitive != Primitive::Group)
            .count();
        log::debug!(
            "frame {}: {meshes} meshes, camera at {:?} ({:.2} from origin), \
             viewport {}x{}",
            self.frames,
            frame.camera.eye,
            frame.camera.eye.length(),
            frame.viewport.0,
            frame.viewport.1
        );
    }
}
