//! The viewer's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key press, mouse
//! gesture, touch, wheel, UI button or programmatic call, is represented as
//! a `ViewerCommand`. Consumers construct commands and pass them to
//! [`CabinetViewer::execute`](super::CabinetViewer::execute).

use glam::Vec2;

/// A discrete or parameterized operation the viewer can perform.
///
/// ```
/// # use vitrina::{CabinetViewer, ViewerCommand};
/// let mut viewer = CabinetViewer::default();
/// viewer.execute(ViewerCommand::ShowExploded);
/// viewer.execute(ViewerCommand::Zoom { factor: 1.1 });
/// assert!(viewer.is_exploded());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerCommand {
    // ── Orientation ─────────────────────────────────────────────────
    /// Turn the cabinet by `delta` pixels of drag.
    RotateBy {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    // ── Camera ──────────────────────────────────────────────────────
    /// Scale the camera's distance from the origin by `factor`.
    Zoom {
        /// Position multiplier (> 1 zooms out).
        factor: f32,
    },
    /// One zoom step closer.
    ZoomIn,
    /// One zoom step farther.
    ZoomOut,

    // ── Presentation ────────────────────────────────────────────────
    /// Pull the parts apart.
    ShowExploded,
    /// Put the parts back together.
    ShowAssembled,
    /// Slide the right door behind the left, then back after a delay.
    ShowDoors,
    /// Drop a pending door return.
    CancelDoorSlide,
    /// Zero the orientation and return the camera home.
    ResetView,
}
