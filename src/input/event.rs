/// Platform-agnostic input events.
///
/// Hosts translate their native mouse, touch and wheel events into these
/// and feed them to an [`InputProcessor`](super::InputProcessor), which
/// converts them into [`ViewerCommand`](crate::ViewerCommand) values.
///
/// Coordinates are screen-space and deliberately unvalidated: clamping
/// applies to the derived orientation and camera pose, never to raw input.
///
/// # Example
///
/// ```
/// # use vitrina::{CabinetViewer, InputEvent};
/// let mut viewer = CabinetViewer::default();
/// let _ = viewer.handle_input(InputEvent::PointerDown { x: 100.0, y: 100.0 });
/// let _ = viewer.handle_input(InputEvent::PointerMove { x: 200.0, y: 150.0 });
/// let _ = viewer.handle_input(InputEvent::PointerUp);
/// assert!((viewer.orientation().yaw - 1.0).abs() < 1e-5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The primary mouse button was pressed over the viewport. Hosts do
    /// not forward other buttons.
    PointerDown {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
    },
    /// The cursor moved to an absolute screen position.
    PointerMove {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
    },
    /// The primary mouse button was released.
    PointerUp,
    /// The cursor left the viewport.
    PointerLeave,
    /// Scroll wheel. Positive `delta_y` scrolls toward the user (zoom out).
    Wheel {
        /// Vertical scroll amount, DOM sign convention.
        delta_y: f32,
    },
    /// A finger touched the viewport.
    TouchStart {
        /// Number of touch points currently down, including this one.
        touches: usize,
        /// Horizontal position of the first touch point.
        x: f32,
        /// Vertical position of the first touch point.
        y: f32,
    },
    /// One or more touch points moved.
    TouchMove {
        /// Number of touch points currently down.
        touches: usize,
        /// Horizontal position of the first touch point.
        x: f32,
        /// Vertical position of the first touch point.
        y: f32,
    },
    /// A finger was lifted or the touch was cancelled.
    TouchEnd,
    /// The host is about to open its context menu over the viewport.
    ContextMenu,
}

/// Which device family a gesture session was started by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    /// Mouse or pen pointer.
    Pointer,
    /// Single-finger touch.
    Touch,
}
