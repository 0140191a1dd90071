//! Converts raw platform events into viewer commands.
//!
//! The `InputProcessor` owns the only transient input state, the single
//! [`GestureTracker`] session. It is the only thing that sits between raw
//! device events and the viewer's
//! [`execute`](crate::CabinetViewer::execute) method. Events are handled
//! synchronously, one at a time; nothing is buffered.

use glam::Vec2;

use super::event::{InputEvent, InputSource};
use super::gesture::GestureTracker;
use crate::engine::command::ViewerCommand;

/// Outcome of feeding one event to the [`InputProcessor`].
#[derive(Debug, Clone, PartialEq)]
pub struct EventResponse {
    /// Command to execute, if the event produced one.
    pub command: Option<ViewerCommand>,
    /// Whether the host should suppress its default handling (page scroll,
    /// pinch zoom, pull-to-refresh, context menu).
    pub prevent_default: bool,
}

impl EventResponse {
    fn ignored() -> Self {
        Self {
            command: None,
            prevent_default: false,
        }
    }

    fn suppressed(command: Option<ViewerCommand>) -> Self {
        Self {
            command,
            prevent_default: true,
        }
    }
}

/// Normalizes mouse, touch and wheel streams into [`ViewerCommand`]s.
///
/// # Usage
///
/// ```
/// # use vitrina::{InputEvent, InputProcessor, ViewerCommand};
/// let mut input = InputProcessor::new();
/// let response = input.handle_event(InputEvent::Wheel { delta_y: 120.0 });
/// assert_eq!(response.command, Some(ViewerCommand::ZoomOut));
/// assert!(response.prevent_default);
/// ```
#[derive(Debug, Default, Clone)]
pub struct InputProcessor {
    gesture: GestureTracker,
}

impl InputProcessor {
    /// Create a processor with no active session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only access to the drag session.
    #[must_use]
    pub fn gesture(&self) -> &GestureTracker {
        &self.gesture
    }

    /// Whether a drag session is in progress (drives the grab/grabbing
    /// cursor affordance).
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_active()
    }

    /// Process one raw input event.
    pub fn handle_event(&mut self, event: InputEvent) -> EventResponse {
        match event {
            InputEvent::PointerDown { x, y } => {
                self.gesture.begin(InputSource::Pointer, Vec2::new(x, y));
                EventResponse::ignored()
            }
            InputEvent::PointerMove { x, y } => EventResponse {
                command: self.rotate(InputSource::Pointer, x, y),
                prevent_default: false,
            },
            InputEvent::PointerUp | InputEvent::PointerLeave => {
                self.gesture.end(InputSource::Pointer);
                EventResponse::ignored()
            }
            InputEvent::Wheel { delta_y } => {
                let command = if delta_y > 0.0 {
                    ViewerCommand::ZoomOut
                } else {
                    ViewerCommand::ZoomIn
                };
                EventResponse::suppressed(Some(command))
            }
            InputEvent::TouchStart { touches, x, y } => {
                if touches == 1 {
                    self.gesture.begin(InputSource::Touch, Vec2::new(x, y));
                }
                EventResponse::suppressed(None)
            }
            InputEvent::TouchMove { touches, x, y } => {
                let command = if touches == 1 {
                    self.rotate(InputSource::Touch, x, y)
                } else {
                    None
                };
                EventResponse::suppressed(command)
            }
            InputEvent::TouchEnd => {
                self.gesture.end(InputSource::Touch);
                EventResponse::suppressed(None)
            }
            InputEvent::ContextMenu => EventResponse::suppressed(None),
        }
    }

    fn rotate(
        &mut self,
        source: InputSource,
        x: f32,
        y: f32,
    ) -> Option<ViewerCommand> {
        self.gesture
            .track(source, Vec2::new(x, y))
            .map(|delta| ViewerCommand::RotateBy { delta })
    }
}
