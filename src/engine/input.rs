//! Input methods for CabinetViewer

use super::CabinetViewer;
use crate::input::InputEvent;

impl CabinetViewer {
    /// Process a platform-agnostic input event.
    ///
    /// This is the primary input entry point. Hosts forward raw mouse,
    /// touch and wheel events as [`InputEvent`] variants; drags rotate the
    /// cabinet and the wheel zooms the camera.
    ///
    /// Returns `true` if the host should suppress its default handling of
    /// the event.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        let response = self.input.handle_event(event);
        if let Some(command) = response.command {
            self.execute(command);
        }
        response.prevent_default
    }

    /// Look up a key press in the configured bindings and execute the
    /// bound action. Returns `true` if the key was bound.
    pub fn handle_key_press(&mut self, key: &str) -> bool {
        let Some(action) = self.options.keybindings.lookup(key) else {
            return false;
        };
        self.execute(action.to_command());
        true
    }

    /// Whether a drag is in progress (for a grab/grabbing cursor).
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.input.is_dragging()
    }
}
