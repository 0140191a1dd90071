use serde::{Deserialize, Serialize};

use crate::engine::command::ViewerCommand;

/// Viewer actions that can be bound to keys.
///
/// These mirror the buttons a host shell exposes next to the viewport.
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// show_exploded = "KeyE"
/// reset_view = "KeyR"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Pull the parts apart.
    ShowExploded,
    /// Put the parts back together.
    ShowAssembled,
    /// Demonstrate the sliding doors.
    ShowDoors,
    /// Restore orientation and camera pose.
    ResetView,
    /// Move the camera toward the cabinet.
    ZoomIn,
    /// Move the camera away from the cabinet.
    ZoomOut,
}

impl KeyAction {
    /// The parameterless command this action triggers.
    #[must_use]
    pub fn to_command(self) -> ViewerCommand {
        match self {
            Self::ShowExploded => ViewerCommand::ShowExploded,
            Self::ShowAssembled => ViewerCommand::ShowAssembled,
            Self::ShowDoors => ViewerCommand::ShowDoors,
            Self::ResetView => ViewerCommand::ResetView,
            Self::ZoomIn => ViewerCommand::ZoomIn,
            Self::ZoomOut => ViewerCommand::ZoomOut,
        }
    }
}
