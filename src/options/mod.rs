//! Centralized viewer options with TOML preset support.
//!
//! Camera bounds, drag sensitivity, door timing and key bindings are
//! consolidated here. Options serialize to/from TOML so a deployment can
//! tune the viewer without recompiling.

mod camera;
mod doors;
mod interaction;
mod keybindings;

use std::path::Path;

pub use camera::CameraOptions;
pub use doors::DoorOptions;
pub use interaction::InteractionOptions;
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ViewerError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[doors]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection, zoom bounds and home pose.
    pub camera: CameraOptions,
    /// Drag-to-rotate tuning.
    pub interaction: InteractionOptions,
    /// Sliding-door demonstration parameters.
    pub doors: DoorOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ViewerError> {
        let content = std::fs::read_to_string(path).map_err(ViewerError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, ViewerError> {
        toml::from_str(content)
            .map_err(|e| ViewerError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ViewerError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ViewerError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ViewerError::Io)?;
        }
        std::fs::write(path, content).map_err(ViewerError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[doors]
slide_delay_ms = 1500
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.doors.slide_delay_ms, 1500);
        // Everything else should be default
        assert_eq!(opts.doors.open_offset, 1.45);
        assert_eq!(opts.camera.home_position, [4.0, 3.0, 4.0]);
        assert_eq!(opts.interaction.rotate_sensitivity, 0.01);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml("[camera\nfovy = ").unwrap_err();
        assert!(matches!(err, ViewerError::OptionsParse(_)));
    }

    #[test]
    fn keybinding_lookup() {
        use crate::input::KeyAction;
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("KeyE"),
            Some(KeyAction::ShowExploded)
        );
        assert_eq!(opts.keybindings.lookup("KeyR"), Some(KeyAction::ResetView));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn rebinding_replaces_the_old_key() {
        use crate::input::KeyAction;
        let mut opts = Options::default();
        let old = opts.keybindings.rebind(KeyAction::ShowDoors, "KeyO");
        assert_eq!(old.as_deref(), Some("KeyD"));
        assert_eq!(opts.keybindings.lookup("KeyO"), Some(KeyAction::ShowDoors));
        assert_eq!(opts.keybindings.lookup("KeyD"), None);
    }

    #[test]
    fn save_then_load_preserves_options() {
        let dir = std::env::temp_dir()
            .join(format!("vitrina-options-{}", std::process::id()));
        let path = dir.join("preset.toml");
        let mut opts = Options::default();
        opts.camera.fovy = 60.0;
        opts.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("interaction"));
        assert!(props.contains_key("doors"));
        assert!(!props.contains_key("keybindings"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("max_distance").is_some());
        assert!(camera.get("home_position").is_none());
    }
}
