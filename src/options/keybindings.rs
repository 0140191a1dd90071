use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `ShowExploded` → `"KeyE"`).
    pub bindings: HashMap<KeyAction, String>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::ShowExploded, "KeyE".into()),
            (KeyAction::ShowAssembled, "KeyA".into()),
            (KeyAction::ShowDoors, "KeyD".into()),
            (KeyAction::ResetView, "KeyR".into()),
            (KeyAction::ZoomIn, "Equal".into()),
            (KeyAction::ZoomOut, "Minus".into()),
        ]);
        Self { bindings }
    }
}

impl KeybindingOptions {
    /// Look up the action for a key string.
    ///
    /// If two actions share a key, which one wins is unspecified.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.bindings
            .iter()
            .find(|(_, bound)| bound.as_str() == key)
            .map(|(action, _)| *action)
    }

    /// Rebind `action` to `key`, returning the previous key if any.
    pub fn rebind(
        &mut self,
        action: KeyAction,
        key: impl Into<String>,
    ) -> Option<String> {
        self.bindings.insert(action, key.into())
    }
}
