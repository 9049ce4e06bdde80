use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `MoveForward` → `"KeyW"`).
    pub bindings: HashMap<KeyAction, String>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::MoveForward, "KeyW".into()),
            (KeyAction::MoveBackward, "KeyS".into()),
            (KeyAction::MoveLeft, "KeyA".into()),
            (KeyAction::MoveRight, "KeyD".into()),
            (KeyAction::LookLeft, "ArrowLeft".into()),
            (KeyAction::LookRight, "ArrowRight".into()),
            (KeyAction::LookUp, "ArrowUp".into()),
            (KeyAction::LookDown, "ArrowDown".into()),
            (KeyAction::CycleCamera, "Digit3".into()),
        ]);
        Self { bindings }
    }
}

impl KeybindingOptions {
    /// Look up the action bound to a key string.
    ///
    /// If several actions share a key, the first in [`KeyAction::ALL`]
    /// order wins.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        KeyAction::ALL.into_iter().find(|action| {
            self.bindings.get(action).is_some_and(|bound| bound == key)
        })
    }

    /// Bind `action` to `key`, replacing its previous key.
    pub fn bind(&mut self, action: KeyAction, key: impl Into<String>) {
        let _ = self.bindings.insert(action, key.into());
    }
}
