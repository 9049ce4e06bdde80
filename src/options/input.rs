use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::KeybindingOptions;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Input", inline)]
#[serde(default)]
/// How polled keyboard and cursor state becomes camera commands.
pub struct InputOptions {
    /// Multiplier applied to the frame delta for keyboard movement.
    #[schemars(title = "Keyboard Speed", range(min = 0.1, max = 20.0), extend("step" = 0.125))]
    pub keyboard_speed: f32,
    /// Look offset in pixels per frame while an arrow key is held.
    #[schemars(title = "Look Step", range(min = 0.5, max = 20.0), extend("step" = 0.5))]
    pub look_step: f32,
    /// Moving the cursor down looks up.
    #[schemars(title = "Invert Y")]
    pub invert_y: bool,
    /// Key bindings.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            keyboard_speed: 5.125,
            look_step: 5.0,
            invert_y: false,
            keybindings: KeybindingOptions::default(),
        }
    }
}
