use serde::{Deserialize, Serialize};

/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`CameraCommand`](crate::camera::CameraCommand)
/// values. Key strings use the `winit::keyboard::KeyCode` debug format:
/// `"KeyW"`, `"ArrowLeft"`, `"Digit3"`, etc.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A key went down.
    KeyPressed {
        /// Physical key string.
        key: String,
    },
    /// A key went up.
    KeyReleased {
        /// Physical key string.
        key: String,
    },
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Scroll wheel (positive = zoom in).
    Scroll {
        /// Scroll amount.
        delta: f32,
    },
}

/// Camera actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [input.keybindings.bindings]
/// move_forward = "KeyW"
/// cycle_camera = "Digit3"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Move along Front while held.
    MoveForward,
    /// Move against Front while held.
    MoveBackward,
    /// Strafe left while held.
    MoveLeft,
    /// Strafe right while held.
    MoveRight,
    /// Turn left by the look step every frame while held.
    LookLeft,
    /// Turn right by the look step every frame while held.
    LookRight,
    /// Pitch up by the look step every frame while held.
    LookUp,
    /// Pitch down by the look step every frame while held.
    LookDown,
    /// Switch to the next camera mode on press.
    CycleCamera,
}

impl KeyAction {
    /// Every action, in the order held keys are applied.
    pub const ALL: [Self; 9] = [
        Self::MoveForward,
        Self::MoveBackward,
        Self::MoveLeft,
        Self::MoveRight,
        Self::LookLeft,
        Self::LookRight,
        Self::LookUp,
        Self::LookDown,
        Self::CycleCamera,
    ];
}
