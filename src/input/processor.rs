//! Converts raw platform events into camera commands.
//!
//! The `InputProcessor` owns all transient input state (held keys, last
//! cursor position) and the key-binding map. It is the only thing that
//! sits between raw window events and
//! [`CameraRig::execute`](crate::camera::CameraRig::execute).

use std::collections::HashSet;

use super::event::{InputEvent, KeyAction};
use crate::camera::{CameraCommand, MoveDirection};
use crate::options::InputOptions;

/// Converts raw window events into [`CameraCommand`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = input_processor.handle_event(event) {
///     rig.execute(cmd);
/// }
///
/// // Once per frame, before reading the view matrix:
/// rig.execute_all(input_processor.held_commands(dt));
/// ```
#[derive(Debug, Clone)]
pub struct InputProcessor {
    /// Actions whose key is currently down.
    held: HashSet<KeyAction>,
    /// Last cursor position; `None` until the first sample.
    last_cursor: Option<(f32, f32)>,
    /// Speeds, look step and key bindings.
    options: InputOptions,
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new(InputOptions::default())
    }
}

impl InputProcessor {
    /// Create a processor with the given options.
    #[must_use]
    pub fn new(options: InputOptions) -> Self {
        Self {
            held: HashSet::new(),
            last_cursor: None,
            options,
        }
    }

    /// Read-only access to the options.
    #[must_use]
    pub fn options(&self) -> &InputOptions {
        &self.options
    }

    /// Mutable access to the options for reconfiguration.
    pub fn options_mut(&mut self) -> &mut InputOptions {
        &mut self.options
    }

    /// Whether the key bound to `action` is currently down.
    #[must_use]
    pub fn is_held(&self, action: KeyAction) -> bool {
        self.held.contains(&action)
    }

    /// Forget the last cursor position, e.g. after the cursor is
    /// re-captured, so the next sample produces no look jump.
    pub fn reset_cursor(&mut self) {
        self.last_cursor = None;
    }

    /// Process a raw input event and return zero or one commands.
    ///
    /// Movement and arrow-key look are not emitted here; they come from
    /// [`InputProcessor::held_commands`] once per frame.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
    ) -> Option<CameraCommand> {
        match event {
            InputEvent::KeyPressed { key } => self.handle_key_press(&key),
            InputEvent::KeyReleased { key } => {
                if let Some(action) = self.options.keybindings.lookup(&key) {
                    let _ = self.held.remove(&action);
                }
                None
            }
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::Scroll { delta } => {
                Some(CameraCommand::Zoom { delta })
            }
        }
    }

    /// Commands for every held key, in [`KeyAction::ALL`] order.
    ///
    /// Movement uses `dt * keyboard_speed`; looking uses a fixed
    /// `look_step` pixel offset per frame.
    #[must_use]
    pub fn held_commands(&self, dt: f32) -> Vec<CameraCommand> {
        let move_dt = dt * self.options.keyboard_speed;
        let step = self.options.look_step;

        KeyAction::ALL
            .into_iter()
            .filter(|action| self.held.contains(action))
            .filter_map(|action| held_command(action, move_dt, step))
            .collect()
    }

    fn handle_key_press(&mut self, key: &str) -> Option<CameraCommand> {
        let action = self.options.keybindings.lookup(key)?;
        // Key repeat re-sends presses; only the first one switches mode.
        let newly_pressed = self.held.insert(action);
        (newly_pressed && action == KeyAction::CycleCamera)
            .then_some(CameraCommand::CycleMode)
    }

    fn handle_cursor_moved(
        &mut self,
        x: f32,
        y: f32,
    ) -> Option<CameraCommand> {
        let previous = self.last_cursor.replace((x, y));
        let (last_x, last_y) = previous?;

        let dx = x - last_x;
        // Screen y grows downward; moving the cursor up looks up.
        let dy = if self.options.invert_y {
            y - last_y
        } else {
            last_y - y
        };
        Some(CameraCommand::Look { dx, dy })
    }
}

fn held_command(
    action: KeyAction,
    move_dt: f32,
    step: f32,
) -> Option<CameraCommand> {
    let move_to = |direction| CameraCommand::Move {
        direction,
        dt: move_dt,
    };
    let look = |dx, dy| CameraCommand::Look { dx, dy };

    match action {
        KeyAction::MoveForward => Some(move_to(MoveDirection::Forward)),
        KeyAction::MoveBackward => Some(move_to(MoveDirection::Backward)),
        KeyAction::MoveLeft => Some(move_to(MoveDirection::Left)),
        KeyAction::MoveRight => Some(move_to(MoveDirection::Right)),
        KeyAction::LookLeft => Some(look(-step, 0.0)),
        KeyAction::LookRight => Some(look(step, 0.0)),
        KeyAction::LookUp => Some(look(0.0, step)),
        KeyAction::LookDown => Some(look(0.0, -step)),
        KeyAction::CycleCamera => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(key: &str) -> InputEvent {
        InputEvent::KeyPressed { key: key.to_owned() }
    }

    fn release(key: &str) -> InputEvent {
        InputEvent::KeyReleased { key: key.to_owned() }
    }

    #[test]
    fn first_cursor_sample_does_not_look() {
        let mut input = InputProcessor::default();
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 100.0, y: 100.0 }),
            None
        );
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 110.0, y: 95.0 }),
            Some(CameraCommand::Look { dx: 10.0, dy: 5.0 })
        );

        input.reset_cursor();
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 }),
            None
        );
    }

    #[test]
    fn invert_y_flips_vertical_look() {
        let mut input = InputProcessor::default();
        input.options_mut().invert_y = true;
        let _ = input.handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 0.0, y: 4.0 }),
            Some(CameraCommand::Look { dx: 0.0, dy: 4.0 })
        );
    }

    #[test]
    fn scroll_becomes_zoom() {
        let mut input = InputProcessor::default();
        assert_eq!(
            input.handle_event(InputEvent::Scroll { delta: 2.0 }),
            Some(CameraCommand::Zoom { delta: 2.0 })
        );
    }

    #[test]
    fn held_keys_emit_commands_each_frame() {
        let mut input = InputProcessor::default();
        assert_eq!(input.handle_event(press("KeyW")), None);
        assert_eq!(input.handle_event(press("ArrowLeft")), None);
        assert!(input.is_held(KeyAction::MoveForward));

        let expected = vec![
            CameraCommand::Move {
                direction: MoveDirection::Forward,
                dt: 2.0 * 5.125,
            },
            CameraCommand::Look { dx: -5.0, dy: 0.0 },
        ];
        assert_eq!(input.held_commands(2.0), expected);
        assert_eq!(input.held_commands(2.0), expected);

        let _ = input.handle_event(release("KeyW"));
        let _ = input.handle_event(release("ArrowLeft"));
        assert!(input.held_commands(2.0).is_empty());
    }

    #[test]
    fn cycle_camera_fires_once_per_press() {
        let mut input = InputProcessor::default();
        assert_eq!(
            input.handle_event(press("Digit3")),
            Some(CameraCommand::CycleMode)
        );
        assert_eq!(input.handle_event(press("Digit3")), None);
        assert!(input.held_commands(1.0).is_empty());

        let _ = input.handle_event(release("Digit3"));
        assert_eq!(
            input.handle_event(press("Digit3")),
            Some(CameraCommand::CycleMode)
        );
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let mut input = InputProcessor::default();
        assert_eq!(input.handle_event(press("KeyZ")), None);
        assert_eq!(input.handle_event(release("KeyZ")), None);
        assert!(input.held_commands(1.0).is_empty());
    }

    #[test]
    fn rebinding_changes_lookup() {
        let mut input = InputProcessor::default();
        input
            .options_mut()
            .keybindings
            .bind(KeyAction::MoveLeft, "KeyQ");
        let _ = input.handle_event(press("KeyQ"));
        assert_eq!(
            input.held_commands(1.0),
            vec![CameraCommand::Move {
                direction: MoveDirection::Left,
                dt: 5.125,
            }]
        );
    }
}
