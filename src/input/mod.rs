//! Input handling: event types, bindable actions, and the input processor
//! that converts raw window events into camera commands.

/// Platform-agnostic input events and bindable actions.
pub mod event;
/// Converts raw events into camera commands.
pub mod processor;

pub use event::{InputEvent, KeyAction};
pub use processor::InputProcessor;
