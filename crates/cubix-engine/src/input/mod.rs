//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! The runtime translates window events into [`InputEvent`]s; the controller
//! collaborator turns held state into a [`GamepadButtons`] mask once per frame.

mod gamepad;
mod pad;
mod state;
mod types;

pub use gamepad::{ButtonEdges, ControllerChain, ControllerSource, GamepadButtons, GamepadState, KeyboardController};
pub use pad::GamepadController;
pub use state::InputState;
pub use types::{InputEvent, Key, KeyState};
