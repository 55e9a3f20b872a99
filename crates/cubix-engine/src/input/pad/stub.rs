use crate::error::{EngineError, EngineResult};
use crate::input::{ControllerSource, GamepadState, InputState};

/// Placeholder for builds without the `gamepad` feature. Never constructed.
pub struct GamepadController {
    _private: (),
}

impl GamepadController {
    pub fn new() -> EngineResult<Self> {
        Err(EngineError::resource(
            "gamepad backend",
            "built without the `gamepad` feature",
        ))
    }
}

impl ControllerSource for GamepadController {
    fn poll(&mut self, _slot: u32, _input: &InputState) -> Option<GamepadState> {
        None
    }
}
