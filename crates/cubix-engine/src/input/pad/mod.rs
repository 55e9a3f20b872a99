//! Physical gamepads.
//!
//! With the `gamepad` feature, [`GamepadController`] reads connected pads
//! through gilrs. Without it, opening one always fails so callers fall back
//! to the keyboard the same way they do on a machine with no pad backend.

#[cfg(feature = "gamepad")]
mod real;

#[cfg(feature = "gamepad")]
pub use real::GamepadController;

#[cfg(not(feature = "gamepad"))]
mod stub;

#[cfg(not(feature = "gamepad"))]
pub use stub::GamepadController;

impl GamepadController {
    /// Opens the backend, logging instead of failing when it is unavailable.
    pub fn try_open() -> Option<Self> {
        match Self::new() {
            Ok(pads) => Some(pads),
            Err(e) => {
                log::warn!("gamepads disabled: {e}");
                None
            }
        }
    }
}

#[cfg(all(test, not(feature = "gamepad")))]
mod tests {
    use super::*;
    use crate::error::EngineError;

    #[test]
    fn without_backend_open_is_tolerated() {
        assert!(matches!(
            GamepadController::new(),
            Err(EngineError::ResourceCreation { .. })
        ));
        assert!(GamepadController::try_open().is_none());
    }
}
