use gilrs::{Button, EventType, Gilrs};

use crate::error::{EngineError, EngineResult};
use crate::input::{ControllerSource, GamepadButtons, GamepadState, InputState};

/// Buttons read from a connected pad, in XInput terms.
const MAPPED: [Button; 12] = [
    Button::DPadUp,
    Button::DPadDown,
    Button::DPadLeft,
    Button::DPadRight,
    Button::South,
    Button::East,
    Button::West,
    Button::North,
    Button::Start,
    Button::Select,
    Button::LeftTrigger,
    Button::RightTrigger,
];

/// Gamepads seen by gilrs. Slot `n` is the `n`-th connected pad.
pub struct GamepadController {
    gilrs: Gilrs,
}

impl GamepadController {
    pub fn new() -> EngineResult<Self> {
        let gilrs = Gilrs::new().map_err(|e| EngineError::resource("gamepad backend", e))?;
        for (_id, pad) in gilrs.gamepads() {
            log::info!("gamepad connected: {}", pad.name());
        }
        Ok(Self { gilrs })
    }
}

impl ControllerSource for GamepadController {
    fn poll(&mut self, slot: u32, _input: &InputState) -> Option<GamepadState> {
        // Events update gilrs' cached button state.
        while let Some(event) = self.gilrs.next_event() {
            match event.event {
                EventType::Connected => log::info!("gamepad {:?} connected", event.id),
                EventType::Disconnected => log::info!("gamepad {:?} disconnected", event.id),
                _ => {}
            }
        }

        let (_id, pad) = self.gilrs.gamepads().nth(slot as usize)?;
        let mut buttons = GamepadButtons::NONE;
        for button in MAPPED {
            if pad.is_pressed(button) {
                buttons |= map_button(button);
            }
        }
        Some(GamepadState { buttons })
    }
}

/// Positional mapping: the bottom face button is A, the right one B.
fn map_button(button: Button) -> GamepadButtons {
    match button {
        Button::DPadUp => GamepadButtons::DPAD_UP,
        Button::DPadDown => GamepadButtons::DPAD_DOWN,
        Button::DPadLeft => GamepadButtons::DPAD_LEFT,
        Button::DPadRight => GamepadButtons::DPAD_RIGHT,
        Button::South => GamepadButtons::A,
        Button::East => GamepadButtons::B,
        Button::West => GamepadButtons::X,
        Button::North => GamepadButtons::Y,
        Button::Start => GamepadButtons::START,
        Button::Select => GamepadButtons::BACK,
        Button::LeftTrigger => GamepadButtons::LEFT_SHOULDER,
        Button::RightTrigger => GamepadButtons::RIGHT_SHOULDER,
        _ => GamepadButtons::NONE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_buttons_map_to_xinput_bits() {
        assert_eq!(map_button(Button::DPadUp), GamepadButtons::DPAD_UP);
        assert_eq!(map_button(Button::DPadDown), GamepadButtons::DPAD_DOWN);
        assert_eq!(map_button(Button::South), GamepadButtons::A);
        assert_eq!(map_button(Button::East), GamepadButtons::B);
        assert_eq!(map_button(Button::Start), GamepadButtons::START);
        assert_eq!(map_button(Button::Select), GamepadButtons::BACK);
    }

    #[test]
    fn every_read_button_has_its_own_bit() {
        let mut seen = GamepadButtons::NONE;
        for button in MAPPED {
            let bit = map_button(button);
            assert!(!bit.is_empty(), "{button:?}");
            assert!(!seen.contains(bit), "{button:?}");
            seen |= bit;
        }
    }

    #[test]
    fn unmapped_buttons_are_ignored() {
        assert!(map_button(Button::Mode).is_empty());
        assert!(map_button(Button::LeftThumb).is_empty());
        assert!(map_button(Button::LeftTrigger2).is_empty());
    }

    #[test]
    fn missing_slot_is_disconnected() {
        // CI machines may lack a gamepad backend entirely.
        let Ok(mut pads) = GamepadController::new() else {
            return;
        };
        assert!(pads.poll(u32::MAX, &InputState::default()).is_none());
    }
}
