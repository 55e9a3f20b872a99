use std::ops::{BitOr, BitOrAssign};

use super::state::InputState;
use super::types::Key;

/// Controller button bitmask. Bit values follow the XInput layout.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct GamepadButtons(u16);

impl GamepadButtons {
    pub const NONE: Self = Self(0);
    pub const DPAD_UP: Self = Self(0x0001);
    pub const DPAD_DOWN: Self = Self(0x0002);
    pub const DPAD_LEFT: Self = Self(0x0004);
    pub const DPAD_RIGHT: Self = Self(0x0008);
    pub const START: Self = Self(0x0010);
    pub const BACK: Self = Self(0x0020);
    pub const LEFT_SHOULDER: Self = Self(0x0100);
    pub const RIGHT_SHOULDER: Self = Self(0x0200);
    pub const A: Self = Self(0x1000);
    pub const B: Self = Self(0x2000);
    pub const X: Self = Self(0x4000);
    pub const Y: Self = Self(0x8000);

    #[inline]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn bits(self) -> u16 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when every bit of `other` is set.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }
}

impl BitOr for GamepadButtons {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for GamepadButtons {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// One controller sample.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct GamepadState {
    pub buttons: GamepadButtons,
}

/// Source of controller samples, polled once per frame.
pub trait ControllerSource {
    /// Samples the controller in `slot`. `None` means nothing is connected there.
    ///
    /// `input` is the window's keyboard state, for sources that emulate a pad.
    fn poll(&mut self, slot: u32, input: &InputState) -> Option<GamepadState>;
}

/// Press detection by comparing this frame's mask against the previous one.
///
/// Holding a button reports a press only on the first frame it is down.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct ButtonEdges {
    previous: GamepadButtons,
    current: GamepadButtons,
}

impl ButtonEdges {
    /// Advances to the next sample. A disconnected controller counts as
    /// nothing held.
    pub fn update(&mut self, sample: Option<GamepadState>) {
        self.previous = self.current;
        self.current = sample.map(|s| s.buttons).unwrap_or_default();
    }

    /// Buttons held in the latest sample.
    pub fn held(&self) -> GamepadButtons {
        self.current
    }

    /// True if `button` went from released to held with the latest sample.
    pub fn pressed(&self, button: GamepadButtons) -> bool {
        self.current.contains(button) && !self.previous.contains(button)
    }

    /// True if `button` went from held to released with the latest sample.
    pub fn released(&self, button: GamepadButtons) -> bool {
        !self.current.contains(button) && self.previous.contains(button)
    }
}

/// Emulates a controller in one slot from the keyboard.
///
/// Default bindings: arrows/WASD → D-pad, Enter/Space → A, Escape → B,
/// Backspace → Back, Tab → Start, Q/E → shoulders.
#[derive(Debug, Clone)]
pub struct KeyboardController {
    slot: u32,
    bindings: Vec<(Key, GamepadButtons)>,
}

impl KeyboardController {
    pub fn new(slot: u32) -> Self {
        let bindings = vec![
            (Key::ArrowUp, GamepadButtons::DPAD_UP),
            (Key::W, GamepadButtons::DPAD_UP),
            (Key::ArrowDown, GamepadButtons::DPAD_DOWN),
            (Key::S, GamepadButtons::DPAD_DOWN),
            (Key::ArrowLeft, GamepadButtons::DPAD_LEFT),
            (Key::A, GamepadButtons::DPAD_LEFT),
            (Key::ArrowRight, GamepadButtons::DPAD_RIGHT),
            (Key::D, GamepadButtons::DPAD_RIGHT),
            (Key::Enter, GamepadButtons::A),
            (Key::Space, GamepadButtons::A),
            (Key::Escape, GamepadButtons::B),
            (Key::Backspace, GamepadButtons::BACK),
            (Key::Tab, GamepadButtons::START),
            (Key::Q, GamepadButtons::LEFT_SHOULDER),
            (Key::E, GamepadButtons::RIGHT_SHOULDER),
        ];
        Self { slot, bindings }
    }

}

impl Default for KeyboardController {
    fn default() -> Self {
        Self::new(0)
    }
}

impl ControllerSource for KeyboardController {
    fn poll(&mut self, slot: u32, input: &InputState) -> Option<GamepadState> {
        if slot != self.slot {
            return None;
        }

        let mut buttons = GamepadButtons::NONE;
        for (key, button) in &self.bindings {
            if input.key_down(*key) {
                buttons |= *button;
            }
        }
        Some(GamepadState { buttons })
    }
}

/// Several sources tried in order; the first one connected in a slot wins.
///
/// Used to put a real gamepad ahead of the keyboard fallback.
#[derive(Default)]
pub struct ControllerChain {
    sources: Vec<Box<dyn ControllerSource>>,
}

impl ControllerChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, source: impl ControllerSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }
}

impl ControllerSource for ControllerChain {
    fn poll(&mut self, slot: u32, input: &InputState) -> Option<GamepadState> {
        self.sources.iter_mut().find_map(|s| s.poll(slot, input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputEvent, KeyState};

    fn held(keys: &[Key]) -> InputState {
        let mut state = InputState::default();
        for &key in keys {
            state.apply_event(InputEvent::Key { key, state: KeyState::Pressed, repeat: false });
        }
        state
    }

    fn sample(buttons: GamepadButtons) -> Option<GamepadState> {
        Some(GamepadState { buttons })
    }

    // ── bitmask ───────────────────────────────────────────────────────────

    #[test]
    fn contains_requires_all_bits() {
        let mask = GamepadButtons::A | GamepadButtons::DPAD_UP;
        assert!(mask.contains(GamepadButtons::A));
        assert!(mask.contains(GamepadButtons::A | GamepadButtons::DPAD_UP));
        assert!(!mask.contains(GamepadButtons::A | GamepadButtons::B));
        assert!(!mask.contains(GamepadButtons::NONE));
        assert_eq!(mask.bits(), 0x1001);
    }

    // ── edges ─────────────────────────────────────────────────────────────

    #[test]
    fn held_button_presses_once() {
        let mut edges = ButtonEdges::default();

        edges.update(sample(GamepadButtons::DPAD_DOWN));
        assert!(edges.pressed(GamepadButtons::DPAD_DOWN));

        edges.update(sample(GamepadButtons::DPAD_DOWN));
        assert!(!edges.pressed(GamepadButtons::DPAD_DOWN));
        assert!(edges.held().contains(GamepadButtons::DPAD_DOWN));

        edges.update(sample(GamepadButtons::NONE));
        assert!(edges.released(GamepadButtons::DPAD_DOWN));

        edges.update(sample(GamepadButtons::DPAD_DOWN));
        assert!(edges.pressed(GamepadButtons::DPAD_DOWN));
    }

    #[test]
    fn disconnect_counts_as_release() {
        let mut edges = ButtonEdges::default();
        edges.update(sample(GamepadButtons::A));
        edges.update(None);
        assert!(edges.released(GamepadButtons::A));
        assert!(edges.held().is_empty());
    }

    // ── keyboard emulation ────────────────────────────────────────────────

    #[test]
    fn keyboard_maps_default_bindings() {
        let mut pad = KeyboardController::default();
        let state = pad.poll(0, &held(&[Key::ArrowDown, Key::Enter])).unwrap();
        assert_eq!(state.buttons, GamepadButtons::DPAD_DOWN | GamepadButtons::A);

        let state = pad.poll(0, &held(&[Key::W])).unwrap();
        assert_eq!(state.buttons, GamepadButtons::DPAD_UP);
    }

    #[test]
    fn other_slots_are_disconnected() {
        let mut pad = KeyboardController::new(0);
        assert!(pad.poll(1, &held(&[Key::Enter])).is_none());
        assert!(pad.poll(0, &InputState::default()).unwrap().buttons.is_empty());
    }

    // ── chain ─────────────────────────────────────────────────────────────

    /// Pad that is either unplugged or holds a fixed mask.
    struct FixedPad {
        buttons: Option<GamepadButtons>,
    }

    impl ControllerSource for FixedPad {
        fn poll(&mut self, _slot: u32, _input: &InputState) -> Option<GamepadState> {
            self.buttons.map(|buttons| GamepadState { buttons })
        }
    }

    #[test]
    fn chain_prefers_the_first_connected_source() {
        let mut chain = ControllerChain::new()
            .with(FixedPad { buttons: Some(GamepadButtons::B) })
            .with(KeyboardController::default());

        let state = chain.poll(0, &held(&[Key::Enter])).unwrap();
        assert_eq!(state.buttons, GamepadButtons::B);
    }

    #[test]
    fn chain_falls_back_when_the_pad_is_unplugged() {
        let mut chain = ControllerChain::new()
            .with(FixedPad { buttons: None })
            .with(KeyboardController::default());

        let state = chain.poll(0, &held(&[Key::Enter])).unwrap();
        assert_eq!(state.buttons, GamepadButtons::A);
        assert!(chain.poll(1, &held(&[Key::Enter])).is_none());
    }

    #[test]
    fn empty_chain_is_disconnected() {
        let mut chain = ControllerChain::new();
        assert!(chain.poll(0, &InputState::default()).is_none());
    }
}
