use std::collections::HashSet;

use super::types::{InputEvent, Key, KeyState};

/// Current keyboard state for the window.
#[derive(Debug, Default)]
pub struct InputState {
    /// Whether the window is focused.
    pub focused: bool,

    /// Keys currently held.
    pub keys_down: HashSet<Key>,
}

impl InputState {
    /// Applies a window event to the held state.
    pub fn apply_event(&mut self, ev: InputEvent) {
        match ev {
            InputEvent::Focused(f) => {
                self.focused = f;
                if !f {
                    // Avoid stuck keys when focus changes mid-press.
                    self.keys_down.clear();
                }
            }

            InputEvent::Key { key, state, .. } => match state {
                KeyState::Pressed => {
                    self.keys_down.insert(key);
                }
                KeyState::Released => {
                    self.keys_down.remove(&key);
                }
            },
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, state: KeyState, repeat: bool) -> InputEvent {
        InputEvent::Key { key, state, repeat }
    }

    #[test]
    fn repeats_keep_the_key_held() {
        let mut state = InputState::default();

        state.apply_event(key(Key::Enter, KeyState::Pressed, false));
        state.apply_event(key(Key::Enter, KeyState::Pressed, true));
        assert!(state.key_down(Key::Enter));
        assert_eq!(state.keys_down.len(), 1);
    }

    #[test]
    fn release_clears_down_state() {
        let mut state = InputState::default();

        state.apply_event(key(Key::ArrowUp, KeyState::Pressed, false));
        state.apply_event(key(Key::ArrowUp, KeyState::Released, false));
        assert!(!state.key_down(Key::ArrowUp));
    }

    #[test]
    fn stray_release_is_ignored() {
        let mut state = InputState::default();
        state.apply_event(key(Key::Q, KeyState::Released, false));
        assert!(state.keys_down.is_empty());
    }

    #[test]
    fn focus_loss_drops_held_keys() {
        let mut state = InputState::default();

        state.apply_event(InputEvent::Focused(true));
        state.apply_event(key(Key::S, KeyState::Pressed, false));
        state.apply_event(InputEvent::Focused(false));
        assert!(state.keys_down.is_empty());
        assert!(!state.focused);
    }
}
