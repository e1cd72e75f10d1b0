use std::collections::HashSet;

use super::types::{InputEvent, Key, KeyState};

/// Current input state for a single window.
///
/// Answers "is this key held right now", the same question a polling
/// `get_key` API answers once per frame.
#[derive(Debug, Default)]
pub struct InputState {
    keys_down: HashSet<Key>,
    pub focused: bool,
}

impl InputState {
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::Key { key, state, .. } => match state {
                KeyState::Pressed => {
                    self.keys_down.insert(*key);
                }
                KeyState::Released => {
                    self.keys_down.remove(key);
                }
            },

            InputEvent::Focused(focused) => {
                self.focused = *focused;
                // Releases are not delivered to unfocused windows.
                if !focused {
                    self.keys_down.clear();
                }
            }
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }
}
