//! Keyboard handling
//!
//! Turns raw key down/up notifications into one [`TickInput`] per frame.
//! Lane changes fire once per physical press (auto-repeat is ignored); jump
//! is reported for as long as the key is held.

use crate::sim::TickInput;

/// Game actions bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Jump,
}

impl Key {
    /// Map a DOM `KeyboardEvent.code` to an action
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" | "KeyA" => Some(Key::Left),
            "ArrowRight" | "KeyD" => Some(Key::Right),
            "ArrowUp" | "Space" | "KeyW" => Some(Key::Jump),
            _ => None,
        }
    }
}

/// Held keys plus presses not yet consumed by a tick
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    left_held: bool,
    right_held: bool,
    jump_held: bool,
    left_pressed: bool,
    right_pressed: bool,
}

impl KeyboardState {
    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Left => {
                if !self.left_held {
                    self.left_pressed = true;
                }
                self.left_held = true;
            }
            Key::Right => {
                if !self.right_held {
                    self.right_pressed = true;
                }
                self.right_held = true;
            }
            Key::Jump => self.jump_held = true,
        }
    }

    /// Releasing keeps an unconsumed press, so a tap shorter than a frame still counts
    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Left => self.left_held = false,
            Key::Right => self.right_held = false,
            Key::Jump => self.jump_held = false,
        }
    }

    /// Forget everything (window lost focus)
    pub fn release_all(&mut self) {
        *self = Self::default();
    }

    /// Input for the next tick; pending presses are consumed
    pub fn take_input(&mut self) -> TickInput {
        TickInput {
            move_left: std::mem::take(&mut self.left_pressed),
            move_right: std::mem::take(&mut self.right_pressed),
            jump: self.jump_held,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_codes() {
        assert_eq!(Key::from_code("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_code("KeyA"), Some(Key::Left));
        assert_eq!(Key::from_code("KeyD"), Some(Key::Right));
        assert_eq!(Key::from_code("Space"), Some(Key::Jump));
        assert_eq!(Key::from_code("KeyW"), Some(Key::Jump));
        assert_eq!(Key::from_code("KeyS"), None);
    }

    #[test]
    fn test_press_is_edge_triggered() {
        let mut keys = KeyboardState::default();
        keys.key_down(Key::Left);
        assert!(keys.take_input().move_left);

        // Held (auto-repeat) does not re-trigger
        keys.key_down(Key::Left);
        assert!(!keys.take_input().move_left);
        assert!(!keys.take_input().move_left);

        keys.key_up(Key::Left);
        keys.key_down(Key::Left);
        assert!(keys.take_input().move_left);
    }

    #[test]
    fn test_tap_between_frames_is_not_lost() {
        let mut keys = KeyboardState::default();
        keys.key_down(Key::Right);
        keys.key_up(Key::Right);
        let input = keys.take_input();
        assert!(input.move_right);
        assert!(!input.move_left);
    }

    #[test]
    fn test_jump_is_level_triggered() {
        let mut keys = KeyboardState::default();
        keys.key_down(Key::Jump);
        assert!(keys.take_input().jump);
        assert!(keys.take_input().jump);
        keys.key_up(Key::Jump);
        assert!(!keys.take_input().jump);
    }

    #[test]
    fn test_release_all_clears_pending() {
        let mut keys = KeyboardState::default();
        keys.key_down(Key::Left);
        keys.key_down(Key::Jump);
        keys.release_all();
        assert_eq!(keys.take_input(), TickInput::default());
    }
}
