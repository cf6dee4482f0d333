//! Per-frame input snapshots handed to [`GameLogic::update_state`](super::GameLogic).
use bevy::prelude::*;
use std::collections::HashSet;

/// Units added to the cumulative scroll value per wheel notch.
pub const WHEEL_DELTA: i32 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonState {
    #[default]
    Released,
    Pressed,
}

impl ButtonState {
    pub fn from_pressed(pressed: bool) -> Self {
        if pressed {
            Self::Pressed
        } else {
            Self::Released
        }
    }

    pub fn is_pressed(self) -> bool {
        self == Self::Pressed
    }
}

/// Keys held down during the frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardSnapshot {
    pressed: HashSet<KeyCode>,
}

impl KeyboardSnapshot {
    pub fn from_keys(keys: impl IntoIterator<Item = KeyCode>) -> Self {
        Self {
            pressed: keys.into_iter().collect(),
        }
    }

    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    pub fn is_key_up(&self, key: KeyCode) -> bool {
        !self.is_key_down(key)
    }

    pub fn any_down(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|k| self.is_key_down(*k))
    }

    pub fn pressed_keys(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.pressed.iter().copied()
    }
}

/// Cursor position, buttons and cumulative wheel values for the frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MouseSnapshot {
    pub x: f32,
    pub y: f32,
    pub left: ButtonState,
    pub middle: ButtonState,
    pub right: ButtonState,
    pub x1: ButtonState,
    pub x2: ButtonState,
    /// Sum of vertical wheel movement since start, [`WHEEL_DELTA`] per notch.
    pub scroll_wheel_value: i32,
    pub horizontal_scroll_wheel_value: i32,
}

impl MouseSnapshot {
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn at(position: Vec2) -> Self {
        Self {
            x: position.x,
            y: position.y,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyboard_snapshot_queries() {
        let kb = KeyboardSnapshot::from_keys([KeyCode::Space, KeyCode::ArrowLeft]);
        assert!(kb.is_key_down(KeyCode::Space));
        assert!(kb.is_key_up(KeyCode::ArrowRight));
        assert!(kb.any_down(&[KeyCode::KeyA, KeyCode::ArrowLeft]));
        assert_eq!(kb.pressed_keys().count(), 2);
    }

    #[test]
    fn default_mouse_is_released_at_origin() {
        let m = MouseSnapshot::default();
        assert_eq!(m.position(), Vec2::ZERO);
        assert!(!m.left.is_pressed());
        assert_eq!(m.scroll_wheel_value, 0);
    }
}
