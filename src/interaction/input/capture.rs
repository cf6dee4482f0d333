//! Builds the per-frame keyboard / mouse snapshots the game logic consumes.
use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::logic::input::{ButtonState, KeyboardSnapshot, MouseSnapshot, WHEEL_DELTA};

/// Snapshots for the current frame, rebuilt in `InputCaptureSet` every `Update`.
#[derive(Resource, Debug, Clone, Default)]
pub struct FrameInput {
    pub keyboard: KeyboardSnapshot,
    pub mouse: MouseSnapshot,
}

/// Mouse data that must outlive a single frame.
#[derive(Resource, Debug, Clone, Default)]
pub struct MouseTracker {
    /// Last cursor position seen inside the window.
    pub last_position: Vec2,
    pub scroll: f32,
    pub horizontal_scroll: f32,
}

/// Converts one wheel event delta into cumulative scroll units.
pub fn wheel_units(unit: MouseScrollUnit, delta: f32) -> f32 {
    match unit {
        MouseScrollUnit::Line => delta * WHEEL_DELTA as f32,
        MouseScrollUnit::Pixel => delta,
    }
}

pub fn capture_frame_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut wheel_evr: EventReader<MouseWheel>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut tracker: ResMut<MouseTracker>,
    mut frame: ResMut<FrameInput>,
) {
    for ev in wheel_evr.read() {
        tracker.scroll += wheel_units(ev.unit, ev.y);
        tracker.horizontal_scroll += wheel_units(ev.unit, ev.x);
    }
    if let Some(pos) = windows.single().ok().and_then(|w| w.cursor_position()) {
        tracker.last_position = pos;
    }

    let button = |b: MouseButton| ButtonState::from_pressed(mouse_buttons.pressed(b));
    frame.keyboard = KeyboardSnapshot::from_keys(keyboard.get_pressed().copied());
    frame.mouse = MouseSnapshot {
        x: tracker.last_position.x,
        y: tracker.last_position.y,
        left: button(MouseButton::Left),
        middle: button(MouseButton::Middle),
        right: button(MouseButton::Right),
        x1: button(MouseButton::Back),
        x2: button(MouseButton::Forward),
        scroll_wheel_value: tracker.scroll.round() as i32,
        horizontal_scroll_wheel_value: tracker.horizontal_scroll.round() as i32,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_notches_scale_to_wheel_delta() {
        assert_eq!(wheel_units(MouseScrollUnit::Line, 1.0), 120.0);
        assert_eq!(wheel_units(MouseScrollUnit::Line, -2.0), -240.0);
        assert_eq!(wheel_units(MouseScrollUnit::Pixel, 37.5), 37.5);
    }
}
