#[cfg(feature = "debug")]
use super::modes::DebugState;
#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
pub const TOGGLE_OVERLAY: KeyCode = KeyCode::F3;
#[cfg(feature = "debug")]
pub const CYCLE_MODE: KeyCode = KeyCode::F4;

#[cfg(feature = "debug")]
pub fn debug_key_input_system(keys: Res<ButtonInput<KeyCode>>, mut state: ResMut<DebugState>) {
    if keys.just_pressed(CYCLE_MODE) {
        state.last_mode = state.mode;
        state.mode = state.mode.next();
        info!(
            "MODE_CHANGE from={:?} to={:?} frame={}",
            state.last_mode, state.mode, state.frame_counter
        );
    }
    if keys.just_pressed(TOGGLE_OVERLAY) {
        state.overlay_visible = !state.overlay_visible;
    }
}
