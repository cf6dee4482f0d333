#![cfg(feature = "debug")]
use bevy::prelude::*;
use ball_game::debug::keys::{debug_key_input_system, CYCLE_MODE, TOGGLE_OVERLAY};
use ball_game::debug::{DebugRenderMode, DebugState};

fn press(app: &mut App, key: KeyCode) {
    let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    input.reset_all();
    input.press(key);
}

#[test]
fn mode_cycles_and_overlay_toggles() {
    let mut app = App::new();
    app.insert_resource(ButtonInput::<KeyCode>::default());
    app.init_resource::<DebugState>();
    app.add_systems(Update, debug_key_input_system);

    press(&mut app, CYCLE_MODE);
    app.update();
    let state = app.world().resource::<DebugState>();
    assert_eq!(state.mode, DebugRenderMode::SpriteOutlines);
    assert_eq!(state.last_mode, DebugRenderMode::Normal);
    assert!(!state.overlay_visible);

    press(&mut app, CYCLE_MODE);
    app.update();
    assert_eq!(app.world().resource::<DebugState>().mode, DebugRenderMode::Normal);

    press(&mut app, TOGGLE_OVERLAY);
    app.update();
    assert!(app.world().resource::<DebugState>().overlay_visible);
}
