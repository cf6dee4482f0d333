use crate::core::config::GameConfig;
use bevy::prelude::*;

/// Sends an AppExit event when Escape is pressed and `window.exit_on_escape` is set.
pub fn exit_on_escape(
    keys: Res<ButtonInput<KeyCode>>,
    cfg: Res<GameConfig>,
    mut exit: EventWriter<AppExit>,
) {
    if cfg.window.exit_on_escape && keys.just_pressed(KeyCode::Escape) {
        info!(target: "session", "Escape pressed, exiting");
        exit.write(AppExit::Success);
    }
}

pub struct ExitOnEscapePlugin;

impl Plugin for ExitOnEscapePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, exit_on_escape);
    }
}
