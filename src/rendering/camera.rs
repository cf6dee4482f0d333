use bevy::prelude::*;

use crate::core::config::GameConfig;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera)
            .add_systems(Update, apply_clear_color);
    }
}

fn setup_camera(mut commands: Commands, cfg: Res<GameConfig>) {
    // One world unit per logical pixel, origin at the window centre.
    commands.spawn((Name::new("MainCamera"), Camera2d));
    commands.insert_resource(ClearColor(cfg.content.clear_color.to_color()));
}

/// Keeps the clear colour in sync with hot-reloaded config.
fn apply_clear_color(cfg: Res<GameConfig>, clear: Option<ResMut<ClearColor>>) {
    if !cfg.is_changed() {
        return;
    }
    if let Some(mut clear) = clear {
        let color = cfg.content.clear_color.to_color();
        if clear.0 != color {
            clear.0 = color;
        }
    }
}
