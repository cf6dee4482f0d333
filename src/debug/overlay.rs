#[cfg(feature = "debug")]
use bevy::prelude::*;
// Bevy 0.16 text API uses components: Text, TextFont, TextColor, Node for UI text.
#[cfg(feature = "debug")]
use super::modes::{DebugState, DebugStats};
#[cfg(feature = "debug")]
use crate::core::config::GameConfig;
#[cfg(feature = "debug")]
use crate::rendering::Content;

#[cfg(feature = "debug")]
#[derive(Component)]
pub(crate) struct DebugOverlayText;

#[cfg(feature = "debug")]
pub fn debug_overlay_spawn(mut commands: Commands, content: Res<Content>) {
    // Bottom-left so it does not cover the game's own HUD along the top edge.
    commands.spawn((
        Name::new("DebugOverlay"),
        Text::new(String::new()),
        TextFont {
            font: content.font(),
            font_size: 14.0,
            ..Default::default()
        },
        TextColor(Color::WHITE),
        bevy::ui::Node {
            position_type: bevy::ui::PositionType::Absolute,
            bottom: Val::Px(4.0),
            left: Val::Px(6.0),
            ..Default::default()
        },
        DebugOverlayText,
    ));
}

#[cfg(feature = "debug")]
pub(crate) fn debug_overlay_update(
    state: Res<DebugState>,
    stats: Res<DebugStats>,
    cfg: Res<GameConfig>,
    mut q_text: Query<&mut Text, With<DebugOverlayText>>,
) {
    let Ok(mut text) = q_text.single_mut() else {
        return;
    };
    if !state.overlay_visible {
        if !text.0.is_empty() {
            text.0.clear();
        }
        return;
    }
    if !(state.is_changed() || stats.is_changed()) {
        return;
    }
    text.0 = format!(
        "FPS {:.1} ft {:.1}ms sprites {} hud {} textures {} mode {:?}\nwindow {:.0}x{:.0} content '{}'  [F3 overlay, F4 mode]",
        stats.fps,
        stats.frame_time_ms,
        stats.sprites,
        stats.hud_strings,
        stats.cached_textures,
        state.mode,
        cfg.window.width,
        cfg.window.height,
        cfg.content.root_directory,
    );
}
