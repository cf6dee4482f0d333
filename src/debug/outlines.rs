#[cfg(feature = "debug")]
use super::modes::{DebugRenderMode, DebugState};
#[cfg(feature = "debug")]
use crate::rendering::BatchSprite;
#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
pub fn debug_sprite_outlines(
    state: Res<DebugState>,
    images: Res<Assets<Image>>,
    q_sprites: Query<(&Sprite, &GlobalTransform, &ViewVisibility), With<BatchSprite>>,
    mut gizmos: Gizmos,
) {
    if state.mode != DebugRenderMode::SpriteOutlines {
        return;
    }
    for (sprite, tf, vis) in &q_sprites {
        if !vis.get() {
            continue;
        }
        let Some(size) = images.get(&sprite.image).map(|i| i.size_f32()) else {
            continue;
        };
        // Sprites are anchored top-left.
        let top_left = tf.translation().truncate();
        let center = top_left + Vec2::new(size.x * 0.5, -size.y * 0.5);
        gizmos.rect_2d(Isometry2d::from_translation(center), size, Color::srgb(1.0, 1.0, 0.2));
    }
}
