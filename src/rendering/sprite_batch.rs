//! Immediate-style drawing on top of retained entities.
//!
//! Each frame the logic returns fresh `Drawable` / `HudString` lists. Slot `i` of a list
//! is rendered by pooled entity `i`: existing entities are updated in place, missing ones
//! are spawned, and entities past the end of the list are hidden.
use bevy::prelude::*;
use bevy::sprite::Anchor;
use bevy::window::PrimaryWindow;

use super::content::Content;
use super::coords::{layer_z, screen_to_world, HUD_Z_BASE, SPRITE_Z_BASE};
use crate::core::config::GameConfig;
use crate::logic::{Drawable, GameLogic, GameState, HudString};

/// Drawables get a white tint, HUD text is black.
pub const SPRITE_TINT: Color = Color::WHITE;
pub const HUD_COLOR: Color = Color::BLACK;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSprite {
    pub slot: usize,
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudLabel {
    pub slot: usize,
}

#[derive(Resource, Debug, Default)]
pub struct SpriteBatch {
    sprites: Vec<Entity>,
    labels: Vec<Entity>,
    /// Items drawn by the last frame.
    pub drawn_sprites: usize,
    pub drawn_labels: usize,
}

impl SpriteBatch {
    pub fn sprite_entities(&self) -> &[Entity] {
        &self.sprites
    }

    pub fn label_entities(&self) -> &[Entity] {
        &self.labels
    }
}

fn sprite_for(image: Handle<Image>) -> Sprite {
    Sprite {
        image,
        color: SPRITE_TINT,
        anchor: Anchor::TopLeft,
        ..default()
    }
}

fn sprite_transform(d: &Drawable, slot: usize, viewport: Vec2) -> Transform {
    let world = screen_to_world(d.position, viewport);
    Transform::from_xyz(world.x, world.y, layer_z(SPRITE_Z_BASE, slot))
}

fn label_transform(h: &HudString, slot: usize, viewport: Vec2) -> Transform {
    let world = screen_to_world(h.position, viewport);
    Transform::from_xyz(world.x, world.y, layer_z(HUD_Z_BASE, slot))
}

pub fn draw_frame<L: GameLogic>(
    mut commands: Commands,
    logic: Res<L>,
    state: Option<Res<GameState<L::State>>>,
    cfg: Res<GameConfig>,
    asset_server: Res<AssetServer>,
    mut content: ResMut<Content>,
    mut batch: ResMut<SpriteBatch>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut sprites: Query<
        (&mut Sprite, &mut Transform, &mut Visibility),
        (With<BatchSprite>, Without<HudLabel>),
    >,
    mut labels: Query<
        (&mut Text2d, &mut TextFont, &mut Transform, &mut Visibility),
        (With<HudLabel>, Without<BatchSprite>),
    >,
) {
    let Some(state) = state else {
        return;
    };
    let viewport = windows
        .single()
        .map(|w| w.size())
        .unwrap_or(Vec2::new(cfg.window.width, cfg.window.height));
    let drawables = logic.draw_state(&state.0);
    let hud = logic.draw_hud(&state.0);

    for (slot, d) in drawables.iter().enumerate() {
        let image = content.texture(&d.image, &asset_server);
        let transform = sprite_transform(d, slot, viewport);
        let pooled = match batch.sprites.get(slot) {
            Some(e) => sprites.get_mut(*e).ok(),
            None => None,
        };
        if let Some((mut sprite, mut tf, mut vis)) = pooled {
            if sprite.image != image {
                sprite.image = image;
            }
            tf.set_if_neq(transform);
            vis.set_if_neq(Visibility::Inherited);
            continue;
        }
        let entity = commands
            .spawn((
                Name::new(format!("BatchSprite{slot}")),
                sprite_for(image),
                transform,
                BatchSprite { slot },
            ))
            .id();
        if slot < batch.sprites.len() {
            // Pooled entity vanished (despawned elsewhere); replace it.
            batch.sprites[slot] = entity;
        } else {
            batch.sprites.push(entity);
        }
    }
    for entity in batch.sprites.iter().skip(drawables.len()) {
        if let Ok((_, _, mut vis)) = sprites.get_mut(*entity) {
            vis.set_if_neq(Visibility::Hidden);
        }
    }

    let font_size = cfg.content.font_size;
    for (slot, h) in hud.iter().enumerate() {
        let transform = label_transform(h, slot, viewport);
        let pooled = match batch.labels.get(slot) {
            Some(e) => labels.get_mut(*e).ok(),
            None => None,
        };
        if let Some((mut text, mut font, mut tf, mut vis)) = pooled {
            if text.0 != h.text {
                text.0.clone_from(&h.text);
            }
            if font.font_size != font_size {
                font.font_size = font_size;
            }
            tf.set_if_neq(transform);
            vis.set_if_neq(Visibility::Inherited);
            continue;
        }
        let entity = commands
            .spawn((
                Name::new(format!("HudLabel{slot}")),
                Text2d::new(h.text.clone()),
                TextFont {
                    font: content.font(),
                    font_size,
                    ..default()
                },
                TextColor(HUD_COLOR),
                Anchor::TopLeft,
                transform,
                HudLabel { slot },
            ))
            .id();
        if slot < batch.labels.len() {
            batch.labels[slot] = entity;
        } else {
            batch.labels.push(entity);
        }
    }
    for entity in batch.labels.iter().skip(hud.len()) {
        if let Ok((_, _, _, mut vis)) = labels.get_mut(*entity) {
            vis.set_if_neq(Visibility::Hidden);
        }
    }

    batch.drawn_sprites = drawables.len();
    batch.drawn_labels = hud.len();
}
