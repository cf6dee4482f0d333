//! Screen space (top-left origin, y down) to 2D world space (centre origin, y up).
use bevy::prelude::*;

pub const SPRITE_Z_BASE: f32 = 0.0;
/// Every HUD string sits above every sprite.
pub const HUD_Z_BASE: f32 = 500.0;
/// Depth between consecutive items of one sequence; later items draw on top.
pub const Z_STEP: f32 = 0.001;

pub fn screen_to_world(screen: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new(screen.x - viewport.x * 0.5, viewport.y * 0.5 - screen.y)
}

pub fn layer_z(base: f32, slot: usize) -> f32 {
    base + slot as f32 * Z_STEP
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_to_viewport_edges() {
        let vp = Vec2::new(800.0, 480.0);
        assert_eq!(screen_to_world(Vec2::ZERO, vp), Vec2::new(-400.0, 240.0));
        assert_eq!(screen_to_world(vp, vp), Vec2::new(400.0, -240.0));
        assert_eq!(screen_to_world(vp * 0.5, vp), Vec2::ZERO);
    }

    #[test]
    fn later_slots_draw_on_top_and_hud_above_sprites() {
        assert!(layer_z(SPRITE_Z_BASE, 1) > layer_z(SPRITE_Z_BASE, 0));
        assert!(layer_z(HUD_Z_BASE, 0) > layer_z(SPRITE_Z_BASE, 10_000));
    }
}
