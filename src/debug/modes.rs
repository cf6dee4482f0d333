#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugRenderMode {
    /// Plain frame, as the game draws it.
    Normal,
    /// Gizmo outlines around every visible batch sprite.
    SpriteOutlines,
}

#[cfg(feature = "debug")]
impl DebugRenderMode {
    pub fn next(self) -> Self {
        match self {
            Self::Normal => Self::SpriteOutlines,
            Self::SpriteOutlines => Self::Normal,
        }
    }
}

#[cfg(feature = "debug")]
#[derive(Resource)]
pub struct DebugState {
    pub mode: DebugRenderMode,
    pub last_mode: DebugRenderMode,
    pub overlay_visible: bool,
    pub log_interval: f32,
    pub time_accum: f32,
    pub frame_counter: u64,
}

#[cfg(feature = "debug")]
impl Default for DebugState {
    fn default() -> Self {
        Self {
            mode: DebugRenderMode::Normal,
            last_mode: DebugRenderMode::Normal,
            overlay_visible: false,
            log_interval: 1.0,
            time_accum: 0.0,
            frame_counter: 0,
        }
    }
}

#[cfg(feature = "debug")]
#[derive(Resource, Default, Debug, Clone)]
pub struct DebugStats {
    pub fps: f32,
    pub frame_time_ms: f32,
    pub sprites: usize,
    pub hud_strings: usize,
    pub cached_textures: usize,
}
