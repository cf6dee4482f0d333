//! Game-logic seam.
//!
//! The adapter knows nothing about the game beyond [`GameLogic`]: it hands the logic a
//! keyboard snapshot, a mouse snapshot and the elapsed seconds each frame, keeps whatever
//! state comes back, and renders the [`Drawable`] / [`HudString`] sequences the logic
//! derives from that state.
//!
//! All positions are screen coordinates: origin at the window's top-left corner, x to the
//! right, y downwards, in logical pixels.

pub mod ball_game;
pub mod input;

use bevy::prelude::*;

use crate::core::config::GameConfig;

pub use ball_game::{BallGame, BallGameState, Phase};
pub use input::{ButtonState, KeyboardSnapshot, MouseSnapshot};

/// A texture to draw this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawable {
    /// Content key of the texture (e.g. `"ball"` -> `ball.png` under the content root).
    pub image: String,
    /// Top-left corner of the texture on screen.
    pub position: Vec2,
}

impl Drawable {
    pub fn new(image: impl Into<String>, position: Vec2) -> Self {
        Self {
            image: image.into(),
            position,
        }
    }
}

/// A line of HUD text to draw this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct HudString {
    pub text: String,
    /// Top-left corner of the text block on screen.
    pub position: Vec2,
}

impl HudString {
    pub fn new(text: impl Into<String>, position: Vec2) -> Self {
        Self {
            text: text.into(),
            position,
        }
    }
}

/// Game logic driven by the adapter.
///
/// Implementations own every game rule. `update_state` must be pure: it reads the
/// snapshots, `dt` and the previous state, and returns the next state without touching
/// the engine.
pub trait GameLogic: Resource {
    type State: Send + Sync + 'static;

    /// Builds the logic with its tuning. Called at plugin build and again whenever the
    /// config resource changes (hot reload); the current state survives a rebuild.
    fn from_config(config: &GameConfig) -> Self
    where
        Self: Sized;

    fn initial_state(&self) -> Self::State;

    fn update_state(
        &self,
        keyboard: &KeyboardSnapshot,
        mouse: &MouseSnapshot,
        dt: f32,
        state: &Self::State,
    ) -> Self::State;

    /// Textures to draw, back to front.
    fn draw_state(&self, state: &Self::State) -> Vec<Drawable>;

    /// HUD lines, drawn above every drawable, back to front.
    fn draw_hud(&self, state: &Self::State) -> Vec<HudString>;
}

/// The value most recently returned by the logic.
#[derive(Resource, Debug, Clone)]
pub struct GameState<S: Send + Sync + 'static>(pub S);
