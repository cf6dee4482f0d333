//! Paddle-and-ball game used as the default [`GameLogic`].
//!
//! Field size equals the configured window size. Everything here works in screen
//! coordinates (top-left origin, y down) and positions are top-left corners.
use bevy::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::{Drawable, GameLogic, HudString, KeyboardSnapshot, MouseSnapshot};
use crate::core::config::{BallGameConfig, GameConfig};

/// Largest simulated step; longer frames are truncated rather than tunnelling.
const MAX_STEP_SECS: f32 = 0.1;
/// Bounce angle from vertical when the ball hits the very edge of the paddle.
const MAX_BOUNCE_ANGLE: f32 = 1.05;
/// Widest serve angle from vertical; larger or non-finite spreads are clamped to this.
const MAX_SERVE_SPREAD: f32 = 1.5;
const HUD_MARGIN: f32 = 16.0;
const HUD_LIVES_WIDTH: f32 = 120.0;
const HUD_PROMPT_HALF_WIDTH: f32 = 170.0;

const MOVE_LEFT: [KeyCode; 2] = [KeyCode::ArrowLeft, KeyCode::KeyA];
const MOVE_RIGHT: [KeyCode; 2] = [KeyCode::ArrowRight, KeyCode::KeyD];
const LAUNCH: KeyCode = KeyCode::Space;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Ball rides on the paddle until launched.
    Serving,
    Playing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct BallGameState {
    pub phase: Phase,
    pub ball_position: Vec2,
    pub ball_velocity: Vec2,
    /// Left edge of the paddle.
    pub paddle_x: f32,
    pub score: u32,
    pub lives: u32,
    /// Launch input was down on the previous frame.
    pub launch_held: bool,
    pub last_mouse_x: Option<f32>,
    rng: StdRng,
}

#[derive(Resource, Debug, Clone)]
pub struct BallGame {
    cfg: BallGameConfig,
    field: Vec2,
}

impl BallGame {
    pub fn new(cfg: BallGameConfig, field: Vec2) -> Self {
        Self { cfg, field }
    }

    pub fn config(&self) -> &BallGameConfig {
        &self.cfg
    }

    pub fn paddle_y(&self) -> f32 {
        self.field.y - self.cfg.paddle_margin - self.cfg.paddle_height
    }

    fn max_paddle_x(&self) -> f32 {
        (self.field.x - self.cfg.paddle_width).max(0.0)
    }

    fn resting_ball(&self, paddle_x: f32) -> Vec2 {
        Vec2::new(
            paddle_x + (self.cfg.paddle_width - self.cfg.ball_size) * 0.5,
            self.paddle_y() - self.cfg.ball_size,
        )
    }

    fn fresh_state(&self, rng: StdRng) -> BallGameState {
        let paddle_x = self.max_paddle_x() * 0.5;
        BallGameState {
            phase: Phase::Serving,
            ball_position: self.resting_ball(paddle_x),
            ball_velocity: Vec2::ZERO,
            paddle_x,
            score: 0,
            lives: self.cfg.lives,
            launch_held: false,
            last_mouse_x: None,
            rng,
        }
    }

    fn serve_velocity(&self, rng: &mut StdRng) -> Vec2 {
        let spread = if self.cfg.serve_spread.is_finite() {
            self.cfg.serve_spread.abs().min(MAX_SERVE_SPREAD)
        } else {
            0.0
        };
        let angle = rng.gen_range(-spread..=spread);
        let speed = self.cfg.ball_speed.min(self.cfg.max_ball_speed);
        Vec2::new(angle.sin(), -angle.cos()) * speed
    }

    fn move_paddle(
        &self,
        keyboard: &KeyboardSnapshot,
        mouse: &MouseSnapshot,
        dt: f32,
        state: &BallGameState,
    ) -> f32 {
        let mut dir = 0.0;
        if keyboard.any_down(&MOVE_LEFT) {
            dir -= 1.0;
        }
        if keyboard.any_down(&MOVE_RIGHT) {
            dir += 1.0;
        }
        let mouse_moved = state
            .last_mouse_x
            .is_some_and(|last| (mouse.x - last).abs() > f32::EPSILON);
        let x = if dir != 0.0 {
            state.paddle_x + dir * self.cfg.paddle_speed * dt
        } else if self.cfg.mouse_control && mouse_moved {
            mouse.x - self.cfg.paddle_width * 0.5
        } else {
            state.paddle_x
        };
        x.clamp(0.0, self.max_paddle_x())
    }

    /// Advances the ball of a `Playing` state whose paddle has already moved this frame.
    fn step_ball(&self, state: &mut BallGameState, dt: f32) {
        let size = self.cfg.ball_size;
        let prev = state.ball_position;
        let mut vel = state.ball_velocity;
        let mut pos = prev + vel * dt;

        let max_x = (self.field.x - size).max(0.0);
        if pos.x < 0.0 {
            pos.x = 0.0;
            vel.x = vel.x.abs();
        } else if pos.x > max_x {
            pos.x = max_x;
            vel.x = -vel.x.abs();
        }
        if pos.y < 0.0 {
            pos.y = 0.0;
            vel.y = vel.y.abs();
        }

        let paddle_y = self.paddle_y();
        let paddle_w = self.cfg.paddle_width;
        let crossed_top = prev.y + size <= paddle_y + self.cfg.paddle_height && pos.y + size >= paddle_y;
        // Swept over the whole step so a fast diagonal ball cannot clip past a paddle corner.
        let (left, right) = (prev.x.min(pos.x), prev.x.max(pos.x));
        let overlaps_x = left < state.paddle_x + paddle_w && right + size > state.paddle_x;
        if vel.y > 0.0 && crossed_top && overlaps_x {
            pos.y = paddle_y - size;
            let ball_center = pos.x + size * 0.5;
            let paddle_center = state.paddle_x + paddle_w * 0.5;
            let offset = ((ball_center - paddle_center) / (paddle_w * 0.5 + size * 0.5)).clamp(-1.0, 1.0);
            let angle = offset * MAX_BOUNCE_ANGLE;
            let speed = (vel.length() * self.cfg.speed_up_per_hit).min(self.cfg.max_ball_speed);
            vel = Vec2::new(angle.sin(), -angle.cos()) * speed;
            state.score += 1;
        }

        state.ball_position = pos;
        state.ball_velocity = vel;

        if pos.y > self.field.y {
            state.lives = state.lives.saturating_sub(1);
            state.ball_velocity = Vec2::ZERO;
            if state.lives == 0 {
                state.phase = Phase::GameOver;
            } else {
                state.phase = Phase::Serving;
                state.ball_position = self.resting_ball(state.paddle_x);
            }
        }
    }

    fn prompt_x(&self) -> f32 {
        (self.field.x * 0.5 - HUD_PROMPT_HALF_WIDTH).max(HUD_MARGIN)
    }
}

impl GameLogic for BallGame {
    type State = BallGameState;

    fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.ball_game.clone(),
            Vec2::new(config.window.width, config.window.height),
        )
    }

    fn initial_state(&self) -> BallGameState {
        self.fresh_state(StdRng::seed_from_u64(self.cfg.seed))
    }

    fn update_state(
        &self,
        keyboard: &KeyboardSnapshot,
        mouse: &MouseSnapshot,
        dt: f32,
        state: &BallGameState,
    ) -> BallGameState {
        let dt = if dt.is_finite() {
            dt.clamp(0.0, MAX_STEP_SECS)
        } else {
            0.0
        };
        let launch_down = keyboard.is_key_down(LAUNCH) || mouse.left.is_pressed();
        let launch_edge = launch_down && !state.launch_held;

        let mut next = state.clone();
        next.paddle_x = self.move_paddle(keyboard, mouse, dt, state);
        next.launch_held = launch_down;
        next.last_mouse_x = Some(mouse.x);

        match state.phase {
            Phase::Serving => {
                next.ball_position = self.resting_ball(next.paddle_x);
                if launch_edge {
                    next.ball_velocity = self.serve_velocity(&mut next.rng);
                    next.phase = Phase::Playing;
                }
            }
            Phase::Playing => self.step_ball(&mut next, dt),
            Phase::GameOver => {
                if launch_edge {
                    let mut fresh = self.fresh_state(next.rng.clone());
                    fresh.launch_held = true;
                    fresh.last_mouse_x = next.last_mouse_x;
                    next = fresh;
                }
            }
        }
        next
    }

    fn draw_state(&self, state: &BallGameState) -> Vec<Drawable> {
        let mut out = vec![Drawable::new(
            self.cfg.paddle_image.clone(),
            Vec2::new(state.paddle_x, self.paddle_y()),
        )];
        if state.phase != Phase::GameOver {
            out.push(Drawable::new(self.cfg.ball_image.clone(), state.ball_position));
        }
        out
    }

    fn draw_hud(&self, state: &BallGameState) -> Vec<HudString> {
        let mut out = vec![
            HudString::new(
                format!("Score: {}", state.score),
                Vec2::new(HUD_MARGIN, HUD_MARGIN),
            ),
            HudString::new(
                format!("Lives: {}", state.lives),
                Vec2::new(
                    (self.field.x - HUD_LIVES_WIDTH).max(HUD_MARGIN),
                    HUD_MARGIN,
                ),
            ),
        ];
        let center_y = self.field.y * 0.5;
        match state.phase {
            Phase::Serving => out.push(HudString::new(
                "Press Space or click to launch",
                Vec2::new(self.prompt_x(), center_y),
            )),
            Phase::Playing => {}
            Phase::GameOver => {
                out.push(HudString::new(
                    format!("Game over! Final score: {}", state.score),
                    Vec2::new(self.prompt_x(), center_y - 30.0),
                ));
                out.push(HudString::new(
                    "Press Space or click to play again",
                    Vec2::new(self.prompt_x(), center_y + 10.0),
                ));
            }
        }
        out
    }
}
