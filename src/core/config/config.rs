use anyhow::Context;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    /// Automatically close the app after this many seconds. 0.0 (or omitted) = run indefinitely.
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
    pub exit_on_escape: bool,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 480.0,
            title: "Ball Game".into(),
            auto_close: 0.0,
            exit_on_escape: true,
        }
    }
}

/// sRGB colour with 0..1 channels.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct ColorConfig {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}
impl Default for ColorConfig {
    fn default() -> Self {
        // Cornflower blue (#6495ED)
        Self {
            r: 100.0 / 255.0,
            g: 149.0 / 255.0,
            b: 237.0 / 255.0,
        }
    }
}
impl ColorConfig {
    pub fn to_color(self) -> Color {
        Color::srgb(self.r, self.g, self.b)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct ContentConfig {
    /// Directory the asset server reads from; texture keys and the font path resolve under it.
    pub root_directory: String,
    pub font: String,
    pub font_size: f32,
    pub clear_color: ColorConfig,
}
impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            root_directory: "assets".into(),
            font: "fonts/FiraSans-Bold.ttf".into(),
            font_size: 20.0,
            clear_color: ColorConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct BallGameConfig {
    pub ball_image: String,
    pub paddle_image: String,
    pub ball_size: f32,
    pub ball_speed: f32,
    pub max_ball_speed: f32,
    pub speed_up_per_hit: f32,
    /// Maximum serve deviation from vertical, radians.
    pub serve_spread: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    /// Gap between the paddle's bottom edge and the bottom of the field.
    pub paddle_margin: f32,
    pub lives: u32,
    pub mouse_control: bool,
    pub seed: u64,
}
impl Default for BallGameConfig {
    fn default() -> Self {
        Self {
            ball_image: "ball".into(),
            paddle_image: "paddle".into(),
            ball_size: 24.0,
            ball_speed: 320.0,
            max_ball_speed: 900.0,
            speed_up_per_hit: 1.05,
            serve_spread: 0.5,
            paddle_width: 96.0,
            paddle_height: 16.0,
            paddle_speed: 480.0,
            paddle_margin: 32.0,
            lives: 3,
            mouse_control: true,
            seed: 0x5EED,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Resource, Clone, Default, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub content: ContentConfig,
    pub ball_game: BallGameConfig,
}

/// Command line values that take precedence over every config file, including on hot reload.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub auto_close: Option<f32>,
    pub content_root: Option<String>,
}

impl ConfigOverrides {
    pub fn apply(&self, cfg: &mut GameConfig) {
        if let Some(secs) = self.auto_close {
            cfg.window.auto_close = secs;
        }
        if let Some(root) = &self.content_root {
            cfg.content.root_directory.clone_from(root);
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        ron::from_str(&data).with_context(|| format!("parse RON {}", path.display()))
    }

    /// Deep-merges the given RON files in order (later files win) and deserializes the result.
    /// Returns the config, the paths that were read, and non-fatal errors.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        fn merge_value(base: &mut Value, overlay: Value) {
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let mut incoming = Some(v);
                        for (ek, ev) in bm.iter_mut() {
                            if *ek == k {
                                if let Some(val) = incoming.take() {
                                    merge_value(ev, val);
                                }
                                break;
                            }
                        }
                        if let Some(v) = incoming {
                            bm.insert(k, v);
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.display().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        match merged {
            Some(val) => match val.into_rust::<GameConfig>() {
                Ok(cfg) => (cfg, used, errors),
                Err(e) => {
                    errors.push(format!(
                        "failed to deserialize merged config; using defaults: {e}"
                    ));
                    (GameConfig::default(), used, errors)
                }
            },
            None => (GameConfig::default(), used, errors),
        }
    }

    /// `load_layered` over the layers that exist; missing files are skipped without an error.
    pub fn load_present_layers(paths: &[PathBuf]) -> (Self, Vec<String>, Vec<String>) {
        Self::load_layered(paths.iter().filter(|p| p.exists()))
    }

    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        } else if self.window.auto_close > 0.0 && self.window.auto_close < 0.01 {
            w.push(format!(
                "window.autoClose {} very small; closes almost immediately",
                self.window.auto_close
            ));
        }

        let c = &self.content;
        if c.root_directory.trim().is_empty() {
            w.push("content.root_directory is empty".into());
        }
        if c.font_size <= 0.0 {
            w.push(format!("content.font_size {} must be > 0", c.font_size));
        }
        for (label, v) in [
            ("r", c.clear_color.r),
            ("g", c.clear_color.g),
            ("b", c.clear_color.b),
        ] {
            if !(0.0..=1.0).contains(&v) {
                w.push(format!("content.clear_color.{label} {v} outside 0..1"));
            }
        }

        let g = &self.ball_game;
        if g.ball_image.is_empty() || g.paddle_image.is_empty() {
            w.push("ball_game image keys must not be empty".into());
        }
        if g.ball_size <= 0.0 {
            w.push("ball_game.ball_size must be > 0".into());
        }
        if g.ball_speed <= 0.0 {
            w.push("ball_game.ball_speed must be > 0".into());
        }
        if g.max_ball_speed < g.ball_speed {
            w.push(format!(
                "ball_game.max_ball_speed {} below ball_speed {}; serves will be capped",
                g.max_ball_speed, g.ball_speed
            ));
        }
        if g.speed_up_per_hit < 1.0 {
            w.push(format!(
                "ball_game.speed_up_per_hit {} < 1.0 slows the ball on every hit",
                g.speed_up_per_hit
            ));
        }
        if !(0.0..std::f32::consts::FRAC_PI_2).contains(&g.serve_spread) {
            w.push(format!(
                "ball_game.serve_spread {} outside 0..pi/2",
                g.serve_spread
            ));
        }
        if g.paddle_width <= 0.0 || g.paddle_height <= 0.0 {
            w.push("ball_game paddle dimensions must be > 0".into());
        }
        if g.paddle_width >= self.window.width {
            w.push(format!(
                "ball_game.paddle_width {} fills the whole field width {}",
                g.paddle_width, self.window.width
            ));
        }
        if g.paddle_speed < 0.0 {
            w.push("ball_game.paddle_speed negative".into());
        }
        if g.paddle_margin + g.paddle_height + g.ball_size > self.window.height {
            w.push("ball_game paddle + ball do not fit in the window height".into());
        }
        if g.lives == 0 {
            w.push("ball_game.lives is 0; game starts over immediately".into());
        }
        w
    }
}
