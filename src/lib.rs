pub mod app;
pub mod core;
pub mod debug;
pub mod interaction;
pub mod logic;
pub mod rendering;

// Curated re-exports
pub use app::{AdapterPlugin, GamePlugin};
pub use core::config::{GameConfig, WindowConfig};
pub use logic::{BallGame, Drawable, GameLogic, HudString, KeyboardSnapshot, MouseSnapshot};
