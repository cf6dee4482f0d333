pub mod config;

pub use config::{BallGameConfig, ColorConfig, ConfigOverrides, ContentConfig, GameConfig, WindowConfig};
