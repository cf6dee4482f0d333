pub mod camera;
pub mod content;
pub mod coords;
pub mod sprite_batch;

pub use camera::CameraPlugin;
pub use content::{content_path, load_content, Content};
pub use sprite_batch::{draw_frame, BatchSprite, HudLabel, SpriteBatch};
