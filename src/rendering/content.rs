//! Content store: texture handles cached by content key, plus the HUD font.
use bevy::prelude::*;
use std::collections::HashMap;
use std::path::Path;

use crate::core::config::GameConfig;

const LOG_TARGET: &str = "content";

#[derive(Resource, Debug, Default)]
pub struct Content {
    font: Handle<Font>,
    textures: HashMap<String, Handle<Image>>,
}

/// Asset path for a content key. Keys without an extension are PNG textures.
pub fn content_path(key: &str) -> String {
    if Path::new(key).extension().is_some() {
        key.to_string()
    } else {
        format!("{key}.png")
    }
}

impl Content {
    pub fn font(&self) -> Handle<Font> {
        self.font.clone()
    }

    /// Returns the handle for `key`, asking the asset server only the first time.
    pub fn texture(&mut self, key: &str, asset_server: &AssetServer) -> Handle<Image> {
        if let Some(handle) = self.textures.get(key) {
            return handle.clone();
        }
        let path = content_path(key);
        debug!(target: LOG_TARGET, "loading texture '{key}' from {path}");
        let handle: Handle<Image> = asset_server.load(path);
        self.textures.insert(key.to_string(), handle.clone());
        handle
    }

    pub fn cached_textures(&self) -> usize {
        self.textures.len()
    }
}

/// Startup: resolve the content root and load the HUD font (engine default font if missing).
pub fn load_content(
    asset_server: Res<AssetServer>,
    cfg: Res<GameConfig>,
    mut content: ResMut<Content>,
) {
    let font_file = Path::new(&cfg.content.root_directory).join(&cfg.content.font);
    content.font = if font_file.exists() {
        info!(target: LOG_TARGET, "loading font {}", font_file.display());
        asset_server.load(cfg.content.font.clone())
    } else {
        warn!(
            target: LOG_TARGET,
            "Font missing at {}. Using the built-in default font.",
            font_file.display()
        );
        Handle::default()
    };
}
