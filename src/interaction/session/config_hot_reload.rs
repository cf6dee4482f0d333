use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    time::SystemTime,
};

use crate::core::config::{ConfigOverrides, GameConfig};

const LOG_TARGET: &str = "session";

/// Layered config files to watch (same order as startup loading) and the poll interval.
#[derive(Resource, Debug, Clone)]
pub struct ConfigReloadSettings {
    pub paths: Vec<PathBuf>,
    pub interval_secs: f32,
}
impl Default for ConfigReloadSettings {
    fn default() -> Self {
        Self {
            paths: vec![
                PathBuf::from("assets/config/game.ron"),
                PathBuf::from("assets/config/game.local.ron"),
            ],
            interval_secs: 0.5,
        }
    }
}

#[derive(Resource, Debug)]
struct ConfigReloadState {
    last_mod: HashMap<PathBuf, SystemTime>,
    timer: Timer,
}
impl FromWorld for ConfigReloadState {
    fn from_world(world: &mut World) -> Self {
        // Seed with current mtimes so startup does not count as a change.
        let mut last_mod = HashMap::new();
        if let Some(settings) = world.get_resource::<ConfigReloadSettings>() {
            for path in &settings.paths {
                if let Some(t) = modified(path) {
                    last_mod.insert(path.clone(), t);
                }
            }
        }
        Self {
            last_mod,
            timer: Timer::from_seconds(0.5, TimerMode::Repeating),
        }
    }
}

fn modified(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}

/// Polls config file mtimes and replaces the `GameConfig` resource when they change.
/// Window size / title are applied here; other consumers react to `GameConfig` change detection.
pub struct ConfigHotReloadPlugin;
impl Plugin for ConfigHotReloadPlugin {
    fn build(&self, app: &mut App) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            app.init_resource::<ConfigReloadSettings>()
                .init_resource::<ConfigReloadState>()
                .add_systems(Update, poll_and_reload_config);
        }
    }
}

fn poll_and_reload_config(
    time: Res<Time>,
    settings: Res<ConfigReloadSettings>,
    mut state: ResMut<ConfigReloadState>,
    overrides: Option<Res<ConfigOverrides>>,
    mut cfg_res: ResMut<GameConfig>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    let interval = settings.interval_secs.max(0.05);
    if (state.timer.duration().as_secs_f32() - interval).abs() > f32::EPSILON {
        state
            .timer
            .set_duration(std::time::Duration::from_secs_f32(interval));
    }
    if !state.timer.tick(time.delta()).just_finished() {
        return;
    }

    let mut dirty = false;
    for path in &settings.paths {
        if let Some(mod_time) = modified(path) {
            let entry = state
                .last_mod
                .entry(path.clone())
                .or_insert(SystemTime::UNIX_EPOCH);
            if mod_time > *entry {
                *entry = mod_time;
                dirty = true;
            }
        }
    }
    if !dirty {
        return;
    }

    let (mut new_cfg, _used, errors) = GameConfig::load_present_layers(&settings.paths);
    if let Some(overrides) = &overrides {
        overrides.apply(&mut new_cfg);
    }
    for e in errors {
        warn!(target: LOG_TARGET, "config hot-reload issue: {e}");
    }
    for w in new_cfg.validate() {
        warn!(target: LOG_TARGET, "config warning: {w}");
    }
    if *cfg_res == new_cfg {
        return;
    }
    info!(target: LOG_TARGET, "Config hot-reload applied");
    if let Ok(mut window) = windows.single_mut() {
        if window.width() != new_cfg.window.width || window.height() != new_cfg.window.height {
            window
                .resolution
                .set(new_cfg.window.width, new_cfg.window.height);
        }
        if window.title != new_cfg.window.title {
            window.title = new_cfg.window.title.clone();
        }
    }
    *cfg_res = new_cfg;
}
