use bevy::prelude::*;
use std::marker::PhantomData;

use crate::app::adapter::AdapterPlugin;
use crate::core::config::GameConfig;
use crate::debug::DebugPlugin;
use crate::interaction::session::{AutoClosePlugin, ConfigHotReloadPlugin, ExitOnEscapePlugin};
use crate::logic::GameLogic;
use crate::rendering::CameraPlugin;

/// Outcome of startup config loading, reported once the log is up.
#[derive(Resource, Debug, Default, Clone)]
pub struct ConfigReport {
    pub used: Vec<String>,
    pub errors: Vec<String>,
}

/// Everything a windowed run needs on top of `DefaultPlugins`.
pub struct GamePlugin<L: GameLogic>(PhantomData<fn() -> L>);

impl<L: GameLogic> Default for GamePlugin<L> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<L: GameLogic> Plugin for GamePlugin<L> {
    fn build(&self, app: &mut App) {
        app.init_resource::<ConfigReport>()
            .add_systems(Startup, report_config)
            .add_plugins((
                CameraPlugin,
                AdapterPlugin::<L>::default(),
                AutoClosePlugin,
                ExitOnEscapePlugin,
                ConfigHotReloadPlugin,
                DebugPlugin,
            ));
    }
}

fn report_config(report: Res<ConfigReport>, cfg: Res<GameConfig>) {
    if report.used.is_empty() {
        warn!("no config file loaded; running with defaults");
    }
    for path in &report.used {
        info!("config loaded from {path}");
    }
    for e in &report.errors {
        warn!("config issue: {e}");
    }
    for w in cfg.validate() {
        warn!("config warning: {w}");
    }
}
