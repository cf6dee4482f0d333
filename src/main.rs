use bevy::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use ball_game::app::ConfigReport;
use ball_game::core::config::ConfigOverrides;
use ball_game::interaction::session::ConfigReloadSettings;
use ball_game::{BallGame, GameConfig, GamePlugin};

#[derive(Parser, Debug)]
#[command(about = "Paddle-and-ball game", version)]
struct Args {
    /// Config file, repeatable; later files override earlier ones.
    /// Defaults to assets/config/game.ron then assets/config/game.local.ron.
    #[arg(long = "config")]
    configs: Vec<PathBuf>,
    /// Exit after this many seconds (overrides window.autoClose).
    #[arg(long)]
    auto_close: Option<f32>,
    /// Directory textures and fonts are loaded from (overrides content.root_directory).
    #[arg(long)]
    content_root: Option<String>,
}

fn main() -> AppExit {
    let args = Args::parse();
    // Paths named on the command line must exist; the default layers are optional.
    let explicit = !args.configs.is_empty();
    let configs = if explicit {
        args.configs
    } else {
        ConfigReloadSettings::default().paths
    };
    let (mut cfg, used, errors) = if explicit {
        GameConfig::load_layered(&configs)
    } else {
        GameConfig::load_present_layers(&configs)
    };
    let overrides = ConfigOverrides {
        auto_close: args.auto_close,
        content_root: args.content_root,
    };
    overrides.apply(&mut cfg);

    App::new()
        .insert_resource(cfg.clone())
        .insert_resource(overrides)
        .insert_resource(ConfigReport { used, errors })
        .insert_resource(ConfigReloadSettings {
            paths: configs,
            ..default()
        })
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: cfg.window.title.clone(),
                        resolution: (cfg.window.width, cfg.window.height).into(),
                        resizable: true,
                        ..default()
                    }),
                    ..default()
                })
                .set(AssetPlugin {
                    file_path: cfg.content.root_directory.clone(),
                    ..default()
                }),
        )
        .add_plugins(GamePlugin::<BallGame>::default())
        .run()
}
