use std::fs::{self, OpenOptions};
use std::io::Write;
use std::time::{Duration, SystemTime};

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use ball_game::core::config::{ColorConfig, ConfigOverrides};
use ball_game::interaction::session::{
    AutoClosePlugin, ConfigHotReloadPlugin, ConfigReloadSettings, ExitOnEscapePlugin,
};
use ball_game::rendering::CameraPlugin;
use ball_game::GameConfig;

fn timed_app(cfg: GameConfig, step: Duration) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(step));
    app.insert_resource(cfg);
    app
}

#[test]
fn auto_close_exits_after_configured_seconds() {
    let mut cfg = GameConfig::default();
    cfg.window.auto_close = 0.5;
    let mut app = timed_app(cfg, Duration::from_millis(200));
    app.add_plugins(AutoClosePlugin);

    // At most 0.4 s have passed after two frames.
    for _ in 0..2 {
        app.update();
        assert!(app.should_exit().is_none());
    }
    let mut exit = None;
    for _ in 0..3 {
        app.update();
        exit = app.should_exit();
        if exit.is_some() {
            break;
        }
    }
    assert_eq!(exit, Some(AppExit::Success));
}

#[test]
fn auto_close_disabled_by_zero() {
    let mut app = timed_app(GameConfig::default(), Duration::from_millis(200));
    app.add_plugins(AutoClosePlugin);
    for _ in 0..20 {
        app.update();
    }
    assert!(app.should_exit().is_none());
}

fn escape_app(exit_on_escape: bool) -> App {
    let mut cfg = GameConfig::default();
    cfg.window.exit_on_escape = exit_on_escape;
    let mut app = App::new();
    app.insert_resource(ButtonInput::<KeyCode>::default());
    app.insert_resource(cfg);
    app.add_plugins(ExitOnEscapePlugin);
    app
}

#[test]
fn escape_exits_when_enabled() {
    let mut app = escape_app(true);
    app.update();
    assert!(app.should_exit().is_none());

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::Escape);
    app.update();
    assert_eq!(app.should_exit(), Some(AppExit::Success));
}

#[test]
fn escape_ignored_when_disabled() {
    let mut app = escape_app(false);
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::Escape);
    app.update();
    assert!(app.should_exit().is_none());
}

#[test]
fn edited_config_file_is_reloaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.ron");
    fs::write(&path, r#"(window: (title: "Before"))"#).unwrap();
    let missing_local = dir.path().join("game.local.ron");

    let overrides = ConfigOverrides {
        auto_close: Some(30.0),
        content_root: None,
    };
    let (mut cfg, _, errors) = GameConfig::load_present_layers(&[path.clone(), missing_local.clone()]);
    assert!(errors.is_empty(), "{errors:?}");
    overrides.apply(&mut cfg);

    let mut app = timed_app(cfg, Duration::from_millis(100));
    app.insert_resource(overrides);
    app.insert_resource(ConfigReloadSettings {
        paths: vec![path.clone(), missing_local],
        interval_secs: 0.05,
    });
    app.add_plugins((CameraPlugin, ConfigHotReloadPlugin));
    for _ in 0..3 {
        app.update();
    }
    assert_eq!(app.world().resource::<GameConfig>().window.title, "Before");

    let mut file = OpenOptions::new().write(true).truncate(true).open(&path).unwrap();
    file.write_all(br#"(window: (title: "After"), content: (clear_color: (r: 1.0, g: 0.0, b: 0.0)))"#)
        .unwrap();
    // Push the mtime forward so coarse filesystem timestamps still register a change.
    file.set_modified(SystemTime::now() + Duration::from_secs(5)).unwrap();
    drop(file);

    for _ in 0..4 {
        app.update();
    }
    let cfg = app.world().resource::<GameConfig>();
    assert_eq!(cfg.window.title, "After");
    assert_eq!(cfg.window.auto_close, 30.0, "command line override must survive a reload");
    let red = ColorConfig { r: 1.0, g: 0.0, b: 0.0 }.to_color();
    assert_eq!(app.world().resource::<ClearColor>().0, red);
}
