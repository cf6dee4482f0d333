use std::fs;
use ball_game::GameConfig;

#[test]
fn local_layer_overrides_base_file() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("game.ron");
    let local = dir.path().join("game.local.ron");
    fs::write(
        &base,
        r#"(window: (width: 640.0, height: 360.0, title: "Base"), ball_game: (lives: 5))"#,
    )
    .unwrap();
    fs::write(&local, r#"(window: (title: "Local"), ball_game: (ball_speed: 400.0))"#).unwrap();

    let (cfg, used, errors) = GameConfig::load_layered([&base, &local]);
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(used.len(), 2);
    assert_eq!(cfg.window.width, 640.0);
    assert_eq!(cfg.window.title, "Local");
    assert_eq!(cfg.ball_game.lives, 5);
    assert_eq!(cfg.ball_game.ball_speed, 400.0);
    assert_eq!(cfg.ball_game.paddle_width, 96.0);
}

#[test]
fn broken_layer_is_reported_and_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good.ron");
    let bad = dir.path().join("bad.ron");
    fs::write(&good, r#"(window: (title: "Good"))"#).unwrap();
    fs::write(&bad, "(window: (title: ").unwrap();

    let (cfg, used, errors) = GameConfig::load_layered([&good, &bad]);
    assert_eq!(used.len(), 1);
    assert_eq!(errors.len(), 1);
    assert_eq!(cfg.window.title, "Good");
}

#[test]
fn shipped_config_parses_and_validates() {
    let cfg = GameConfig::load_from_file(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/config/game.ron"))
        .expect("parse shipped config");
    assert!(cfg.validate().is_empty(), "{:?}", cfg.validate());
    assert_eq!(cfg.content.root_directory, "assets");
}

#[test]
fn missing_explicit_layer_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("game.ron");
    let missing = dir.path().join("typo.ron");
    fs::write(&good, r#"(window: (title: "Good"))"#).unwrap();

    let (cfg, used, errors) = GameConfig::load_layered(&[good.clone(), missing]);
    assert_eq!(used.len(), 1);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("typo.ron"), "{errors:?}");
    assert_eq!(cfg.window.title, "Good");
}

#[test]
fn optional_layers_skip_missing_files() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("game.ron");
    fs::write(&good, r#"(window: (title: "Good"))"#).unwrap();

    let (cfg, used, errors) =
        GameConfig::load_present_layers(&[good, dir.path().join("game.local.ron")]);
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(used.len(), 1);
    assert_eq!(cfg.window.title, "Good");
}
