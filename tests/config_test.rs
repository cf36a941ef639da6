//! 設定ファイルのテスト

use std::path::PathBuf;
use tea_guide::config::{Config, DATASET_ENV};
use tea_guide_common::{BrewMethod, UnitSystem};
use tempfile::tempdir;

/// 保存した設定を読み戻せる
#[test]
fn test_save_and_load_roundtrip() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let mut config = Config::default();
    config.unit_system = UnitSystem::Imperial;
    config.brew_method = BrewMethod::Western;
    config.set_vessel_size(12.0).unwrap();
    config.save_to(&path).expect("保存失敗");

    let loaded = Config::load_from(&path).expect("読み込み失敗");
    assert_eq!(loaded, config);

    let settings = loaded.brew_settings();
    assert_eq!(settings.vessel_size, 12.0);
    assert_eq!(settings.unit_system, UnitSystem::Imperial);
}

/// 設定ファイルがなければ既定値
#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let loaded = Config::load_from(&dir.path().join("config.json")).unwrap();
    assert_eq!(loaded, Config::default());
}

/// 一部の項目だけ書かれた設定ファイルも読める
#[test]
fn test_partial_file_fills_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"unit_system": "imperial", "spoon_measure": true}"#).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.unit_system, UnitSystem::Imperial);
    assert!(loaded.spoon_measure);
    assert_eq!(loaded.brew_method, BrewMethod::Gongfu);
    assert_eq!(loaded.default_vessel_size, 100.0);
}

/// 壊れた設定ファイルはエラー
#[test]
fn test_invalid_file_is_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(Config::load_from(&path).is_err());
}

/// 存在しないデータセットは設定できない
#[test]
fn test_set_dataset_requires_existing_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut config = Config::default();

    assert!(config.set_dataset(dir.path().join("missing.json")).is_err());

    let path = dir.path().join("teas.json");
    std::fs::write(&path, "[]").unwrap();
    config.set_dataset(path.clone()).unwrap();
    assert_eq!(config.dataset, Some(path));
}

/// 環境変数は設定ファイルより優先、引数は環境変数より優先
#[test]
fn test_dataset_env_override() {
    let config = Config {
        dataset: Some(PathBuf::from("/from/config.json")),
        ..Default::default()
    };

    std::env::set_var(DATASET_ENV, "/from/env.json");
    assert_eq!(config.dataset_path(None), Some(PathBuf::from("/from/env.json")));
    assert_eq!(
        config.dataset_path(Some(std::path::Path::new("/from/cli.json"))),
        Some(PathBuf::from("/from/cli.json"))
    );

    std::env::remove_var(DATASET_ENV);
    assert_eq!(config.dataset_path(None), Some(PathBuf::from("/from/config.json")));
}
