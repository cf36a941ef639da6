//! 抽出量計算の結合テスト
//!
//! データセット読み込みから詳細表示までを通しで検証

use std::path::Path;
use tea_guide::config::Config;
use tea_guide::error::TeaGuideError;
use tea_guide::load_catalog;
use tea_guide::session::{apply_action, BrewAction};
use tea_guide_common::brew::NOT_AVAILABLE;
use tea_guide_common::view::brewing_preview;
use tea_guide_common::{
    compute_display, BrewMethod, BrewSettings, Catalog, DetailView, UnitSystem,
};
use tempfile::tempdir;

fn settings(method: BrewMethod, vessel_size: f64) -> BrewSettings {
    BrewSettings {
        method,
        vessel_size,
        ..Default::default()
    }
}

/// 3g/150ml の茶を300mlで淹れると6.0g
#[test]
fn test_dragonwell_scales_to_vessel() {
    let catalog = Catalog::builtin().unwrap();
    let entry = catalog.find("Dragonwell").expect("エントリが見つからない");

    let result = compute_display(entry, &settings(BrewMethod::Gongfu, 300.0));
    assert_eq!(result.amount_text, "6.0 g");
    assert_eq!(result.summary(), "6.0 g of tea for 300 ml");
}

/// 抽出時間表は番号付きの行と追加抽出行になる
#[test]
fn test_detail_view_schedule_rows() {
    let catalog = Catalog::builtin().unwrap();
    let entry = catalog.find("Da Hong Pao").unwrap();

    match DetailView::build(entry, &BrewSettings::default()) {
        DetailView::Standard { gongfu_schedule, .. } => {
            let rows: Vec<(String, String)> = gongfu_schedule
                .iter()
                .map(|s| (s.label.to_string(), s.time.clone()))
                .collect();
            assert_eq!(
                rows,
                vec![
                    ("1".to_string(), "10s".to_string()),
                    ("2".to_string(), "15s".to_string()),
                    ("3".to_string(), "20s".to_string()),
                    (
                        "Additional".to_string(),
                        "+5-10s each additional steep".to_string()
                    ),
                ]
            );
        }
        other => panic!("unexpected layout: {:?}", other),
    }
}

/// 空白区切りの抽出時間も行に分解される
#[test]
fn test_space_separated_schedule() {
    let catalog = Catalog::builtin().unwrap();
    let entry = catalog.find("tie guanyin").unwrap();

    match DetailView::build(entry, &BrewSettings::default()) {
        DetailView::Standard { gongfu_schedule, .. } => {
            let times: Vec<&str> = gongfu_schedule.iter().map(|s| s.time.as_str()).collect();
            assert_eq!(times, vec!["20s", "25s", "30s", "40s", "50s"]);
        }
        other => panic!("unexpected layout: {:?}", other),
    }
}

/// 西洋式が読めなければ功夫式の比率で計算する
#[test]
fn test_unparseable_western_falls_back_to_gongfu() {
    let catalog = Catalog::builtin().unwrap();
    let entry = catalog.find("Sencha").unwrap();

    let western = compute_display(entry, &settings(BrewMethod::Western, 150.0));
    let gongfu = compute_display(entry, &settings(BrewMethod::Gongfu, 150.0));
    assert_eq!(western, gongfu);
    assert_eq!(western.ratio_text, "5g / 150ml");

    // カードには元の記述をそのまま載せる
    let preview = brewing_preview(entry, BrewMethod::Western);
    assert_eq!(preview.ratio, "a heaping teaspoon, 1-2 minutes, 70-80°C");
}

/// 西洋式の比率がある場合はそちらを使う
#[test]
fn test_western_ratio_used_when_available() {
    let catalog = Catalog::builtin().unwrap();
    let entry = catalog.find("Lapsang Souchong").unwrap();

    let result = compute_display(entry, &settings(BrewMethod::Western, 480.0));
    assert_eq!(result.amount_text, "5.0 g");
    assert_eq!(result.ratio_text, "2.5g / 240ml");
}

/// 特殊抽出のお茶は計算機を出さない
#[test]
fn test_special_brewing_layout() {
    let catalog = Catalog::builtin().unwrap();
    let entry = catalog.find("matcha").unwrap();

    match DetailView::build(entry, &BrewSettings::default()) {
        DetailView::Special {
            instructions,
            potential_infusions,
            ..
        } => {
            assert!(instructions.starts_with("Sift 2g of matcha"));
            assert_eq!(potential_infusions, "1");
        }
        other => panic!("unexpected layout: {:?}", other),
    }
}

/// 単位系を切り替えると容器サイズが換算され、茶葉量はほぼ変わらない
#[test]
fn test_unit_toggle_session_recomputes() {
    let catalog = Catalog::builtin().unwrap();
    let entry = catalog.find("Dragonwell").unwrap();

    let metric = settings(BrewMethod::Gongfu, 300.0);
    let imperial = apply_action(metric, BrewAction::ToggleUnits);
    assert_eq!(imperial.unit_system, UnitSystem::Imperial);

    let before = compute_display(entry, &metric).grams.unwrap();
    let after = compute_display(entry, &imperial).grams.unwrap();
    assert!((before - after).abs() < 0.05);
    assert_eq!(compute_display(entry, &imperial).vessel_text, "10.1 fl oz");

    let spoons = apply_action(imperial, BrewAction::ToggleSpoon);
    assert!(compute_display(entry, &spoons).amount_text.ends_with(" tsp"));
}

/// 比率が読めないデータセットでも表示は空にならない
#[test]
fn test_malformed_dataset_entry_degrades() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("teas.json");
    std::fs::write(
        &path,
        r#"[{"type": "Mystery Leaf", "leafRatio": "abc", "normalBrewing": 1}]"#,
    )
    .unwrap();

    let catalog = load_catalog(&Config::default(), Some(&path)).expect("読み込み失敗");
    let entry = catalog.find("mystery leaf").unwrap();

    let result = compute_display(entry, &BrewSettings::default());
    assert_eq!(result.amount_text, NOT_AVAILABLE);
    assert_eq!(result.vessel_text, "100 ml");
    assert_eq!(result.summary(), NOT_AVAILABLE);

    match DetailView::build(entry, &BrewSettings::default()) {
        DetailView::Standard {
            gongfu_schedule,
            western_steep_time,
            ..
        } => {
            assert_eq!(gongfu_schedule.len(), 1);
            assert_eq!(gongfu_schedule[0].time, NOT_AVAILABLE);
            assert_eq!(western_steep_time, "Not available");
        }
        other => panic!("unexpected layout: {:?}", other),
    }
}

/// 空のデータセットはエラー
#[test]
fn test_empty_dataset_is_rejected() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("empty.json");
    std::fs::write(&path, r#"{"teaDatabase": []}"#).unwrap();

    let result = load_catalog(&Config::default(), Some(&path));
    assert!(matches!(result, Err(TeaGuideError::EmptyCatalog(_))));
}

/// 存在しないデータセットはIOエラー
#[test]
fn test_missing_dataset_is_reported() {
    let result = load_catalog(&Config::default(), Some(Path::new("/nonexistent/teas-12345.json")));
    assert!(matches!(result, Err(TeaGuideError::Catalog(_))));
}
