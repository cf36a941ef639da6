//! 対話式の抽出量計算
//!
//! 抽出方法・単位系・茶さじ表示の切り替えと容器サイズの入力を受け付け、
//! 変更のたびに詳細表示を作り直す。

use crate::display;
use crate::error::{Result, TeaGuideError};
use dialoguer::{Input, Select};
use tea_guide_common::brew::{convert_vessel_input, effective_vessel_size};
use tea_guide_common::{BrewSettings, CatalogEntry, DetailView};

/// 対話アクション
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BrewAction {
    /// 功夫式 ⇔ 西洋式
    ToggleMethod,
    /// metric ⇔ imperial（容器サイズも換算）
    ToggleUnits,
    /// 茶さじ表示の切り替え
    ToggleSpoon,
    /// 容器サイズを入力
    SetVessel(f64),
    /// 終了
    Quit,
}

/// アクションを適用した新しい設定を返す
pub fn apply_action(settings: BrewSettings, action: BrewAction) -> BrewSettings {
    match action {
        BrewAction::ToggleMethod => BrewSettings {
            method: settings.method.toggled(),
            ..settings
        },
        BrewAction::ToggleUnits => {
            // 空欄・不正値は既定値として換算する
            let unit_system = settings.unit_system.toggled();
            BrewSettings {
                vessel_size: convert_vessel_input(
                    effective_vessel_size(settings.vessel_size),
                    settings.unit_system,
                    unit_system,
                ),
                unit_system,
                ..settings
            }
        }
        BrewAction::ToggleSpoon => BrewSettings {
            spoon_measure: !settings.spoon_measure,
            ..settings
        },
        BrewAction::SetVessel(vessel_size) => BrewSettings {
            vessel_size,
            ..settings
        },
        BrewAction::Quit => settings,
    }
}

/// 対話式で抽出量を計算
pub fn run_interactive_brew(
    entry: &CatalogEntry,
    initial: BrewSettings,
    full_commentary: bool,
) -> Result<()> {
    let mut settings = initial;

    if entry.is_special_brewing() {
        // 切り替える設定がない
        display::print_detail(entry, &DetailView::build(entry, &settings), full_commentary);
        return Ok(());
    }

    loop {
        display::print_detail(entry, &DetailView::build(entry, &settings), full_commentary);
        println!();
        display::print_settings(&settings);
        println!();

        let action = prompt_brew_action(&settings)?;
        if action == BrewAction::Quit {
            break;
        }

        settings = apply_action(settings, action);
        tracing::debug!(?settings, "brew settings changed");
        println!("---\n");
    }

    Ok(())
}

/// 操作選択プロンプト
fn prompt_brew_action(settings: &BrewSettings) -> Result<BrewAction> {
    let items = [
        format!("抽出方法を切り替え（→ {}）", settings.method.toggled()),
        format!("単位系を切り替え（→ {}）", settings.unit_system.toggled()),
        format!(
            "茶さじ表示を{}",
            if settings.spoon_measure { "やめる" } else { "使う" }
        ),
        format!("容器サイズを入力（{}）", settings.unit_system.volume_label()),
        "終了".to_string(),
    ];

    let selection = Select::new()
        .with_prompt("操作")
        .items(&items)
        .default(0)
        .interact()?;

    match selection {
        0 => Ok(BrewAction::ToggleMethod),
        1 => Ok(BrewAction::ToggleUnits),
        2 => Ok(BrewAction::ToggleSpoon),
        3 => prompt_vessel_size(settings),
        4 => Ok(BrewAction::Quit),
        _ => Err(TeaGuideError::Prompt(format!("不明な選択: {}", selection))),
    }
}

/// 容器サイズ入力（空欄・0以下は既定値で計算される）
fn prompt_vessel_size(settings: &BrewSettings) -> Result<BrewAction> {
    let input: String = Input::new()
        .with_prompt(format!("容器サイズ ({})", settings.unit_system.volume_label()))
        .with_initial_text(effective_vessel_size(settings.vessel_size).to_string())
        .allow_empty(true)
        .interact_text()?;

    let vessel_size = input.trim().parse::<f64>().unwrap_or(0.0);
    Ok(BrewAction::SetVessel(vessel_size))
}
