//! 容器サイズに応じた茶葉量の計算
//!
//! 入力（抽出方法・容器サイズ・単位系・茶さじ表示）が1つでも変われば
//! `compute_display` を丸ごと呼び直す。途中状態は持たない。

use super::ratio::{resolve_ratio, Ratio};
use super::units::{fl_oz_to_ml, format_vessel, grams_to_oz, ml_to_fl_oz, MassUnit};
use super::NOT_AVAILABLE;
use crate::types::{BrewSettings, CatalogEntry, UnitSystem, DEFAULT_VESSEL_SIZE};
use serde::{Deserialize, Serialize};

/// 詳細表示用の計算結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayResult {
    /// "6.0 g" / "0.21 oz" / "3.0 tsp"
    pub amount_text: String,
    /// "300 ml" / "10.1 fl oz"
    pub vessel_text: String,
    /// 基準比率 "3g / 150ml" / "0.11 oz / 5.1 fl oz"
    pub ratio_text: String,
    /// 計算した茶葉量（比率が読めない場合は None）
    pub grams: Option<f64>,
}

impl DisplayResult {
    /// "6.0 g of tea for 300 ml"（比率が読めない場合は茶葉量の表示値のみ）
    pub fn summary(&self) -> String {
        match self.grams {
            Some(_) => format!("{} of tea for {}", self.amount_text, self.vessel_text),
            None => self.amount_text.clone(),
        }
    }
}

/// 入力欄の値が不正（0以下・数値でない）なら既定値を使う
pub fn effective_vessel_size(vessel_size: f64) -> f64 {
    if vessel_size.is_finite() && vessel_size > 0.0 {
        vessel_size
    } else {
        DEFAULT_VESSEL_SIZE
    }
}

/// 基準比率を単位系に合わせて表示する
pub fn format_ratio(ratio: &Ratio, unit_system: UnitSystem) -> String {
    match unit_system {
        UnitSystem::Metric => format!("{}g / {}ml", ratio.leaf_grams, ratio.water_ml),
        UnitSystem::Imperial => format!(
            "{:.2} oz / {:.1} fl oz",
            grams_to_oz(ratio.leaf_grams),
            ml_to_fl_oz(ratio.water_ml)
        ),
    }
}

/// 表示内容を計算する
///
/// # Arguments
/// * `entry` - 対象のお茶
/// * `settings` - 抽出方法・容器サイズ（単位系に従う）・単位系・茶さじ表示
///
/// # Returns
/// 常に表示可能な結果。比率が読めない場合は茶葉量と比率が "Information not available" になる。
pub fn compute_display(entry: &CatalogEntry, settings: &BrewSettings) -> DisplayResult {
    let vessel_size = effective_vessel_size(settings.vessel_size);
    let vessel_ml = match settings.unit_system {
        UnitSystem::Metric => vessel_size,
        UnitSystem::Imperial => fl_oz_to_ml(vessel_size),
    };
    let vessel_text = format_vessel(vessel_size, settings.unit_system);

    match resolve_ratio(entry, settings.method) {
        Ok(ratio) => {
            let grams = ratio.scale_to(vessel_ml);
            let unit = MassUnit::select(settings.unit_system, settings.spoon_measure);
            DisplayResult {
                amount_text: unit.format(grams),
                vessel_text,
                ratio_text: format_ratio(&ratio, settings.unit_system),
                grams: Some(grams),
            }
        }
        Err(_) => DisplayResult {
            amount_text: NOT_AVAILABLE.to_string(),
            vessel_text,
            ratio_text: NOT_AVAILABLE.to_string(),
            grams: None,
        },
    }
}
