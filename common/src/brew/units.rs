//! 単位換算と表示書式
//!
//! 換算はすべて表示用。容量は小数1桁、オンスは小数2桁、茶さじは小数1桁で丸める。

use crate::types::UnitSystem;
use serde::{Deserialize, Serialize};

/// 1 ml ≈ 0.033814 fl oz
pub const ML_TO_FL_OZ: f64 = 0.033814;

/// 1 g ≈ 0.035274 oz
pub const GRAM_TO_OZ: f64 = 0.035274;

/// 茶さじ1杯 ≈ 茶葉2g
pub const GRAMS_PER_SPOON: f64 = 2.0;

pub fn ml_to_fl_oz(ml: f64) -> f64 {
    ml * ML_TO_FL_OZ
}

pub fn fl_oz_to_ml(fl_oz: f64) -> f64 {
    fl_oz / ML_TO_FL_OZ
}

pub fn grams_to_oz(grams: f64) -> f64 {
    grams * GRAM_TO_OZ
}

pub fn oz_to_grams(oz: f64) -> f64 {
    oz / GRAM_TO_OZ
}

pub fn grams_to_spoons(grams: f64) -> f64 {
    grams / GRAMS_PER_SPOON
}

pub fn spoons_to_grams(spoons: f64) -> f64 {
    spoons * GRAMS_PER_SPOON
}

/// 茶葉量の表示単位（同時に表示するのは1つだけ）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MassUnit {
    Grams,
    Ounces,
    Spoons,
}

impl MassUnit {
    /// 茶さじ指定が最優先、次に単位系（imperial → oz、metric → g）
    pub fn select(unit_system: UnitSystem, spoon_measure: bool) -> Self {
        if spoon_measure {
            MassUnit::Spoons
        } else {
            match unit_system {
                UnitSystem::Imperial => MassUnit::Ounces,
                UnitSystem::Metric => MassUnit::Grams,
            }
        }
    }

    /// グラムを表示文字列に変換する（"6.0 g" / "0.21 oz" / "3.0 tsp"）
    pub fn format(&self, grams: f64) -> String {
        match self {
            MassUnit::Grams => format!("{:.1} g", grams),
            MassUnit::Ounces => format!("{:.2} oz", grams_to_oz(grams)),
            MassUnit::Spoons => format!("{:.1} tsp", grams_to_spoons(grams)),
        }
    }
}

/// 容器サイズ（入力単位の値）を表示文字列にする
pub fn format_vessel(vessel_size: f64, unit_system: UnitSystem) -> String {
    match unit_system {
        UnitSystem::Metric => format!("{} ml", vessel_size.round()),
        UnitSystem::Imperial => format!("{:.1} fl oz", vessel_size),
    }
}

/// 単位系の切り替え時に容器サイズ入力欄の値を換算する
///
/// metric → imperial は小数1桁、imperial → metric は整数に丸める。
pub fn convert_vessel_input(value: f64, from: UnitSystem, to: UnitSystem) -> f64 {
    match (from, to) {
        (UnitSystem::Metric, UnitSystem::Imperial) => round_to(ml_to_fl_oz(value), 1),
        (UnitSystem::Imperial, UnitSystem::Metric) => fl_oz_to_ml(value).round(),
        _ => value,
    }
}

/// 小数 `digits` 桁に丸める
pub fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}
