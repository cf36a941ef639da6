//! 抽出比率計算モジュール
//!
//! お茶ごとの基準比率（茶葉g/湯量ml）を容器サイズに合わせて換算し、
//! 単位系に応じた表示文字列を作る。
//!
//! ## 処理フロー
//! 1. 抽出方法に応じた比率を解決（西洋式が読めなければ功夫式）
//! 2. 容器サイズをmlに換算して茶葉量を比例計算
//! 3. 茶さじ / oz / g のいずれか1つで表示

pub mod calculator;
pub mod infusion;
pub mod ratio;
pub mod units;

pub use calculator::{compute_display, effective_vessel_size, format_ratio, DisplayResult};
pub use infusion::{infusion_schedule, InfusionLabel, InfusionStep};
pub use ratio::{parse_leaf_ratio, resolve_ratio, scale_leaf, Ratio, WesternSteeping};
pub use units::{convert_vessel_input, MassUnit};

/// 情報が欠けている・読めない場合の表示値
pub const NOT_AVAILABLE: &str = "Information not available";
