//! 茶葉と湯量の比率の解析
//!
//! - 功夫式: `leafRatio` の "3/150"
//! - 西洋式: `westernSteeping` 先頭の "2g per 240ml"（読めなければ功夫式にフォールバック）

use crate::error::BrewError;
use crate::types::{BrewMethod, CatalogEntry};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// 基準となる茶葉量（g）と湯量（ml）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ratio {
    pub leaf_grams: f64,
    pub water_ml: f64,
}

impl Ratio {
    /// 茶葉量は0以上、湯量は0より大きい有限値であること
    pub fn new(leaf_grams: f64, water_ml: f64) -> Result<Self, BrewError> {
        if !leaf_grams.is_finite() || leaf_grams < 0.0 || !water_ml.is_finite() || water_ml <= 0.0 {
            return Err(BrewError::MalformedRatio(format!("{}/{}", leaf_grams, water_ml)));
        }
        Ok(Self { leaf_grams, water_ml })
    }

    /// 指定した容器サイズ（ml）に必要な茶葉量（g）
    pub fn scale_to(&self, vessel_ml: f64) -> f64 {
        self.leaf_grams * vessel_ml / self.water_ml
    }
}

/// 茶葉量を容器サイズに比例させる
///
/// `scale_leaf(l, w, w) == l`、容器サイズに対して単調増加。
/// 湯量0や非有限値は `MalformedRatio`。
pub fn scale_leaf(leaf_amount: f64, water_volume: f64, target_vessel_ml: f64) -> Result<f64, BrewError> {
    if !target_vessel_ml.is_finite() {
        return Err(BrewError::MalformedRatio(format!(
            "{}/{} for {}ml",
            leaf_amount, water_volume, target_vessel_ml
        )));
    }
    Ok(Ratio::new(leaf_amount, water_volume)?.scale_to(target_vessel_ml))
}

/// 功夫式の比率 "茶葉/湯量" を解析する
///
/// # Examples
/// ```
/// use tea_guide_common::brew::parse_leaf_ratio;
///
/// let ratio = parse_leaf_ratio("3/150").unwrap();
/// assert_eq!(ratio.leaf_grams, 3.0);
/// assert_eq!(ratio.water_ml, 150.0);
/// assert!(parse_leaf_ratio("abc").is_err());
/// ```
pub fn parse_leaf_ratio(text: &str) -> Result<Ratio, BrewError> {
    let malformed = || BrewError::MalformedRatio(text.to_string());

    let parts: Vec<&str> = text.split('/').collect();
    if parts.len() != 2 {
        return Err(malformed());
    }

    let leaf: f64 = parts[0].trim().parse().map_err(|_| malformed())?;
    let water: f64 = parts[1].trim().parse().map_err(|_| malformed())?;

    Ratio::new(leaf, water).map_err(|_| malformed())
}

/// 西洋式抽出情報（"茶葉, 時間, 温度"）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WesternSteeping {
    /// "2g per 240ml"
    pub leaf: String,
    /// "3-4 minutes"
    pub time: Option<String>,
    /// "85°C"
    pub temperature: Option<String>,
}

impl WesternSteeping {
    /// カンマ区切りの3項目に分解する（不足分は None）
    pub fn parse(text: &str) -> Self {
        let mut parts = text.split(',').map(str::trim);
        let mut next = || parts.next().filter(|p| !p.is_empty()).map(str::to_string);

        let leaf = next().unwrap_or_default();
        let time = next();
        let temperature = next();

        Self {
            leaf,
            time,
            temperature,
        }
    }

    /// 先頭項目の "<n>g per <n>ml" を比率として読む
    pub fn ratio(&self) -> Result<Ratio, BrewError> {
        lazy_static::lazy_static! {
            static ref LEAF_PER_WATER_RE: Regex =
                Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*g\s+per\s+(\d+(?:\.\d+)?)\s*ml").unwrap();
        }

        let malformed = || BrewError::MalformedSteepingInfo(self.leaf.clone());

        let cap = LEAF_PER_WATER_RE.captures(&self.leaf).ok_or_else(malformed)?;
        let leaf: f64 = cap[1].parse().map_err(|_| malformed())?;
        let water: f64 = cap[2].parse().map_err(|_| malformed())?;

        Ratio::new(leaf, water).map_err(|_| malformed())
    }
}

/// 抽出方法に応じた比率を求める
///
/// 西洋式の情報がない・読めない場合は功夫式の比率を返す（失敗にしない）。
/// 功夫式の比率自体が読めない場合のみ `MalformedRatio` を返す。
pub fn resolve_ratio(entry: &CatalogEntry, method: BrewMethod) -> Result<Ratio, BrewError> {
    if method == BrewMethod::Western {
        if let Some(western) = entry.western_steeping.as_deref() {
            match WesternSteeping::parse(western).ratio() {
                Ok(ratio) => return Ok(ratio),
                Err(e) => {
                    tracing::debug!(tea = %entry.tea_type, error = %e, "falling back to gongfu ratio");
                }
            }
        }
    }

    parse_leaf_ratio(&entry.leaf_ratio).inspect_err(|e| {
        tracing::debug!(tea = %entry.tea_type, error = %e, "leaf ratio unavailable");
    })
}
