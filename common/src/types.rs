//! カタログと抽出設定の型定義
//!
//! - CatalogEntry: データセットの1エントリ（読み取り専用）
//! - BrewSettings: 再計算ごとに渡す抽出設定
//! - Filter: 検索前に適用する完全一致フィルタ

use serde::{Deserialize, Deserializer, Serialize};

/// お茶カタログの1エントリ
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// 正式名称
    #[serde(rename = "type")]
    pub tea_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub english_type: Option<String>,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub region: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub flavor_profile: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commentary: Option<String>,

    /// 功夫式の比率 "茶葉g/湯量ml"
    #[serde(default)]
    pub leaf_ratio: String,

    /// 西洋式 "2g per 240ml, 3-4 minutes, 85°C"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub western_steeping: Option<String>,

    #[serde(default)]
    pub water_temperature: String,

    #[serde(default)]
    pub potential_infusions: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gong_fu_steeping_times: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brewing_commentary: Option<String>,

    /// 標準レイアウト（1）か特殊抽出レイアウトか
    #[serde(default, deserialize_with = "deserialize_brewing_flag")]
    pub normal_brewing: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cultivars: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl CatalogEntry {
    /// 特殊な抽出手順が必要なエントリか
    pub fn is_special_brewing(&self) -> bool {
        !self.normal_brewing
    }
}

/// データセットでは `1` / `0` の数値で持つため、bool と数値の両方を受け付ける
fn deserialize_brewing_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Number(f64),
        Null(()),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Number(n) => n == 1.0,
        Flag::Null(()) => false,
    })
}

/// 抽出方法
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrewMethod {
    /// 功夫式（主方式）
    #[default]
    Gongfu,
    /// 西洋式（代替方式）
    Western,
}

impl BrewMethod {
    /// もう一方の抽出方法
    pub fn toggled(self) -> Self {
        match self {
            BrewMethod::Gongfu => BrewMethod::Western,
            BrewMethod::Western => BrewMethod::Gongfu,
        }
    }

    /// 表示用の見出し
    pub fn title(&self) -> &'static str {
        match self {
            BrewMethod::Gongfu => "Gong Fu Cha Brewing Guide",
            BrewMethod::Western => "Western Style Brewing Guide",
        }
    }
}

impl std::str::FromStr for BrewMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gongfu" | "gong-fu" | "gong_fu" | "g" => Ok(BrewMethod::Gongfu),
            "western" | "w" => Ok(BrewMethod::Western),
            _ => Err(format!("Unknown brewing method: {}. Use gongfu or western", s)),
        }
    }
}

impl std::fmt::Display for BrewMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BrewMethod::Gongfu => write!(f, "gongfu"),
            BrewMethod::Western => write!(f, "western"),
        }
    }
}

/// 単位系
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// ml / g
    #[default]
    Metric,
    /// fl oz / oz
    Imperial,
}

impl UnitSystem {
    pub fn toggled(self) -> Self {
        match self {
            UnitSystem::Metric => UnitSystem::Imperial,
            UnitSystem::Imperial => UnitSystem::Metric,
        }
    }

    /// 容器サイズ入力の単位ラベル
    pub fn volume_label(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "ml",
            UnitSystem::Imperial => "fl oz",
        }
    }
}

impl std::str::FromStr for UnitSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "m" => Ok(UnitSystem::Metric),
            "imperial" | "i" => Ok(UnitSystem::Imperial),
            _ => Err(format!("Unknown unit system: {}. Use metric or imperial", s)),
        }
    }
}

impl std::fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitSystem::Metric => write!(f, "metric"),
            UnitSystem::Imperial => write!(f, "imperial"),
        }
    }
}

/// 既定の容器サイズ（現在の単位系での値）
pub const DEFAULT_VESSEL_SIZE: f64 = 100.0;

/// 再計算ごとに渡す抽出設定
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrewSettings {
    pub method: BrewMethod,
    /// 容器サイズ（metricならml、imperialならfl oz）
    pub vessel_size: f64,
    pub unit_system: UnitSystem,
    /// 茶さじ表示（単位系より優先）
    pub spoon_measure: bool,
}

impl Default for BrewSettings {
    fn default() -> Self {
        Self {
            method: BrewMethod::default(),
            vessel_size: DEFAULT_VESSEL_SIZE,
            unit_system: UnitSystem::default(),
            spoon_measure: false,
        }
    }
}

/// 完全一致フィルタ（None・空文字はワイルドカード）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub category: Option<String>,
    pub region: Option<String>,
    pub tea_type: Option<String>,
}

impl Filter {
    /// エントリがすべての制約を満たすか
    pub fn accepts(&self, entry: &CatalogEntry) -> bool {
        fn check(constraint: &Option<String>, value: &str) -> bool {
            match constraint.as_deref() {
                None | Some("") => true,
                Some(expected) => expected == value,
            }
        }

        check(&self.category, &entry.category)
            && check(&self.region, &entry.region)
            && check(&self.tea_type, &entry.tea_type)
    }
}
