//! 表示用データの組み立て
//!
//! 描画方法（HTML・端末）に依存しない構造化データを返す。
//! - Card: 検索結果一覧の1枚
//! - DetailView: 詳細表示（標準抽出 / 特殊抽出）

use crate::brew::{
    compute_display, infusion_schedule, parse_leaf_ratio, DisplayResult, InfusionStep,
    WesternSteeping, NOT_AVAILABLE,
};
use crate::search::{highlight::highlight_with, HighlightSegment, SearchQuery};
use crate::types::{BrewMethod, BrewSettings, CatalogEntry};
use serde::Serialize;

/// 解説の冒頭表示の最大文字数
pub const COMMENTARY_PREVIEW_CHARS: usize = 150;

/// 特殊抽出の説明がない場合の表示値
pub const SPECIAL_BREWING_NOT_AVAILABLE: &str = "Special brewing instructions not available";

/// 西洋式の抽出時間がない場合の表示値
pub const STEEP_TIME_NOT_AVAILABLE: &str = "Not available";

/// 産地に対応する国旗絵文字（不明なら地球）
pub fn region_flag(region: &str) -> &'static str {
    const FLAGS: &[(&str, &str)] = &[
        ("china", "🇨🇳"),
        ("japan", "🇯🇵"),
        ("india", "🇮🇳"),
        ("taiwan", "🇹🇼"),
        ("sri lanka", "🇱🇰"),
        ("kenya", "🇰🇪"),
        ("south africa", "🇿🇦"),
        ("morocco", "🇲🇦"),
        ("new zealand", "🇳🇿"),
        ("nepal", "🇳🇵"),
        ("rwanda", "🇷🇼"),
        ("malawi", "🇲🇼"),
    ];

    let region = region.to_lowercase();
    FLAGS
        .iter()
        .find(|(country, _)| region.contains(country))
        .map(|(_, flag)| *flag)
        .unwrap_or("🌍")
}

/// 解説の冒頭部分
///
/// # Returns
/// (表示文字列, 省略したか)
pub fn commentary_preview(text: &str) -> (String, bool) {
    if text.chars().count() > COMMENTARY_PREVIEW_CHARS {
        let head: String = text.chars().take(COMMENTARY_PREVIEW_CHARS).collect();
        (format!("{}...", head), true)
    } else {
        (text.to_string(), false)
    }
}

/// カードに載せる抽出情報の2行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrewingPreview {
    /// "3g / 150ml"
    pub ratio: String,
    /// 湯温
    pub temperature: String,
}

/// カード用の抽出情報
///
/// 西洋式が読めない場合は元の記述をそのまま載せる。
pub fn brewing_preview(entry: &CatalogEntry, method: BrewMethod) -> BrewingPreview {
    let fallback_temperature = entry.water_temperature.clone();

    match method {
        BrewMethod::Gongfu => BrewingPreview {
            ratio: parse_leaf_ratio(&entry.leaf_ratio)
                .map(|r| format!("{}g / {}ml", r.leaf_grams, r.water_ml))
                .unwrap_or_else(|_| NOT_AVAILABLE.to_string()),
            temperature: fallback_temperature,
        },
        BrewMethod::Western => {
            let Some(raw) = entry.western_steeping.as_deref() else {
                return BrewingPreview {
                    ratio: NOT_AVAILABLE.to_string(),
                    temperature: fallback_temperature,
                };
            };

            let western = WesternSteeping::parse(raw);
            match (western.ratio(), western.temperature) {
                (Ok(r), Some(temperature)) => BrewingPreview {
                    ratio: format!("{}g / {}ml", r.leaf_grams, r.water_ml),
                    temperature,
                },
                _ => BrewingPreview {
                    ratio: raw.to_string(),
                    temperature: fallback_temperature,
                },
            }
        }
    }
}

/// 検索結果一覧の1枚
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub name: Vec<HighlightSegment>,
    pub english_name: Option<Vec<HighlightSegment>>,
    pub category: String,
    pub description: Vec<HighlightSegment>,
    pub region: Vec<HighlightSegment>,
    pub region_flag: &'static str,
    pub flavor_profile: Vec<HighlightSegment>,
    /// 標準抽出なら (功夫式, 西洋式)、特殊抽出なら None
    pub previews: Option<(BrewingPreview, BrewingPreview)>,
}

impl Card {
    /// エントリからカードを作る（クエリが空ならハイライトなし）
    pub fn build(entry: &CatalogEntry, query: &SearchQuery) -> Self {
        let mark = |text: &str| highlight_with(text, query);

        let previews = if entry.is_special_brewing() {
            None
        } else {
            Some((
                brewing_preview(entry, BrewMethod::Gongfu),
                brewing_preview(entry, BrewMethod::Western),
            ))
        };

        Self {
            name: mark(&entry.tea_type),
            english_name: entry
                .english_type
                .as_deref()
                .filter(|n| !n.is_empty())
                .map(mark),
            category: entry.category.clone(),
            description: mark(&entry.description),
            region: mark(&entry.region),
            region_flag: region_flag(&entry.region),
            flavor_profile: mark(&entry.flavor_profile),
            previews,
        }
    }

    pub fn is_special_brewing(&self) -> bool {
        self.previews.is_none()
    }
}

/// 詳細表示
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "layout", rename_all = "camelCase")]
pub enum DetailView {
    /// 功夫式・西洋式の計算機つき
    #[serde(rename_all = "camelCase")]
    Standard {
        title: &'static str,
        brew: DisplayResult,
        water_temperature: String,
        gongfu_schedule: Vec<InfusionStep>,
        western_steep_time: String,
        cultivars: Option<String>,
        commentary: Option<String>,
    },
    /// 特殊な抽出手順のみ
    #[serde(rename_all = "camelCase")]
    Special {
        instructions: String,
        water_temperature: String,
        potential_infusions: String,
    },
}

impl DetailView {
    /// エントリと現在の設定から詳細表示を作る
    ///
    /// 設定が変わるたびに作り直す。
    pub fn build(entry: &CatalogEntry, settings: &BrewSettings) -> Self {
        if entry.is_special_brewing() {
            return DetailView::Special {
                instructions: entry
                    .brewing_commentary
                    .clone()
                    .filter(|c| !c.trim().is_empty())
                    .unwrap_or_else(|| SPECIAL_BREWING_NOT_AVAILABLE.to_string()),
                water_temperature: entry.water_temperature.clone(),
                potential_infusions: entry.potential_infusions.clone(),
            };
        }

        let western_steep_time = entry
            .western_steeping
            .as_deref()
            .and_then(|raw| WesternSteeping::parse(raw).time)
            .unwrap_or_else(|| STEEP_TIME_NOT_AVAILABLE.to_string());

        DetailView::Standard {
            title: settings.method.title(),
            brew: compute_display(entry, settings),
            water_temperature: entry.water_temperature.clone(),
            gongfu_schedule: infusion_schedule(
                entry.gong_fu_steeping_times.as_deref().unwrap_or(NOT_AVAILABLE),
            ),
            western_steep_time,
            cultivars: non_empty(entry.cultivars.as_deref()),
            commentary: non_empty(entry.commentary.as_deref()),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
