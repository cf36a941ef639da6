//! 功夫式の抽出時間表の解析
//!
//! "10s, 15s, 20s, +5-10s each additional steep" のような記述を
//! 抽出回ごとの行に分解する。

use super::NOT_AVAILABLE;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// 抽出回のラベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InfusionLabel {
    /// 1始まりの抽出回
    Nth(usize),
    /// 以降の抽出ごとの延長指示
    Additional,
}

impl std::fmt::Display for InfusionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InfusionLabel::Nth(n) => write!(f, "{}", n),
            InfusionLabel::Additional => write!(f, "Additional"),
        }
    }
}

/// 抽出時間表の1行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfusionStep {
    pub label: InfusionLabel,
    pub time: String,
}

/// 末尾の追加抽出指示を切り出す
///
/// # Returns
/// (残りの文字列, 追加抽出指示)
pub fn split_additional(raw: &str) -> (String, Option<String>) {
    lazy_static::lazy_static! {
        static ref ADDITIONAL_RE: Regex =
            Regex::new(r"(?i)\+[\d-]+s\s+each\s+additional\s+steep.*").unwrap();
    }

    match ADDITIONAL_RE.find(raw) {
        Some(m) => {
            let remainder = format!("{}{}", &raw[..m.start()], &raw[m.end()..]);
            (remainder.trim().to_string(), Some(m.as_str().trim().to_string()))
        }
        None => (raw.trim().to_string(), None),
    }
}

/// 抽出時間の記述を行に分解する
///
/// 1. 末尾の "+5-10s each additional steep..." を切り出す
/// 2. カンマがあればカンマで分割（空要素は捨てる）
/// 3. なければ "<整数>s" をすべて拾う
/// 4. それもなければ全体を1行にする
///
/// # Examples
/// ```
/// use tea_guide_common::brew::{infusion_schedule, InfusionLabel};
///
/// let steps = infusion_schedule("10s, 15s, 20s, +5-10s each additional steep");
/// assert_eq!(steps.len(), 4);
/// assert_eq!(steps[0].time, "10s");
/// assert_eq!(steps[3].label, InfusionLabel::Additional);
/// ```
pub fn infusion_schedule(raw: &str) -> Vec<InfusionStep> {
    lazy_static::lazy_static! {
        static ref SECONDS_RE: Regex = Regex::new(r"\b\d+s\b").unwrap();
    }

    let (remainder, additional) = split_additional(raw);

    let times: Vec<String> = if remainder.contains(',') {
        remainder
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    } else if SECONDS_RE.is_match(&remainder) {
        SECONDS_RE
            .find_iter(&remainder)
            .map(|m| m.as_str().to_string())
            .collect()
    } else if !remainder.is_empty() {
        vec![remainder]
    } else if additional.is_none() {
        vec![NOT_AVAILABLE.to_string()]
    } else {
        Vec::new()
    };

    let mut steps: Vec<InfusionStep> = times
        .into_iter()
        .enumerate()
        .map(|(i, time)| InfusionStep {
            label: InfusionLabel::Nth(i + 1),
            time,
        })
        .collect();

    if let Some(time) = additional {
        steps.push(InfusionStep {
            label: InfusionLabel::Additional,
            time,
        });
    }

    steps
}
