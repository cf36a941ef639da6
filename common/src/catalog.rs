//! カタログ（お茶データセット）の読み込みと索引
//!
//! データセットはエントリの配列、または `{"teaDatabase": [...]}` 形式のJSON。

use crate::error::{Error, Result};
use crate::search::{compact, filtered_entries, normalize};
use crate::types::{CatalogEntry, Filter};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// 組み込みデータセット
const BUILTIN_DATASET: &str = include_str!("../data/teas.json");

/// データセットのJSON形式
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Wrapped {
        #[serde(rename = "teaDatabase")]
        tea_database: Vec<CatalogEntry>,
    },
    List(Vec<CatalogEntry>),
}

/// 読み取り専用のカタログ
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let entries = match serde_json::from_str(json)? {
            CatalogDocument::Wrapped { tea_database } => tea_database,
            CatalogDocument::List(entries) => entries,
        };
        tracing::debug!(entries = entries.len(), "catalog loaded");
        Ok(Self { entries })
    }

    /// JSONファイルから読み込み
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// 組み込みデータセット
    pub fn builtin() -> Result<Self> {
        let catalog = Self::from_json(BUILTIN_DATASET)?;
        if catalog.is_empty() {
            return Err(Error::Config("組み込みデータセットが空です".into()));
        }
        Ok(catalog)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 分類一覧（重複除去・昇順）
    pub fn categories(&self) -> Vec<String> {
        unique_sorted(self.entries.iter().map(|e| e.category.as_str()))
    }

    /// 産地一覧（重複除去・昇順）
    pub fn regions(&self) -> Vec<String> {
        unique_sorted(self.entries.iter().map(|e| e.region.as_str()))
    }

    /// 分類に属するお茶の名称（昇順）
    pub fn types_in_category(&self, category: &str) -> Vec<String> {
        self.sorted_types(|e| e.category == category)
    }

    /// 産地に属するお茶の名称（昇順）
    pub fn types_in_region(&self, region: &str) -> Vec<String> {
        self.sorted_types(|e| e.region == region)
    }

    fn sorted_types<F>(&self, predicate: F) -> Vec<String>
    where
        F: Fn(&CatalogEntry) -> bool,
    {
        let mut types: Vec<String> = self
            .entries
            .iter()
            .filter(|e| predicate(e))
            .map(|e| e.tea_type.clone())
            .collect();
        types.sort();
        types
    }

    /// 名称（正式名・英語名）で探す
    ///
    /// 完全一致 → 正規化一致 → 空白除去一致の順。
    pub fn find(&self, name: &str) -> Option<&CatalogEntry> {
        let names = |e: &CatalogEntry| -> Vec<String> {
            std::iter::once(e.tea_type.clone())
                .chain(e.english_type.clone())
                .collect()
        };

        if let Some(entry) = self
            .entries
            .iter()
            .find(|e| names(e).iter().any(|n| n == name))
        {
            return Some(entry);
        }

        let wanted = normalize(name);
        if wanted.is_empty() {
            return None;
        }
        if let Some(entry) = self
            .entries
            .iter()
            .find(|e| names(e).iter().any(|n| normalize(n) == wanted))
        {
            return Some(entry);
        }

        let wanted = compact(&wanted);
        self.entries
            .iter()
            .find(|e| names(e).iter().any(|n| compact(&normalize(n)) == wanted))
    }

    /// フィルタと検索クエリを適用する（入力順を保持）
    pub fn search(&self, filter: &Filter, query: &str) -> Vec<&CatalogEntry> {
        filtered_entries(&self.entries, filter, query)
    }
}

fn unique_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
