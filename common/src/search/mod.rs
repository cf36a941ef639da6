//! 検索モジュール
//!
//! 検索クエリを正規化し、カタログエントリと照合する。
//!
//! ## 照合ルール
//! 1. 空のクエリはすべてに一致
//! 2. 空白除去形（"baimudan"）が名称の空白除去形に含まれれば一致
//! 3. いずれかの単語が名称・説明・風味・産地・分類のいずれかに含まれれば一致

pub mod highlight;
pub mod normalize;

pub use highlight::{highlight, HighlightSegment};
pub use normalize::{compact, normalize};

use crate::types::{CatalogEntry, Filter};

/// 空白除去形の照合を有効にする最小文字数（これより長い場合のみ）
const COMPACT_MATCH_MIN_CHARS: usize = 2;

/// 正規化済みの検索クエリ
///
/// エントリごとに正規化し直さないよう、検索1回につき1度だけ作る。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    normalized: String,
    compact: String,
    tokens: Vec<String>,
}

impl SearchQuery {
    pub fn parse(query: &str) -> Self {
        let normalized = normalize(query);
        let compact = compact(&normalized);
        let tokens = normalized
            .split(' ')
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            normalized,
            compact,
            tokens,
        }
    }

    /// 正規化後に何も残らないクエリはフィルタしない
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn compact(&self) -> &str {
        &self.compact
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// 空白除去形が `compact_text` に含まれるか
    pub fn compact_match(&self, compact_text: &str) -> bool {
        self.compact.chars().count() > COMPACT_MATCH_MIN_CHARS
            && compact_text.contains(self.compact.as_str())
    }

    /// エントリがクエリに一致するか
    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        if self.is_empty() {
            return true;
        }

        let normalized_type = normalize(&entry.tea_type);
        if self.compact_match(&compact(&normalized_type)) {
            return true;
        }

        let fields = [
            normalized_type,
            normalize(&entry.description),
            normalize(&entry.flavor_profile),
            normalize(&entry.region),
            normalize(&entry.category),
        ];

        self.tokens
            .iter()
            .any(|token| fields.iter().any(|field| field.contains(token.as_str())))
    }
}

/// エントリが検索文字列に一致するか
pub fn matches(entry: &CatalogEntry, query: &str) -> bool {
    SearchQuery::parse(query).matches(entry)
}

/// フィルタと検索を順に適用する
///
/// 完全一致フィルタ → クエリ照合の順。入力順を保持する（関連度で並べ替えない）。
///
/// # Arguments
/// * `entries` - カタログ全体
/// * `filter` - 分類・産地・名称の完全一致制約
/// * `query` - 自由入力の検索文字列
pub fn filtered_entries<'a>(
    entries: &'a [CatalogEntry],
    filter: &Filter,
    query: &str,
) -> Vec<&'a CatalogEntry> {
    let search = SearchQuery::parse(query);

    let results: Vec<&CatalogEntry> = entries
        .iter()
        .filter(|entry| filter.accepts(entry))
        .filter(|entry| search.matches(entry))
        .collect();

    tracing::trace!(
        query = search.normalized(),
        total = entries.len(),
        matched = results.len(),
        "search finished"
    );

    results
}
