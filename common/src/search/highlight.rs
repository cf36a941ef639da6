//! 検索一致箇所のハイライト
//!
//! 元のテキストをそのまま保持し、一致区間だけを印付きセグメントとして返す。
//! 重なる一致区間は先にすべて求めてから結合するため、二重に囲まれることはない。

use super::normalize::{compact, normalize, search_chars};
use super::SearchQuery;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// 空白除去一致時にハイライト対象とする単語の最小文字数（これより長い場合のみ）
const COMPACT_WORD_MIN_CHARS: usize = 1;

/// ハイライト結果の1区間
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightSegment {
    pub text: String,
    pub matched: bool,
}

impl HighlightSegment {
    fn new(text: &str, matched: bool) -> Self {
        Self {
            text: text.to_string(),
            matched,
        }
    }
}

/// 正規化済み文字列と元テキストのバイト位置の対応表
struct FoldedText {
    chars: Vec<char>,
    origins: Vec<Range<usize>>,
}

impl FoldedText {
    fn new(text: &str) -> Self {
        let mut chars = Vec::with_capacity(text.len());
        let mut origins = Vec::with_capacity(text.len());

        for (start, ch) in text.char_indices() {
            let origin = start..start + ch.len_utf8();
            for folded in search_chars(ch) {
                chars.push(folded);
                origins.push(origin.clone());
            }
        }

        Self { chars, origins }
    }

    /// `pattern` の重ならない出現位置を元テキストのバイト範囲で返す
    fn find_all(&self, pattern: &str) -> Vec<Range<usize>> {
        let pattern: Vec<char> = pattern.chars().collect();
        let mut spans = Vec::new();

        if pattern.is_empty() || pattern.len() > self.chars.len() {
            return spans;
        }

        let mut i = 0;
        while i + pattern.len() <= self.chars.len() {
            if self.chars[i..i + pattern.len()] == pattern[..] {
                let start = self.origins[i].start;
                let end = self.origins[i + pattern.len() - 1].end;
                spans.push(start..end);
                i += pattern.len();
            } else {
                i += 1;
            }
        }

        spans
    }
}

/// 一致区間を求める（結合済み・昇順）
///
/// 表示テキスト自体が空白除去形でクエリを含む場合は、
/// そのテキストの単語のうちクエリ（空白除去形）に含まれるものを対象にする。
/// それ以外はクエリの各単語を対象にする。
pub fn match_spans(text: &str, query: &SearchQuery) -> Vec<Range<usize>> {
    if query.is_empty() || text.is_empty() {
        return Vec::new();
    }

    let normalized_text = normalize(text);
    let patterns: Vec<String> = if query.compact_match(&compact(&normalized_text)) {
        normalized_text
            .split(' ')
            .filter(|word| word.chars().count() > COMPACT_WORD_MIN_CHARS)
            .filter(|word| query.compact().contains(word))
            .map(str::to_string)
            .collect()
    } else {
        query.tokens().to_vec()
    };

    let folded = FoldedText::new(text);
    let mut spans: Vec<Range<usize>> = patterns
        .iter()
        .flat_map(|pattern| folded.find_all(pattern))
        .collect();

    merge_spans(&mut spans)
}

/// 重なる区間を結合する（隣接するだけの区間はそのまま）
fn merge_spans(spans: &mut [Range<usize>]) -> Vec<Range<usize>> {
    spans.sort_by_key(|span| (span.start, span.end));

    let mut merged: Vec<Range<usize>> = Vec::with_capacity(spans.len());
    for span in spans.iter() {
        match merged.last_mut() {
            Some(last) if span.start < last.end => {
                last.end = last.end.max(span.end);
            }
            _ => merged.push(span.clone()),
        }
    }
    merged
}

/// テキストを一致区間と非一致区間に分割する
///
/// セグメントを連結すると必ず元のテキストに戻る。
///
/// # Examples
/// ```
/// use tea_guide_common::search::highlight;
///
/// let segments = highlight("Bai Mu Dan", "baimudan");
/// let matched: Vec<&str> = segments
///     .iter()
///     .filter(|s| s.matched)
///     .map(|s| s.text.as_str())
///     .collect();
/// assert_eq!(matched, vec!["Bai", "Mu", "Dan"]);
/// ```
pub fn highlight(text: &str, query: &str) -> Vec<HighlightSegment> {
    let query = SearchQuery::parse(query);
    highlight_with(text, &query)
}

/// 解析済みクエリでハイライトする
pub fn highlight_with(text: &str, query: &SearchQuery) -> Vec<HighlightSegment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for span in match_spans(text, query) {
        if span.start > cursor {
            segments.push(HighlightSegment::new(&text[cursor..span.start], false));
        }
        segments.push(HighlightSegment::new(&text[span.clone()], true));
        cursor = span.end;
    }

    if cursor < text.len() || segments.is_empty() {
        segments.push(HighlightSegment::new(&text[cursor..], false));
    }

    segments
}
