//! 検索用テキスト正規化
//!
//! アクセント除去・小文字化・記号除去を行い、
//! "Tiě Guānyīn" と "tie guanyin" を同一視する。

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// 削除する句読点
const STRIPPED_PUNCTUATION: &[char] = &[
    '.', ',', ';', ':', '!', '?', '(', ')', '[', ']', '{', '}', '|', '/', '\\',
];

/// 削除するアポストロフィ（直線・曲線）
const APOSTROPHES: &[char] = &['\'', '\u{2019}', '\u{2018}'];

/// 空白に置換するハイフン類（-, en dash, em dash）
const HYPHENS: &[char] = &['-', '\u{2013}', '\u{2014}'];

/// 1文字をアクセント除去・小文字化した文字列に展開する
///
/// 小文字化で結合文字が生じる文字（İ など）があるため、
/// 小文字化してから分解・除去する。
fn fold_char(ch: char) -> impl Iterator<Item = char> {
    ch.to_lowercase()
        .collect::<String>()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<Vec<_>>()
        .into_iter()
}

/// 検索用の1文字変換（アクセント除去・小文字化・記号除去・ハイフン→空白）
///
/// 空白の圧縮は行わない。ハイライト位置の対応付けにも使う。
pub fn search_chars(ch: char) -> impl Iterator<Item = char> {
    fold_char(ch).filter_map(|c| {
        if APOSTROPHES.contains(&c) || STRIPPED_PUNCTUATION.contains(&c) {
            None
        } else if HYPHENS.contains(&c) {
            Some(' ')
        } else {
            Some(c)
        }
    })
}

/// 検索用にテキストを正規化する
///
/// # Examples
/// ```
/// use tea_guide_common::search::normalize;
///
/// assert_eq!(normalize("Tiě Guānyīn"), "tie guanyin");
/// assert_eq!(normalize("Jin Jun-Mei (Golden Eyebrow)"), "jin jun mei golden eyebrow");
/// ```
pub fn normalize(text: &str) -> String {
    let folded: String = text.chars().flat_map(search_chars).collect();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// 正規化済み文字列から空白をすべて除去する（"bai mu dan" → "baimudan"）
pub fn compact(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}
