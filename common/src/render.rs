//! ハイライト結果のHTML化（埋め込み用）

use crate::search::HighlightSegment;

/// 一致区間を囲むspanのクラス名
pub const HIGHLIGHT_CLASS: &str = "highlight-match";

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '\'' => out.push_str("&#39;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// セグメント列をHTMLにする
///
/// 本文はすべてエスケープし、一致区間だけを `<span class="highlight-match">` で囲む。
pub fn highlight_html(segments: &[HighlightSegment]) -> String {
    segments
        .iter()
        .map(|segment| {
            let text = escape_html(&segment.text);
            if segment.matched {
                format!(r#"<span class="{}">{}</span>"#, HIGHLIGHT_CLASS, text)
            } else {
                text
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::highlight;

    #[test]
    fn test_highlight_html_wraps_matches() {
        let html = highlight_html(&highlight("Smoky pine", "smoky"));
        assert_eq!(html, r#"<span class="highlight-match">Smoky</span> pine"#);
    }

    #[test]
    fn test_highlight_html_escapes_text() {
        let html = highlight_html(&highlight("Pu'er <b>&</b> friends", "friends"));
        assert_eq!(
            html,
            r#"Pu&#39;er &lt;b&gt;&amp;&lt;/b&gt; <span class="highlight-match">friends</span>"#
        );
    }

    #[test]
    fn test_highlight_html_without_query() {
        assert_eq!(highlight_html(&highlight("Sencha", "")), "Sencha");
        assert_eq!(highlight_html(&[]), "");
    }
}
