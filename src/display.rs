//! 端末への表示
//!
//! ライブラリが返す構造化データ（Card / DetailView）を色付きで出力する。

use colored::Colorize;
use tea_guide_common::brew::effective_vessel_size;
use tea_guide_common::view::{commentary_preview, BrewingPreview, Card, DetailView};
use tea_guide_common::{BrewSettings, CatalogEntry, HighlightSegment};

/// ハイライト区間を強調した1行
pub fn highlighted(segments: &[HighlightSegment]) -> String {
    segments
        .iter()
        .map(|segment| {
            if segment.matched {
                segment.text.black().on_yellow().bold().to_string()
            } else {
                segment.text.clone()
            }
        })
        .collect()
}

fn preview_line(label: &str, preview: &BrewingPreview) -> String {
    format!(
        "  {:<8} {} @ {}",
        label.dimmed(),
        preview.ratio,
        preview.temperature
    )
}

/// 検索結果のカード1枚
pub fn print_card(card: &Card) {
    let mut title = highlighted(&card.name).bold().to_string();
    if let Some(english) = &card.english_name {
        title.push_str(&format!(" ({})", highlighted(english)));
    }
    println!("{} {}  {}", card.region_flag, title, card.category.cyan());
    println!("  {}", highlighted(&card.description));
    println!("  {} {}", "Flavor:".dimmed(), highlighted(&card.flavor_profile));
    println!("  {} {}", "Region:".dimmed(), highlighted(&card.region));

    match &card.previews {
        Some((gongfu, western)) => {
            println!("{}", preview_line("Gong Fu", gongfu));
            println!("{}", preview_line("Western", western));
        }
        None => println!("  {}", "Special brewing".magenta()),
    }
}

/// 一覧の見出し付き表示
pub fn print_cards(cards: &[Card]) {
    if cards.is_empty() {
        println!("一致するお茶はありません");
        return;
    }

    for card in cards {
        print_card(card);
        println!();
    }
    println!("✔ {}件", cards.len());
}

/// 現在の抽出設定の1行（容器サイズは計算に使う値）
pub fn settings_line(settings: &BrewSettings) -> String {
    format!(
        "{} {} / {} {}{}",
        settings.method,
        settings.unit_system,
        effective_vessel_size(settings.vessel_size),
        settings.unit_system.volume_label(),
        if settings.spoon_measure { " / tsp" } else { "" }
    )
}

pub fn print_settings(settings: &BrewSettings) {
    println!("  {}", settings_line(settings).cyan());
}

/// 解説の表示文字列
///
/// # Returns
/// (表示文字列, 省略したか)。`full` なら常に全文。
pub fn commentary_text(commentary: &str, full: bool) -> (String, bool) {
    if full {
        (commentary.to_string(), false)
    } else {
        commentary_preview(commentary)
    }
}

/// 詳細表示
pub fn print_detail(entry: &CatalogEntry, view: &DetailView, full_commentary: bool) {
    let mut title = entry.tea_type.bold().to_string();
    if let Some(english) = entry.english_type.as_deref().filter(|e| !e.is_empty()) {
        title.push_str(&format!(" ({})", english));
    }
    println!("{}  {}", title, entry.category.cyan());
    println!("  {}", entry.region);
    println!();

    match view {
        DetailView::Standard {
            title,
            brew,
            water_temperature,
            gongfu_schedule,
            western_steep_time,
            cultivars,
            commentary,
        } => {
            println!("{}", title.green().bold());
            println!("  {} {}", "Leaf:".dimmed(), brew.summary().bold());
            println!("  {} {}", "Ratio:".dimmed(), brew.ratio_text);
            println!("  {} {}", "Water:".dimmed(), water_temperature);
            println!("  {} {}", "Western steep:".dimmed(), western_steep_time);
            println!("  {}", "Gong Fu infusions:".dimmed());
            for step in gongfu_schedule {
                println!("    {:>10}  {}", step.label.to_string(), step.time);
            }

            if let Some(cultivars) = cultivars {
                println!("  {} {}", "Cultivars:".dimmed(), cultivars);
            }
            if let Some(commentary) = commentary {
                let (text, truncated) = commentary_text(commentary, full_commentary);
                println!();
                println!("  {}", text.italic());
                if truncated {
                    println!("  {}", "(--full で全文を表示)".dimmed());
                }
            }
        }
        DetailView::Special {
            instructions,
            water_temperature,
            potential_infusions,
        } => {
            println!("{}", "Special Brewing Instructions".magenta().bold());
            println!("  {}", instructions);
            println!("  {} {}", "Water:".dimmed(), water_temperature);
            println!("  {} {}", "Infusions:".dimmed(), potential_infusions);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlighted_keeps_text() {
        colored::control::set_override(false);
        let segments = tea_guide_common::highlight("Smoky pine", "smoky");
        assert_eq!(highlighted(&segments), "Smoky pine");
    }

    #[test]
    fn test_commentary_text_full_or_preview() {
        let long = "Long Jing ".repeat(30);

        let (preview, truncated) = commentary_text(&long, false);
        assert!(truncated);
        assert!(preview.ends_with("..."));

        let (full, truncated) = commentary_text(&long, true);
        assert!(!truncated);
        assert_eq!(full, long);

        assert_eq!(commentary_text("Short.", false), ("Short.".to_string(), false));
    }

    #[test]
    fn test_settings_line_shows_effective_vessel() {
        let blank = BrewSettings {
            vessel_size: 0.0,
            ..Default::default()
        };
        assert_eq!(settings_line(&blank), "gongfu metric / 100 ml");
    }
}
