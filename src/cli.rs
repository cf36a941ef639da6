use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tea_guide_common::{BrewMethod, UnitSystem};

#[derive(Parser)]
#[command(name = "tea-guide")]
#[command(about = "お茶カタログ検索・抽出ガイドツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// データセットJSON（省略時は設定ファイル・組み込みデータ）
    #[arg(long, global = true)]
    pub dataset: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// カタログを検索して一覧表示
    Search {
        /// 検索文字列（省略時はすべて）
        query: Option<String>,

        /// 分類で絞り込み（完全一致）
        #[arg(short, long)]
        category: Option<String>,

        /// 産地で絞り込み（完全一致）
        #[arg(short, long)]
        region: Option<String>,

        /// 名称で絞り込み（完全一致）
        #[arg(short = 't', long = "type")]
        tea_type: Option<String>,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// お茶の詳細と抽出量を表示
    Show {
        /// お茶の名称（正式名・英語名）
        #[arg(required = true)]
        name: String,

        /// 抽出方法 (gongfu/western)
        #[arg(short, long)]
        method: Option<BrewMethod>,

        /// 容器サイズ（単位系に従う）
        #[arg(long)]
        vessel: Option<f64>,

        /// 単位系 (metric/imperial)
        #[arg(short, long)]
        units: Option<UnitSystem>,

        /// 茶さじで表示
        #[arg(short, long, conflicts_with = "no_spoon")]
        spoon: bool,

        /// 茶さじ表示を使わない（設定より優先）
        #[arg(long)]
        no_spoon: bool,

        /// 解説を省略せずに表示
        #[arg(long)]
        full: bool,
    },

    /// 対話式で抽出量を計算
    Brew {
        /// お茶の名称（正式名・英語名）
        #[arg(required = true)]
        name: String,

        /// 解説を省略せずに表示
        #[arg(long)]
        full: bool,
    },

    /// 絞り込み候補を一覧表示
    List {
        /// 一覧の種類 (categories/regions/types)
        #[arg(default_value = "categories")]
        kind: ListKind,

        /// types: 分類を指定
        #[arg(short, long)]
        category: Option<String>,

        /// types: 産地を指定
        #[arg(short, long)]
        region: Option<String>,
    },

    /// 設定
    Config {
        /// データセットJSONを設定
        #[arg(long)]
        set_dataset: Option<PathBuf>,

        /// 既定の容器サイズを設定
        #[arg(long)]
        set_vessel: Option<f64>,

        /// 既定の単位系を設定 (metric/imperial)
        #[arg(long)]
        set_units: Option<UnitSystem>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// `--spoon` / `--no-spoon` の指定（どちらもなければ設定値のまま）
pub fn spoon_override(spoon: bool, no_spoon: bool) -> Option<bool> {
    match (spoon, no_spoon) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// 一覧の種類
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListKind {
    #[default]
    Categories,
    Regions,
    Types,
}

impl std::str::FromStr for ListKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "categories" | "category" | "c" => Ok(ListKind::Categories),
            "regions" | "region" | "r" => Ok(ListKind::Regions),
            "types" | "type" | "t" => Ok(ListKind::Types),
            _ => Err(format!("Unknown list: {}. Use categories, regions, or types", s)),
        }
    }
}

impl std::fmt::Display for ListKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListKind::Categories => write!(f, "categories"),
            ListKind::Regions => write!(f, "regions"),
            ListKind::Types => write!(f, "types"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_show_command() {
        let cli = Cli::parse_from([
            "tea-guide", "show", "Dragonwell", "--method", "western", "--vessel", "300", "--units",
            "imperial", "--spoon",
        ]);
        match cli.command {
            Commands::Show {
                name,
                method,
                vessel,
                units,
                spoon,
                no_spoon,
                full,
            } => {
                assert_eq!(name, "Dragonwell");
                assert_eq!(method, Some(BrewMethod::Western));
                assert_eq!(vessel, Some(300.0));
                assert_eq!(units, Some(UnitSystem::Imperial));
                assert_eq!(spoon_override(spoon, no_spoon), Some(true));
                assert!(!full);
            }
            _ => panic!("show コマンドとして解析されていない"),
        }
    }

    #[test]
    fn test_parse_search_with_global_flags() {
        let cli = Cli::parse_from([
            "tea-guide", "search", "smoky", "--type", "Lapsang Souchong", "-v", "--dataset",
            "teas.json",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.dataset, Some(PathBuf::from("teas.json")));
        match cli.command {
            Commands::Search { query, tea_type, .. } => {
                assert_eq!(query.as_deref(), Some("smoky"));
                assert_eq!(tea_type.as_deref(), Some("Lapsang Souchong"));
            }
            _ => panic!("search コマンドとして解析されていない"),
        }
    }

    #[test]
    fn test_parse_show_no_spoon_and_full() {
        let cli = Cli::parse_from(["tea-guide", "show", "Sencha", "--no-spoon", "--full"]);
        match cli.command {
            Commands::Show {
                spoon,
                no_spoon,
                full,
                ..
            } => {
                assert_eq!(spoon_override(spoon, no_spoon), Some(false));
                assert!(full);
            }
            _ => panic!("show コマンドとして解析されていない"),
        }

        let cli = Cli::parse_from(["tea-guide", "show", "Sencha"]);
        match cli.command {
            Commands::Show { spoon, no_spoon, .. } => {
                assert_eq!(spoon_override(spoon, no_spoon), None);
            }
            _ => panic!("show コマンドとして解析されていない"),
        }

        assert!(Cli::try_parse_from(["tea-guide", "show", "Sencha", "--spoon", "--no-spoon"]).is_err());
    }

    #[test]
    fn test_list_kind_from_str() {
        assert_eq!("regions".parse::<ListKind>(), Ok(ListKind::Regions));
        assert_eq!("T".parse::<ListKind>(), Ok(ListKind::Types));
        assert!("flavors".parse::<ListKind>().is_err());
    }
}
