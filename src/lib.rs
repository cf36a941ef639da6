//! tea-guide CLI
//!
//! 検索・詳細表示・対話式の抽出量計算

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod session;

use config::Config;
use error::{Result, TeaGuideError};
use std::path::Path;
use tea_guide_common::Catalog;

/// 設定に従ってカタログを読み込む
///
/// 外部データセットが指定されていなければ組み込みデータを使う。
pub fn load_catalog(config: &Config, cli_override: Option<&Path>) -> Result<Catalog> {
    let catalog = match config.dataset_path(cli_override) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading dataset");
            let catalog = Catalog::from_file(&path)?;
            if catalog.is_empty() {
                return Err(TeaGuideError::EmptyCatalog(path.display().to_string()));
            }
            catalog
        }
        None => Catalog::builtin()?,
    };

    Ok(catalog)
}
