//! エラー型定義

use thiserror::Error;

/// 共通エラー型（データセット読み込み用）
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

/// 抽出比率の解析エラー
///
/// どちらも呼び出し側でフォールバックされ、ユーザーには表示されない。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BrewError {
    /// "茶葉量/湯量" 形式として読めない比率
    #[error("malformed leaf ratio: {0:?}")]
    MalformedRatio(String),

    /// "<n>g per <n>ml" に一致しない西洋式抽出情報
    #[error("malformed western steeping info: {0:?}")]
    MalformedSteepingInfo(String),
}
