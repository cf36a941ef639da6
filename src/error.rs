use thiserror::Error;

#[derive(Error, Debug)]
pub enum TeaGuideError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("お茶が見つかりません: {0}。`tea-guide search` で名称を確認してください")]
    TeaNotFound(String),

    #[error("データセットにエントリがありません: {0}")]
    EmptyCatalog(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("データセット読み込みエラー: {0}")]
    Catalog(#[from] tea_guide_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

impl From<dialoguer::Error> for TeaGuideError {
    fn from(e: dialoguer::Error) -> Self {
        TeaGuideError::Prompt(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TeaGuideError>;
