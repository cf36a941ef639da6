use crate::error::{Result, TeaGuideError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tea_guide_common::{BrewMethod, BrewSettings, UnitSystem};

/// データセットのパスを上書きする環境変数
pub const DATASET_ENV: &str = "TEA_GUIDE_DATASET";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 外部データセット（未設定なら組み込み）
    pub dataset: Option<PathBuf>,
    pub brew_method: BrewMethod,
    /// 既定の容器サイズ（unit_system の単位）
    pub default_vessel_size: f64,
    pub unit_system: UnitSystem,
    pub spoon_measure: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %config_path.display(), "config loaded");
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| TeaGuideError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("tea-guide").join("config.json"))
    }

    fn default_config() -> Self {
        let settings = BrewSettings::default();
        Self {
            dataset: None,
            brew_method: settings.method,
            default_vessel_size: settings.vessel_size,
            unit_system: settings.unit_system,
            spoon_measure: settings.spoon_measure,
        }
    }

    /// 使用するデータセット
    ///
    /// 優先順: コマンドライン引数 → 環境変数 → 設定ファイル
    pub fn dataset_path(&self, cli_override: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = cli_override {
            return Some(path.to_path_buf());
        }

        // 環境変数を優先
        if let Ok(path) = std::env::var(DATASET_ENV) {
            if !path.trim().is_empty() {
                return Some(PathBuf::from(path));
            }
        }

        self.dataset.clone()
    }

    /// 抽出設定の初期値
    pub fn brew_settings(&self) -> BrewSettings {
        BrewSettings {
            method: self.brew_method,
            vessel_size: self.default_vessel_size,
            unit_system: self.unit_system,
            spoon_measure: self.spoon_measure,
        }
    }

    pub fn set_dataset(&mut self, path: PathBuf) -> Result<()> {
        if !path.exists() {
            return Err(TeaGuideError::Config(format!(
                "データセットが見つかりません: {}",
                path.display()
            )));
        }
        self.dataset = Some(path);
        Ok(())
    }

    pub fn set_vessel_size(&mut self, size: f64) -> Result<()> {
        if !size.is_finite() || size <= 0.0 {
            return Err(TeaGuideError::Config(format!(
                "容器サイズは正の数で指定してください: {}",
                size
            )));
        }
        self.default_vessel_size = size;
        Ok(())
    }
}
