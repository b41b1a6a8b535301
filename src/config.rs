// デモ実行の設定
// JSONファイルから読み込み、欠けているフィールドはデフォルト値で補う

use crate::core::ConfigError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// デモ実行で使うサンプル入力
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub banner: String,
    pub add: [i64; 2],
    pub subtract: [i64; 2],
    pub multiply: [i64; 2],
    pub divide: [i64; 2],
    pub uppercase: String,
    pub reverse: String,
    pub list: Vec<String>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            banner: "Calc Text Demo".to_string(),
            add: [5, 3],
            subtract: [10, 4],
            multiply: [3, 4],
            divide: [20, 4],
            uppercase: "hello world".to_string(),
            reverse: "golang".to_string(),
            list: ["hello", "world", "", "  test  ", "go"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl DemoConfig {
    /// JSONから設定をデシリアライズ
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| anyhow::anyhow!("設定解析エラー: {}", e))
    }

    /// 設定をJSONにシリアライズ
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 設定ファイルを読み込み、検証する
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("設定ファイルを読み込めません: {}", path.display()))?;
        let config = Self::from_json(&content)
            .with_context(|| format!("設定ファイルが不正です: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// 設定の妥当性をチェック
    ///
    /// 除数0は許可する（エラー行の表示を確認するため）。
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.banner.trim().is_empty() {
            return Err(ConfigError::validation("banner", "空にはできません"));
        }
        Ok(())
    }
}
