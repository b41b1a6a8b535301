// 計算・設定のエラー型定義

use thiserror::Error;

/// 計算処理のエラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("cannot divide by zero")]
    DivisionByZero { dividend: i64 },
}

impl CalcError {
    /// ゼロ除算エラーの作成
    pub fn division_by_zero(dividend: i64) -> Self {
        Self::DivisionByZero { dividend }
    }

    /// エラーコンテキストを取得
    pub fn context(&self) -> ErrorContext {
        match self {
            Self::DivisionByZero { dividend } => ErrorContext::new("divide")
                .with_resource(format!("{dividend} / 0"))
                .with_suggestion("除数に0以外の値を指定してください"),
        }
    }
}

/// 設定のエラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("バリデーションエラー: {field} - {reason}")]
    Validation { field: String, reason: String },
}

impl ConfigError {
    /// バリデーションエラーの作成
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// エラーコンテキスト情報
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// 実行していた操作
    pub operation: String,
    /// 関連するリソース（入力値等）
    pub resource: Option<String>,
    /// エラー解決のための提案
    pub suggestion: Option<String>,
}

impl ErrorContext {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            resource: None,
            suggestion: None,
        }
    }

    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// 計算の結果型
pub type CalcResult<T> = std::result::Result<T, CalcError>;
