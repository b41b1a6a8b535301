// 演算の種類と実行結果の型定義

use super::error::CalcResult;
use super::traits::Arithmetic;
use serde::Serialize;
use std::fmt;

/// 二項演算の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// 表示ラベル
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Subtract => "Subtract",
            Self::Multiply => "Multiply",
            Self::Divide => "Divide",
        }
    }

    /// 演算子記号
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// 演算を任意の実装に適用
    pub fn evaluate<A>(&self, arithmetic: &A, a: i64, b: i64) -> CalcResult<i64>
    where
        A: Arithmetic + ?Sized,
    {
        match self {
            Self::Add => Ok(arithmetic.add(a, b)),
            Self::Subtract => Ok(arithmetic.subtract(a, b)),
            Self::Multiply => Ok(arithmetic.multiply(a, b)),
            Self::Divide => arithmetic.divide(a, b),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 一回の演算の実行結果（JSON出力用）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationOutcome {
    pub operation: Operation,
    pub operands: [i64; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OperationOutcome {
    pub fn new(operation: Operation, a: i64, b: i64, result: CalcResult<i64>) -> Self {
        let (value, error) = match result {
            Ok(value) => (Some(value), None),
            Err(error) => (None, Some(error.to_string())),
        };
        Self {
            operation,
            operands: [a, b],
            value,
            error,
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// `Add: 8` / `Error: cannot divide by zero` 形式の一行表示
    pub fn to_line(&self) -> String {
        match (&self.value, &self.error) {
            (_, Some(error)) => format!("Error: {error}"),
            (Some(value), None) => format!("{}: {value}", self.operation),
            (None, None) => format!("{}: -", self.operation),
        }
    }
}
