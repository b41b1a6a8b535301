// 整数の四則演算
// 状態を持たないゼロサイズ型として実装

use crate::core::{Arithmetic, CalcError, CalcResult, Operation};

/// 基本的な整数演算を提供する計算機
///
/// 演算はすべて2の補数でラップアラウンドする。ビルドプロファイルに
/// 関わらずオーバーフローでパニックしない。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calculator;

impl Calculator {
    pub const fn new() -> Self {
        Self
    }

    /// 切り捨て除算の剰余（符号は被除数に従う）
    pub fn remainder(&self, a: i64, b: i64) -> CalcResult<i64> {
        if b == 0 {
            return Err(CalcError::division_by_zero(a));
        }
        Ok(a.wrapping_rem(b))
    }

    /// 演算種別に応じてディスパッチ
    pub fn apply(&self, operation: Operation, a: i64, b: i64) -> CalcResult<i64> {
        operation.evaluate(self, a, b)
    }
}

impl Arithmetic for Calculator {
    fn add(&self, a: i64, b: i64) -> i64 {
        a.wrapping_add(b)
    }

    fn subtract(&self, a: i64, b: i64) -> i64 {
        a.wrapping_sub(b)
    }

    fn multiply(&self, a: i64, b: i64) -> i64 {
        a.wrapping_mul(b)
    }

    fn divide(&self, a: i64, b: i64) -> CalcResult<i64> {
        if b == 0 {
            return Err(CalcError::division_by_zero(a));
        }
        // i64::MIN / -1 はラップしてi64::MIN
        Ok(a.wrapping_div(b))
    }
}
