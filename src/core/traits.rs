// 計算・文字列処理コンポーネントのトレイト定義
// 全ての抽象化インターフェースを定義

use super::error::CalcResult;
use mockall::automock;

/// 整数演算の抽象化トレイト
#[automock]
pub trait Arithmetic: Send + Sync {
    /// 加算
    fn add(&self, a: i64, b: i64) -> i64;

    /// 減算
    fn subtract(&self, a: i64, b: i64) -> i64;

    /// 乗算
    fn multiply(&self, a: i64, b: i64) -> i64;

    /// 切り捨て除算（0方向への丸め）。除数0の場合はエラー
    fn divide(&self, a: i64, b: i64) -> CalcResult<i64>;
}

// Arithmetic for Box<dyn Arithmetic>
impl Arithmetic for Box<dyn Arithmetic> {
    fn add(&self, a: i64, b: i64) -> i64 {
        self.as_ref().add(a, b)
    }

    fn subtract(&self, a: i64, b: i64) -> i64 {
        self.as_ref().subtract(a, b)
    }

    fn multiply(&self, a: i64, b: i64) -> i64 {
        self.as_ref().multiply(a, b)
    }

    fn divide(&self, a: i64, b: i64) -> CalcResult<i64> {
        self.as_ref().divide(a, b)
    }
}

/// 文字列変換の抽象化トレイト
#[automock]
pub trait TextTransform: Send + Sync {
    /// 大文字変換
    fn to_upper(&self, text: &str) -> String;

    /// コードポイント単位での反転
    fn reverse(&self, text: &str) -> String;

    /// トリム・空要素除去・大文字化
    fn process_list(&self, items: &[String]) -> Vec<String>;
}

// TextTransform for Box<dyn TextTransform>
impl TextTransform for Box<dyn TextTransform> {
    fn to_upper(&self, text: &str) -> String {
        self.as_ref().to_upper(text)
    }

    fn reverse(&self, text: &str) -> String {
        self.as_ref().reverse(text)
    }

    fn process_list(&self, items: &[String]) -> Vec<String> {
        self.as_ref().process_list(items)
    }
}
