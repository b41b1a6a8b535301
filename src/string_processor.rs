// 文字列処理ユーティリティ
// 変換・反転はバイト単位ではなくコードポイント(char)単位で行う

use crate::core::TextTransform;

/// 文字列変換を提供するプロセッサ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringProcessor;

impl StringProcessor {
    pub const fn new() -> Self {
        Self
    }
}

impl TextTransform for StringProcessor {
    fn to_upper(&self, text: &str) -> String {
        text.chars().map(simple_uppercase).collect()
    }

    fn reverse(&self, text: &str) -> String {
        text.chars().rev().collect()
    }

    fn process_list(&self, items: &[String]) -> Vec<String> {
        items
            .iter()
            .map(|item| item.trim())
            .filter(|trimmed| !trimmed.is_empty())
            .map(|trimmed| self.to_upper(trimmed))
            .collect()
    }
}

/// 1文字を1文字の大文字へ写像する
///
/// 大文字が複数文字になる場合（`ß` -> `SS` 等）は元の文字のまま返す。
fn simple_uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}
