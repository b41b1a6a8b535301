// CLI層 - コマンドライン引数の定義と処理
// ユーザーインターフェースとライブラリの橋渡し

pub mod args;
pub mod commands;

// 公開API
pub use args::*;
pub use commands::*;

use crate::core::CalcError;
use anyhow::Result;

/// 解析済みの引数に応じてコマンドを実行
pub fn dispatch(cli: Cli) -> Result<()> {
    let format = cli.format;

    match cli.command.unwrap_or(Commands::Demo { config: None }) {
        Commands::Demo { config } => execute_demo(config, format),
        Commands::Calc { operation, a, b } => execute_calc(operation, a, b, format),
        Commands::Upper { text } => execute_upper(&text, format),
        Commands::Reverse { text } => execute_reverse(&text, format),
        Commands::ProcessList { items } => execute_process_list(&items, format),
    }
}

/// 計算エラーであれば解決のヒントを返す
pub fn error_hint(error: &anyhow::Error) -> Option<String> {
    let context = error.downcast_ref::<CalcError>()?.context();
    let suggestion = context.suggestion?;
    Some(match context.resource {
        Some(resource) => format!("{} ({resource}): {suggestion}", context.operation),
        None => format!("{}: {suggestion}", context.operation),
    })
}
