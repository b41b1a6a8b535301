use anyhow::Result;
use calc_text::cli::{dispatch, error_hint, Cli};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ログは標準エラーへ。結果の出力(stdout)と混ざらないようにする
    let subscriber = FmtSubscriber::builder()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!(version = env!("CARGO_PKG_VERSION"), "calc_text 起動");

    if let Err(error) = dispatch(cli) {
        eprintln!("❌ エラー: {error:#}");
        if let Some(hint) = error_hint(&error) {
            eprintln!("💡 {hint}");
        }
        std::process::exit(1);
    }

    Ok(())
}
