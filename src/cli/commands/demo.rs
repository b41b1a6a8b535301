use crate::calculator::Calculator;
use crate::cli::OutputFormat;
use crate::config::DemoConfig;
use crate::core::{Arithmetic, Operation, OperationOutcome, TextTransform};
use crate::string_processor::StringProcessor;
use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

/// デモ実行の結果
#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    pub banner: String,
    pub operations: Vec<OperationOutcome>,
    pub uppercase: String,
    pub reverse: String,
    pub process_list: Vec<String>,
}

impl DemoReport {
    /// テキスト出力用の行
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.banner.clone()];
        lines.extend(self.operations.iter().map(OperationOutcome::to_line));
        lines.push(format!("Uppercase: {}", self.uppercase));
        lines.push(format!("Reverse: {}", self.reverse));
        lines.push(format!("ProcessList: {}", self.process_list.join(", ")));
        lines
    }
}

/// 任意のコンポーネント実装でデモを実行
pub fn run_demo<A, T>(arithmetic: &A, text: &T, config: &DemoConfig) -> DemoReport
where
    A: Arithmetic + ?Sized,
    T: TextTransform + ?Sized,
{
    let operations = Operation::ALL
        .iter()
        .map(|&operation| {
            let [a, b] = match operation {
                Operation::Add => config.add,
                Operation::Subtract => config.subtract,
                Operation::Multiply => config.multiply,
                Operation::Divide => config.divide,
            };
            let result = operation.evaluate(arithmetic, a, b);
            debug!(%operation, a, b, ?result, "演算実行");
            OperationOutcome::new(operation, a, b, result)
        })
        .collect();

    DemoReport {
        banner: config.banner.clone(),
        operations,
        uppercase: text.to_upper(&config.uppercase),
        reverse: text.reverse(&config.reverse),
        process_list: text.process_list(&config.list),
    }
}

/// Execute demo command
pub fn execute_demo(config_path: Option<PathBuf>, format: OutputFormat) -> Result<()> {
    let config = match config_path {
        Some(path) => {
            info!(path = %path.display(), "設定ファイル読み込み");
            DemoConfig::from_file(&path)?
        }
        None => DemoConfig::default(),
    };

    let report = run_demo(&Calculator::new(), &StringProcessor::new(), &config);

    match format {
        OutputFormat::Text => {
            for line in report.lines() {
                println!("{line}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}
