use crate::calculator::Calculator;
use crate::cli::OutputFormat;
use crate::core::{CalcResult, Operation, OperationOutcome};
use anyhow::{Context, Result};
use tracing::debug;

/// 演算を実行し結果を返す
pub fn evaluate(operation: Operation, a: i64, b: i64) -> CalcResult<i64> {
    let result = Calculator::new().apply(operation, a, b);
    debug!(%operation, a, b, ?result, "演算実行");
    result
}

/// Execute calc command
pub fn execute_calc(operation: Operation, a: i64, b: i64, format: OutputFormat) -> Result<()> {
    let result = evaluate(operation, a, b);
    let outcome = OperationOutcome::new(operation, a, b, result.clone());

    match format {
        OutputFormat::Text => match outcome.value {
            Some(value) => println!("{a} {} {b} = {value}", operation.symbol()),
            None => println!("{}", outcome.to_line()),
        },
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
    }

    result.with_context(|| format!("{operation} failed"))?;
    Ok(())
}
