use crate::cli::OutputFormat;
use crate::core::TextTransform;
use crate::string_processor::StringProcessor;
use anyhow::Result;
use tracing::debug;

/// Execute upper command
pub fn execute_upper(text: &str, format: OutputFormat) -> Result<()> {
    let result = StringProcessor::new().to_upper(text);
    debug!(input = text, output = %result, "大文字変換");
    print_text(&result, format)
}

/// Execute reverse command
pub fn execute_reverse(text: &str, format: OutputFormat) -> Result<()> {
    let result = StringProcessor::new().reverse(text);
    debug!(input = text, output = %result, "反転");
    print_text(&result, format)
}

/// Execute process-list command
pub fn execute_process_list(items: &[String], format: OutputFormat) -> Result<()> {
    let result = StringProcessor::new().process_list(items);
    debug!(input = items.len(), output = result.len(), "リスト処理");

    match format {
        OutputFormat::Text => {
            for item in &result {
                println!("{item}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(&result)?),
    }

    Ok(())
}

fn print_text(text: &str, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{text}"),
        OutputFormat::Json => println!("{}", serde_json::to_string(text)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_commands_succeed() {
        assert!(execute_upper("hello", OutputFormat::Text).is_ok());
        assert!(execute_reverse("日本語", OutputFormat::Json).is_ok());
        assert!(execute_process_list(&["  a ".to_string()], OutputFormat::Json).is_ok());
        assert!(execute_process_list(&[], OutputFormat::Text).is_ok());
    }
}
