// main.rsとエントリーポイントのテスト
use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_calc_text"))
        .args(args)
        .output()
        .expect("Failed to execute binary")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8(output.stdout.clone())
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_cli_help() {
    let output = run(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("calc_text"));
    assert!(stdout.contains("demo"));
    assert!(stdout.contains("calc"));
    assert!(stdout.contains("process-list"));
}

#[test]
fn test_default_run_prints_demo() {
    let output = run(&[]);

    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines[0], "Calc Text Demo");
    assert_eq!(
        lines[1..7],
        [
            "Add: 8",
            "Subtract: 6",
            "Multiply: 12",
            "Divide: 5",
            "Uppercase: HELLO WORLD",
            "Reverse: gnalog",
        ]
    );
}

#[test]
fn test_demo_with_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("demo.json");
    fs::write(&config_path, r#"{ "banner": "Custom", "divide": [10, 0] }"#).unwrap();

    let output = run(&["demo", "--config", config_path.to_str().unwrap()]);

    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines[0], "Custom");
    assert!(lines.contains(&"Error: cannot divide by zero".to_string()));
}

#[test]
fn test_demo_with_missing_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("missing.json");

    let output = run(&["demo", "--config", config_path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_calc_divide_negative() {
    let output = run(&["calc", "divide", "-10", "2"]);

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["-10 / 2 = -5"]);
}

#[test]
fn test_calc_divide_by_zero_exits_with_error() {
    let output = run(&["calc", "divide", "10", "0"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("cannot divide by zero"));
    assert!(stderr.contains("除数に0以外の値を指定してください"));
}

#[test]
fn test_calc_json_output() {
    let output = run(&["calc", "add", "5", "3", "--format", "json"]);

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["operation"], "add");
    assert_eq!(json["value"], 8);
}

#[test]
fn test_text_commands() {
    assert_eq!(stdout_lines(&run(&["upper", "hello world"])), vec!["HELLO WORLD"]);
    assert_eq!(stdout_lines(&run(&["reverse", "golang"])), vec!["gnalog"]);
}

#[test]
fn test_upper_keeps_sharp_s() {
    assert_eq!(stdout_lines(&run(&["upper", "straße"])), vec!["STRAßE"]);
}

#[test]
fn test_process_list_json() {
    let output = run(&["-f", "json", "process-list", "hello", "world", "", "  test  ", "go"]);

    assert!(output.status.success());
    let items: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(items, vec!["HELLO", "WORLD", "TEST", "GO"]);
}
