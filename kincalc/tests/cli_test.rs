//! End-to-end tests of the kincalc binary

use std::process::{Command, Output};

use serde_json::Value;

fn kincalc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_kincalc"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run kincalc")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is not UTF-8")
}

#[test]
fn test_resolve_prints_one_title_per_chain() {
    let output = kincalc(&["resolve", "妻的父", "丈夫的母", "子的子", ""]);
    assert!(output.status.success());

    let lines: Vec<_> = stdout(&output).lines().map(str::to_string).collect();
    assert_eq!(lines, vec!["岳父", "婆婆", "孙子", "请输入关系"]);
}

#[test]
fn test_resolve_json_reports_source() {
    let output = kincalc(&["resolve", "--json", "夫的父", "兄的父的女", "abc"]);
    assert!(output.status.success());

    let reports: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(reports[0]["formatted"], "丈夫的父");
    assert_eq!(reports[0]["title"], "公公");
    assert_eq!(reports[0]["source"], "override");
    assert_eq!(reports[1]["title"], "同辈（女）");
    assert_eq!(reports[1]["source"], "generic");
    assert_eq!(reports[2]["title"], "无法识别的关系");
    assert_eq!(reports[2]["source"], "sentinel");
}

#[test]
fn test_resolve_explain() {
    let output = kincalc(&["resolve", "--explain", "子的子"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("Title:  孙子"));
    assert!(text.contains("Source: graph"));
}

#[test]
fn test_format() {
    let output = kincalc(&["format", "夫 的 兄"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "丈夫的兄");
}

#[test]
fn test_graph_json() {
    let output = kincalc(&["graph", "--json"]);
    assert!(output.status.success());

    let snapshot: Value = serde_json::from_str(&stdout(&output)).unwrap();
    let nodes = snapshot["nodes"].as_array().unwrap();
    let edges = snapshot["edges"].as_array().unwrap();
    assert!(nodes.iter().any(|n| n["id"] == "我" && n["gender"] == "unknown"));
    assert!(edges.iter().all(|e| e["from"].is_string() && e["to"].is_string()));
}

#[test]
fn test_layout_is_seeded_and_centered() {
    let args = ["layout", "--width", "500", "--height", "400", "--seed", "11"];
    let first = kincalc(&args);
    let second = kincalc(&args);
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    let positions: Value = serde_json::from_str(&stdout(&first)).unwrap();
    assert_eq!(positions["我"]["x"], 250.0);
    assert_eq!(positions["我"]["y"], 200.0);
}

#[test]
fn test_layout_rejects_bad_parameters() {
    let output = kincalc(&["layout", "--iterations", "0"]);
    assert!(!output.status.success());

    let output = kincalc(&["layout", "--width", "0"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid canvas size"));
}

#[test]
fn test_logs_stay_off_stdout() {
    let output = kincalc(&["--log-level", "kincalc_core=debug", "resolve", "子的子"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "孙子");
    assert!(!output.stderr.is_empty());
}
