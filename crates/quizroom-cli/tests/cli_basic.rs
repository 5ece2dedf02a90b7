//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs.

use std::process::Command;

/// Run a CLI command and return (code, stdout, stderr).
fn run_cli(args: &[&str]) -> (i32, String, String) {
    let output = Command::new("cargo")
        .args(["run", "-q", "-p", "quizroom-cli", "--"])
        .args(args)
        .env("QUIZROOM_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

#[test]
fn test_simulate_summary() {
    let (code, stdout, _) = run_cli(&["simulate", "--answers", "1,2,0,2,1", "--summary"]);
    assert_eq!(code, 0, "simulate failed");

    let summary: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(summary["score"], 4);
    assert_eq!(summary["total"], 5);
    assert_eq!(summary["percentage"], 80);
    assert_eq!(summary["classification"], "pass");
}

#[test]
fn test_simulate_timeouts_json_lines() {
    let (code, stdout, _) = run_cli(&["simulate", "--answers", "-,-,-,-,-", "--time", "2"]);
    assert_eq!(code, 0, "simulate failed");

    let events: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(events.first().unwrap()["type"], "QuizReset");

    let last = events.last().unwrap();
    assert_eq!(last["type"], "QuizFinished");
    assert_eq!(last["score"], 0);
    assert_eq!(last["classification"], "retry");

    let timeouts = events
        .iter()
        .filter(|e| e["type"] == "AnswerResolved" && e["chosen_index"].is_null())
        .count();
    assert_eq!(timeouts, 5);
}

#[test]
fn test_simulate_text_scoreboard() {
    let (code, stdout, _) = run_cli(&["simulate", "--answers", "1,2,2,2,1", "--format", "text"]);
    assert_eq!(code, 0, "simulate failed");
    assert!(stdout.contains("Perfect score. Ship it!"));
    assert!(stdout.contains("5/5"));
}

#[test]
fn test_simulate_rejects_bad_answer() {
    let (code, _, stderr) = run_cli(&["simulate", "--answers", "9"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_questions_json() {
    let (code, stdout, _) = run_cli(&["questions", "--json"]);
    assert_eq!(code, 0, "questions failed");
    let bank: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(bank["questions"].as_array().unwrap().len(), 5);
    assert_eq!(bank["questions"][0]["correct_index"], 1);
}

#[test]
fn test_config_list() {
    let (code, stdout, _) = run_cli(&["config", "list"]);
    assert_eq!(code, 0, "config list failed");
    let config: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(config["quiz"]["question_time_secs"].is_number());
}

#[test]
fn test_config_unknown_key() {
    let (code, _, stderr) = run_cli(&["config", "get", "quiz.nope"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown key"));
}
