//! CLI behavior tests: exit codes, output formats, init.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn anti_slop_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_anti-slop"));
    cmd.current_dir(dir.path())
        .env_remove("OPENAI_API_KEY")
        .env_remove("ANTI_SLOP_LOG");
    cmd
}

#[test]
fn no_args_returns_usage_error() {
    let dir = TempDir::new().unwrap();
    anti_slop_cmd(&dir).assert().failure().code(2);
}

#[test]
fn run_reads_stdin_and_prints_text_report() {
    let dir = TempDir::new().unwrap();
    anti_slop_cmd(&dir)
        .args(["run", "remove_filler_words"])
        .write_stdin("Basically this is actually very good.")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleaned Content:\nThis is good."))
        .stdout(predicate::str::contains("Removed 3 filler words"));
}

#[test]
fn run_json_output_is_envelope() {
    let dir = TempDir::new().unwrap();
    let output = anti_slop_cmd(&dir)
        .args(["run", "detect_cliches", "--json"])
        .write_stdin("This is a game changer.")
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(parsed["success"], true);
    assert_eq!(parsed["data"]["cliches"][0]["cliche"], "game changer");
}

#[test]
fn unknown_tool_exit_2() {
    let dir = TempDir::new().unwrap();
    anti_slop_cmd(&dir)
        .args(["run", "detect_everything"])
        .write_stdin("x")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Unknown tool: detect_everything"));
}

#[test]
fn failed_tool_exit_1() {
    let dir = TempDir::new().unwrap();
    anti_slop_cmd(&dir)
        .args(["run", "analyze_content_for_slop"])
        .write_stdin("Some content.")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(
            "Error: OpenAI API key not configured.",
        ));
}

#[test]
fn file_not_found_exit_2() {
    let dir = TempDir::new().unwrap();
    anti_slop_cmd(&dir)
        .args(["run", "detect_cliches", "missing.md"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Path does not exist"));
}

#[test]
fn max_words_flag_is_applied() {
    let dir = TempDir::new().unwrap();
    anti_slop_cmd(&dir)
        .args(["run", "detect_run_on_sentences", "--max-words", "3", "--json"])
        .write_stdin("One two three four five.")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"run_on_sentences\": 1"));
}

#[test]
fn zero_min_length_is_rejected() {
    let dir = TempDir::new().unwrap();
    anti_slop_cmd(&dir)
        .args(["run", "detect_repetition", "--min-length", "0"])
        .write_stdin("a b c")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("minLength"));
}

#[test]
fn directory_is_walked_for_configured_extensions() {
    let dir = TempDir::new().unwrap();
    let docs = dir.path().join("docs");
    fs::create_dir(&docs).unwrap();
    fs::write(docs.join("a.md"), "A real game changer.").unwrap();
    fs::write(docs.join("b.txt"), "Nothing to see.").unwrap();
    fs::write(docs.join("c.rs"), "fn synergy() {}").unwrap();

    let output = anti_slop_cmd(&dir)
        .args(["run", "detect_cliches", "docs", "--json", "--jobs", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = parsed.as_array().expect("one entry per file");
    assert_eq!(entries.len(), 2);
    assert!(entries[0]["source"].as_str().unwrap().ends_with("a.md"));
    assert_eq!(entries[0]["data"]["cliches_detected"], 1);
    assert!(entries[1]["source"].as_str().unwrap().ends_with("b.txt"));
    assert_eq!(entries[1]["data"]["cliches_detected"], 0);
}

#[test]
fn config_defaults_are_used() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".antislop.json"),
        r#"{ "defaults": { "maxWords": 2 } }"#,
    )
    .unwrap();

    anti_slop_cmd(&dir)
        .args(["run", "detect_run_on_sentences"])
        .write_stdin("Three words here.")
        .assert()
        .success()
        .stdout(predicate::str::contains("Run-on Sentences: 1 (100%)"));
}

#[test]
fn list_prints_every_tool() {
    let dir = TempDir::new().unwrap();
    let output = anti_slop_cmd(&dir).args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 13);

    anti_slop_cmd(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("normalize_whitespace"))
        .stdout(predicate::str::contains("improve_content_from_slop"));
}

#[test]
fn init_creates_config_once() {
    let dir = TempDir::new().unwrap();
    anti_slop_cmd(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    let written = fs::read_to_string(dir.path().join(".antislop.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed["ai"]["apiKeyEnv"], "OPENAI_API_KEY");
    assert_eq!(parsed["defaults"]["maxWords"], 30);

    anti_slop_cmd(&dir)
        .arg("init")
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists"));
}
