mod fixtures;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

use fixtures::rules_dir;

fn cmd() -> Command {
    let mut cmd = cargo_bin_cmd!("secure-coding-mcp");
    cmd.env_remove("SECURE_CODING_RULES_DIR")
        .env_remove("SECURE_CODING_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

fn with_fixtures() -> Command {
    let mut cmd = cmd();
    cmd.arg("--rules-dir").arg(rules_dir());
    cmd
}

#[test]
fn test_cli_help() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("OWASP secure coding rules over MCP"))
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("checklist"))
        .stdout(predicate::str::contains("--rules-dir"));
}

#[test]
fn test_cli_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("secure-coding-mcp"));
}

#[test]
fn test_cli_list() {
    with_fixtures()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("input-validation"))
        .stdout(predicate::str::contains("SYS"))
        .stdout(predicate::str::contains("22 domains"));
}

#[test]
fn test_cli_list_json() {
    let output = with_fixtures()
        .args(["list", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let domains: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(domains.len(), 22);
    assert_eq!(domains[21]["prefix"], "SYS");
}

#[test]
fn test_cli_get_rule() {
    with_fixtures()
        .args(["get", "INPUT-02"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "### [INPUT-02] Use allow-lists over deny-lists",
        ))
        .stdout(predicate::str::contains("INPUT-03").not());
}

#[test]
fn test_cli_get_unknown_prefix() {
    with_fixtures()
        .args(["get", "BOGUS-99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown rule prefix: BOGUS"));
}

#[test]
fn test_cli_get_json_error() {
    with_fixtures()
        .args(["get", "BOGUS-99", "--output", "json"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"is_error\": true"));
}

#[test]
fn test_cli_checklist() {
    with_fixtures()
        .args(["checklist", "api-security"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "| Rule ID | Rule | Verification |\n| :--- | :--- | :--- |\n| API-01 |",
        ));
}

#[test]
fn test_cli_checklist_missing_file() {
    // Catalogued domain whose file is not in the fixture corpus.
    with_fixtures()
        .args(["checklist", "authentication"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("authentication.md"));
}

#[test]
fn test_cli_resources() {
    with_fixtures()
        .arg("resources")
        .assert()
        .success()
        .stdout(predicate::str::contains("secure-coding://rules/api-security"));
}

#[test]
fn test_cli_missing_corpus() {
    let empty = TempDir::new().unwrap();
    cmd()
        .current_dir(empty.path())
        .args(["--rules-dir", "does-not-exist", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Rules directory not found"))
        .stderr(predicate::str::contains("does-not-exist"));
}

#[test]
fn test_cli_missing_config_file() {
    with_fixtures()
        .args(["--config", "/nonexistent/secure-coding.toml", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn test_cli_serve_answers_ping() {
    with_fixtures()
        .arg("serve")
        .write_stdin("{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"ping\"}\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\":1"))
        .stdout(predicate::str::contains("\"result\":{}"));
}
