//! Drive the rxsuggest binary end to end.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

use crate::common::{catalog_json, sample_catalog, write_fixture, SNAKE_CASE_RESPONSE};

fn rxsuggest() -> Command {
    let mut cmd = Command::cargo_bin("rxsuggest").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("RXSUGGEST_SINGLE_CHAR_MS")
        .env_remove("RXSUGGEST_MULTI_CHAR_MS")
        .env_remove("RXSUGGEST_LOOKUP_LIMIT");
    cmd
}

#[test]
fn test_rank_json_from_file() {
    let (_dir, path) = write_fixture("response.json", SNAKE_CASE_RESPONSE);
    let output = rxsuggest()
        .args(["rank", "ibu", "--json", "--input"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: Vec<Value> = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = rows.iter().map(|r| r["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["Ibuprofen Plus", "Ibuprofen", "Paracetamol"]);
    assert_eq!(rows[0]["score"], 760);
    assert_eq!(rows[0]["stock"], "in stock");
    assert_eq!(rows[1]["stock"], "out of stock");
    assert_eq!(rows[2]["secondaryLabel"], "Acme");
}

#[test]
fn test_rank_reads_stdin_and_limits() {
    rxsuggest()
        .args(["rank", "ibu", "--limit", "1"])
        .write_stdin(SNAKE_CASE_RESPONSE)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 products found (comprehensive)"))
        .stdout(predicate::str::contains("Ibuprofen Plus"))
        .stdout(predicate::str::contains("Paracetamol").not());
}

#[test]
fn test_rank_failed_response_prints_no_results() {
    rxsuggest()
        .args(["rank", "ibu"])
        .write_stdin(r#"{"success": false, "suggestions": []}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("No products found"));
}

#[test]
fn test_rank_rejects_malformed_input() {
    rxsuggest()
        .args(["rank", "ibu"])
        .write_stdin("[{")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid JSON in stdin"));
}

#[test]
fn test_inspect_shows_rule_table() {
    let (_dir, path) = write_fixture("response.json", SNAKE_CASE_RESPONSE);
    rxsuggest()
        .args(["inspect", "IBU", "--input"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("SCORES FOR \"ibu\""))
        .stdout(predicate::str::contains("Ibuprofen Plus"))
        .stdout(predicate::str::contains("760"));
}

#[test]
fn test_type_fires_once_for_final_query() {
    let (_dir, catalog) = write_fixture("catalog.json", &catalog_json(&sample_catalog()));
    let output = rxsuggest()
        .args(["type", "cet", "--interval-ms", "10", "--catalog"])
        .arg(&catalog)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("FIRED").count(), 1, "{stdout}");
    assert!(stdout.contains("\"cet\""));
    assert!(stdout.contains("2 products found (comprehensive)"));
    assert!(stdout.contains("Cetirizine"));
}

#[test]
fn test_config_file_changes_display_limit() {
    let (_dir, config) = write_fixture("config.json", r#"{"display": {"limit": 1}}"#);
    let (_dir2, input) = write_fixture("response.json", SNAKE_CASE_RESPONSE);
    let output = rxsuggest()
        .args(["rank", "ibu", "--json", "--config"])
        .arg(&config)
        .arg("--input")
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: Vec<Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows.len(), 1);
}

#[test]
fn test_invalid_config_env_fails() {
    rxsuggest()
        .env("RXSUGGEST_LOOKUP_LIMIT", "0")
        .args(["rank", "ibu"])
        .write_stdin("[]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("lookup.limit"));
}
