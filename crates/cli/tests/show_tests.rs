//! Integration tests for `evalkit show`.
//!
//! Responsibilities:
//! - Verify every setting is listed with its origin.
//! - Verify secret values never reach stdout.

mod common;

use common::{evalkit_cmd, evalkit_cmd_with_required};
use predicates::prelude::*;

#[test]
fn test_show_table_lists_origins() {
    evalkit_cmd_with_required()
        .env("EVALUATION_PORT", "4000")
        .arg("show")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Service: evaluation (prefix EVALUATION_)"))
        .stdout(predicate::str::is_match(r"PORT\s+4000\s+EVALUATION_PORT").unwrap())
        .stdout(predicate::str::is_match(r"DB_HOST\s+localhost\s+default").unwrap())
        .stdout(predicate::str::is_match(r"DB_USER\s+evaluator\s+DB_USER").unwrap());
}

#[test]
fn test_show_redacts_secrets() {
    evalkit_cmd_with_required()
        .env("DATABASE_URL", "postgres://u:url-password-value@db/app")
        .arg("show")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("db-password-value").not())
        .stdout(predicate::str::contains("jwt-secret-value").not())
        .stdout(predicate::str::contains("url-password-value").not())
        .stdout(predicate::str::contains("********"));
}

#[test]
fn test_show_unset_keys() {
    evalkit_cmd()
        .arg("show")
        .assert()
        .code(0)
        .stdout(predicate::str::is_match(r"JWT_SECRET\s+\(unset\)\s+-").unwrap())
        .stdout(predicate::str::is_match(r"DATABASE_URL\s+\(unset\)\s+derived").unwrap());
}

#[test]
fn test_show_json() {
    let output = evalkit_cmd()
        .env("JWT_SECRET", "jwt-secret-value")
        .args(["--service", "token", "-o", "json", "show"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains("jwt-secret-value"));

    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["service"], "token");
    let settings = json["settings"].as_array().unwrap();
    let port = settings.iter().find(|s| s["key"] == "PORT").unwrap();
    assert_eq!(port["value"], "3001");
    assert_eq!(port["origin"], "default");

    let secret = settings.iter().find(|s| s["key"] == "JWT_SECRET").unwrap();
    assert_eq!(secret["secret"], true);
    assert_eq!(secret["value"], "********");
}

#[test]
fn test_show_invalid_output_format() {
    evalkit_cmd()
        .args(["-o", "yaml", "show"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid output format"));
}
