//! Integration tests for the execute action and mode dispatch.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn execute_cmd(server: &MockServer) -> Command {
    let mut cmd = Command::new(cargo_bin("workshop_eol_report"));
    cmd.env("TOOLBOX_ACTION", "execute");
    cmd.env("EOL_API_BASE", server.url("/api"));
    cmd
}

fn mock_product(server: &MockServer, slug: &str, body: &str) {
    let path = format!("/api/{}.json", slug);
    let body = body.to_string();
    server.mock(move |when, then| {
        when.method(GET)
            .path(path.clone())
            .header("accept", "application/json");
        then.status(200)
            .header("content-type", "application/json")
            .body(body.clone());
    });
}

fn parse_report(stdout: &[u8]) -> Value {
    serde_json::from_slice(stdout).unwrap()
}

#[test]
fn execute_checks_only_nodejs_without_manifests() {
    let server = MockServer::start();
    mock_product(&server, "nodejs", r#"[{"cycle":"22","eol":"2027-04-30"}]"#);

    let temp = TempDir::new().unwrap();
    let stdin = format!(r#"{{"dir": "{}"}}"#, temp.path().display());

    let output = execute_cmd(&server)
        .write_stdin(stdin)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report = parse_report(&output);
    assert_eq!(report["checked"], serde_json::json!(["nodejs"]));
    assert_eq!(report["results"]["nodejs"][0]["cycle"], "22");
    assert_eq!(report["results"].as_object().unwrap().len(), 1);
}

#[test]
fn execute_detects_products_from_manifest() {
    let server = MockServer::start();
    mock_product(&server, "nodejs", r#"[{"cycle":"22"}]"#);
    mock_product(&server, "sqlite", r#"[{"cycle":"3.45"}]"#);
    mock_product(&server, "react", r#"[{"cycle":"18"}]"#);

    let temp = TempDir::new().unwrap();
    let nested = temp.path().join("apps").join("web");
    fs::create_dir_all(&nested).unwrap();
    fs::write(
        temp.path().join("package.json"),
        r#"{"dependencies":{"sqlite3":"^5.1.0"}}"#,
    )
    .unwrap();
    fs::write(
        nested.join("package.json"),
        r#"{"dependencies":{"react":"^18.2.0"}}"#,
    )
    .unwrap();

    let stdin = format!(r#"{{"dir": "{}"}}"#, temp.path().display());
    let output = execute_cmd(&server)
        .write_stdin(stdin)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report = parse_report(&output);
    assert_eq!(
        report["checked"],
        serde_json::json!(["nodejs", "react", "sqlite"])
    );
}

#[test]
fn execute_isolates_failed_lookups() {
    let server = MockServer::start();
    mock_product(&server, "nodejs", r#"[{"cycle":"22"}]"#);
    server.mock(|when, then| {
        when.method(GET).path("/api/mysql.json");
        then.status(503);
    });

    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("package.json"),
        r#"{"dependencies":{"mysql":"^2.18.1"}}"#,
    )
    .unwrap();

    let stdin = format!(r#"{{"dir": "{}"}}"#, temp.path().display());
    let output = execute_cmd(&server)
        .write_stdin(stdin)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report = parse_report(&output);
    assert_eq!(report["checked"], serde_json::json!(["mysql", "nodejs"]));

    let mysql = report["results"]["mysql"].as_object().unwrap();
    assert_eq!(mysql.len(), 1);
    assert!(mysql["error"].as_str().unwrap().contains("503"));

    assert_eq!(report["results"]["nodejs"][0]["cycle"], "22");
}

#[test]
fn execute_with_empty_stdin_scans_default_dir() {
    let server = MockServer::start();
    mock_product(&server, "nodejs", r#"[{"cycle":"22"}]"#);
    mock_product(&server, "react", r#"[{"cycle":"18"}]"#);

    // The default scan dir is resolved against the working directory.
    let temp = TempDir::new().unwrap();
    let workshop = temp.path().join("amp-workshop");
    fs::create_dir_all(&workshop).unwrap();
    fs::write(
        workshop.join("package.json"),
        r#"{"dependencies":{"react":"^18.2.0"}}"#,
    )
    .unwrap();

    let output = execute_cmd(&server)
        .current_dir(temp.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report = parse_report(&output);
    assert_eq!(report["checked"], serde_json::json!(["nodejs", "react"]));
}

#[test]
fn execute_output_is_pretty_printed() {
    let server = MockServer::start();
    mock_product(&server, "nodejs", "[]");

    let temp = TempDir::new().unwrap();
    let stdin = format!(r#"{{"dir": "{}"}}"#, temp.path().display());

    execute_cmd(&server)
        .write_stdin(stdin)
        .assert()
        .success()
        .stdout(predicate::str::contains("\n  \"checked\""));
}

#[test]
fn execute_with_invalid_stdin_fails() {
    let server = MockServer::start();

    let temp = TempDir::new().unwrap();
    execute_cmd(&server)
        .current_dir(temp.path())
        .write_stdin("{not valid json")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid parameters"));
}

#[test]
fn missing_action_is_a_usage_error() {
    let mut cmd = Command::new(cargo_bin("workshop_eol_report"));
    cmd.env_remove("TOOLBOX_ACTION");
    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("TOOLBOX_ACTION=describe|execute"));
}

#[test]
fn unknown_action_is_a_usage_error() {
    let mut cmd = Command::new(cargo_bin("workshop_eol_report"));
    cmd.env("TOOLBOX_ACTION", "report");
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("TOOLBOX_ACTION"));
}
