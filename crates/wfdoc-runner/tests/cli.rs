use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn wfdoc() -> Command {
    Command::cargo_bin("wfdoc").expect("binary must be built")
}

#[test]
fn valid_export_exits_zero() {
    wfdoc()
        .args(["validate", "--document"])
        .arg(fixture("sheets-export.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("valid: true"))
        .stdout(predicate::str::contains("errors: 0"));
}

#[test]
fn valid_export_passes_semantic_checks_under_schema_engine() {
    wfdoc()
        .args(["validate", "--engine", "schema", "--semantic", "--document"])
        .arg(fixture("sheets-export.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("engine: schema"))
        .stdout(predicate::str::contains("warnings: 0"));
}

#[test]
fn broken_export_exits_one_and_lists_violations() {
    wfdoc()
        .args(["validate", "--document"])
        .arg(fixture("broken-export.yaml"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[missing_field] $.triggerCount"))
        .stdout(predicate::str::contains("[wrong_type] $.active"))
        .stdout(predicate::str::contains(
            "[wrong_array_element_type] $.nodes[0].position[1]",
        ));
}

#[test]
fn json_format_emits_report_document() {
    wfdoc()
        .args(["validate", "--format", "json", "--document"])
        .arg(fixture("broken-export.yaml"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"schema\": \"wfdoc-report/0.0.1\""))
        .stdout(predicate::str::contains("\"kind\": \"missing_field\""));
}

#[test]
fn missing_document_exits_two_with_message() {
    wfdoc()
        .args(["validate", "--document", "/definitely/not/here.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("read file failed"));
}

#[test]
fn validate_dir_covers_fixture_directory() {
    wfdoc()
        .args(["validate-dir", "--workspace"])
        .arg(fixture(""))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("files: 2"))
        .stdout(predicate::str::contains("invalid "))
        .stdout(predicate::str::contains("ok "));
}

#[test]
fn validate_dir_json_tags_violations_with_their_file() {
    wfdoc()
        .args(["validate-dir", "--format", "json", "--workspace"])
        .arg(fixture(""))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"related\""))
        .stdout(predicate::str::contains("broken-export.yaml\""));
}

#[test]
fn schema_subcommand_prints_json_schema() {
    wfdoc()
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"googleSheetsOAuth2Api\""));
}
