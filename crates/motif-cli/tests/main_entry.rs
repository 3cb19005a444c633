//! Integration tests for the `motif` binary entry point.
//!
//! Verifies exit status, output formats and user-facing error handling.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::str::contains;

#[test]
fn matching_text_succeeds() {
    let mut command = cargo_bin_cmd!("motif");
    command.args(["--output", "human", "{cat,dog}s", "dogs"]);
    command
        .assert()
        .success()
        .stdout(contains(r#"match "dogs" [0..4] "dog" "s""#));
}

#[test]
fn non_matching_text_fails() {
    let mut command = cargo_bin_cmd!("motif");
    command.args(["--output", "json", "[0-9]", "x"]);
    command
        .assert()
        .failure()
        .stdout(contains(r#""matched":false"#));
}

#[test]
fn malformed_pattern_reports_offset() {
    let mut command = cargo_bin_cmd!("motif");
    command.args(["ab]", "ab"]);
    command
        .assert()
        .failure()
        .stderr(contains("unexpected \"]\" at offset 2"));
}

#[test]
fn missing_text_is_a_usage_error() {
    let mut command = cargo_bin_cmd!("motif");
    command.arg("a*");
    command.assert().failure().stderr(contains("TEXT"));
}

#[test]
fn log_format_comes_from_the_environment() {
    let mut command = cargo_bin_cmd!("motif");
    command
        .env("MOTIF_LOG_FILTER", "motif=debug")
        .env("MOTIF_LOG_FORMAT", "json")
        .args(["a*", "abc"]);
    command
        .assert()
        .success()
        .stderr(contains(r#""message":"pattern compiled""#));
}
