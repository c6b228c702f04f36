//! Integration tests for the gradescale CLI
//!
//! These tests run the gradescale binary and check global behaviour.

mod support;

use predicates::prelude::*;
use support::gradescale;

// ============================================================================
// Help and Version tests
// ============================================================================

#[test]
fn test_help_flag() {
    gradescale()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: gradescale"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("convert"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("preview"));
}

#[test]
fn test_version_flag() {
    gradescale()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gradescale"));
}

#[test]
fn test_no_command_prints_banner() {
    gradescale()
        .assert()
        .success()
        .stdout(predicate::str::contains("gradescale --help"));
}

// ============================================================================
// Usage errors
// ============================================================================

#[test]
fn test_unknown_format_is_usage_error() {
    gradescale()
        .args(["--format", "xml", "systems"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_rounding_mode_is_usage_error() {
    gradescale()
        .args([
            "convert", "12", "--from", "fr-20", "--to", "percent", "--rounding", "up",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid rounding mode"));
}

#[test]
fn test_json_usage_error_envelope() {
    gradescale()
        .args(["--format", "json", "convert", "12", "--from", "fr-20"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

// ============================================================================
// Data errors
// ============================================================================

#[test]
fn test_unknown_system_exit_code() {
    gradescale()
        .args(["convert", "12", "--from", "nope", "--to", "percent"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("notation system not found: nope"));
}

#[test]
fn test_unknown_system_json_envelope() {
    gradescale()
        .args([
            "--format", "json", "convert", "12", "--from", "nope", "--to", "percent",
        ])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"system_not_found\""))
        .stderr(predicate::str::contains("\"code\":3"));
}

#[test]
fn test_quiet_suppresses_error_message() {
    gradescale()
        .args(["--quiet", "convert", "12", "--from", "nope", "--to", "percent"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}
