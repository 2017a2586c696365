//! CLI integration tests
//!
//! These tests exercise the command-line surface of the medconsult binary:
//! argument parsing, the light-path subcommands, and local error reporting.

use assert_cmd::Command;
use predicates::prelude::*;

/// Build a command with a clean environment so host configuration
/// does not leak into the test.
fn medconsult() -> Command {
    let mut cmd = Command::cargo_bin("medconsult").expect("binary should build");
    cmd.env_remove("MEDCONSULT_CONFIG")
        .env_remove("MEDCONSULT_API_BASE_URL")
        .env_remove("MEDCONSULT_API_KEY")
        .env_remove("MEDCONSULT_LOG_LEVEL")
        .env_remove("MEDCONSULT_LOG_FILE")
        .env_remove("MEDCONSULT_LOG_JSON")
        .env_remove("MEDCONSULT_SPECIALIST")
        .env_remove("OPENAI_API_KEY");
    cmd
}

// ─────────────────────────────────────────────────────────────────────────────
// Help and version
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_help_lists_subcommands() {
    medconsult()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ask"))
        .stdout(predicate::str::contains("console"))
        .stdout(predicate::str::contains("specialist"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_version_flag() {
    medconsult()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("medconsult"));
}

#[test]
fn test_version_subcommand() {
    medconsult()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("medconsult"))
        .stdout(predicate::str::contains("Build Information"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Specialist subcommands
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_specialist_list_shows_all_four() {
    medconsult()
        .args(["specialist", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("surgeon"))
        .stdout(predicate::str::contains("internist"))
        .stdout(predicate::str::contains("pediatrician"))
        .stdout(predicate::str::contains("orthopedist"))
        .stdout(predicate::str::contains("内科医"));
}

#[test]
fn test_specialist_show_by_slug() {
    medconsult()
        .args(["specialist", "show", "internist"])
        .assert()
        .success()
        .stdout(predicate::str::contains("内科医"))
        .stdout(predicate::str::contains("あなたは経験豊富な内科医です"));
}

#[test]
fn test_specialist_show_by_label() {
    medconsult()
        .args(["specialist", "show", "小児科医"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pediatrician"))
        .stdout(predicate::str::contains("あなたは経験豊富な小児科医です"));
}

#[test]
fn test_specialist_show_unknown_fails() {
    medconsult()
        .args(["specialist", "show", "dentist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("dentist"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Config subcommands
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_config_show_defaults() {
    medconsult()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[api]"))
        .stdout(predicate::str::contains("[logging]"))
        .stdout(predicate::str::contains("api.openai.com"));
}

#[test]
fn test_config_validate_defaults() {
    medconsult()
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_config_show_missing_file_fails() {
    medconsult()
        .args(["config", "show", "--config", "/nonexistent/medconsult.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("E100"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Ask: local validation errors (no remote endpoint involved)
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_ask_empty_question_fails_locally() {
    medconsult()
        .args(["ask", "--specialist", "internist", ""])
        .assert()
        .failure()
        .code(30)
        .stderr(predicate::str::contains("E300"))
        .stderr(predicate::str::contains("質問を入力してください"));
}

#[test]
fn test_ask_whitespace_question_fails_locally() {
    medconsult()
        .args(["ask", "--specialist", "surgeon", "   "])
        .assert()
        .failure()
        .code(30)
        .stderr(predicate::str::contains("質問を入力してください"));
}

#[test]
fn test_ask_unknown_specialist_fails() {
    medconsult()
        .args(["ask", "--specialist", "dentist", "膝が痛いです"])
        .assert()
        .failure()
        .code(30)
        .stderr(predicate::str::contains("E301"));
}

#[test]
fn test_ask_requires_specialist() {
    medconsult()
        .args(["ask", "膝が痛いです"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--specialist"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Global flags
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_quiet_flag_accepted() {
    medconsult()
        .args(["--quiet", "specialist", "list"])
        .assert()
        .success();
}

#[test]
fn test_verbose_flag_accepted() {
    medconsult()
        .args(["-vv", "specialist", "list"])
        .assert()
        .success();
}
