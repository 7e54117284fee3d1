//! Integration tests for the code-daily binary.
//!
//! Every command runs in a scratch directory with `HOME` and
//! `XDG_CONFIG_HOME` pointed at it, so no real config or `.env` leaks in.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn code_daily(scratch: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("code-daily").unwrap();
    cmd.current_dir(scratch.path())
        .env("HOME", scratch.path())
        .env("XDG_CONFIG_HOME", scratch.path().join("xdg"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("CODE_DAILY__MODEL__NAME");
    cmd
}

#[test]
fn test_help_flag() {
    let scratch = TempDir::new().unwrap();
    code_daily(&scratch)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("code-daily"))
        .stdout(predicate::str::contains("start"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_version_flag() {
    let scratch = TempDir::new().unwrap();
    code_daily(&scratch)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_list_shows_every_language() {
    let scratch = TempDir::new().unwrap();
    code_daily(&scratch)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("JavaScript"))
        .stdout(predicate::str::contains("TypeScript"))
        .stdout(predicate::str::contains("Data Structures"))
        .stdout(predicate::str::contains("(no starter files)"));
}

#[test]
fn test_no_color_env_accepts_any_convention() {
    let scratch = TempDir::new().unwrap();
    for value in ["1", "true", "yes", "0", ""] {
        code_daily(&scratch)
            .env("NO_COLOR", value)
            .arg("list")
            .assert()
            .success()
            .stdout(predicate::str::contains("Rust"))
            .stdout(predicate::str::contains("\u{1b}[").not());
    }
}

#[test]
fn test_list_filtered_plain_pairs() {
    let scratch = TempDir::new().unwrap();
    code_daily(&scratch)
        .args(["list", "--lang", "rust", "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rust\tCLI"))
        .stdout(predicate::str::contains("rust\tWeb Server"))
        .stdout(predicate::str::contains("javascript").not());
}

#[test]
fn test_list_json() {
    let scratch = TempDir::new().unwrap();
    code_daily(&scratch)
        .args(["list", "--lang", "go", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["))
        .stdout(predicate::str::contains("\"key\": \"go\""))
        .stdout(predicate::str::contains("\"starter_files\""));
}

#[test]
fn test_completions_bash() {
    let scratch = TempDir::new().unwrap();
    code_daily(&scratch)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("code-daily"));
}

#[test]
fn test_config_get_default() {
    let scratch = TempDir::new().unwrap();
    code_daily(&scratch)
        .args(["config", "get", "model.name"])
        .assert()
        .success()
        .stdout("gemini-1.5-flash\n");
}

#[test]
fn test_config_env_override() {
    let scratch = TempDir::new().unwrap();
    code_daily(&scratch)
        .env("CODE_DAILY__MODEL__NAME", "gemini-1.5-pro")
        .args(["config", "get", "model.name"])
        .assert()
        .success()
        .stdout("gemini-1.5-pro\n");
}

#[test]
fn test_config_file_override() {
    let scratch = TempDir::new().unwrap();
    let file = scratch.path().join("custom.toml");
    fs::write(&file, "[workspace]\noutput_root = \"practice\"\n").unwrap();

    code_daily(&scratch)
        .arg("--config")
        .arg(&file)
        .args(["config", "get", "workspace.output_root"])
        .assert()
        .success()
        .stdout("practice\n");
}

#[test]
fn test_config_path_reports_explicit_file() {
    let scratch = TempDir::new().unwrap();
    let file = scratch.path().join("custom.toml");
    fs::write(&file, "").unwrap();

    code_daily(&scratch)
        .arg("--config")
        .arg(&file)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.toml"));
}

#[test]
fn test_config_list_shows_sections() {
    let scratch = TempDir::new().unwrap();
    code_daily(&scratch)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[model]"))
        .stdout(predicate::str::contains("[credentials]"))
        .stdout(predicate::str::contains("GEMINI_API_KEY"));
}

#[test]
fn test_init_writes_then_refuses_without_force() {
    let scratch = TempDir::new().unwrap();
    let file = scratch.path().join("conf").join("code-daily.toml");

    code_daily(&scratch)
        .arg("--config")
        .arg(&file)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration created"));

    let written = fs::read_to_string(&file).unwrap();
    assert!(written.contains("gemini-1.5-flash"));

    fs::write(&file, "[model]\nname = \"edited\"\n").unwrap();
    code_daily(&scratch)
        .arg("--config")
        .arg(&file)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));
    assert!(fs::read_to_string(&file).unwrap().contains("edited"));

    code_daily(&scratch)
        .arg("--config")
        .arg(&file)
        .args(["init", "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&file).unwrap().contains("gemini-1.5-flash"));
}
