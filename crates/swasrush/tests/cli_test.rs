#![allow(deprecated)] // TODO: cargo_bin → cargo_bin_cmd! へ移行

mod common;

use assert_cmd::Command;
use common::{INVALID_ACCOUNTS_CONFIG, TestProject, VALID_CONFIG};
use predicates::prelude::*;

fn swasrush() -> Command {
    let mut cmd = Command::cargo_bin("swasrush").unwrap();
    cmd.env_remove("SWASRUSH_CONFIG")
        .env_remove("SWASRUSH_LOG_FILE")
        .env_remove("RUST_LOG");
    cmd
}

/// CLIヘルプが正しく表示されることを確認
#[test]
fn test_cli_help() {
    swasrush()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("一斉購入"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--log-file"));
}

/// バージョン表示が正しく動作することを確認
#[test]
fn test_cli_version() {
    swasrush()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("swasrush"));
}

#[test]
fn test_validate_valid_config() {
    let project = TestProject::new();
    let config = project.write_config(VALID_CONFIG);

    swasrush()
        .arg("validate")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("tokyo-main"))
        .stdout(predicate::str::contains("hk-backup"))
        .stdout(predicate::str::contains("アカウント: 2個"));
}

#[test]
fn test_validate_reports_missing_field() {
    let project = TestProject::new();
    let config = project.write_config(INVALID_ACCOUNTS_CONFIG);

    swasrush()
        .arg("validate")
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("region_id"))
        .stdout(predicate::str::contains("plan_id"));
}

#[test]
fn test_validate_missing_accounts_key() {
    let project = TestProject::new();
    let config = project.write_config("notify:\n  kind: log\n");

    swasrush()
        .arg("validate")
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("accounts"));
}

#[test]
fn test_run_missing_accounts_key_is_fatal() {
    let project = TestProject::new();
    let config = project.write_config("other: true\n");

    swasrush()
        .arg("run")
        .arg("--config")
        .arg(&config)
        .arg("--log-file")
        .arg(project.log_path())
        .assert()
        .code(1);

    let log = project.read_log();
    assert!(log.contains("run failed"));
    assert!(log.contains("accounts"));
    assert!(!log.contains("Attempting purchase"));
}

#[test]
fn test_run_malformed_config_is_fatal() {
    let project = TestProject::new();
    let config = project.write_config("accounts: [\n  - broken: yes\n");

    swasrush()
        .arg("--config")
        .arg(&config)
        .arg("--log-file")
        .arg(project.log_path())
        .assert()
        .code(1);

    assert!(project.read_log().contains("run failed"));
}

#[test]
fn test_run_invalid_accounts_are_reported_as_failures() {
    let project = TestProject::new();
    let config = project.write_config(INVALID_ACCOUNTS_CONFIG);

    swasrush()
        .arg("run")
        .arg("--config")
        .arg(&config)
        .arg("--log-file")
        .arg(project.log_path())
        .assert()
        .code(2)
        .stdout(predicate::str::contains("no successful provisioning"));

    let log = project.read_log();
    assert!(log.contains("notification service unavailable"));
    assert!(log.contains("no-region - Error:"));
    assert!(log.contains("no-plan - Error:"));
    assert!(log.contains("2 of 2 account(s) failed"));
}

#[test]
fn test_run_empty_accounts_succeeds() {
    let project = TestProject::new();
    let config = project.write_config("accounts: []\n");

    swasrush()
        .arg("run")
        .arg("--config")
        .arg(&config)
        .arg("--log-file")
        .arg(project.log_path())
        .assert()
        .success();

    let log = project.read_log();
    assert!(log.contains("No accounts configured"));
    assert!(log.contains("no failed provisioning"));
}

#[test]
fn test_config_env_var_is_used_without_flag() {
    let project = TestProject::new();
    let config = project.write_config(VALID_CONFIG);
    let elsewhere = tempfile::tempdir().unwrap();

    swasrush()
        .current_dir(elsewhere.path())
        .env("SWASRUSH_CONFIG", &config)
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("tokyo-main"));
}

/// 存在しないパスを指す SWASRUSH_CONFIG はカレントディレクトリの config.yml に譲る
#[test]
fn test_stale_config_env_var_falls_back_to_current_dir() {
    let project = TestProject::new();
    project.write_config(VALID_CONFIG);

    swasrush()
        .current_dir(project.root.path())
        .env("SWASRUSH_CONFIG", project.root.path().join("gone.yml"))
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("hk-backup"));
}

#[test]
fn test_numeric_image_id_does_not_abort_other_accounts() {
    let project = TestProject::new();
    let config =
        project.write_config(&VALID_CONFIG.replacen("image_id: img-1", "image_id: 123456", 1));

    swasrush()
        .arg("validate")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("アカウント: 2個"));
}

#[test]
fn test_missing_config_file_error_printed_once() {
    let project = TestProject::new();
    let missing = project.root.path().join("missing.yml");

    let output = swasrush()
        .arg("validate")
        .arg("--config")
        .arg(&missing)
        .assert()
        .code(1)
        .get_output()
        .stderr
        .clone();
    let stderr = String::from_utf8_lossy(&output);
    assert!(stderr.contains("missing.yml"));
    assert_eq!(stderr.matches("os error").count(), 1);
}
