//! Tests for error handling, suggestions and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn corebridge(cwd: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("corebridge").unwrap();
    cmd.current_dir(cwd)
        .env_remove("COREBRIDGE_OUTPUT_DIR")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn malformed_config_exits_with_configuration_code() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("corebridge.config.json"), "{ domains: ").unwrap();

    corebridge(tmp.path())
        .arg("generate")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"))
        .stderr(predicate::str::contains("corebridge init --force"));
}

#[test]
fn output_dir_that_is_a_file_is_a_user_error() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("packages"), "").unwrap();

    corebridge(tmp.path())
        .arg("generate")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid input"))
        .stderr(predicate::str::contains("is a file"));
}

#[test]
fn unwritable_package_directory_is_an_internal_error() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("out");
    std::fs::create_dir_all(&out).unwrap();
    // A file where the core package directory should go.
    std::fs::write(out.join("core"), "").unwrap();

    corebridge(tmp.path())
        .args(["generate", "--core-only", "--out-dir", "out"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Generation failed"));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    let tmp = TempDir::new().unwrap();
    corebridge(tmp.path())
        .args(["generate", "--everything"])
        .assert()
        .code(2);
}

#[test]
fn verbose_errors_show_the_cause_chain() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("corebridge.config.json"), r#"{ "domains": 5 }"#).unwrap();

    corebridge(tmp.path())
        .args(["-v", "generate"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Caused by:"))
        .stderr(predicate::str::contains("--verbose").not());
}
