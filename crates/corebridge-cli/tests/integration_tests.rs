//! Integration tests for the `corebridge` binary.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn corebridge(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("corebridge").unwrap();
    cmd.current_dir(cwd)
        .env_remove("COREBRIDGE_OUTPUT_DIR")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_lists_commands() {
    let tmp = TempDir::new().unwrap();
    corebridge(tmp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag() {
    let tmp = TempDir::new().unwrap();
    corebridge(tmp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    let tmp = TempDir::new().unwrap();
    corebridge(tmp.path()).assert().code(2);
}

#[test]
fn init_writes_default_config() {
    let tmp = TempDir::new().unwrap();
    corebridge(tmp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("CoreBridge initialized successfully!"));

    let raw = std::fs::read_to_string(tmp.path().join("corebridge.config.json")).unwrap();
    let config: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(config["$schema"], "https://corebridge.dev/schema/config.json");
    assert_eq!(config["outputDir"], "./packages");
    assert_eq!(config["domains"], serde_json::json!(["user", "project"]));
    assert_eq!(config["contracts"]["format"], "openapi");
}

#[test]
fn init_refuses_to_overwrite() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("corebridge.config.json");
    std::fs::write(&path, r#"{ "domains": ["order"] }"#).unwrap();

    corebridge(tmp.path())
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("--force"));
    assert!(std::fs::read_to_string(&path).unwrap().contains("order"));

    corebridge(tmp.path()).args(["init", "--force"]).assert().success();
    assert!(std::fs::read_to_string(&path).unwrap().contains("$schema"));
}

#[test]
fn generate_without_config_uses_defaults() {
    let tmp = TempDir::new().unwrap();
    corebridge(tmp.path())
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generation complete!"))
        .stdout(predicate::str::contains("Generated packages:"))
        .stdout(predicate::str::contains("Next steps:"));

    let out = tmp.path().join("packages");
    for file in [
        "core/package.json",
        "core/src/use-cases/user/index.ts",
        "contracts/openapi/openapi.yaml",
        "contracts/schemas/Project.schema.json",
        "adapter-web/src/index.ts",
        "adapter-mobile/src/extensions/offline.ts",
    ] {
        assert!(out.join(file).is_file(), "missing {file}");
    }
    assert!(!out.join("adapter-web/src/extensions/offline.ts").exists());
}

#[test]
fn generate_reads_config_file() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("custom.json"),
        r#"{ "outputDir": "./gen", "domains": ["invoice"], "adapters": ["desktop"] }"#,
    )
    .unwrap();

    corebridge(tmp.path())
        .args(["generate", "-c", "custom.json"])
        .assert()
        .success();

    let index = std::fs::read_to_string(tmp.path().join("gen/adapter-desktop/src/index.ts")).unwrap();
    assert!(index.contains("router.use('/invoices'"));
    assert!(tmp.path().join("gen/core/src/domain/models/Invoice.ts").is_file());
    assert!(!tmp.path().join("packages").exists());
}

#[test]
fn scope_flags_select_packages() {
    let tmp = TempDir::new().unwrap();
    corebridge(tmp.path())
        .args(["generate", "--contracts-only", "--out-dir", "out"])
        .assert()
        .success();

    let out = tmp.path().join("out");
    assert!(out.join("contracts").is_dir());
    assert!(!out.join("core").exists());
    assert!(!out.join("adapter-web").exists());
}

#[test]
fn verbose_generate_lists_written_files() {
    let tmp = TempDir::new().unwrap();
    corebridge(tmp.path())
        .args(["-v", "generate", "--contracts-only", "--out-dir", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contracts package generated"))
        .stdout(predicate::str::contains("out/contracts/openapi/openapi.yaml"));

    corebridge(tmp.path())
        .args(["generate", "--contracts-only", "--out-dir", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("openapi.yaml").not());
}

#[test]
fn output_dir_from_environment() {
    let tmp = TempDir::new().unwrap();
    corebridge(tmp.path())
        .args(["generate", "--core-only"])
        .env("COREBRIDGE_OUTPUT_DIR", "from-env")
        .assert()
        .success();

    assert!(tmp.path().join("from-env/core/package.json").is_file());
}

#[test]
fn dry_run_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    corebridge(tmp.path())
        .args(["generate", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("openapi.yaml"))
        .stdout(predicate::str::contains("UserController.ts"));

    assert!(!tmp.path().join("packages").exists());
}

#[test]
fn json_dry_run_is_machine_readable() {
    let tmp = TempDir::new().unwrap();
    let assert = corebridge(tmp.path())
        .args(["--output-format", "json", "generate", "--dry-run", "--adapters-only"])
        .assert()
        .success();

    let summary: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(summary["dryRun"], true);
    let packages: Vec<&str> = summary["packages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["package"].as_str().unwrap())
        .collect();
    assert_eq!(packages, ["@corebridge/adapter-web", "@corebridge/adapter-mobile"]);
}

#[test]
fn completions_for_bash() {
    let tmp = TempDir::new().unwrap();
    corebridge(tmp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("corebridge"));
}
