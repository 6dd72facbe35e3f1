//! End-to-end tests for the update-modules CLI
//!
//! These tests verify:
//! - Exit codes for the no-update, declined, unresolved and fatal paths
//! - The report and advisory text printed to stdout
//! - Declining leaves package.json untouched

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Create a project directory holding the given package.json
fn create_project(package_json: &str) -> TempDir {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    fs::write(temp_dir.path().join("package.json"), package_json).unwrap();
    temp_dir
}

fn update_modules() -> Command {
    let mut cmd = Command::cargo_bin("update-modules").expect("binary should be built");
    cmd.args(["--no-progress", "--no-color"]);
    cmd
}

mod exit_code_tests {
    use super::*;

    #[test]
    fn test_empty_manifest_has_no_updates() {
        let project = create_project(r#"{"name": "empty"}"#);

        update_modules()
            .arg(project.path())
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Checking the updates of \"0\" normal and \"0\" developer modules.",
            ))
            .stdout(predicate::str::contains("No updates available."));
    }

    #[test]
    fn test_everything_ignored_makes_no_requests() {
        let project = create_project(
            r#"{"dependencies": {"left-pad": "1.0.0"}, "update-modules": {"ignore": ["left-pad"]}}"#,
        );

        update_modules()
            .arg(project.path())
            .args(["--registry", "http://127.0.0.1:9", "--fallback-registry", "http://127.0.0.1:9"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No updates available."));
    }

    #[test]
    fn test_cli_ignore_flag() {
        let project = create_project(r#"{"devDependencies": {"jest": "28.0.0"}}"#);

        update_modules()
            .arg(project.path())
            .args(["--ignore", "jest"])
            .args(["--registry", "http://127.0.0.1:9", "--fallback-registry", "http://127.0.0.1:9"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No updates available."));
    }

    #[test]
    fn test_missing_manifest_fails() {
        let temp_dir = tempfile::tempdir().unwrap();

        update_modules()
            .arg(temp_dir.path())
            .assert()
            .code(1)
            .stdout(predicate::str::contains("Error:"));
    }

    #[test]
    fn test_malformed_manifest_fails() {
        let project = create_project("{ \"dependencies\": ");

        update_modules()
            .arg(project.path())
            .assert()
            .code(1)
            .stdout(predicate::str::contains("Error:"));
    }

    #[test]
    fn test_unresolved_exits_with_two() {
        let project = create_project(r#"{"dependencies": {"ghost": "0.1.0"}}"#);
        let mut npm = mockito::Server::new();
        let mut cdn = mockito::Server::new();
        npm.mock("GET", "/ghost").with_status(404).create();
        cdn.mock("GET", "/ghost@latest/package.json")
            .with_status(404)
            .create();

        update_modules()
            .arg(project.path())
            .args(["--registry", &npm.url(), "--fallback-registry", &cdn.url()])
            .assert()
            .code(2)
            .stdout(predicate::str::contains("Please remove \"ghost\" modules."))
            .stdout(predicate::str::contains("Do you want to update?").not());
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        update_modules()
            .args(["--concurrency", "0"])
            .assert()
            .failure();
    }
}

mod confirmation_tests {
    use super::*;

    fn left_pad_registry() -> mockito::ServerGuard {
        let mut npm = mockito::Server::new();
        npm.mock("GET", "/left-pad")
            .with_status(200)
            .with_body(r#"{"dist-tags": {"latest": "1.3.0"}}"#)
            .create();
        npm
    }

    #[test]
    fn test_declining_leaves_manifest_unchanged() {
        let original = r#"{"dependencies": {"left-pad": "1.0.0"}}"#;
        let project = create_project(original);
        let npm = left_pad_registry();

        update_modules()
            .arg(project.path())
            .args(["--registry", &npm.url()])
            .write_stdin("no\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("▲  left-pad  :  1.0.0  →  1.3.0"))
            .stdout(predicate::str::contains("Your Answer: "))
            .stdout(predicate::str::contains("cmd :").not());

        let after = fs::read_to_string(project.path().join("package.json")).unwrap();
        assert_eq!(after, original);
    }

    #[test]
    fn test_closed_stdin_declines() {
        let project = create_project(r#"{"dependencies": {"left-pad": "1.0.0"}}"#);
        let npm = left_pad_registry();

        update_modules()
            .arg(project.path())
            .args(["--registry", &npm.url()])
            .write_stdin("")
            .assert()
            .success()
            .stdout(predicate::str::contains("Update completed.").not());
    }

    #[test]
    fn test_debug_logs_go_to_stdout() {
        let project = create_project(r#"{"dependencies": {"left-pad": "1.0.0"}}"#);
        let npm = left_pad_registry();

        update_modules()
            .arg(project.path())
            .args(["--debug", "--registry", &npm.url()])
            .env_remove("RUST_LOG")
            .write_stdin("no\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Debug mode is enabled."))
            .stdout(predicate::str::contains("Modules: \"left-pad\""))
            .stdout(predicate::str::contains("left-pad@1.0.0: outdated, latest 1.3.0"))
            .stdout(predicate::str::contains(
                "Checked 1 modules: 1 outdated, 0 up to date, 0 unresolved, 0 ignored",
            ));
    }
}

mod cli_options_tests {
    use super::*;

    #[test]
    fn test_help() {
        Command::cargo_bin("update-modules")
            .unwrap()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("update-modules"))
            .stdout(predicate::str::contains("--concurrency"));
    }

    #[test]
    fn test_version() {
        Command::cargo_bin("update-modules")
            .unwrap()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_unknown_package_manager_rejected() {
        Command::cargo_bin("update-modules")
            .unwrap()
            .args(["--package-manager", "pip"])
            .assert()
            .failure();
    }
}
