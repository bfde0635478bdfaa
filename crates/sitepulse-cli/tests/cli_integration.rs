// End-to-end coverage of the offline commands. Anything that needs the
// backend is covered by the client crate's tests against fake sinks.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sitepulse(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sitepulse").unwrap();
    cmd.arg("--data-dir")
        .arg(data_dir.path())
        .env_remove("SITEPULSE_API_BASE")
        .env_remove("SITEPULSE_COLLECTOR_BASE");
    cmd
}

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("sitepulse")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("services"))
        .stdout(predicate::str::contains("analytics"))
        .stdout(predicate::str::contains("track"));
}

#[test]
fn config_init_then_show_roundtrips() {
    let data_dir = TempDir::new().unwrap();

    sitepulse(&data_dir)
        .args(["config", "init", "--api-base", "https://api.example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));

    sitepulse(&data_dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://api.example.com"))
        .stdout(predicate::str::contains("tracking disabled"));
}

#[test]
fn track_without_collector_reports_disabled() {
    let data_dir = TempDir::new().unwrap();

    sitepulse(&data_dir)
        .args(["track", "/services"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tracking is disabled"));
}

#[test]
fn track_admin_route_is_skipped() {
    let data_dir = TempDir::new().unwrap();

    sitepulse(&data_dir)
        .args([
            "config",
            "init",
            "--collector-base",
            "https://collect.example.com",
        ])
        .assert()
        .success();

    // The admin check short-circuits before any network use, so this
    // succeeds even though the collector host does not exist.
    sitepulse(&data_dir)
        .args(["track", "/admin/services"])
        .assert()
        .success()
        .stdout(predicate::str::contains("admin route"));
}

#[test]
fn auth_set_and_clear() {
    let data_dir = TempDir::new().unwrap();

    sitepulse(&data_dir)
        .args(["auth", "set-token", "tok-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Token stored"));

    let store_file = data_dir.path().join("store.json");
    let content = std::fs::read_to_string(&store_file).unwrap();
    assert!(content.contains("tok-1"));

    sitepulse(&data_dir)
        .args(["auth", "clear"])
        .assert()
        .success();

    let content = std::fs::read_to_string(&store_file).unwrap();
    assert!(!content.contains("tok-1"));
}
