//! Integration tests for the `erpview` CLI binary.
//!
//! Offline commands run as-is; service-bound commands point at a local
//! wiremock server via `--rates-url` / `--address-url`.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::{Value, json};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `erpview` binary with env isolation.
///
/// Clears all `ERPVIEW_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn erpview_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("erpview");
    cmd.env("HOME", "/tmp/erpview-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/erpview-cli-test-nonexistent")
        .env_remove("RUST_LOG")
        .env_remove("ERPVIEW_RATES_URL")
        .env_remove("ERPVIEW_ADDRESS_URL")
        .env_remove("ERPVIEW_OUTPUT")
        .env_remove("ERPVIEW_TIMEOUT")
        .env_remove("ERPVIEW_KEY_MODE")
        .env_remove("ERPVIEW_USERNAME");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

async fn rate_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/erp"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "_id": 1, "ZoneID": "AY1", "VehicleType": "Taxis",
                "DayType": "Weekdays", "StartTime": "08:00", "EndTime": "08:30",
                "ChargeAmount": 2
            },
            {
                "_id": 2, "ZoneID": "AY1",
                "VehicleType": "Heavy Goods Vehicles/Small Buses",
                "DayType": "Weekdays", "StartTime": "08:00", "EndTime": "08:30",
                "ChargeAmount": 3
            },
            {
                "_id": 3, "ZoneID": "BKZ",
                "VehicleType": "Heavy Goods Vehicles/Small Buses",
                "DayType": "Weekdays", "StartTime": "06:00", "EndTime": "07:00",
                "ChargeAmount": 1.5
            }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/erp_time"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!(["08:00 to 08:30", "06:00 to 07:00"])),
        )
        .mount(&server)
        .await;
    server
}

fn json_stdout(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = erpview_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    erpview_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("rates")
            .and(predicate::str::contains("time-windows"))
            .and(predicate::str::contains("zones"))
            .and(predicate::str::contains("favorites")),
    );
}

#[test]
fn test_version_flag() {
    erpview_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("erpview"));
}

#[test]
fn test_completions_zsh() {
    erpview_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

#[test]
fn test_invalid_output_format() {
    let output = erpview_cmd()
        .args(["--output", "xml", "options"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("possible values"),
        "Expected error about valid output formats:\n{text}"
    );
}

// ── Offline commands ────────────────────────────────────────────────

#[test]
fn test_options_plain() {
    erpview_cmd()
        .args(["--output", "plain", "options"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Heavy Goods Vehicles/Small Buses")
                .and(predicate::str::contains("Motorcycles"))
                .and(predicate::str::contains("weekend")),
        );
}

#[test]
fn test_zone_locations() {
    erpview_cmd()
        .args(["-o", "plain", "zones", "bkz"])
        .assert()
        .success()
        .stdout("Upper Boon Keng Road\n");
}

#[test]
fn test_unknown_zone_not_found() {
    let output = erpview_cmd().args(["zones", "XYZ"]).output().unwrap();
    assert_eq!(output.status.code(), Some(4));
    assert!(combined_output(&output).contains("XYZ"));
}

#[test]
fn test_config_show_no_config() {
    erpview_cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("traffooze-flask.onrender.com"));
}

#[test]
fn test_config_init_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let run = || {
        let mut cmd = erpview_cmd();
        cmd.env("HOME", dir.path())
            .env("XDG_CONFIG_HOME", dir.path())
            .args(["config", "init", "--username", "alice"]);
        cmd
    };

    run().assert().success();
    // A second init without --force refuses to overwrite.
    run().assert().code(2);

    erpview_cmd()
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("alice"));
}

#[test]
fn test_config_commands_survive_bad_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("erpview").join("config.toml");
    std::fs::create_dir_all(file.parent().unwrap()).unwrap();
    std::fs::write(&file, "[defaults]\nkey_mode = \"bogus\"\n").unwrap();

    let run = |args: &[&str]| {
        let mut cmd = erpview_cmd();
        cmd.env("HOME", dir.path())
            .env("XDG_CONFIG_HOME", dir.path())
            .args(args);
        cmd
    };

    run(&["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
    run(&["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bogus"));
    // Other commands still reject the bad value.
    run(&["options"]).assert().code(2);

    run(&["config", "init", "--force"]).assert().success();
    let rewritten = std::fs::read_to_string(&file).unwrap();
    assert!(!rewritten.contains("bogus"), "{rewritten}");
    run(&["options"]).assert().success();
}

// ── Rates ───────────────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_rates_defaults() {
    let server = rate_server().await;

    let output = erpview_cmd()
        .args(["--rates-url", &server.uri(), "-o", "json", "rates"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));

    let rows = json_stdout(&output);
    assert_eq!(rows.as_array().unwrap().len(), 2);
    assert_eq!(rows[0]["zone_id"], "AY1");
    assert_eq!(rows[0]["time_range"], "08:00 to 08:30");
    assert_eq!(rows[0]["charge"], "$3");
    assert_eq!(rows[1]["zone_id"], "BKZ");
    assert_eq!(rows[1]["charge"], "no available data");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rates_with_edits() {
    let server = rate_server().await;

    let output = erpview_cmd()
        .args([
            "--rates-url",
            &server.uri(),
            "-o",
            "plain",
            "rates",
            "--set",
            "AY1:vehicle=taxi",
            "--set",
            "bkz:time=06:00 to 07:00",
        ])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "AY1\t$2\nBKZ\t$1.5\n"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rates_zone_filter_and_clear() {
    let server = rate_server().await;

    let output = erpview_cmd()
        .args([
            "--rates-url",
            &server.uri(),
            "-o",
            "json-compact",
            "rates",
            "--clear",
            "BKZ:time",
            "--zone",
            "BKZ",
        ])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));

    let rows = json_stdout(&output);
    assert_eq!(rows.as_array().unwrap().len(), 1);
    assert_eq!(rows[0]["time_range"], Value::Null);
    assert_eq!(rows[0]["charge"], "$1.5");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rates_unknown_zone_edit() {
    let server = rate_server().await;

    let output = erpview_cmd()
        .args(["--rates-url", &server.uri(), "rates", "--set", "CBD:day=weekend"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_rates_bad_vehicle_is_usage_error() {
    // Rejected before any request is made.
    let output = erpview_cmd()
        .args(["--rates-url", "http://127.0.0.1:9", "rates", "--vehicle", "Tractors"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("Tractors"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_time_windows() {
    let server = rate_server().await;

    erpview_cmd()
        .args(["--rates-url", &server.uri(), "-o", "plain", "time-windows"])
        .assert()
        .success()
        .stdout("08:00 to 08:30\n06:00 to 07:00\n");
}

// ── Favorites ───────────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_favorites() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/get-address/"))
        .and(body_json(json!({ "username": "alice" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "homeAddress": "10 Clementi Ave",
            "workAddress": "1 Raffles Pl"
        })))
        .mount(&server)
        .await;

    erpview_cmd()
        .args([
            "--address-url",
            &server.uri(),
            "-o",
            "plain",
            "favorites",
            "--username",
            "alice",
        ])
        .assert()
        .success()
        .stdout("Home\t10 Clementi Ave\nWork\t1 Raffles Pl\n");
}

#[test]
fn test_favorites_needs_username() {
    let output = erpview_cmd().arg("favorites").output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("username"));
}
