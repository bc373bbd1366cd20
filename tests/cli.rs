//! End-to-end tests for the command-line interface
//!
//! Each test runs the binary against an isolated config directory so
//! nothing leaks into (or out of) the user's real configuration.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn calculatron(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("calculatron").expect("binary exists");
    cmd.env("CALCULATRON_DATA_DIR", config_dir.path());
    cmd
}

#[test]
fn summary_prints_sample_totals() {
    let dir = TempDir::new().unwrap();

    calculatron(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Weekly income"))
        .stdout(predicate::str::contains("$5108"))
        .stdout(predicate::str::contains("$30432"))
        .stdout(predicate::str::contains("$365184"))
        .stdout(predicate::str::contains("$1200"));
}

#[test]
fn summary_weeks_off_changes_yearly_only() {
    let dir = TempDir::new().unwrap();

    // 0 weeks off: yearly = 5108 * 52 + 120000
    calculatron(&dir)
        .args(["summary", "--weeks-off", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$5108"))
        .stdout(predicate::str::contains("$30432"))
        .stdout(predicate::str::contains("$385616"));
}

#[test]
fn summary_weeks_off_clamped_to_a_year() {
    let dir = TempDir::new().unwrap();

    // 99 weeks is clamped to 52; yearly collapses to the salary total
    calculatron(&dir)
        .args(["summary", "--weeks-off", "99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$120000"));
}

#[test]
fn summary_json_output() {
    let dir = TempDir::new().unwrap();

    // Money serializes as integer cents
    calculatron(&dir)
        .args(["summary", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"weekly_income\": 510800"))
        .stdout(predicate::str::contains("\"yearly_income\": 36518400"))
        .stdout(predicate::str::contains("\"total_weekly_hours\": 20"));
}

#[test]
fn config_shows_paths_and_settings() {
    let dir = TempDir::new().unwrap();

    calculatron(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Calculatron Configuration"))
        .stdout(predicate::str::contains(dir.path().to_str().unwrap()))
        .stdout(predicate::str::contains("Default weeks off: 4"));
}

#[test]
fn saved_settings_round_trip_through_the_binary() {
    let dir = TempDir::new().unwrap();

    let paths = calculatron::config::CalcPaths::with_base_dir(dir.path().to_path_buf());
    let mut settings = calculatron::config::Settings::default();
    settings.currency_symbol = "€".to_string();
    settings.save(&paths).unwrap();

    calculatron(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency symbol:   €"));

    calculatron(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("€5108"));
}

#[test]
fn summary_respects_saved_default_weeks_off() {
    let dir = TempDir::new().unwrap();

    std::fs::write(
        dir.path().join("config.json"),
        r#"{"schema_version":1,"currency_symbol":"$","default_weeks_off":0}"#,
    )
    .unwrap();

    calculatron(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("$385616"));
}

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();

    calculatron(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tui"))
        .stdout(predicate::str::contains("summary"))
        .stdout(predicate::str::contains("config"));
}
