use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const CONFIG: &str = r#"{
  "knownPayday": "2024-01-05",
  "netIncome": 2500,
  "payFrequencyWeeks": 2,
  "payments": {
    "weekly": [{ "name": "Groceries", "code": "GRO", "amount": 120.50, "day": 3 }],
    "fortnightly": [{ "name": "Car", "code": "CAR", "amount": 80, "day": 5 }],
    "monthly": [
      { "name": "Rent", "code": "RNT", "amount": 950, "day": 1 },
      { "name": "Phone", "code": "PHN", "amount": 35.50, "day": 30 }
    ]
  }
}"#;

fn write_config(contents: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("conf.json");
    std::fs::write(&path, contents).expect("write config");
    (dir, path)
}

#[test]
fn prints_current_pay_period() {
    let (_dir, path) = write_config(CONFIG);

    Command::cargo_bin("payday")
        .unwrap()
        .arg(&path)
        .args(["--today", "2024-01-20", "--plain"])
        .assert()
        .success()
        .stdout(contains("PAY PERIOD"))
        .stdout(contains("Starting:         2024-01-29"))
        .stdout(contains("Ending:           2024-02-11"))
        .stdout(contains("Payday:           2024-02-02"))
        .stdout(contains("Total Outgoings:  $ 356.50"))
        .stdout(contains("Remaining:        $ 2143.50"))
        .stdout(contains("Wed, Jan 31"))
        .stdout(contains("Fri, Feb 02"))
        .stdout(contains("RNT").not());
}

#[test]
fn reads_conf_json_from_working_directory() {
    let (dir, _path) = write_config(CONFIG);

    Command::cargo_bin("payday")
        .unwrap()
        .current_dir(dir.path())
        .args(["--today", "2024-02-02", "--plain"])
        .assert()
        .success()
        .stdout(contains("Payday:           2024-02-02"));
}

#[test]
fn missing_config_exits_with_error() {
    let dir = TempDir::new().expect("create temp dir");

    Command::cargo_bin("payday")
        .unwrap()
        .arg(dir.path().join("nope.json"))
        .arg("--plain")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Error: Configuration file"))
        .stderr(contains("not found"));
}

#[test]
fn invalid_frequency_is_reported() {
    let contents = CONFIG.replace("\"payFrequencyWeeks\": 2", "\"payFrequencyWeeks\": 1.5");
    let (_dir, path) = write_config(&contents);

    Command::cargo_bin("payday")
        .unwrap()
        .arg(&path)
        .args(["--today", "2024-01-20"])
        .assert()
        .failure()
        .stderr(contains("Invalid pay frequency: 1.5"));
}

#[test]
fn rejects_malformed_today_flag() {
    let (_dir, path) = write_config(CONFIG);

    Command::cargo_bin("payday")
        .unwrap()
        .arg(&path)
        .args(["--today", "20/01/2024"])
        .assert()
        .failure()
        .stderr(contains("--today"));
}
