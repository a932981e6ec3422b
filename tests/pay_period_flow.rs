use payday::cli::{run, Args};
use payday::errors::AppError;
use payday_config::ConfigError;
use payday_core::CoreError;
use tempfile::TempDir;

fn config_with(fortnight_anchor: Option<&str>, frequency: u32) -> String {
    let anchor = fortnight_anchor
        .map(|date| format!("\"fortnightAnchor\": \"{date}\","))
        .unwrap_or_default();
    format!(
        r#"{{
  "knownPayday": "2024-01-05",
  "netIncome": 900,
  "payFrequencyWeeks": {frequency},
  {anchor}
  "payments": {{
    "fortnightly": [{{ "name": "Car", "code": "CAR", "amount": 80, "day": 5 }}]
  }}
}}"#
    )
}

fn run_with(contents: &str, today: &str) -> Result<String, AppError> {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("conf.json");
    std::fs::write(&path, contents).expect("write config");
    run(Args {
        config: Some(path),
        today: Some(today.parse().expect("valid date")),
        plain: true,
    })
}

#[test]
fn weekly_pay_drops_fortnightly_payments_by_default() {
    let rendered = run_with(&config_with(None, 1), "2024-01-30").expect("run");

    assert!(rendered.contains("Payday:           2024-02-02"));
    assert!(rendered.contains("Total Outgoings:  $ 0.00"));
    assert!(rendered.contains("No payments due this period."));
}

#[test]
fn weekly_pay_with_fortnight_anchor_alternates() {
    let config = config_with(Some("2024-01-01"), 1);

    let on_cycle = run_with(&config, "2024-01-30").expect("run");
    assert!(on_cycle.contains("Total Outgoings:  $ 80.00"));
    assert!(on_cycle.contains("Fri, Feb 02"));

    let off_cycle = run_with(&config, "2024-02-06").expect("run");
    assert!(off_cycle.contains("Payday:           2024-02-09"));
    assert!(off_cycle.contains("Total Outgoings:  $ 0.00"));
}

#[test]
fn invalid_anchor_surfaces_core_error() {
    let config = config_with(None, 2).replace("2024-01-05", "2024-02-30");

    let err = run_with(&config, "2024-01-30").unwrap_err();

    assert!(matches!(err, AppError::Core(CoreError::InvalidAnchorDate(_))));
}

#[test]
fn unreadable_config_surfaces_config_error() {
    let err = run_with("not json", "2024-01-30").unwrap_err();

    assert!(matches!(err, AppError::Config(ConfigError::Serde(_))));
}
