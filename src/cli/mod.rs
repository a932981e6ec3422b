//! Command-line entry point: load `conf.json`, summarize the current pay
//! period, print the report.

pub mod output;
pub mod report;
pub mod ui;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use tracing::debug;

use payday_config::ConfigManager;
use payday_core::{Clock, FixedClock, PayCycleService, SystemClock, DATE_FORMAT};

use crate::errors::AppError;
use output::{set_preferences, OutputPreferences};
use report::PeriodReport;

#[derive(Debug, Parser)]
#[command(
    name = "payday",
    version,
    about = "Lists the payments due in the current pay period"
)]
pub struct Args {
    /// Path to the configuration file [default: ./conf.json]
    pub config: Option<PathBuf>,

    /// Compute the period as if today were this date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_today)]
    pub today: Option<NaiveDate>,

    /// Disable colours and box-drawing characters
    #[arg(long)]
    pub plain: bool,
}

fn parse_today(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
}

/// Parses process arguments and prints the report to stdout.
pub fn run_cli() -> Result<(), AppError> {
    let rendered = run(Args::parse())?;
    println!("{rendered}");
    Ok(())
}

/// Runs one invocation and returns the rendered report.
pub fn run(args: Args) -> Result<String, AppError> {
    set_preferences(OutputPreferences {
        plain_mode: args.plain,
    });

    let path = args.config.unwrap_or_else(ConfigManager::default_path);
    debug!(path = %path.display(), "loading configuration");
    let config = ConfigManager::new(path).load()?;
    let input = config.to_input()?;

    let clock: Box<dyn Clock> = match args.today {
        Some(date) => Box::new(FixedClock(date)),
        None => Box::new(SystemClock),
    };
    let summary = PayCycleService::summarize(&input, clock.as_ref())?;
    Ok(PeriodReport::new(config.net_income, &summary).render())
}
