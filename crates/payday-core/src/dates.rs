//! Calendar helpers shared by the services.
//!
//! Every shift goes through [`shift_days`] so that out-of-range arithmetic
//! surfaces as [`CoreError::InvalidOccurrenceDate`] instead of a panic.

use chrono::{Datelike, Duration, NaiveDate};

use crate::CoreError;

/// Date format accepted for anchor and reference dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a known payday such as `2024-01-05`.
pub fn parse_anchor_date(raw: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|err| CoreError::InvalidAnchorDate(format!("`{raw}`: {err}")))
}

/// Parses any other supplied date (for instance a fortnight reference).
pub fn parse_occurrence_date(raw: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|err| CoreError::InvalidOccurrenceDate(format!("`{raw}`: {err}")))
}

/// Moves `date` by a signed number of days.
pub fn shift_days(date: NaiveDate, days: i64) -> Result<NaiveDate, CoreError> {
    date.checked_add_signed(Duration::days(days)).ok_or_else(|| {
        CoreError::InvalidOccurrenceDate(format!("{date} shifted by {days} days is out of range"))
    })
}

/// Monday of the week containing `date`.
pub fn start_of_week(date: NaiveDate) -> Result<NaiveDate, CoreError> {
    shift_days(date, -i64::from(date.weekday().num_days_from_monday()))
}

/// First day of the month containing `date`.
pub fn start_of_month(date: NaiveDate) -> Result<NaiveDate, CoreError> {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).ok_or_else(|| {
        CoreError::InvalidOccurrenceDate(format!("no first day for the month of {date}"))
    })
}
