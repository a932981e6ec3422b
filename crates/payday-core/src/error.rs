use payday_domain::FrequencyClass;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid pay frequency: {0} (expected a whole number of weeks, at least 1)")]
    InvalidFrequency(String),
    #[error("Invalid anchor date: {0}")]
    InvalidAnchorDate(String),
    #[error("Invalid occurrence date: {0}")]
    InvalidOccurrenceDate(String),
    #[error("Invalid day {day} for {class} payment `{code}` (expected 1..={})", .class.max_day())]
    InvalidDayOfPeriod {
        code: String,
        class: FrequencyClass,
        day: i32,
    },
}
