//! Resolution of the pay period containing (or following) a given date.

use chrono::NaiveDate;
use tracing::debug;

use payday_domain::PayPeriod;

use crate::{shift_days, start_of_week, CoreError, PayFrequency};

pub struct PeriodService;

impl PeriodService {
    /// Finds the next payday at or after `now` and the Monday-aligned window around it.
    ///
    /// Paydays repeat every `frequency` weeks from `anchor_date`. When `now` is
    /// itself a payday, that payday is returned rather than the following one.
    pub fn resolve(
        anchor_date: NaiveDate,
        frequency: PayFrequency,
        now: NaiveDate,
    ) -> Result<PayPeriod, CoreError> {
        let cycle_days = frequency.days();
        let elapsed = (now - anchor_date).num_days();
        let cycles = ceil_div(elapsed, cycle_days);

        let payday = shift_days(anchor_date, cycles * cycle_days)?;
        let start_date = start_of_week(payday)?;
        let end_date = shift_days(start_date, cycle_days - 1)?;

        debug!(%anchor_date, %now, cycles, %payday, %start_date, %end_date, "resolved pay period");
        Ok(PayPeriod {
            start_date,
            payday,
            end_date,
            num_weeks: frequency.weeks(),
        })
    }
}

/// Integer ceiling division for a positive denominator.
fn ceil_div(numerator: i64, denominator: i64) -> i64 {
    -(-numerator).div_euclid(denominator)
}
