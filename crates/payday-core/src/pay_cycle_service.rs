//! End-to-end computation of the current pay period summary.

use chrono::NaiveDate;
use tracing::{info, warn};

use payday_domain::{PaymentSchedule, PeriodSummary};

use crate::{
    Clock, CoreError, FortnightCadence, PayFrequency, PeriodService, RecurrenceService,
    SummaryService,
};

/// Everything the pipeline needs, already validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayCycleInput {
    pub anchor_date: NaiveDate,
    pub frequency: PayFrequency,
    pub schedule: PaymentSchedule,
    pub cadence: FortnightCadence,
}

pub struct PayCycleService;

impl PayCycleService {
    /// Summarizes the pay period that contains or follows the clock's current date.
    pub fn summarize(input: &PayCycleInput, clock: &dyn Clock) -> Result<PeriodSummary, CoreError> {
        Self::summarize_on(input, clock.today())
    }

    pub fn summarize_on(input: &PayCycleInput, now: NaiveDate) -> Result<PeriodSummary, CoreError> {
        if input.schedule.is_empty() {
            warn!("no payment templates configured");
        }
        let period = PeriodService::resolve(input.anchor_date, input.frequency, now)?;
        let occurrences =
            RecurrenceService::expand_schedule(&period, &input.schedule, input.cadence)?;
        let summary = SummaryService::aggregate(period, occurrences);
        info!(
            payday = %summary.period.payday,
            templates = input.schedule.len(),
            due = summary.occurrences.len(),
            total = %summary.total,
            "summarized pay period"
        );
        Ok(summary)
    }
}
