//! Expansion of payment templates into dated occurrences for one pay period.

use chrono::NaiveDate;
use tracing::debug;

use payday_domain::{
    FrequencyClass, PayPeriod, PaymentOccurrence, PaymentSchedule, PaymentTemplate,
};

use crate::{shift_days, start_of_month, start_of_week, CoreError};

const DAYS_PER_WEEK: i64 = 7;
const DAYS_PER_FORTNIGHT: i64 = 14;

/// Reference point used to place fortnightly payments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FortnightCadence {
    /// Fortnights start on each pay period's own start date.
    ///
    /// Every fortnight the period covers, fully or partially, is expanded
    /// (`(num_weeks + 1) / 2` of them), except that a single-week period
    /// produces no fortnightly occurrences at all.
    #[default]
    PeriodStart,
    /// Fortnights start on the Monday of the given date's week and repeat
    /// every 14 days regardless of the pay period.
    Anchored(NaiveDate),
}

pub struct RecurrenceService;

impl RecurrenceService {
    /// One occurrence per template for each week of the period, week by week.
    pub fn expand_weekly(
        period: &PayPeriod,
        templates: &[PaymentTemplate],
    ) -> Result<Vec<PaymentOccurrence>, CoreError> {
        validate_days(FrequencyClass::Weekly, templates)?;
        let mut result = Vec::with_capacity(period.num_weeks as usize * templates.len());
        for week in 0..i64::from(period.num_weeks) {
            for template in templates {
                let date = shift_days(
                    period.start_date,
                    template.day_offset() + week * DAYS_PER_WEEK,
                )?;
                result.push(template.occurring_on(date));
            }
        }
        Ok(result)
    }

    pub fn expand_fortnightly(
        period: &PayPeriod,
        templates: &[PaymentTemplate],
        cadence: FortnightCadence,
    ) -> Result<Vec<PaymentOccurrence>, CoreError> {
        validate_days(FrequencyClass::Fortnightly, templates)?;
        match cadence {
            FortnightCadence::PeriodStart => period_start_fortnights(period, templates),
            FortnightCadence::Anchored(reference) => {
                anchored_fortnights(period, templates, reference)
            }
        }
    }

    /// One occurrence per template, counted from the first of the start date's month.
    ///
    /// Days past the end of a short month roll over into the next one; the
    /// result may fall outside the period and is then dropped by aggregation.
    pub fn expand_monthly(
        period: &PayPeriod,
        templates: &[PaymentTemplate],
    ) -> Result<Vec<PaymentOccurrence>, CoreError> {
        validate_days(FrequencyClass::Monthly, templates)?;
        let month_start = start_of_month(period.start_date)?;
        templates
            .iter()
            .map(|template| {
                shift_days(month_start, template.day_offset())
                    .map(|date| template.occurring_on(date))
            })
            .collect()
    }

    /// Checks every template's day against the range allowed by its class.
    pub fn validate_schedule(schedule: &PaymentSchedule) -> Result<(), CoreError> {
        FrequencyClass::ALL
            .into_iter()
            .try_for_each(|class| validate_days(class, schedule.templates(class)))
    }

    /// Weekly, then fortnightly, then monthly occurrences for the whole schedule.
    pub fn expand_schedule(
        period: &PayPeriod,
        schedule: &PaymentSchedule,
        cadence: FortnightCadence,
    ) -> Result<Vec<PaymentOccurrence>, CoreError> {
        let weekly = Self::expand_weekly(period, &schedule.weekly)?;
        let fortnightly = Self::expand_fortnightly(period, &schedule.fortnightly, cadence)?;
        let monthly = Self::expand_monthly(period, &schedule.monthly)?;
        debug!(
            weekly = weekly.len(),
            fortnightly = fortnightly.len(),
            monthly = monthly.len(),
            "expanded payment schedule"
        );

        let mut result = weekly;
        result.extend(fortnightly);
        result.extend(monthly);
        Ok(result)
    }
}

fn validate_days(class: FrequencyClass, templates: &[PaymentTemplate]) -> Result<(), CoreError> {
    match templates.iter().find(|t| !class.accepts_day(t.day_of_period)) {
        Some(template) => Err(CoreError::InvalidDayOfPeriod {
            code: template.code.clone(),
            class,
            day: template.day_of_period,
        }),
        None => Ok(()),
    }
}

fn period_start_fortnights(
    period: &PayPeriod,
    templates: &[PaymentTemplate],
) -> Result<Vec<PaymentOccurrence>, CoreError> {
    let fortnights = match period.num_weeks {
        0 | 1 => 0,
        weeks => i64::from(weeks.div_ceil(2)),
    };
    let mut result = Vec::new();
    for fortnight in 0..fortnights {
        for template in templates {
            let date = shift_days(
                period.start_date,
                template.day_offset() + fortnight * DAYS_PER_FORTNIGHT,
            )?;
            result.push(template.occurring_on(date));
        }
    }
    Ok(result)
}

fn anchored_fortnights(
    period: &PayPeriod,
    templates: &[PaymentTemplate],
    reference: NaiveDate,
) -> Result<Vec<PaymentOccurrence>, CoreError> {
    let cycle_start = start_of_week(reference)?;
    let elapsed = (period.start_date - cycle_start).num_days();
    let mut fortnight = shift_days(
        cycle_start,
        elapsed.div_euclid(DAYS_PER_FORTNIGHT) * DAYS_PER_FORTNIGHT,
    )?;

    let mut result = Vec::new();
    while fortnight <= period.end_date {
        for template in templates {
            let date = shift_days(fortnight, template.day_offset())?;
            if period.contains(date) {
                result.push(template.occurring_on(date));
            }
        }
        fortnight = shift_days(fortnight, DAYS_PER_FORTNIGHT)?;
    }
    Ok(result)
}
