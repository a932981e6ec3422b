use rust_decimal::Decimal;
use serde::Deserialize;

use payday_core::{
    parse_anchor_date, parse_occurrence_date, CoreError, FortnightCadence, PayCycleInput,
    PayFrequency, RecurrenceService,
};
use payday_domain::{PaymentSchedule, PaymentTemplate};

/// Contents of `conf.json`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Any past payday, formatted `YYYY-MM-DD`.
    pub known_payday: String,
    pub net_income: Decimal,
    /// Kept as a plain number so fractional values reach validation.
    pub pay_frequency_weeks: f64,
    #[serde(default)]
    /// Optional reference date pinning the fortnightly cycle. Without it,
    /// fortnights start at each pay period's start.
    pub fortnight_anchor: Option<String>,
    #[serde(default)]
    pub payments: PaymentsConfig,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct PaymentsConfig {
    #[serde(default)]
    pub weekly: Vec<PaymentConfig>,
    #[serde(default)]
    pub fortnightly: Vec<PaymentConfig>,
    #[serde(default)]
    pub monthly: Vec<PaymentConfig>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PaymentConfig {
    pub name: String,
    pub code: String,
    pub amount: Decimal,
    pub day: i32,
    /// Informational only; the list a payment sits in decides its frequency.
    #[serde(default)]
    pub frequency: Option<String>,
}

impl PaymentConfig {
    fn to_template(&self) -> PaymentTemplate {
        PaymentTemplate::new(self.name.clone(), self.code.clone(), self.amount, self.day)
    }
}

fn templates(payments: &[PaymentConfig]) -> Vec<PaymentTemplate> {
    payments.iter().map(PaymentConfig::to_template).collect()
}

impl PaymentsConfig {
    pub fn to_schedule(&self) -> PaymentSchedule {
        PaymentSchedule {
            weekly: templates(&self.weekly),
            fortnightly: templates(&self.fortnightly),
            monthly: templates(&self.monthly),
        }
    }
}

impl Config {
    pub fn cadence(&self) -> Result<FortnightCadence, CoreError> {
        match &self.fortnight_anchor {
            Some(raw) => Ok(FortnightCadence::Anchored(parse_occurrence_date(raw)?)),
            None => Ok(FortnightCadence::PeriodStart),
        }
    }

    /// Validates the raw values and converts them into pipeline input.
    pub fn to_input(&self) -> Result<PayCycleInput, CoreError> {
        let anchor_date = parse_anchor_date(&self.known_payday)?;
        let frequency = PayFrequency::from_weeks(self.pay_frequency_weeks)?;
        let cadence = self.cadence()?;
        let schedule = self.payments.to_schedule();
        RecurrenceService::validate_schedule(&schedule)?;
        Ok(PayCycleInput {
            anchor_date,
            frequency,
            schedule,
            cadence,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn sample() -> Config {
        Config {
            known_payday: "2024-01-05".into(),
            net_income: dec!(2500),
            pay_frequency_weeks: 2.0,
            fortnight_anchor: None,
            payments: PaymentsConfig {
                weekly: vec![PaymentConfig {
                    name: "Groceries".into(),
                    code: "GRO".into(),
                    amount: dec!(120.50),
                    day: 3,
                    frequency: None,
                }],
                ..PaymentsConfig::default()
            },
        }
    }

    #[test]
    fn valid_config_converts_to_input() {
        let input = sample().to_input().expect("valid config");

        assert_eq!(input.anchor_date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(input.frequency.weeks(), 2);
        assert_eq!(input.cadence, FortnightCadence::PeriodStart);
        assert_eq!(input.schedule.weekly[0].day_of_period, 3);
    }

    #[test]
    fn fortnight_anchor_selects_anchored_cadence() {
        let mut config = sample();
        config.fortnight_anchor = Some("2024-01-01".into());

        assert_eq!(
            config.cadence().unwrap(),
            FortnightCadence::Anchored(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
        );

        config.fortnight_anchor = Some("first monday".into());
        assert!(matches!(
            config.to_input(),
            Err(CoreError::InvalidOccurrenceDate(_))
        ));
    }

    #[test]
    fn each_invalid_field_maps_to_its_error() {
        let mut config = sample();
        config.known_payday = "2024-13-01".into();
        assert!(matches!(config.to_input(), Err(CoreError::InvalidAnchorDate(_))));

        let mut config = sample();
        config.pay_frequency_weeks = 1.5;
        assert!(matches!(config.to_input(), Err(CoreError::InvalidFrequency(_))));

        let mut config = sample();
        config.payments.weekly[0].day = 8;
        assert!(matches!(
            config.to_input(),
            Err(CoreError::InvalidDayOfPeriod { day: 8, .. })
        ));
    }
}
