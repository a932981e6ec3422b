use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::payment::PaymentOccurrence;

/// A Monday-aligned pay window with inclusive bounds.
///
/// `end_date` is always `start_date + num_weeks * 7 - 1` days. The period is
/// built by the resolver in `payday-core`; this type only carries it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PayPeriod {
    pub start_date: NaiveDate,
    pub payday: NaiveDate,
    pub end_date: NaiveDate,
    pub num_weeks: u32,
}

impl PayPeriod {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

/// Occurrences due within a period and their exact total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PeriodSummary {
    pub period: PayPeriod,
    pub total: Decimal,
    pub occurrences: Vec<PaymentOccurrence>,
}

impl PeriodSummary {
    /// What is left of `net_income` once every occurrence is paid.
    pub fn remaining(&self, net_income: Decimal) -> Decimal {
        net_income - self.total
    }
}
