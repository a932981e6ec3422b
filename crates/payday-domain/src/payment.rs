use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::common::{Amounted, FrequencyClass, NamedEntity};

/// A recurring obligation, independent of any specific occurrence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentTemplate {
    pub name: String,
    pub code: String,
    pub amount: Decimal,
    /// 1-based day index, read according to the template's frequency class.
    pub day_of_period: i32,
}

impl PaymentTemplate {
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        amount: Decimal,
        day_of_period: i32,
    ) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            amount,
            day_of_period,
        }
    }

    /// Zero-based offset in days from the start of the template's cycle.
    pub fn day_offset(&self) -> i64 {
        i64::from(self.day_of_period) - 1
    }

    /// Pins the template to a concrete calendar date.
    pub fn occurring_on(&self, date: NaiveDate) -> PaymentOccurrence {
        PaymentOccurrence {
            template: self.clone(),
            date,
        }
    }
}

impl NamedEntity for PaymentTemplate {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Amounted for PaymentTemplate {
    fn amount(&self) -> Decimal {
        self.amount
    }
}

/// One concrete dated instance of a [`PaymentTemplate`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentOccurrence {
    #[serde(flatten)]
    pub template: PaymentTemplate,
    pub date: NaiveDate,
}

impl PaymentOccurrence {
    pub fn code(&self) -> &str {
        &self.template.code
    }
}

impl NamedEntity for PaymentOccurrence {
    fn name(&self) -> &str {
        &self.template.name
    }
}

impl Amounted for PaymentOccurrence {
    fn amount(&self) -> Decimal {
        self.template.amount
    }
}

/// Payment templates grouped by frequency class.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentSchedule {
    #[serde(default)]
    pub weekly: Vec<PaymentTemplate>,
    #[serde(default)]
    pub fortnightly: Vec<PaymentTemplate>,
    #[serde(default)]
    pub monthly: Vec<PaymentTemplate>,
}

impl PaymentSchedule {
    pub fn templates(&self, class: FrequencyClass) -> &[PaymentTemplate] {
        match class {
            FrequencyClass::Weekly => &self.weekly,
            FrequencyClass::Fortnightly => &self.fortnightly,
            FrequencyClass::Monthly => &self.monthly,
        }
    }

    pub fn len(&self) -> usize {
        self.weekly.len() + self.fortnightly.len() + self.monthly.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
