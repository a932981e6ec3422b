//! Shared traits and enums for payment primitives.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Provides read-only access to an entity's display name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Supplies a common contract for retrieving exact monetary amounts.
pub trait Amounted {
    fn amount(&self) -> Decimal;
}

/// Enumerates the recurrence classes a payment template can belong to.
///
/// The class decides how `day_of_period` is read: a weekday (1 = Monday) for
/// weekly and fortnightly payments, a day of the month for monthly ones.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FrequencyClass {
    Weekly,
    Fortnightly,
    Monthly,
}

impl FrequencyClass {
    pub const ALL: [FrequencyClass; 3] = [
        FrequencyClass::Weekly,
        FrequencyClass::Fortnightly,
        FrequencyClass::Monthly,
    ];

    /// Largest valid `day_of_period` for this class.
    pub fn max_day(self) -> i32 {
        match self {
            FrequencyClass::Weekly | FrequencyClass::Fortnightly => 7,
            FrequencyClass::Monthly => 31,
        }
    }

    /// Returns whether `day` is a valid 1-based day index for this class.
    pub fn accepts_day(self, day: i32) -> bool {
        (1..=self.max_day()).contains(&day)
    }
}

impl fmt::Display for FrequencyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FrequencyClass::Weekly => "weekly",
            FrequencyClass::Fortnightly => "fortnightly",
            FrequencyClass::Monthly => "monthly",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_bounds_follow_class() {
        assert!(FrequencyClass::Weekly.accepts_day(7));
        assert!(!FrequencyClass::Weekly.accepts_day(8));
        assert!(!FrequencyClass::Fortnightly.accepts_day(0));
        assert!(FrequencyClass::Monthly.accepts_day(31));
        assert!(!FrequencyClass::Monthly.accepts_day(32));
        assert!(!FrequencyClass::Monthly.accepts_day(-1));
    }

    #[test]
    fn class_serializes_lowercase() {
        let json = serde_json::to_string(&FrequencyClass::Fortnightly).unwrap();
        assert_eq!(json, "\"fortnightly\"");
    }
}
