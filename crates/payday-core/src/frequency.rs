use crate::CoreError;

/// Length of a pay cycle, in whole weeks (at least one).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PayFrequency(u32);

impl PayFrequency {
    pub fn new(weeks: u32) -> Result<Self, CoreError> {
        if weeks == 0 {
            return Err(CoreError::InvalidFrequency("0".into()));
        }
        Ok(Self(weeks))
    }

    /// Validates a number read from configuration, which may be fractional.
    pub fn from_weeks(value: f64) -> Result<Self, CoreError> {
        if !value.is_finite() || value.fract() != 0.0 || value < 1.0 || value > f64::from(u32::MAX)
        {
            return Err(CoreError::InvalidFrequency(value.to_string()));
        }
        Ok(Self(value as u32))
    }

    pub fn weeks(self) -> u32 {
        self.0
    }

    pub fn days(self) -> i64 {
        i64::from(self.0) * 7
    }
}

impl TryFrom<u32> for PayFrequency {
    type Error = CoreError;

    fn try_from(weeks: u32) -> Result<Self, Self::Error> {
        Self::new(weeks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_whole_weeks() {
        assert_eq!(PayFrequency::new(2).unwrap().weeks(), 2);
        assert_eq!(PayFrequency::from_weeks(4.0).unwrap().days(), 28);
        assert_eq!(PayFrequency::try_from(1).unwrap().weeks(), 1);
    }

    #[test]
    fn rejects_zero_negative_and_fractions() {
        for value in [0.0, -1.0, 1.5, 0.5, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(PayFrequency::from_weeks(value), Err(CoreError::InvalidFrequency(_))),
                "{value} should be rejected"
            );
        }
        assert!(matches!(PayFrequency::new(0), Err(CoreError::InvalidFrequency(_))));
    }
}
