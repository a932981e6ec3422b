use payday_domain::{Amounted, PayPeriod, PaymentOccurrence, PeriodSummary};

pub struct SummaryService;

impl SummaryService {
    /// Keeps the occurrences dated inside the period (bounds inclusive), in input
    /// order, and totals their amounts exactly.
    pub fn aggregate(period: PayPeriod, occurrences: Vec<PaymentOccurrence>) -> PeriodSummary {
        let occurrences: Vec<PaymentOccurrence> = occurrences
            .into_iter()
            .filter(|occurrence| period.contains(occurrence.date))
            .collect();
        let total = occurrences.iter().map(Amounted::amount).sum();
        PeriodSummary {
            period,
            total,
            occurrences,
        }
    }
}
