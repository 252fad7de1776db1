use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// penalty policy
///
/// the contractual constants of the lending book; `Default` yields the
/// standard contract terms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PenaltyPolicy {
    /// days since the last installment before an installment loan is late
    pub late_threshold_days: i64,
    /// fraction of the recommended payment charged per day overdue
    pub daily_late_rate: Decimal,
    /// fraction of the missing amount charged when a payment falls short
    pub shortfall_rate: Decimal,
}

impl Default for PenaltyPolicy {
    fn default() -> Self {
        Self {
            late_threshold_days: 30,
            daily_late_rate: dec!(0.01),
            shortfall_rate: dec!(0.05),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_contract_terms() {
        let policy = PenaltyPolicy::default();
        assert_eq!(policy.late_threshold_days, 30);
        assert_eq!(policy.daily_late_rate, dec!(0.01));
        assert_eq!(policy.shortfall_rate, dec!(0.05));
    }
}
