pub mod engine;
pub mod policy;

use crate::decimal::Money;
use crate::loan::{Loan, Penalty};

pub use engine::{evaluate_payment, recommended_payment};
pub use policy::PenaltyPolicy;

/// outcome of evaluating one payment against a loan
///
/// carries the fully updated loan; the caller owns persistence
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentEvaluation {
    /// loan with the payment applied: new payable, status, histories
    pub loan: Loan,
    /// penalties assessed by this evaluation only
    pub penalties: Vec<Penalty>,
    /// installment the loan called for at evaluation time
    pub recommended: Money,
    /// days past the schedule anchor; negative when early
    pub days_overdue: i64,
}

impl PaymentEvaluation {
    /// total penalty amount assessed by this evaluation
    pub fn penalty_total(&self) -> Money {
        self.penalties
            .iter()
            .fold(Money::ZERO, |acc, p| acc + p.amount)
    }
}
