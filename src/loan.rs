use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::{Money, Rate};
use crate::types::{LoanCategory, LoanId, LoanStatus, PenaltyReason, RepaymentConditions};

/// immutable repayment contract descriptor, fixed at loan creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanType {
    pub conditions: RepaymentConditions,
    pub interest_rate: Rate,
    /// period count; months of maturity for balloon loans,
    /// expected installment count for monthly loans
    pub term: u32,
    pub category: LoanCategory,
}

/// immutable payment fact, append-only
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub date: DateTime<Utc>,
    pub amount: Money,
}

/// immutable penalty fact, produced solely by the ledger
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Penalty {
    pub date: DateTime<Utc>,
    pub amount: Money,
    pub reason: PenaltyReason,
}

/// request to open a loan on an existing client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLoan {
    pub loan_type: LoanType,
    pub amount: Money,
    /// total owed including any agreed charges; defaults to the principal
    pub total_loan: Option<Money>,
    pub issue_date: DateTime<Utc>,
    pub due_date: Option<DateTime<Utc>>,
}

/// a loan owned by exactly one client
///
/// loans are embedded value objects: they are reachable only through the
/// owning client aggregate and their ids are unique only within it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub id: LoanId,
    pub loan_type: LoanType,

    // balances
    pub amount: Money,
    pub total_loan: Money,
    pub payable: Money,

    // dates
    pub issue_date: DateTime<Utc>,
    pub due_date: Option<DateTime<Utc>>,
    pub actual_return_date: Option<DateTime<Utc>>,

    pub status: LoanStatus,
    /// soft-hide flag; flips true -> false once, never back
    pub visible: bool,

    pub payments: Vec<Payment>,
    pub penalties: Vec<Penalty>,
}

impl Loan {
    /// open a loan from a request; payable starts at the total owed
    pub fn new(request: NewLoan) -> Self {
        let total_loan = request.total_loan.unwrap_or(request.amount);
        Self {
            id: Uuid::new_v4(),
            loan_type: request.loan_type,
            amount: request.amount,
            total_loan,
            payable: total_loan,
            issue_date: request.issue_date,
            due_date: request.due_date,
            actual_return_date: None,
            status: LoanStatus::Active,
            visible: true,
            payments: Vec::new(),
            penalties: Vec::new(),
        }
    }

    /// date of the most recent recorded payment
    pub fn last_payment_date(&self) -> Option<DateTime<Utc>> {
        self.payments.last().map(|p| p.date)
    }

    pub fn is_paid_off(&self) -> bool {
        self.status == LoanStatus::PaidOff
    }

    /// total penalty amount assessed over the loan's life
    pub fn total_penalties(&self) -> Money {
        self.penalties
            .iter()
            .fold(Money::ZERO, |acc, p| acc + p.amount)
    }

    /// total amount paid in over the loan's life
    pub fn total_paid(&self) -> Money {
        self.payments
            .iter()
            .fold(Money::ZERO, |acc, p| acc + p.amount)
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn monthly_type() -> LoanType {
        LoanType {
            conditions: RepaymentConditions::MonthlyInstallment,
            interest_rate: Rate::from_percentage(12),
            term: 10,
            category: LoanCategory::SmallBusiness,
        }
    }

    #[test]
    fn test_new_loan_defaults() {
        let issued = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let loan = Loan::new(NewLoan {
            loan_type: monthly_type(),
            amount: Money::from_major(1_000),
            total_loan: None,
            issue_date: issued,
            due_date: None,
        });

        assert_eq!(loan.payable, Money::from_major(1_000));
        assert_eq!(loan.total_loan, Money::from_major(1_000));
        assert_eq!(loan.status, LoanStatus::Active);
        assert!(loan.visible);
        assert!(loan.payments.is_empty());
        assert!(loan.penalties.is_empty());
        assert!(loan.last_payment_date().is_none());
    }

    #[test]
    fn test_payable_starts_from_total_loan() {
        let issued = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let loan = Loan::new(NewLoan {
            loan_type: monthly_type(),
            amount: Money::from_major(1_000),
            total_loan: Some(Money::from_major(1_120)),
            issue_date: issued,
            due_date: None,
        });

        assert_eq!(loan.amount, Money::from_major(1_000));
        assert_eq!(loan.payable, Money::from_major(1_120));
    }

    #[test]
    fn test_hide_is_one_way() {
        let issued = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let mut loan = Loan::new(NewLoan {
            loan_type: monthly_type(),
            amount: Money::from_major(500),
            total_loan: None,
            issue_date: issued,
            due_date: None,
        });

        loan.hide();
        assert!(!loan.visible);
    }
}
