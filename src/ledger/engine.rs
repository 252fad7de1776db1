use chrono::{DateTime, Months, Utc};
use rust_decimal::Decimal;

use crate::decimal::Money;
use crate::errors::{LendingError, Result};
use crate::loan::{Loan, Payment, Penalty};
use crate::types::{LoanStatus, PenaltyReason, RepaymentConditions};

use super::policy::PenaltyPolicy;
use super::PaymentEvaluation;

/// installment the loan calls for right now
///
/// installment loans spread the remaining payable over the term; balloon
/// loans call for the whole payable at once
pub fn recommended_payment(loan: &Loan) -> Money {
    match loan.loan_type.conditions {
        RepaymentConditions::MonthlyInstallment => {
            Money::from_decimal(loan.payable.as_decimal() / Decimal::from(loan.loan_type.term))
        }
        RepaymentConditions::SingleBalloonPayment => loan.payable.round_dp(2),
    }
}

/// evaluate one payment against a loan as of `today`
///
/// pure in (loan, amount, today, policy): the updated loan comes back in the
/// evaluation and nothing is touched on failure
pub fn evaluate_payment(
    loan: &Loan,
    amount: Money,
    today: DateTime<Utc>,
    policy: &PenaltyPolicy,
) -> Result<PaymentEvaluation> {
    if !amount.is_positive() {
        return Err(LendingError::InvalidPaymentAmount { amount });
    }

    let recommended = recommended_payment(loan);
    let mut penalties = Vec::new();

    let days_overdue = match loan.loan_type.conditions {
        RepaymentConditions::MonthlyInstallment => {
            // schedule anchor: last installment received, or issue if none yet
            let anchor = loan.last_payment_date().unwrap_or(loan.issue_date);
            let days = (today - anchor).num_days();

            if days > policy.late_threshold_days {
                penalties.push(Penalty {
                    date: today,
                    amount: late_penalty(recommended, days, policy),
                    reason: PenaltyReason::PaidLate,
                });
            }
            days
        }
        RepaymentConditions::SingleBalloonPayment => {
            let maturity = loan
                .issue_date
                .checked_add_months(Months::new(loan.loan_type.term))
                .ok_or_else(|| LendingError::InvalidDate {
                    message: format!(
                        "maturity overflows: issue {} + {} months",
                        loan.issue_date, loan.loan_type.term
                    ),
                })?;
            let days = (today - maturity).num_days();

            if days > 0 && loan.payable > Money::ZERO {
                penalties.push(Penalty {
                    date: today,
                    amount: late_penalty(recommended, days, policy),
                    reason: PenaltyReason::PaidLate,
                });
            }
            days
        }
    };

    if amount < recommended {
        let missing = recommended - amount;
        penalties.push(Penalty {
            date: today,
            amount: Money::from_decimal(missing.as_decimal() * policy.shortfall_rate),
            reason: PenaltyReason::InsufficientFunds,
        });
    }

    let penalty_total = penalties
        .iter()
        .fold(Money::ZERO, |acc, p| acc + p.amount);

    let mut updated = loan.clone();
    updated.payments.push(Payment { date: today, amount });
    updated.penalties.extend(penalties.iter().copied());
    updated.payable = (updated.payable - (amount + penalty_total)).max(Money::ZERO);

    if updated.payable.is_zero() && updated.status == LoanStatus::Active {
        updated.status = LoanStatus::PaidOff;
        updated.actual_return_date = Some(today);
    }

    Ok(PaymentEvaluation {
        loan: updated,
        penalties,
        recommended,
        days_overdue,
    })
}

fn late_penalty(recommended: Money, days_overdue: i64, policy: &PenaltyPolicy) -> Money {
    Money::from_decimal(
        recommended.as_decimal() * policy.daily_late_rate * Decimal::from(days_overdue),
    )
}
