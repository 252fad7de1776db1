/// serializable views of client aggregates
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::decimal::{Money, Rate};
use crate::ledger;
use crate::loan::{Loan, Payment, Penalty};
use crate::types::{ClientId, LoanCategory, LoanId, LoanStatus, OwnershipType, RepaymentConditions};

/// flattened view of a client and its visible position
#[derive(Debug, Serialize, Deserialize)]
pub struct ClientView {
    pub id: ClientId,
    pub name: String,
    pub ownership: OwnershipType,
    pub address: String,
    pub phone: String,
    pub contact_person: String,
    /// payable summed over visible active loans
    pub outstanding_debt: Money,
    pub loans: Vec<LoanView>,
}

/// flattened view of one loan's terms and position
#[derive(Debug, Serialize, Deserialize)]
pub struct LoanView {
    pub id: LoanId,
    pub category: LoanCategory,
    pub conditions: RepaymentConditions,
    pub interest_rate: Rate,
    pub term: u32,
    pub status: LoanStatus,
    pub visible: bool,
    pub amount: Money,
    pub total_loan: Money,
    pub payable: Money,
    pub recommended_payment: Money,
    pub issue_date: DateTime<Utc>,
    pub due_date: Option<DateTime<Utc>>,
    pub actual_return_date: Option<DateTime<Utc>>,
    pub total_paid: Money,
    pub total_penalties: Money,
    pub payments: Vec<Payment>,
    pub penalties: Vec<Penalty>,
}

impl ClientView {
    pub fn from_client(client: &Client) -> Self {
        let outstanding_debt = client
            .loans
            .iter()
            .filter(|l| l.visible && l.status == LoanStatus::Active)
            .fold(Money::ZERO, |acc, l| acc + l.payable);

        ClientView {
            id: client.id,
            name: client.name.clone(),
            ownership: client.ownership,
            address: client.address.clone(),
            phone: client.phone.clone(),
            contact_person: client.contact_person.clone(),
            outstanding_debt,
            loans: client.loans.iter().map(LoanView::from_loan).collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl LoanView {
    pub fn from_loan(loan: &Loan) -> Self {
        LoanView {
            id: loan.id,
            category: loan.loan_type.category,
            conditions: loan.loan_type.conditions,
            interest_rate: loan.loan_type.interest_rate,
            term: loan.loan_type.term,
            status: loan.status,
            visible: loan.visible,
            amount: loan.amount,
            total_loan: loan.total_loan,
            payable: loan.payable,
            recommended_payment: ledger::recommended_payment(loan),
            issue_date: loan.issue_date,
            due_date: loan.due_date,
            actual_return_date: loan.actual_return_date,
            total_paid: loan.total_paid(),
            total_penalties: loan.total_penalties(),
            payments: loan.payments.clone(),
            penalties: loan.penalties.clone(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
