use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{LendingError, Result};
use crate::loan::Loan;
use crate::types::{ClientId, LoanId, OwnershipType};

/// request to register a new borrowing entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewClient {
    pub name: String,
    pub ownership: OwnershipType,
    pub address: String,
    pub phone: String,
    pub contact_person: String,
}

impl NewClient {
    /// every textual field is mandatory and must be non-blank
    fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("name", &self.name),
            ("address", &self.address),
            ("phone", &self.phone),
            ("contact_person", &self.contact_person),
        ] {
            if value.trim().is_empty() {
                return Err(LendingError::MissingField { field });
            }
        }
        Ok(())
    }
}

/// a borrowing entity and the loans it exclusively owns
///
/// the aggregate root: all loan reads and mutations go through the client,
/// and a save persists the whole aggregate at once
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub ownership: OwnershipType,
    pub address: String,
    pub phone: String,
    pub contact_person: String,
    pub loans: Vec<Loan>,
}

impl Client {
    /// register a client with an empty loan book
    pub fn create(request: NewClient) -> Result<Self> {
        request.validate()?;
        Ok(Self {
            id: Uuid::new_v4(),
            name: request.name,
            ownership: request.ownership,
            address: request.address,
            phone: request.phone,
            contact_person: request.contact_person,
            loans: Vec::new(),
        })
    }

    /// pure lookup over the loaded aggregate
    pub fn loan(&self, loan_id: LoanId) -> Option<&Loan> {
        self.loans.iter().find(|l| l.id == loan_id)
    }

    pub fn loan_mut(&mut self, loan_id: LoanId) -> Option<&mut Loan> {
        self.loans.iter_mut().find(|l| l.id == loan_id)
    }

    pub fn push_loan(&mut self, loan: Loan) {
        self.loans.push(loan);
    }
}
