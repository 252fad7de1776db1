use thiserror::Error;

use crate::decimal::Money;
use crate::types::{ClientId, LoanId};

/// crate-wide error taxonomy
///
/// variants map one-to-one onto the external contract a transport adapter
/// must satisfy: not-found conditions, malformed input, storage failures
#[derive(Error, Debug)]
pub enum LendingError {
    #[error("client not found: {id}")]
    ClientNotFound {
        id: ClientId,
    },

    #[error("loan not found: {loan_id} (client {client_id})")]
    LoanNotFound {
        client_id: ClientId,
        loan_id: LoanId,
    },

    #[error("missing required field: {field}")]
    MissingField {
        field: &'static str,
    },

    #[error("invalid payment amount: {amount}")]
    InvalidPaymentAmount {
        amount: Money,
    },

    #[error("invalid filter value for {field}: {value}")]
    InvalidFilterValue {
        field: &'static str,
        value: String,
    },

    #[error("invalid date: {message}")]
    InvalidDate {
        message: String,
    },

    #[error("storage failure: {message}")]
    Storage {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, LendingError>;
