pub mod client;
pub mod decimal;
pub mod errors;
pub mod events;
pub mod ledger;
pub mod loan;
pub mod query;
pub mod repository;
pub mod service;
pub mod types;
pub mod view;

// re-export key types
pub use client::{Client, NewClient};
pub use decimal::{Money, Rate};
pub use errors::{LendingError, Result};
pub use events::{Event, EventStore};
pub use ledger::{evaluate_payment, recommended_payment, PaymentEvaluation, PenaltyPolicy};
pub use loan::{Loan, LoanType, NewLoan, Payment, Penalty};
pub use query::{ClientQuery, SearchFilters};
pub use repository::{ClientRepository, MemoryRepository};
pub use service::LendingService;
pub use types::{
    ClientId, LoanCategory, LoanId, LoanStatus, OwnershipType, PenaltyReason,
    RepaymentConditions,
};
pub use view::{ClientView, LoanView};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
