use hourglass_rs::SafeTimeProvider;
use log::{info, warn};

use crate::client::{Client, NewClient};
use crate::decimal::Money;
use crate::errors::{LendingError, Result};
use crate::events::{Event, EventStore};
use crate::ledger;
use crate::ledger::PenaltyPolicy;
use crate::loan::{Loan, NewLoan, Payment};
use crate::query::SearchFilters;
use crate::repository::ClientRepository;
use crate::types::{ClientId, LoanId};

/// service façade: orchestrates repository and ledger for each use case
///
/// every use case is one read-modify-write against a single client
/// aggregate; validation and not-found conditions fail before any mutation
pub struct LendingService<R: ClientRepository> {
    repository: R,
    policy: PenaltyPolicy,
    events: EventStore,
}

impl<R: ClientRepository> LendingService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            policy: PenaltyPolicy::default(),
            events: EventStore::new(),
        }
    }

    pub fn with_policy(repository: R, policy: PenaltyPolicy) -> Self {
        Self {
            repository,
            policy,
            events: EventStore::new(),
        }
    }

    pub fn list_clients(&self) -> Result<Vec<Client>> {
        self.repository.list()
    }

    /// filtered listing; bad filter values fail before the repository is hit
    pub fn search_clients(&self, filters: &SearchFilters) -> Result<Vec<Client>> {
        let query = filters.parse()?;
        self.repository.find(&query)
    }

    pub fn get_client(&self, client_id: ClientId) -> Result<Client> {
        self.repository
            .get(client_id)?
            .ok_or(LendingError::ClientNotFound { id: client_id })
    }

    pub fn get_loan(&self, client_id: ClientId, loan_id: LoanId) -> Result<Loan> {
        let client = self.get_client(client_id)?;
        client
            .loan(loan_id)
            .cloned()
            .ok_or(LendingError::LoanNotFound { client_id, loan_id })
    }

    pub fn create_client(
        &mut self,
        request: NewClient,
        time: &SafeTimeProvider,
    ) -> Result<Client> {
        let client = Client::create(request)?;
        self.repository.save(client.clone())?;

        info!("client {} registered", client.id);
        self.events.emit(Event::ClientCreated {
            client_id: client.id,
            timestamp: time.now(),
        });
        Ok(client)
    }

    /// append a loan to an existing client; returns the updated loan list
    pub fn add_loan(
        &mut self,
        client_id: ClientId,
        request: NewLoan,
        time: &SafeTimeProvider,
    ) -> Result<Vec<Loan>> {
        let mut client = self.get_client(client_id)?;
        let loan = Loan::new(request);
        let loan_id = loan.id;
        let amount = loan.amount;

        client.push_loan(loan);
        let loans = client.loans.clone();
        self.repository.save(client)?;

        info!("loan {loan_id} ({amount}) added to client {client_id}");
        self.events.emit(Event::LoanAdded {
            client_id,
            loan_id,
            amount,
            timestamp: time.now(),
        });
        Ok(loans)
    }

    /// record a payment: evaluate through the ledger, persist the updated
    /// aggregate, return the loan's payment history
    pub fn record_payment(
        &mut self,
        client_id: ClientId,
        loan_id: LoanId,
        amount: Money,
        time: &SafeTimeProvider,
    ) -> Result<Vec<Payment>> {
        let mut client = self.get_client(client_id)?;
        let loan = client
            .loan(loan_id)
            .ok_or(LendingError::LoanNotFound { client_id, loan_id })?;

        let today = time.now();
        let evaluation = ledger::evaluate_payment(loan, amount, today, &self.policy)?;
        let settled = evaluation.loan.is_paid_off() && !loan.is_paid_off();
        let new_payable = evaluation.loan.payable;
        let payments = evaluation.loan.payments.clone();
        let penalties = evaluation.penalties;

        match client.loan_mut(loan_id) {
            Some(slot) => *slot = evaluation.loan,
            None => return Err(LendingError::LoanNotFound { client_id, loan_id }),
        }
        self.repository.save(client)?;

        if !penalties.is_empty() {
            warn!(
                "loan {loan_id}: {} penalt{} assessed with payment {amount}",
                penalties.len(),
                if penalties.len() == 1 { "y" } else { "ies" },
            );
        }
        self.events.emit(Event::PaymentReceived {
            client_id,
            loan_id,
            amount,
            new_payable,
            timestamp: today,
        });
        for penalty in &penalties {
            self.events.emit(Event::PenaltyAssessed {
                client_id,
                loan_id,
                amount: penalty.amount,
                reason: penalty.reason,
                timestamp: penalty.date,
            });
        }
        if settled {
            info!("loan {loan_id} settled");
            self.events.emit(Event::LoanSettled {
                client_id,
                loan_id,
                timestamp: today,
            });
        }

        Ok(payments)
    }

    /// hide a loan from default listings; one-way in this contract
    pub fn hide_loan(
        &mut self,
        client_id: ClientId,
        loan_id: LoanId,
        time: &SafeTimeProvider,
    ) -> Result<()> {
        let mut client = self.get_client(client_id)?;
        match client.loan_mut(loan_id) {
            Some(loan) => loan.hide(),
            None => return Err(LendingError::LoanNotFound { client_id, loan_id }),
        }
        self.repository.save(client)?;

        self.events.emit(Event::LoanHidden {
            client_id,
            loan_id,
            timestamp: time.now(),
        });
        Ok(())
    }

    /// drain the audit stream
    pub fn take_events(&mut self) -> Vec<Event> {
        self.events.take_events()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Rate;
    use crate::loan::LoanType;
    use crate::repository::MemoryRepository;
    use crate::types::{LoanCategory, LoanStatus, OwnershipType, PenaltyReason, RepaymentConditions};
    use chrono::{Duration, TimeZone, Utc};
    use hourglass_rs::TimeSource;
    use uuid::Uuid;

    fn test_time() -> SafeTimeProvider {
        SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        ))
    }

    fn service() -> LendingService<MemoryRepository> {
        LendingService::new(MemoryRepository::new())
    }

    fn new_client(name: &str) -> NewClient {
        NewClient {
            name: name.to_string(),
            ownership: OwnershipType::LimitedLiability,
            address: "14 Foundry Lane".to_string(),
            phone: "+380441234567".to_string(),
            contact_person: "O. Demchenko".to_string(),
        }
    }

    fn monthly_loan_request(time: &SafeTimeProvider) -> NewLoan {
        NewLoan {
            loan_type: LoanType {
                conditions: RepaymentConditions::MonthlyInstallment,
                interest_rate: Rate::from_percentage(12),
                term: 10,
                category: LoanCategory::SmallBusiness,
            },
            amount: Money::from_major(1_000),
            total_loan: None,
            issue_date: time.now(),
            due_date: None,
        }
    }

    #[test]
    fn test_create_and_list_clients() {
        let mut svc = service();
        let time = test_time();

        svc.create_client(new_client("Zenith Mills"), &time).unwrap();
        svc.create_client(new_client("Aurora Textiles"), &time).unwrap();

        let names: Vec<String> = svc
            .list_clients()
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Aurora Textiles", "Zenith Mills"]);

        let events = svc.take_events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], Event::ClientCreated { .. }));
    }

    #[test]
    fn test_get_client_not_found() {
        let svc = service();
        assert!(matches!(
            svc.get_client(Uuid::new_v4()),
            Err(LendingError::ClientNotFound { .. })
        ));
    }

    #[test]
    fn test_add_loan_and_get_loan() {
        let mut svc = service();
        let time = test_time();

        let client = svc.create_client(new_client("Meridian Tooling"), &time).unwrap();
        let loans = svc
            .add_loan(client.id, monthly_loan_request(&time), &time)
            .unwrap();
        assert_eq!(loans.len(), 1);

        let loan = svc.get_loan(client.id, loans[0].id).unwrap();
        assert_eq!(loan.payable, Money::from_major(1_000));

        assert!(matches!(
            svc.get_loan(client.id, Uuid::new_v4()),
            Err(LendingError::LoanNotFound { .. })
        ));
        assert!(matches!(
            svc.add_loan(Uuid::new_v4(), monthly_loan_request(&time), &time),
            Err(LendingError::ClientNotFound { .. })
        ));
    }

    #[test]
    fn test_record_payment_persists_and_emits() {
        let mut svc = service();
        let time = test_time();
        let control = time.test_control().unwrap();

        let client = svc.create_client(new_client("Meridian Tooling"), &time).unwrap();
        let loans = svc
            .add_loan(client.id, monthly_loan_request(&time), &time)
            .unwrap();
        let loan_id = loans[0].id;
        svc.take_events();

        // 45 days late, short by 50: both penalties
        control.advance(Duration::days(45));
        let payments = svc
            .record_payment(client.id, loan_id, Money::from_major(50), &time)
            .unwrap();
        assert_eq!(payments.len(), 1);

        let loan = svc.get_loan(client.id, loan_id).unwrap();
        // 1000 - (50 + 45.00 late + 2.50 shortfall)
        assert_eq!(loan.payable, Money::from_str_exact("902.50").unwrap());
        assert_eq!(loan.penalties.len(), 2);

        let events = svc.take_events();
        assert!(matches!(events[0], Event::PaymentReceived { .. }));
        let reasons: Vec<PenaltyReason> = events
            .iter()
            .filter_map(|e| match e {
                Event::PenaltyAssessed { reason, .. } => Some(*reason),
                _ => None,
            })
            .collect();
        assert_eq!(
            reasons,
            vec![PenaltyReason::PaidLate, PenaltyReason::InsufficientFunds]
        );
    }

    #[test]
    fn test_settlement_emits_and_sticks() {
        let mut svc = service();
        let time = test_time();

        let client = svc.create_client(new_client("Meridian Tooling"), &time).unwrap();
        let loans = svc
            .add_loan(client.id, monthly_loan_request(&time), &time)
            .unwrap();
        let loan_id = loans[0].id;
        svc.take_events();

        svc.record_payment(client.id, loan_id, Money::from_major(1_000), &time)
            .unwrap();

        let loan = svc.get_loan(client.id, loan_id).unwrap();
        assert_eq!(loan.status, LoanStatus::PaidOff);
        assert_eq!(loan.payable, Money::ZERO);
        assert_eq!(loan.actual_return_date, Some(time.now()));

        let events = svc.take_events();
        assert!(events
            .iter()
            .any(|e| matches!(e, Event::LoanSettled { .. })));
    }

    #[test]
    fn test_rejected_payment_leaves_store_untouched() {
        let mut svc = service();
        let time = test_time();

        let client = svc.create_client(new_client("Meridian Tooling"), &time).unwrap();
        let loans = svc
            .add_loan(client.id, monthly_loan_request(&time), &time)
            .unwrap();
        let loan_id = loans[0].id;
        let before = svc.get_loan(client.id, loan_id).unwrap();
        svc.take_events();

        let result = svc.record_payment(client.id, loan_id, Money::ZERO, &time);
        assert!(matches!(
            result,
            Err(LendingError::InvalidPaymentAmount { .. })
        ));

        let after = svc.get_loan(client.id, loan_id).unwrap();
        assert_eq!(before, after);
        assert!(svc.take_events().is_empty());
    }

    #[test]
    fn test_hide_loan() {
        let mut svc = service();
        let time = test_time();

        let client = svc.create_client(new_client("Meridian Tooling"), &time).unwrap();
        let loans = svc
            .add_loan(client.id, monthly_loan_request(&time), &time)
            .unwrap();
        let loan_id = loans[0].id;

        svc.hide_loan(client.id, loan_id, &time).unwrap();
        assert!(!svc.get_loan(client.id, loan_id).unwrap().visible);

        assert!(matches!(
            svc.hide_loan(client.id, Uuid::new_v4(), &time),
            Err(LendingError::LoanNotFound { .. })
        ));
    }

    #[test]
    fn test_search_through_facade() {
        let mut svc = service();
        let time = test_time();

        let a = svc.create_client(new_client("Aurora Textiles"), &time).unwrap();
        svc.create_client(new_client("Zenith Mills"), &time).unwrap();
        svc.add_loan(a.id, monthly_loan_request(&time), &time).unwrap();

        let filters = SearchFilters {
            category: Some("small-business".to_string()),
            ..Default::default()
        };
        let found = svc.search_clients(&filters).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Aurora Textiles");

        let bad = SearchFilters {
            interest_rate: Some("high".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            svc.search_clients(&bad),
            Err(LendingError::InvalidFilterValue { .. })
        ));
    }
}
