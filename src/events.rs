use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::types::{ClientId, LoanId, PenaltyReason};

/// audit events emitted by the service façade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    ClientCreated {
        client_id: ClientId,
        timestamp: DateTime<Utc>,
    },
    LoanAdded {
        client_id: ClientId,
        loan_id: LoanId,
        amount: Money,
        timestamp: DateTime<Utc>,
    },
    PaymentReceived {
        client_id: ClientId,
        loan_id: LoanId,
        amount: Money,
        new_payable: Money,
        timestamp: DateTime<Utc>,
    },
    PenaltyAssessed {
        client_id: ClientId,
        loan_id: LoanId,
        amount: Money,
        reason: PenaltyReason,
        timestamp: DateTime<Utc>,
    },
    LoanSettled {
        client_id: ClientId,
        loan_id: LoanId,
        timestamp: DateTime<Utc>,
    },
    LoanHidden {
        client_id: ClientId,
        loan_id: LoanId,
        timestamp: DateTime<Utc>,
    },
}

/// event store for collecting events during operations
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
        }
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_store_collects_and_drains() {
        let mut store = EventStore::new();
        let client_id = Uuid::new_v4();

        store.emit(Event::ClientCreated {
            client_id,
            timestamp: Utc::now(),
        });
        assert_eq!(store.events().len(), 1);

        let drained = store.take_events();
        assert_eq!(drained.len(), 1);
        assert!(store.events().is_empty());
    }
}
