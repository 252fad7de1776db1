use std::collections::HashMap;
use std::sync::RwLock;

use log::debug;

use crate::client::Client;
use crate::errors::{LendingError, Result};
use crate::query::ClientQuery;
use crate::types::ClientId;

/// abstract access to stored client aggregates
///
/// a save persists the whole aggregate (client plus embedded loans) as one
/// document, last-writer-wins per client id; loans are never stored or
/// fetched independently
pub trait ClientRepository {
    /// all clients
    fn list(&self) -> Result<Vec<Client>>;

    /// clients matching a parsed query
    fn find(&self, query: &ClientQuery) -> Result<Vec<Client>>;

    fn get(&self, id: ClientId) -> Result<Option<Client>>;

    fn save(&self, client: Client) -> Result<()>;
}

/// in-memory reference store
///
/// the write lock serializes saves, so concurrent payments against the same
/// client cannot lose updates within one process
#[derive(Debug, Default)]
pub struct MemoryRepository {
    clients: RwLock<HashMap<ClientId, Client>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read_all(&self) -> Result<Vec<Client>> {
        let guard = self.clients.read().map_err(|_| LendingError::Storage {
            message: "client store lock poisoned".to_string(),
        })?;
        let mut clients: Vec<Client> = guard.values().cloned().collect();
        clients.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(clients)
    }
}

impl ClientRepository for MemoryRepository {
    fn list(&self) -> Result<Vec<Client>> {
        self.read_all()
    }

    fn find(&self, query: &ClientQuery) -> Result<Vec<Client>> {
        Ok(self
            .read_all()?
            .into_iter()
            .filter(|c| query.matches(c))
            .collect())
    }

    fn get(&self, id: ClientId) -> Result<Option<Client>> {
        let guard = self.clients.read().map_err(|_| LendingError::Storage {
            message: "client store lock poisoned".to_string(),
        })?;
        Ok(guard.get(&id).cloned())
    }

    fn save(&self, client: Client) -> Result<()> {
        let mut guard = self.clients.write().map_err(|_| LendingError::Storage {
            message: "client store lock poisoned".to_string(),
        })?;
        debug!("saving client {} ({} loans)", client.id, client.loans.len());
        guard.insert(client.id, client);
        Ok(())
    }
}
