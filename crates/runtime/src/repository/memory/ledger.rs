//! In-memory LedgerStore implementation for tests and local runs.

use std::sync::RwLock;

use awaken_core::PlayerState;

use crate::repository::{LedgerStore, RepositoryError, Result};

/// In-memory implementation of LedgerStore.
pub struct InMemoryLedgerStore {
    record: RwLock<Option<PlayerState>>,
}

impl InMemoryLedgerStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            record: RwLock::new(None),
        }
    }

    /// Create with an existing record.
    pub fn with_state(state: PlayerState) -> Self {
        Self {
            record: RwLock::new(Some(state)),
        }
    }
}

impl Default for InMemoryLedgerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerStore for InMemoryLedgerStore {
    fn read(&self) -> Result<Option<PlayerState>> {
        let record = self
            .record
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(record.clone())
    }

    fn save(&self, state: &PlayerState) -> Result<()> {
        let mut record = self
            .record
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *record = Some(state.clone());
        Ok(())
    }

    fn reset(&self) -> Result<()> {
        let mut record = self
            .record
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *record = None;
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
