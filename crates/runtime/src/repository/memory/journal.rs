//! In-memory JournalRepository implementation for tests.

use std::sync::RwLock;

use crate::repository::{JournalEntry, JournalRepository, RepositoryError, Result};

/// In-memory implementation of JournalRepository.
#[derive(Default)]
pub struct InMemoryJournal {
    entries: RwLock<Vec<JournalEntry>>,
}

impl InMemoryJournal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of journaled entries.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .map(|entries| entries.len())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl JournalRepository for InMemoryJournal {
    fn append(&self, entry: &JournalEntry) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        entries.push(entry.clone());
        Ok(())
    }

    fn recent(&self, limit: usize) -> Result<Vec<JournalEntry>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(entries.iter().rev().take(limit).cloned().collect())
    }

    fn clear(&self) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        entries.clear();
        Ok(())
    }
}
