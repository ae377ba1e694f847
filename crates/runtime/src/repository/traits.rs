//! Repository contracts for the player ledger and the activity journal.

use awaken_core::PlayerState;
use chrono::{Local, NaiveDate};

use super::Result;
use super::types::JournalEntry;

/// Durable home of exactly one [`PlayerState`] record.
///
/// Implementations follow a single-writer contract: one session owns the
/// store at a time and no cross-process locking is performed.
pub trait LedgerStore: Send + Sync {
    /// Read the record if one exists.
    ///
    /// A missing record is `Ok(None)`. A record that exists but cannot be
    /// decoded is [`super::RepositoryError::CorruptRecord`].
    fn read(&self) -> Result<Option<PlayerState>>;

    /// Overwrite the record in full.
    fn save(&self, state: &PlayerState) -> Result<()>;

    /// Delete the record so the next load starts from defaults.
    fn reset(&self) -> Result<()>;

    /// Human-readable location of the record (path, or a label for in-memory stores).
    fn location(&self) -> String;

    /// Read the record, creating and persisting the default state dated
    /// `today` when none exists.
    fn load_or_init(&self, today: NaiveDate) -> Result<PlayerState> {
        if let Some(state) = self.read()? {
            return Ok(state);
        }

        let state = PlayerState::new(today);
        self.save(&state)?;
        tracing::info!("Initialized new ledger at {}", self.location());
        Ok(state)
    }

    /// [`LedgerStore::load_or_init`] using the local calendar date.
    fn load(&self) -> Result<PlayerState> {
        self.load_or_init(Local::now().date_naive())
    }
}

/// Append-only raw log of completed activities.
pub trait JournalRepository: Send + Sync {
    /// Append an entry to the end of the journal.
    fn append(&self, entry: &JournalEntry) -> Result<()>;

    /// Return up to `limit` entries, newest first.
    fn recent(&self, limit: usize) -> Result<Vec<JournalEntry>>;

    /// Remove every entry.
    fn clear(&self) -> Result<()>;
}
