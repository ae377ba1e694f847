//! In-memory repository implementations for testing and development.

mod journal;
mod ledger;

pub use journal::InMemoryJournal;
pub use ledger::InMemoryLedgerStore;
