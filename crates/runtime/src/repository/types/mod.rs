//! Shared types for repository layer.

mod journal_entry;
mod record;

pub use journal_entry::JournalEntry;
pub use record::LedgerRecord;
