//! File-based repository implementations.

mod journal;
mod ledger;

pub use journal::FileJournal;
pub use ledger::FileLedgerStore;
