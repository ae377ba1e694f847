//! Repository layer for the player ledger.
//!
//! Repositories handle data that CHANGES between sessions:
//! - The ledger record (one [`awaken_core::PlayerState`])
//! - The activity journal (raw log of completed activities)
//!
//! The progression rules themselves live in `awaken-core` and never touch
//! these types.

mod error;
mod file;
mod memory;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use file::{FileJournal, FileLedgerStore};
pub use memory::{InMemoryJournal, InMemoryLedgerStore};
pub use traits::{JournalRepository, LedgerStore};
pub use types::{JournalEntry, LedgerRecord};
