//! Persistence and session orchestration for the Awaken ledger.
//!
//! This crate wires the pure progression rules from `awaken-core` to durable
//! storage and exposes the [`Session`] API the dashboard consumes.
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes the session handle and its error type
//! - [`repository`] provides the ledger store and journal adapters
pub mod api;
pub mod repository;

pub use api::{Result, RuntimeError, Session};
pub use repository::{
    FileJournal, FileLedgerStore, InMemoryJournal, InMemoryLedgerStore, JournalEntry,
    JournalRepository, LedgerRecord, LedgerStore, RepositoryError,
};
