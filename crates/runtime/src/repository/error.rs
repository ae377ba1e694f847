//! Error types raised by repository implementations.

use thiserror::Error;

/// Errors surfaced by ledger and journal repositories.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("ledger repository lock was poisoned")]
    LockPoisoned,

    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    /// The record exists but cannot be trusted. It is never replaced with defaults.
    #[error("corrupt record at {location}: {reason}")]
    CorruptRecord { location: String, reason: String },
}

impl RepositoryError {
    pub(crate) fn corrupt(location: impl Into<String>, reason: impl ToString) -> Self {
        Self::CorruptRecord {
            location: location.into(),
            reason: reason.to_string(),
        }
    }

    /// Returns true for records that are present but unusable.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::CorruptRecord { .. })
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
