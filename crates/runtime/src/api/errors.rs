//! Unified error types surfaced by the session API.
//!
//! Wraps failures from the ledger repositories and the progression engine so
//! the presentation layer can bubble them up with consistent context.

use awaken_core::ProgressionError;
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("progression rules rejected the ledger: {0}")]
    Progression(#[from] ProgressionError),
}

impl RuntimeError {
    /// True when the stored ledger exists but could not be decoded.
    pub fn is_corrupt_record(&self) -> bool {
        matches!(self, Self::Repository(error) if error.is_corrupt())
    }
}
