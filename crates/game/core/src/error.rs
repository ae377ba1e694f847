//! Common error infrastructure for awaken-core.
//!
//! Domain errors (e.g. [`crate::engine::ProgressionError`]) live beside the
//! code that raises them and implement [`CoreError`] so callers can classify
//! failures without matching every variant.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: unexpected state inconsistencies that require investigation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// Invalid input, should not retry without changes.
    ///
    /// Examples: a ledger with level zero, a zero XP threshold
    Validation,

    /// Unexpected state inconsistency after a transition.
    ///
    /// These indicate bugs and should be investigated.
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }
}

/// Common trait for all awaken-core errors.
pub trait CoreError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for log fields and test assertions.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
