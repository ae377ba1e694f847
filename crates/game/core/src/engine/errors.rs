//! Error types for the progression transition pipeline.

use crate::activity::ActivityKind;
use crate::error::{CoreError, ErrorSeverity};
use crate::state::StateViolation;

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

impl core::fmt::Display for TransitionPhase {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors surfaced while applying an activity to a [`crate::PlayerState`].
///
/// Every variant is a programmer error: well-formed states never fail.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProgressionError {
    #[error("invalid state ({phase} failed): {violation}")]
    InvalidState {
        phase: TransitionPhase,
        violation: StateViolation,
    },

    #[error("{field} overflowed while applying {activity}")]
    Overflow {
        field: &'static str,
        activity: ActivityKind,
    },
}

impl ProgressionError {
    pub(crate) fn invalid(phase: TransitionPhase, violation: StateViolation) -> Self {
        Self::InvalidState { phase, violation }
    }

    pub(crate) fn overflow(field: &'static str, activity: ActivityKind) -> Self {
        Self::Overflow { field, activity }
    }

    /// Returns the pipeline phase that produced the error.
    pub fn phase(&self) -> TransitionPhase {
        match self {
            Self::InvalidState { phase, .. } => *phase,
            Self::Overflow { .. } => TransitionPhase::Apply,
        }
    }
}

impl CoreError for ProgressionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidState {
                phase: TransitionPhase::PostValidate,
                ..
            } => ErrorSeverity::Internal,
            Self::InvalidState { .. } | Self::Overflow { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidState {
                phase: TransitionPhase::PostValidate,
                ..
            } => "PROGRESSION_POSTCONDITION_VIOLATED",
            Self::InvalidState { .. } => "PROGRESSION_INVALID_STATE",
            Self::Overflow { .. } => "PROGRESSION_OVERFLOW",
        }
    }
}
