//! Deterministic progression rules for the Awaken habit tracker.
//!
//! `awaken-core` defines the ledger entity ([`PlayerState`]), the activities a
//! player can complete, and the pure [`ProgressionEngine`] that turns an
//! activity into the next state. Nothing here performs I/O; persistence and
//! presentation live in the runtime and client crates.
pub mod activity;
pub mod config;
pub mod engine;
pub mod error;
pub mod state;

pub use activity::{ActivityEffect, ActivityKind};
pub use config::{LevelUpCascade, ProgressionConfig, StreakPolicy, VitalityPolicy};
pub use engine::{ActivityOutcome, ProgressionEngine, ProgressionError, TransitionPhase};
pub use error::{CoreError, ErrorSeverity};
pub use state::{PlayerState, StateViolation};
