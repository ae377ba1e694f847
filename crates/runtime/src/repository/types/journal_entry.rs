//! Raw log entry for one completed activity.

use awaken_core::{ActivityKind, ActivityOutcome};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One line of the activity journal.
///
/// Captures the activity and the ledger values right after it was applied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub recorded_at: DateTime<Utc>,
    pub activity: ActivityKind,
    pub xp_gained: u64,
    pub leveled_up: bool,
    pub level: u32,
    pub xp_current: u64,
    pub xp_next: u64,
    pub vitality: i32,
}

impl JournalEntry {
    pub fn from_outcome(outcome: &ActivityOutcome, recorded_at: DateTime<Utc>) -> Self {
        Self {
            recorded_at,
            activity: outcome.activity,
            xp_gained: outcome.xp_gained,
            leveled_up: outcome.leveled_up,
            level: outcome.state.level,
            xp_current: outcome.state.xp_current,
            xp_next: outcome.state.xp_next,
            vitality: outcome.state.vitality,
        }
    }
}
