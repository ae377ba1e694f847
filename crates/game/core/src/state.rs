//! Authoritative progression state.
//!
//! [`PlayerState`] is the only entity of the ledger. The runtime loads and
//! persists it, but mutates it exclusively through the engine.

use chrono::NaiveDate;

use crate::config::ProgressionConfig;

/// Canonical snapshot of one player's progression.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct PlayerState {
    /// Current character level. Never below 1 and never decreases.
    pub level: u32,
    /// Experience accumulated toward the next level.
    pub xp_current: u64,
    /// Experience needed to level up. Always positive.
    pub xp_next: u64,
    /// Resource consumed by physical activities.
    pub vitality: i32,
    /// Consecutive-day engagement counter.
    pub streak: u32,
    /// Date of the last recorded session.
    pub last_login: NaiveDate,
}

impl PlayerState {
    /// Creates the default ledger written the first time a player is seen.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            level: ProgressionConfig::INITIAL_LEVEL,
            xp_current: 0,
            xp_next: ProgressionConfig::INITIAL_XP_NEXT,
            vitality: ProgressionConfig::INITIAL_VITALITY,
            streak: 0,
            last_login: today,
        }
    }

    /// Checks the structural invariants every stored or supplied state must hold.
    pub fn validate(&self) -> Result<(), StateViolation> {
        if self.level == 0 {
            return Err(StateViolation::ZeroLevel);
        }
        if self.xp_next == 0 {
            return Err(StateViolation::ZeroThreshold);
        }
        Ok(())
    }

    /// Returns true once no pending level-up remains.
    pub fn is_normalized(&self) -> bool {
        self.xp_current < self.xp_next
    }

    /// Fraction of the current level completed, capped at 1.0.
    pub fn progress_ratio(&self) -> f64 {
        if self.xp_next == 0 {
            return 1.0;
        }
        (self.xp_current as f64 / self.xp_next as f64).min(1.0)
    }
}

/// A broken structural invariant of [`PlayerState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StateViolation {
    #[error("level must be at least 1")]
    ZeroLevel,

    #[error("xp threshold must be positive")]
    ZeroThreshold,

    #[error("level decreased from {before} to {after}")]
    LevelDecreased { before: u32, after: u32 },

    #[error("xp {xp_current} still reaches threshold {xp_next} after level-up")]
    PendingLevelUp { xp_current: u64, xp_next: u64 },
}
