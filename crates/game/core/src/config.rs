/// How many level-up steps a single activity may trigger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LevelUpCascade {
    /// At most one level-up per activity; surplus XP may stay above the threshold.
    Single,
    /// Keep levelling while the surplus still crosses the threshold.
    #[default]
    Repeat,
}

/// Bounds applied to vitality after an activity cost.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum VitalityPolicy {
    /// Vitality may go negative or exceed the starting value.
    #[default]
    Unbounded,
    /// Vitality is kept within [`ProgressionConfig::VITALITY_FLOOR`, `ProgressionConfig::VITALITY_CEILING`].
    Clamped,
}

/// Whether session check-ins maintain the streak and last-login fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StreakPolicy {
    /// Streak and last login keep the values written at initialization.
    #[default]
    Frozen,
    /// Each calendar day with a session check-in extends or restarts the streak.
    Daily,
}

/// Progression constants and tunable rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProgressionConfig {
    pub cascade: LevelUpCascade,
    pub vitality: VitalityPolicy,
    pub streak: StreakPolicy,
}

impl ProgressionConfig {
    // ===== initial ledger values =====
    pub const INITIAL_LEVEL: u32 = 1;
    pub const INITIAL_XP_NEXT: u64 = 100;
    pub const INITIAL_VITALITY: i32 = 100;

    // ===== threshold growth (1.2x as an exact ratio) =====
    pub const THRESHOLD_GROWTH_NUMERATOR: u64 = 6;
    pub const THRESHOLD_GROWTH_DENOMINATOR: u64 = 5;

    // ===== vitality clamp bounds =====
    pub const VITALITY_FLOOR: i32 = 0;
    pub const VITALITY_CEILING: i32 = 100;

    pub const fn new(
        cascade: LevelUpCascade,
        vitality: VitalityPolicy,
        streak: StreakPolicy,
    ) -> Self {
        Self {
            cascade,
            vitality,
            streak,
        }
    }

    #[must_use]
    pub const fn with_cascade(mut self, cascade: LevelUpCascade) -> Self {
        self.cascade = cascade;
        self
    }

    #[must_use]
    pub const fn with_vitality(mut self, vitality: VitalityPolicy) -> Self {
        self.vitality = vitality;
        self
    }

    #[must_use]
    pub const fn with_streak(mut self, streak: StreakPolicy) -> Self {
        self.streak = streak;
        self
    }
}
