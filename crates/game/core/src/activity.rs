//! Predefined activities a player can complete.

/// A user-triggered activity that awards experience and may cost vitality.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ActivityKind {
    /// Physical training (gym strength session).
    Physical,
    /// Intellectual training (programming study).
    Intel,
}

impl ActivityKind {
    /// Returns the fixed effect of completing this activity once.
    pub const fn effect(self) -> ActivityEffect {
        match self {
            Self::Physical => ActivityEffect::new(20, 10),
            Self::Intel => ActivityEffect::new(15, 0),
        }
    }

    /// Short mission label shown next to the activity trigger.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Physical => "Gym strength training",
            Self::Intel => "Python study session",
        }
    }

    /// Track the activity belongs to.
    pub const fn track(self) -> &'static str {
        match self {
            Self::Physical => "Physical",
            Self::Intel => "Intel",
        }
    }
}

/// XP award and vitality cost of one activity completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActivityEffect {
    pub xp_gain: u64,
    pub vitality_cost: i32,
}

impl ActivityEffect {
    pub const fn new(xp_gain: u64, vitality_cost: i32) -> Self {
        Self {
            xp_gain,
            vitality_cost,
        }
    }
}
