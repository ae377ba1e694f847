//! View-model snapshots derived from [`awaken_core::PlayerState`].
use awaken_core::{ActivityKind, PlayerState};
use chrono::{NaiveDate, NaiveDateTime, Timelike};

use crate::message::MessageLevel;

/// Day or night mode shown in the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DayPhase {
    Day,
    Night,
}

impl DayPhase {
    /// `6 <= hour < 18` is day.
    pub fn from_hour(hour: u32) -> Self {
        if (6..18).contains(&hour) {
            Self::Day
        } else {
            Self::Night
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Day => "DAY PHASE",
            Self::Night => "NIGHT PHASE",
        }
    }
}

/// One activity trigger on the missions tab.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissionCard {
    pub activity: ActivityKind,
    pub track: &'static str,
    pub label: &'static str,
    pub xp_gain: u64,
    pub vitality_cost: i32,
}

impl MissionCard {
    pub fn new(activity: ActivityKind) -> Self {
        let effect = activity.effect();
        Self {
            activity,
            track: activity.track(),
            label: activity.label(),
            xp_gain: effect.xp_gain,
            vitality_cost: effect.vitality_cost,
        }
    }

    /// Button caption, e.g. `Gym strength training (+20 XP)`.
    pub fn caption(&self) -> String {
        format!("{} (+{} XP)", self.label, self.xp_gain)
    }
}

/// Snapshot of everything the dashboard renders for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardView {
    pub system_time: String,
    pub phase: DayPhase,
    pub level: u32,
    pub xp_current: u64,
    pub xp_next: u64,
    pub progress: f64,
    pub vitality: i32,
    pub streak: u32,
    pub last_login: NaiveDate,
    pub missions: Vec<MissionCard>,
}

impl DashboardView {
    pub fn from_state(state: &PlayerState, now: NaiveDateTime) -> Self {
        Self {
            system_time: now.format("%Y-%m-%d %H:%M").to_string(),
            phase: DayPhase::from_hour(now.hour()),
            level: state.level,
            xp_current: state.xp_current,
            xp_next: state.xp_next,
            progress: state.progress_ratio(),
            vitality: state.vitality,
            streak: state.streak,
            last_login: state.last_login,
            missions: vec![
                MissionCard::new(ActivityKind::Physical),
                MissionCard::new(ActivityKind::Intel),
            ],
        }
    }

    pub fn level_text(&self) -> String {
        format!("LV. {}", self.level)
    }

    pub fn xp_text(&self) -> String {
        format!("{} / {}", self.xp_current, self.xp_next)
    }

    pub fn vitality_text(&self) -> String {
        format!("{}%", self.vitality)
    }

    pub fn streak_text(&self) -> String {
        format!("{} Days", self.streak)
    }
}

/// Maps view-model values to a front-end specific style type.
pub trait PresentationMapper {
    type Style;

    fn style_vitality(&self, vitality: i32) -> Self::Style;

    fn style_phase(&self, phase: DayPhase) -> Self::Style;

    fn style_message(&self, level: MessageLevel) -> Self::Style;

    fn emphasize(&self, base_style: Self::Style) -> Self::Style;
}
