//! Activity application and session check-in rules.
//!
//! The [`ProgressionEngine`] is the authoritative reducer for
//! [`PlayerState`]. It never mutates the caller's state: every call works on
//! a transient copy and returns the next state together with the side-channel
//! facts the presentation layer needs (such as whether a level-up happened).

mod errors;
mod transition;

pub use errors::{ProgressionError, TransitionPhase};
pub use transition::next_threshold;

use chrono::{Days, NaiveDate};

use crate::activity::ActivityKind;
use crate::config::{ProgressionConfig, StreakPolicy};
use crate::state::PlayerState;

/// Complete outcome of applying one activity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityOutcome {
    /// The activity that produced this outcome.
    pub activity: ActivityKind,
    /// State after the activity effect and level-up cascade.
    pub state: PlayerState,
    /// True when at least one level was gained.
    pub leveled_up: bool,
    /// Number of cascade steps taken.
    pub levels_gained: u32,
    /// Experience awarded by the activity.
    pub xp_gained: u64,
    /// Signed change in vitality after any clamping.
    pub vitality_delta: i32,
}

/// Pure progression rules parameterized by a [`ProgressionConfig`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ProgressionEngine {
    config: ProgressionConfig,
}

impl ProgressionEngine {
    pub fn new(config: ProgressionConfig) -> Self {
        Self { config }
    }

    /// Applies `activity` to a copy of `state`.
    ///
    /// Fails only when `state` is malformed (see [`PlayerState::validate`])
    /// or a counter would overflow.
    pub fn apply(
        &self,
        state: &PlayerState,
        activity: ActivityKind,
    ) -> Result<ActivityOutcome, ProgressionError> {
        let mut next = state.clone();
        let levels_gained = transition::execute_transition(activity, &mut next, &self.config)?;

        Ok(ActivityOutcome {
            activity,
            leveled_up: levels_gained > 0,
            levels_gained,
            xp_gained: activity.effect().xp_gain,
            vitality_delta: next.vitality.saturating_sub(state.vitality),
            state: next,
        })
    }

    /// Records a session on `today` under the configured streak policy.
    ///
    /// With [`StreakPolicy::Frozen`] the state is returned unchanged. With
    /// [`StreakPolicy::Daily`]:
    /// - the day after `last_login` extends the streak
    /// - the same day keeps it (or starts it at 1 if it was never started)
    /// - any later day restarts it at 1
    /// - a day before `last_login` (clock moved back) changes nothing
    pub fn check_in(&self, state: &PlayerState, today: NaiveDate) -> PlayerState {
        let mut next = state.clone();
        if self.config.streak == StreakPolicy::Frozen || today < state.last_login {
            return next;
        }

        let next_day = state.last_login.checked_add_days(Days::new(1));
        next.streak = if today == state.last_login {
            state.streak.max(1)
        } else if Some(today) == next_day {
            state.streak.saturating_add(1)
        } else {
            1
        };
        next.last_login = today;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LevelUpCascade, VitalityPolicy};
    use crate::error::{CoreError, ErrorSeverity};
    use crate::state::StateViolation;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, day).unwrap()
    }

    fn state(level: u32, xp_current: u64, xp_next: u64, vitality: i32) -> PlayerState {
        PlayerState {
            level,
            xp_current,
            xp_next,
            vitality,
            streak: 0,
            last_login: date(19),
        }
    }

    #[test]
    fn physical_without_level_up() {
        let engine = ProgressionEngine::default();
        let outcome = engine
            .apply(&state(1, 30, 100, 100), ActivityKind::Physical)
            .unwrap();

        assert_eq!(outcome.state.xp_current, 50);
        assert_eq!(outcome.state.vitality, 90);
        assert_eq!(outcome.state.level, 1);
        assert!(!outcome.leveled_up);
        assert_eq!(outcome.xp_gained, 20);
        assert_eq!(outcome.vitality_delta, -10);
    }

    #[test]
    fn physical_crossing_threshold_levels_up() {
        let engine = ProgressionEngine::default();
        let outcome = engine
            .apply(&state(1, 90, 100, 100), ActivityKind::Physical)
            .unwrap();

        assert_eq!(outcome.state.level, 2);
        assert_eq!(outcome.state.xp_current, 10);
        assert_eq!(outcome.state.xp_next, 120);
        assert_eq!(outcome.state.vitality, 90);
        assert!(outcome.leveled_up);
        assert_eq!(outcome.levels_gained, 1);
    }

    #[test]
    fn five_intel_sessions_stay_on_level_one() {
        let engine = ProgressionEngine::default();
        let mut current = state(1, 0, 100, 100);

        for _ in 0..4 {
            current = engine.apply(&current, ActivityKind::Intel).unwrap().state;
        }
        assert_eq!(current.xp_current, 60);
        assert_eq!(current.level, 1);

        let outcome = engine.apply(&current, ActivityKind::Intel).unwrap();
        assert_eq!(outcome.state.xp_current, 75);
        assert_eq!(outcome.state.level, 1);
        assert_eq!(outcome.state.vitality, 100);
        assert!(!outcome.leveled_up);
    }

    #[test]
    fn apply_does_not_touch_the_input() {
        let engine = ProgressionEngine::default();
        let before = state(1, 90, 100, 100);
        let _ = engine.apply(&before, ActivityKind::Physical).unwrap();
        assert_eq!(before, state(1, 90, 100, 100));
    }

    #[test]
    fn repeat_cascade_normalizes_small_thresholds() {
        let engine = ProgressionEngine::default();
        // 0 + 20 xp against thresholds 5, 6, 7 → three level-ups, 2 xp left.
        let outcome = engine
            .apply(&state(1, 0, 5, 100), ActivityKind::Physical)
            .unwrap();

        assert_eq!(outcome.levels_gained, 3);
        assert_eq!(outcome.state.level, 4);
        assert_eq!(outcome.state.xp_current, 2);
        assert_eq!(outcome.state.xp_next, 8);
        assert!(outcome.state.is_normalized());
    }

    #[test]
    fn single_cascade_takes_one_step() {
        let config = ProgressionConfig::default().with_cascade(LevelUpCascade::Single);
        let engine = ProgressionEngine::new(config);
        let outcome = engine
            .apply(&state(1, 0, 5, 100), ActivityKind::Physical)
            .unwrap();

        assert_eq!(outcome.levels_gained, 1);
        assert_eq!(outcome.state.level, 2);
        assert_eq!(outcome.state.xp_current, 15);
        assert_eq!(outcome.state.xp_next, 6);
    }

    #[test]
    fn clamped_policy_keeps_vitality_non_negative() {
        let config = ProgressionConfig::default().with_vitality(VitalityPolicy::Clamped);
        let engine = ProgressionEngine::new(config);
        let outcome = engine
            .apply(&state(1, 0, 100, 4), ActivityKind::Physical)
            .unwrap();

        assert_eq!(outcome.state.vitality, 0);
        assert_eq!(outcome.vitality_delta, -4);
    }

    #[test]
    fn unbounded_policy_allows_negative_vitality() {
        let engine = ProgressionEngine::default();
        let outcome = engine
            .apply(&state(1, 0, 100, 4), ActivityKind::Physical)
            .unwrap();
        assert_eq!(outcome.state.vitality, -6);
    }

    #[test]
    fn malformed_state_is_rejected_before_apply() {
        let engine = ProgressionEngine::default();
        let error = engine
            .apply(&state(1, 0, 0, 100), ActivityKind::Intel)
            .unwrap_err();

        assert_eq!(
            error,
            ProgressionError::InvalidState {
                phase: TransitionPhase::PreValidate,
                violation: StateViolation::ZeroThreshold,
            }
        );
        assert_eq!(error.severity(), ErrorSeverity::Validation);
        assert_eq!(error.error_code(), "PROGRESSION_INVALID_STATE");

        let error = engine
            .apply(&state(0, 0, 100, 100), ActivityKind::Intel)
            .unwrap_err();
        assert_eq!(error.phase(), TransitionPhase::PreValidate);
    }

    #[test]
    fn xp_overflow_is_reported() {
        let engine = ProgressionEngine::default();
        let error = engine
            .apply(&state(1, u64::MAX - 5, u64::MAX, 100), ActivityKind::Intel)
            .unwrap_err();
        assert!(matches!(
            error,
            ProgressionError::Overflow {
                field: "xp_current",
                ..
            }
        ));
    }

    #[test]
    fn frozen_streak_ignores_check_ins() {
        let engine = ProgressionEngine::default();
        let before = state(3, 10, 144, 70);
        assert_eq!(engine.check_in(&before, date(25)), before);
    }

    #[test]
    fn daily_streak_rules() {
        let engine =
            ProgressionEngine::new(ProgressionConfig::default().with_streak(StreakPolicy::Daily));
        let start = state(1, 0, 100, 100);

        let first = engine.check_in(&start, date(19));
        assert_eq!(first.streak, 1);
        assert_eq!(first.last_login, date(19));

        let same_day = engine.check_in(&first, date(19));
        assert_eq!(same_day.streak, 1);

        let next_day = engine.check_in(&same_day, date(20));
        assert_eq!(next_day.streak, 2);
        assert_eq!(next_day.last_login, date(20));

        let after_gap = engine.check_in(&next_day, date(23));
        assert_eq!(after_gap.streak, 1);
        assert_eq!(after_gap.last_login, date(23));

        let backwards = engine.check_in(&after_gap, date(21));
        assert_eq!(backwards, after_gap);
    }
}
