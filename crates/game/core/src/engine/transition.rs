//! Activity transition phases and level-up arithmetic.

use crate::activity::ActivityKind;
use crate::config::{LevelUpCascade, ProgressionConfig, VitalityPolicy};
use crate::state::{PlayerState, StateViolation};

use super::errors::{ProgressionError, TransitionPhase};

/// Executes an activity through the three-phase pipeline and returns the
/// number of levels gained.
///
/// Phases:
/// 1. `pre_validate` - Check the supplied state before mutation
/// 2. `apply` - Apply the activity effect and run the level-up cascade
/// 3. `post_validate` - Verify the resulting state
pub(super) fn execute_transition(
    activity: ActivityKind,
    state: &mut PlayerState,
    config: &ProgressionConfig,
) -> Result<u32, ProgressionError> {
    pre_validate(state)?;

    let level_before = state.level;
    let levels_gained = apply(activity, state, config)?;

    post_validate(level_before, state, config)?;

    Ok(levels_gained)
}

fn pre_validate(state: &PlayerState) -> Result<(), ProgressionError> {
    state
        .validate()
        .map_err(|violation| ProgressionError::invalid(TransitionPhase::PreValidate, violation))
}

fn apply(
    activity: ActivityKind,
    state: &mut PlayerState,
    config: &ProgressionConfig,
) -> Result<u32, ProgressionError> {
    let effect = activity.effect();

    state.xp_current = state
        .xp_current
        .checked_add(effect.xp_gain)
        .ok_or_else(|| ProgressionError::overflow("xp_current", activity))?;
    state.vitality = spend_vitality(state.vitality, effect.vitality_cost, config.vitality);

    level_up(activity, state, config.cascade)
}

fn post_validate(
    level_before: u32,
    state: &PlayerState,
    config: &ProgressionConfig,
) -> Result<(), ProgressionError> {
    let fail = |violation| ProgressionError::invalid(TransitionPhase::PostValidate, violation);

    state.validate().map_err(fail)?;

    if state.level < level_before {
        return Err(fail(StateViolation::LevelDecreased {
            before: level_before,
            after: state.level,
        }));
    }

    if config.cascade == LevelUpCascade::Repeat && !state.is_normalized() {
        return Err(fail(StateViolation::PendingLevelUp {
            xp_current: state.xp_current,
            xp_next: state.xp_next,
        }));
    }

    Ok(())
}

/// Converts surplus experience into levels.
fn level_up(
    activity: ActivityKind,
    state: &mut PlayerState,
    cascade: LevelUpCascade,
) -> Result<u32, ProgressionError> {
    let mut levels_gained = 0;

    while state.xp_current >= state.xp_next {
        state.level = state
            .level
            .checked_add(1)
            .ok_or_else(|| ProgressionError::overflow("level", activity))?;
        state.xp_current -= state.xp_next;
        state.xp_next = next_threshold(state.xp_next)
            .ok_or_else(|| ProgressionError::overflow("xp_next", activity))?;
        levels_gained += 1;

        if cascade == LevelUpCascade::Single {
            break;
        }
    }

    Ok(levels_gained)
}

/// Returns `floor(xp_next * 1.2)`, raised to `xp_next + 1` where flooring
/// would leave the threshold unchanged (thresholds below 5).
pub fn next_threshold(xp_next: u64) -> Option<u64> {
    // floor(x * 6 / 5) == x + floor(x / 5) for integers.
    let growth = xp_next * (ProgressionConfig::THRESHOLD_GROWTH_NUMERATOR
        - ProgressionConfig::THRESHOLD_GROWTH_DENOMINATOR)
        / ProgressionConfig::THRESHOLD_GROWTH_DENOMINATOR;
    xp_next.checked_add(growth.max(1))
}

fn spend_vitality(vitality: i32, cost: i32, policy: VitalityPolicy) -> i32 {
    let spent = vitality.saturating_sub(cost);
    match policy {
        VitalityPolicy::Unbounded => spent,
        VitalityPolicy::Clamped => spent.clamp(
            ProgressionConfig::VITALITY_FLOOR,
            ProgressionConfig::VITALITY_CEILING,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_grows_by_one_fifth() {
        assert_eq!(next_threshold(100), Some(120));
        assert_eq!(next_threshold(120), Some(144));
        assert_eq!(next_threshold(144), Some(172));
        assert_eq!(next_threshold(172), Some(206));
    }

    #[test]
    fn small_thresholds_still_grow() {
        assert_eq!(next_threshold(1), Some(2));
        assert_eq!(next_threshold(4), Some(5));
        assert_eq!(next_threshold(5), Some(6));
    }

    #[test]
    fn threshold_overflow_is_reported() {
        assert_eq!(next_threshold(u64::MAX), None);
    }

    #[test]
    fn clamped_vitality_stays_in_bounds() {
        assert_eq!(spend_vitality(5, 10, VitalityPolicy::Clamped), 0);
        assert_eq!(spend_vitality(150, 10, VitalityPolicy::Clamped), 100);
        assert_eq!(spend_vitality(5, 10, VitalityPolicy::Unbounded), -5);
    }

    #[test]
    fn vitality_cost_saturates() {
        assert_eq!(
            spend_vitality(i32::MIN, 10, VitalityPolicy::Unbounded),
            i32::MIN
        );
    }
}
