//! Range-sweep checks of the progression rules.

use awaken_core::{
    ActivityKind, LevelUpCascade, PlayerState, ProgressionConfig, ProgressionEngine,
    engine::next_threshold,
};
use chrono::NaiveDate;

fn base_state(level: u32, xp_current: u64, xp_next: u64, vitality: i32) -> PlayerState {
    PlayerState {
        level,
        xp_current,
        xp_next,
        vitality,
        streak: 0,
        last_login: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
    }
}

#[test]
fn activity_without_level_up_adds_exact_effect() {
    let engine = ProgressionEngine::default();

    for kind in [ActivityKind::Physical, ActivityKind::Intel] {
        let effect = kind.effect();
        for xp_next in [100_u64, 120, 144, 1_000] {
            for xp_current in (0..xp_next - effect.xp_gain).step_by(7) {
                let before = base_state(3, xp_current, xp_next, 50);
                let outcome = engine.apply(&before, kind).unwrap();

                assert!(!outcome.leveled_up);
                assert_eq!(outcome.state.xp_current, xp_current + effect.xp_gain);
                assert_eq!(outcome.state.vitality, 50 - effect.vitality_cost);
                assert_eq!(outcome.state.xp_next, xp_next);
                assert_eq!(outcome.state.level, 3);
            }
        }
    }
}

#[test]
fn crossing_the_threshold_takes_one_step() {
    let engine = ProgressionEngine::default();

    for kind in [ActivityKind::Physical, ActivityKind::Intel] {
        let delta = kind.effect().xp_gain;
        for xp_next in [100_u64, 120, 144, 172] {
            for xp_current in (xp_next - delta)..xp_next {
                let before = base_state(4, xp_current, xp_next, 100);
                let outcome = engine.apply(&before, kind).unwrap();

                assert_eq!(outcome.levels_gained, 1);
                assert_eq!(outcome.state.level, 5);
                assert_eq!(outcome.state.xp_current, xp_current + delta - xp_next);
                assert_eq!(outcome.state.xp_next, xp_next * 6 / 5);
            }
        }
    }
}

#[test]
fn thresholds_strictly_increase() {
    for start in 1_u64..=500 {
        let mut threshold = start;
        for _ in 0..20 {
            let next = next_threshold(threshold).unwrap();
            assert!(next > threshold, "threshold {threshold} did not grow");
            threshold = next;
        }
    }
}

#[test]
fn level_never_decreases_over_long_runs() {
    for cascade in [LevelUpCascade::Single, LevelUpCascade::Repeat] {
        let engine = ProgressionEngine::new(ProgressionConfig::default().with_cascade(cascade));
        let mut state = base_state(1, 0, 100, 100);

        for step in 0..500 {
            let kind = if step % 3 == 0 {
                ActivityKind::Physical
            } else {
                ActivityKind::Intel
            };
            let outcome = engine.apply(&state, kind).unwrap();
            assert!(outcome.state.level >= state.level);
            assert!(outcome.state.xp_next >= state.xp_next);
            assert!(outcome.state.is_normalized());
            state = outcome.state;
        }

        assert!(state.level > 1);
    }
}
