//! Player-facing text for session results.
use awaken_core::{ActivityKind, ActivityOutcome};
use awaken_runtime::RuntimeError;
use chrono::NaiveTime;

use crate::message::MessageEntry;

/// Toast shown after an activity is saved.
pub fn completion_text(activity: ActivityKind) -> &'static str {
    match activity {
        ActivityKind::Physical => "Training complete. Data written to the ledger.",
        ActivityKind::Intel => "Knowledge download complete.",
    }
}

/// Messages announcing a saved outcome, oldest first.
pub fn outcome_messages(outcome: &ActivityOutcome, at: NaiveTime) -> Vec<MessageEntry> {
    let effect = outcome.activity.effect();
    let mut detail = format!("+{} XP", outcome.xp_gained);
    if effect.vitality_cost != 0 {
        detail.push_str(&format!(", {:+} vitality", outcome.vitality_delta));
    }

    let mut messages = vec![
        MessageEntry::success(format!("{} ({})", completion_text(outcome.activity), detail))
            .at(at),
    ];

    if outcome.leveled_up {
        let text = if outcome.levels_gained > 1 {
            format!(
                "LEVEL UP x{}! You are now level {}.",
                outcome.levels_gained, outcome.state.level
            )
        } else {
            format!("LEVEL UP! You are now level {}.", outcome.state.level)
        };
        messages.push(MessageEntry::success(text).at(at));
    }

    messages
}

/// Message describing a failed session operation.
pub fn failure_message(action: &str, error: &RuntimeError, at: NaiveTime) -> MessageEntry {
    let text = if error.is_corrupt_record() {
        format!("{action} failed: the ledger is corrupt and was left untouched ({error})")
    } else {
        format!("{action} failed: {error}")
    };
    MessageEntry::error(text).at(at)
}

/// `HH:MM:SS` stamp used in the message panel.
pub fn timestamp(time: NaiveTime) -> String {
    time.format("%H:%M:%S").to_string()
}
