//! Presentation-facing handle over one ledger.
//!
//! A [`Session`] owns the ledger store, the optional journal, and the cached
//! state for the lifetime of one dashboard run. Each call is handled to
//! completion (compute → persist → journal) before it returns.

use awaken_core::{ActivityKind, ActivityOutcome, PlayerState, ProgressionEngine};
use chrono::{DateTime, Local, NaiveDate, Utc};

use crate::api::Result;
use crate::repository::{JournalEntry, JournalRepository, LedgerStore};

pub struct Session {
    store: Box<dyn LedgerStore>,
    journal: Option<Box<dyn JournalRepository>>,
    engine: ProgressionEngine,
    cached: Option<PlayerState>,
}

impl Session {
    pub fn new(store: Box<dyn LedgerStore>, engine: ProgressionEngine) -> Self {
        Self {
            store,
            journal: None,
            engine,
            cached: None,
        }
    }

    /// Attaches a journal that receives one entry per completed activity.
    #[must_use]
    pub fn with_journal(mut self, journal: Box<dyn JournalRepository>) -> Self {
        self.journal = Some(journal);
        self
    }

    /// Where the ledger record lives, for display.
    pub fn ledger_location(&self) -> String {
        self.store.location()
    }

    /// Current ledger state, loaded once and cached for the session.
    pub fn state(&mut self) -> Result<&PlayerState> {
        self.state_on(Local::now().date_naive())
    }

    /// [`Session::state`] with an explicit calendar date for the first load.
    pub fn state_on(&mut self, today: NaiveDate) -> Result<&PlayerState> {
        let state = match self.cached.take() {
            Some(state) => state,
            None => self.open(today)?,
        };
        let state: &PlayerState = self.cached.insert(state);
        Ok(state)
    }

    /// Applies `activity`, persists the result, and journals it.
    ///
    /// The cached state only advances once the new record is saved.
    pub fn complete_activity(&mut self, activity: ActivityKind) -> Result<ActivityOutcome> {
        self.complete_activity_at(activity, Utc::now())
    }

    /// [`Session::complete_activity`] with an explicit journal timestamp.
    pub fn complete_activity_at(
        &mut self,
        activity: ActivityKind,
        recorded_at: DateTime<Utc>,
    ) -> Result<ActivityOutcome> {
        let current = self.state_on(recorded_at.with_timezone(&Local).date_naive())?.clone();
        let outcome = self.engine.apply(&current, activity)?;

        self.store.save(&outcome.state)?;
        self.cached = Some(outcome.state.clone());

        if let Some(journal) = &self.journal {
            let entry = JournalEntry::from_outcome(&outcome, recorded_at);
            if let Err(e) = journal.append(&entry) {
                tracing::warn!("Failed to journal {} activity: {}", activity, e);
            }
        }

        if outcome.leveled_up {
            tracing::info!(
                "Level up: {} -> {} after {}",
                current.level,
                outcome.state.level,
                activity
            );
        } else {
            tracing::info!(
                "Completed {}: xp {}/{}",
                activity,
                outcome.state.xp_current,
                outcome.state.xp_next
            );
        }

        Ok(outcome)
    }

    /// Deletes the ledger record (and clears the journal) so the next
    /// [`Session::state`] starts from defaults.
    pub fn reset_progress(&mut self) -> Result<()> {
        self.store.reset()?;
        self.cached = None;

        if let Some(journal) = &self.journal {
            if let Err(e) = journal.clear() {
                tracing::warn!("Failed to clear journal during reset: {}", e);
            }
        }

        tracing::info!("Progress reset for {}", self.store.location());
        Ok(())
    }

    /// Up to `limit` journal entries, newest first. Empty without a journal.
    pub fn journal(&self, limit: usize) -> Result<Vec<JournalEntry>> {
        match &self.journal {
            Some(journal) => Ok(journal.recent(limit)?),
            None => Ok(Vec::new()),
        }
    }

    fn open(&self, today: NaiveDate) -> Result<PlayerState> {
        let loaded = self.store.load_or_init(today)?;
        let checked = self.engine.check_in(&loaded, today);

        if checked != loaded {
            self.store.save(&checked)?;
            tracing::info!(
                "Checked in on {}: streak {}",
                checked.last_login,
                checked.streak
            );
        }

        tracing::info!(
            "Session opened at level {} ({} / {} xp)",
            checked.level,
            checked.xp_current,
            checked.xp_next
        );
        Ok(checked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{InMemoryJournal, InMemoryLedgerStore, RepositoryError};
    use awaken_core::{ProgressionConfig, StreakPolicy};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    /// Store whose saves can be made to fail on demand.
    struct FlakyStore {
        inner: InMemoryLedgerStore,
        fail_saves: Arc<AtomicBool>,
    }

    impl LedgerStore for FlakyStore {
        fn read(&self) -> crate::repository::Result<Option<PlayerState>> {
            self.inner.read()
        }

        fn save(&self, state: &PlayerState) -> crate::repository::Result<()> {
            if self.fail_saves.load(Ordering::SeqCst) {
                return Err(RepositoryError::Storage(std::io::Error::other("disk full")));
            }
            self.inner.save(state)
        }

        fn reset(&self) -> crate::repository::Result<()> {
            self.inner.reset()
        }

        fn location(&self) -> String {
            "flaky".to_string()
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    #[test]
    fn first_state_initializes_defaults() {
        let mut session = Session::new(
            Box::new(InMemoryLedgerStore::new()),
            ProgressionEngine::default(),
        );

        let state = session.state_on(day(19)).unwrap().clone();
        assert_eq!(state, PlayerState::new(day(19)));
    }

    #[test]
    fn failed_save_keeps_cached_state() {
        let fail_saves = Arc::new(AtomicBool::new(false));
        let store = FlakyStore {
            inner: InMemoryLedgerStore::new(),
            fail_saves: fail_saves.clone(),
        };
        let mut session = Session::new(Box::new(store), ProgressionEngine::default());
        let before = session.state_on(day(19)).unwrap().clone();

        fail_saves.store(true, Ordering::SeqCst);
        let err = session.complete_activity(ActivityKind::Physical).unwrap_err();
        assert!(err.to_string().contains("disk full"));
        assert_eq!(session.state_on(day(19)).unwrap(), &before);
    }

    #[test]
    fn daily_streak_is_checked_in_on_open() {
        let mut stored = PlayerState::new(day(18));
        stored.streak = 3;
        let engine =
            ProgressionEngine::new(ProgressionConfig::default().with_streak(StreakPolicy::Daily));
        let mut session = Session::new(Box::new(InMemoryLedgerStore::with_state(stored)), engine);

        let state = session.state_on(day(19)).unwrap();
        assert_eq!(state.streak, 4);
        assert_eq!(state.last_login, day(19));
    }

    #[test]
    fn journal_receives_each_activity() {
        let mut session = Session::new(
            Box::new(InMemoryLedgerStore::new()),
            ProgressionEngine::default(),
        )
        .with_journal(Box::new(InMemoryJournal::new()));

        session.complete_activity(ActivityKind::Physical).unwrap();
        session.complete_activity(ActivityKind::Intel).unwrap();

        let entries = session.journal(10).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].activity, ActivityKind::Intel);
        assert_eq!(entries[0].xp_current, 35);
        assert_eq!(entries[1].activity, ActivityKind::Physical);
    }

    #[test]
    fn journal_without_repository_is_empty() {
        let session = Session::new(
            Box::new(InMemoryLedgerStore::new()),
            ProgressionEngine::default(),
        );
        assert!(session.journal(5).unwrap().is_empty());
    }
}
