//! Pumps user input and rendering for the dashboard.
use std::time::Duration;

use anyhow::{Context, Result};
use awaken_core::{CoreError, PlayerState};
use awaken_runtime::{JournalEntry, RuntimeError, Session};
use chrono::{DateTime, Local, Utc};
use client_frontend_core::{DashboardView, MessageEntry, MessageLog, format};
use crossterm::event::{self, Event, KeyEventKind};

use crate::config::UiConfig;
use crate::input::{InputHandler, KeyAction};
use crate::presentation::{terminal::Tui, ui};
use crate::state::AppState;

/// Poll timeout; doubles as the clock refresh interval.
const TICK: Duration = Duration::from_secs(1);

pub struct EventLoop {
    input: InputHandler,
    app_state: AppState,
    messages: MessageLog,
    journal: Vec<JournalEntry>,
    state: PlayerState,
    config: UiConfig,
}

impl EventLoop {
    pub fn new(initial_state: PlayerState, messages: MessageLog, config: UiConfig) -> Self {
        Self {
            input: InputHandler::new(),
            app_state: AppState::new(),
            messages,
            journal: Vec::new(),
            state: initial_state,
            config,
        }
    }

    pub fn run(&mut self, terminal: &mut Tui, session: &mut Session) -> Result<()> {
        self.refresh_journal(session);

        while !self.app_state.should_quit {
            self.render(terminal, session)?;

            if !event::poll(TICK)? {
                continue;
            }

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let action = self.input.handle_key(key, self.app_state.reset_pending);
                    self.dispatch(action, session, Local::now())?;
                }
                _ => {}
            }
        }

        Ok(())
    }

    fn render(&self, terminal: &mut Tui, session: &Session) -> Result<()> {
        let view = DashboardView::from_state(&self.state, Local::now().naive_local());
        let location = session.ledger_location();
        let ctx = ui::RenderContext {
            view: &view,
            messages: &self.messages,
            app_state: &self.app_state,
            journal: &self.journal,
            ledger_location: &location,
            message_panel_height: self.config.message_panel_height,
        };

        ui::render(terminal, &ctx)
    }

    /// Handles one command to completion.
    ///
    /// Storage failures land in the message panel. A progression error means
    /// the engine and the ledger disagree, so the run ends with that error.
    pub(crate) fn dispatch(
        &mut self,
        action: KeyAction,
        session: &mut Session,
        now: DateTime<Local>,
    ) -> Result<()> {
        match action {
            KeyAction::Quit => {
                tracing::info!("Quit requested");
                self.app_state.should_quit = true;
            }
            KeyAction::Complete(activity) => {
                match session.complete_activity_at(activity, now.with_timezone(&Utc)) {
                    Ok(outcome) => {
                        self.messages
                            .extend(format::outcome_messages(&outcome, now.time()));
                        self.state = outcome.state;
                        self.refresh_journal(session);
                    }
                    Err(e) => return self.report_failure(activity.track(), e, now),
                }
            }
            KeyAction::NextTab => self.app_state.tab = self.app_state.tab.next(),
            KeyAction::PreviousTab => self.app_state.tab = self.app_state.tab.previous(),
            KeyAction::RequestReset => {
                self.app_state.reset_pending = true;
                self.messages.push(
                    MessageEntry::warning("Reset requested: press y to wipe all progress.")
                        .at(now.time()),
                );
            }
            KeyAction::ConfirmReset => {
                self.app_state.reset_pending = false;
                return self.reset(session, now);
            }
            KeyAction::CancelReset => {
                self.app_state.reset_pending = false;
                self.messages
                    .push(MessageEntry::info("Reset cancelled.").at(now.time()));
            }
            KeyAction::None => {}
        }
        Ok(())
    }

    fn reset(&mut self, session: &mut Session, now: DateTime<Local>) -> Result<()> {
        if let Err(e) = session.reset_progress() {
            return self.report_failure("Reset", e, now);
        }

        match session.state_on(now.date_naive()) {
            Ok(state) => {
                self.state = state.clone();
                self.messages.push(
                    MessageEntry::success("System reset. Ledger restored to defaults.")
                        .at(now.time()),
                );
            }
            Err(e) => {
                // The old record is gone; never keep rendering it.
                self.state = PlayerState::new(now.date_naive());
                self.report_failure("Reload", e, now)?;
            }
        }
        self.refresh_journal(session);
        Ok(())
    }

    fn report_failure(
        &mut self,
        action: &str,
        error: RuntimeError,
        now: DateTime<Local>,
    ) -> Result<()> {
        match error {
            RuntimeError::Progression(e) => {
                tracing::error!(
                    code = e.error_code(),
                    severity = e.severity().as_str(),
                    phase = %e.phase(),
                    "{} broke a progression invariant: {}",
                    action,
                    e
                );
                self.app_state.should_quit = true;
                Err(e).with_context(|| format!("{action} aborted: progression invariant violated"))
            }
            error @ RuntimeError::Repository(_) => {
                tracing::error!("{} failed: {}", action, error);
                self.messages
                    .push(format::failure_message(action, &error, now.time()));
                Ok(())
            }
        }
    }

    pub(crate) fn refresh_journal(&mut self, session: &Session) {
        match session.journal(self.config.journal_rows) {
            Ok(entries) => self.journal = entries,
            Err(e) => {
                tracing::warn!("Failed to read journal: {}", e);
                self.messages
                    .push(MessageEntry::warning(format!("Journal unavailable: {e}")));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Tab;
    use awaken_core::{ActivityKind, ProgressionEngine};
    use awaken_runtime::{
        FileLedgerStore, InMemoryJournal, InMemoryLedgerStore, LedgerStore, RepositoryError,
    };
    use chrono::TimeZone;
    use client_frontend_core::MessageLevel;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tempfile::TempDir;

    /// Store that can no longer be read once it has been reset.
    struct UnreadableAfterReset {
        inner: InMemoryLedgerStore,
        wiped: AtomicBool,
    }

    impl LedgerStore for UnreadableAfterReset {
        fn read(&self) -> awaken_runtime::repository::Result<Option<PlayerState>> {
            if self.wiped.load(Ordering::SeqCst) {
                return Err(RepositoryError::Storage(std::io::Error::other(
                    "device unplugged",
                )));
            }
            self.inner.read()
        }

        fn save(&self, state: &PlayerState) -> awaken_runtime::repository::Result<()> {
            self.inner.save(state)
        }

        fn reset(&self) -> awaken_runtime::repository::Result<()> {
            self.wiped.store(true, Ordering::SeqCst);
            self.inner.reset()
        }

        fn location(&self) -> String {
            "unreadable".to_string()
        }
    }

    fn noon() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    fn memory_session() -> Session {
        Session::new(
            Box::new(InMemoryLedgerStore::new()),
            ProgressionEngine::default(),
        )
        .with_journal(Box::new(InMemoryJournal::new()))
    }

    fn event_loop(session: &mut Session) -> EventLoop {
        let state = session.state_on(noon().date_naive()).unwrap().clone();
        EventLoop::new(state, MessageLog::new(16), UiConfig::default())
    }

    fn last_message(event_loop: &EventLoop) -> &MessageEntry {
        event_loop.messages.recent(1).next().unwrap()
    }

    #[test]
    fn completing_activity_updates_view_state() {
        let mut session = memory_session();
        let mut event_loop = event_loop(&mut session);

        event_loop
            .dispatch(KeyAction::Complete(ActivityKind::Physical), &mut session, noon())
            .unwrap();

        assert_eq!(event_loop.state.xp_current, 20);
        assert_eq!(event_loop.state.vitality, 90);
        assert_eq!(event_loop.journal.len(), 1);
        assert_eq!(last_message(&event_loop).level, MessageLevel::Success);
    }

    #[test]
    fn reset_needs_confirmation_and_restores_defaults() {
        let mut session = memory_session();
        let mut event_loop = event_loop(&mut session);

        event_loop
            .dispatch(KeyAction::Complete(ActivityKind::Intel), &mut session, noon())
            .unwrap();
        event_loop.dispatch(KeyAction::RequestReset, &mut session, noon()).unwrap();
        assert!(event_loop.app_state.reset_pending);

        event_loop.dispatch(KeyAction::CancelReset, &mut session, noon()).unwrap();
        assert!(!event_loop.app_state.reset_pending);
        assert_eq!(event_loop.state.xp_current, 15);

        event_loop.dispatch(KeyAction::RequestReset, &mut session, noon()).unwrap();
        event_loop.dispatch(KeyAction::ConfirmReset, &mut session, noon()).unwrap();
        assert_eq!(&event_loop.state, &PlayerState::new(noon().date_naive()));
        assert!(event_loop.journal.is_empty());
    }

    #[test]
    fn corrupt_ledger_surfaces_error_message() {
        let dir = TempDir::new().unwrap();
        let mut session = Session::new(
            Box::new(FileLedgerStore::new(dir.path()).unwrap()),
            ProgressionEngine::default(),
        );
        let mut event_loop = event_loop(&mut session);
        let before = event_loop.state.clone();

        session.reset_progress().unwrap();
        std::fs::write(dir.path().join(FileLedgerStore::FILE_NAME), "not json").unwrap();

        event_loop
            .dispatch(KeyAction::Complete(ActivityKind::Intel), &mut session, noon())
            .unwrap();

        let message = last_message(&event_loop);
        assert_eq!(message.level, MessageLevel::Error);
        assert!(message.text.contains("corrupt"));
        assert_eq!(&event_loop.state, &before);
    }

    #[test]
    fn tabs_and_quit() {
        let mut session = memory_session();
        let mut event_loop = event_loop(&mut session);

        event_loop.dispatch(KeyAction::NextTab, &mut session, noon()).unwrap();
        assert_eq!(event_loop.app_state.tab, Tab::Ledger);

        event_loop.dispatch(KeyAction::Quit, &mut session, noon()).unwrap();
        assert!(event_loop.app_state.should_quit);
    }

    #[test]
    fn progression_error_ends_the_run() {
        let mut stored = PlayerState::new(noon().date_naive());
        stored.xp_current = u64::MAX - 1;
        stored.xp_next = u64::MAX;
        let mut session = Session::new(
            Box::new(InMemoryLedgerStore::with_state(stored.clone())),
            ProgressionEngine::default(),
        );
        let mut event_loop = event_loop(&mut session);
        let messages_before = event_loop.messages.len();

        let err = event_loop
            .dispatch(KeyAction::Complete(ActivityKind::Intel), &mut session, noon())
            .unwrap_err();

        assert!(err.to_string().contains("Intel aborted"));
        assert!(err.root_cause().to_string().contains("xp_current overflowed"));
        assert!(event_loop.app_state.should_quit);
        assert_eq!(event_loop.messages.len(), messages_before);
        assert_eq!(&event_loop.state, &stored);
        assert_eq!(session.state_on(noon().date_naive()).unwrap(), &stored);
    }

    #[test]
    fn failed_reload_after_reset_drops_old_state() {
        let mut stored = PlayerState::new(noon().date_naive());
        stored.level = 4;
        stored.xp_current = 80;
        stored.xp_next = 150;
        let store = UnreadableAfterReset {
            inner: InMemoryLedgerStore::with_state(stored.clone()),
            wiped: AtomicBool::new(false),
        };
        let mut session = Session::new(Box::new(store), ProgressionEngine::default());
        let mut event_loop = event_loop(&mut session);
        assert_eq!(&event_loop.state, &stored);

        event_loop.dispatch(KeyAction::RequestReset, &mut session, noon()).unwrap();
        event_loop.dispatch(KeyAction::ConfirmReset, &mut session, noon()).unwrap();

        assert_eq!(&event_loop.state, &PlayerState::new(noon().date_naive()));
        let message = last_message(&event_loop);
        assert_eq!(message.level, MessageLevel::Error);
        assert!(message.text.starts_with("Reload failed"));
        assert!(!event_loop.app_state.should_quit);
    }
}
