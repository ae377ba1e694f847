//! Glue code tying the session and the terminal UI together.
use anyhow::{Context, Result};
use awaken_runtime::Session;
use chrono::Local;
use client_frontend_core::{Frontend, MessageEntry, MessageLog};

use crate::config::CliConfig;
use crate::presentation::{EventLoop, terminal};

/// Terminal dashboard front-end.
pub struct CliFrontend {
    cli_config: CliConfig,
    message_capacity: usize,
}

impl CliFrontend {
    pub fn new(cli_config: CliConfig, message_capacity: usize) -> Self {
        Self {
            cli_config,
            message_capacity,
        }
    }

    fn execute(&self, session: &mut Session) -> Result<()> {
        tracing::info!("CLI dashboard starting...");

        // Load before touching the terminal so a corrupt ledger aborts cleanly.
        let location = session.ledger_location();
        let initial_state = session
            .state()
            .with_context(|| format!("failed to load the ledger at {location}"))?
            .clone();

        let mut messages = MessageLog::new(self.message_capacity);
        messages.push(
            MessageEntry::info(format!(
                "Welcome back, Commander. Level {} with {} / {} XP.",
                initial_state.level, initial_state.xp_current, initial_state.xp_next
            ))
            .at(Local::now().time()),
        );

        let mut event_loop = EventLoop::new(initial_state, messages, self.cli_config.ui.clone());

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        event_loop.run(&mut terminal, session)?;

        terminal::restore()?;
        tracing::info!("CLI dashboard exiting");

        Ok(())
    }
}

impl Frontend for CliFrontend {
    fn run(&mut self, session: &mut Session) -> Result<()> {
        self.execute(session)
    }
}
