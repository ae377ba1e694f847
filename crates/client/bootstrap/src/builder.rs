//! Builds the session and its repositories from client configuration.
use std::path::PathBuf;

use anyhow::{Context, Result};
use awaken_core::ProgressionEngine;
use awaken_runtime::{FileJournal, FileLedgerStore, Session};

use crate::config::ClientConfig;

/// Builder that assembles the ledger store, journal, and engine for clients.
pub struct SessionBuilder {
    config: ClientConfig,
}

impl SessionBuilder {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn build(self) -> Result<SessionSetup> {
        let data_dir = self.config.resolve_data_dir();
        tracing::debug!("Using data directory {}", data_dir.display());

        let store = FileLedgerStore::new(&data_dir)
            .with_context(|| format!("failed to open ledger in {}", data_dir.display()))?;
        let engine = ProgressionEngine::new(self.config.progression);
        let mut session = Session::new(Box::new(store), engine);

        if self.config.enable_journal {
            let journal = FileJournal::new(&data_dir)
                .with_context(|| format!("failed to open journal in {}", data_dir.display()))?;
            session = session.with_journal(Box::new(journal));
        }

        tracing::info!(
            "Session configured: cascade={}, vitality={}, streak={}, journal={}",
            self.config.progression.cascade,
            self.config.progression.vitality,
            self.config.progression.streak,
            self.config.enable_journal
        );

        Ok(SessionSetup { data_dir, session })
    }
}

pub struct SessionSetup {
    pub data_dir: PathBuf,
    pub session: Session,
}
