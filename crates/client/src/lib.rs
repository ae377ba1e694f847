//! Top-level client pairing a Session with a Frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ Session (ledger store, journal, progression engine)
//!   └─→ Frontend (UI layer - CLI, future GUI)
//! ```
//!
//! The client owns the session and lends it to the frontend for the whole
//! run, so exactly one writer touches the ledger.

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;
use awaken_runtime::Session;

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. Client::builder() receives the independently built layers
/// 2. Client::run() transfers control to the frontend (blocking)
/// 3. On frontend exit the session is dropped; every change is already on disk
pub struct Client {
    session: Session,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the frontend until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the ledger cannot be loaded or the frontend fails.
    pub fn run(self) -> Result<()> {
        let Client {
            mut session,
            mut frontend,
        } = self;

        tracing::debug!("Handing ledger {} to frontend", session.ledger_location());
        frontend.run(&mut session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use awaken_core::{ActivityKind, ProgressionEngine};
    use awaken_runtime::InMemoryLedgerStore;

    /// Frontend that completes a fixed script of activities.
    struct ScriptedFrontend {
        script: Vec<ActivityKind>,
    }

    impl Frontend for ScriptedFrontend {
        fn run(&mut self, session: &mut Session) -> Result<()> {
            for activity in self.script.drain(..) {
                session.complete_activity(activity)?;
            }
            let state = session.state()?;
            anyhow::ensure!(state.xp_current == 35, "unexpected xp {}", state.xp_current);
            Ok(())
        }
    }

    #[test]
    fn runs_frontend_against_session() {
        let session = Session::new(
            Box::new(InMemoryLedgerStore::new()),
            ProgressionEngine::default(),
        );
        let client = Client::builder()
            .session(session)
            .frontend(ScriptedFrontend {
                script: vec![ActivityKind::Physical, ActivityKind::Intel],
            })
            .build()
            .unwrap();

        client.run().unwrap();
    }

    #[test]
    fn missing_layers_are_rejected() {
        let err = Client::builder().build().err().unwrap();
        assert!(err.to_string().contains("Session is required"));
    }
}
