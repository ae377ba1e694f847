//! Client builder with dependency injection pattern.

use crate::{Client, Frontend};
use anyhow::{Context, Result};
use awaken_runtime::Session;

/// Builder for constructing a Client with proper validation.
///
/// Both the session and the frontend are required; `build()` fails fast when
/// either is missing.
#[derive(Default)]
pub struct ClientBuilder {
    session: Option<Session>,
    frontend: Option<Box<dyn Frontend>>,
}

impl ClientBuilder {
    /// Create a new ClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the session (required).
    ///
    /// It should be constructed via `SessionBuilder` from the `client-bootstrap` crate.
    pub fn session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    /// Set the frontend (required).
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if the session or the frontend is not set.
    pub fn build(self) -> Result<Client> {
        let session = self
            .session
            .context("Session is required. Use .session() to set it.")?;

        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        Ok(Client { session, frontend })
    }
}
