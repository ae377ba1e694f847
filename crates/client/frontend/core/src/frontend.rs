//! Trait describing a runnable client front-end.
use anyhow::Result;
use awaken_runtime::Session;

/// Frontend abstraction for UI layers.
///
/// Frontends drive the ledger through a borrowed [`Session`]:
/// - Query the current state for rendering
/// - Complete activities on user request
/// - Reset progress after confirmation
///
/// Frontends do NOT own the session. The composition root builds it and
/// lends it for the lifetime of [`Frontend::run`].
///
/// # Implementations
///
/// - `CliFrontend`: Terminal dashboard (ratatui + crossterm)
pub trait Frontend {
    /// Run the frontend loop.
    ///
    /// Blocks until the user quits. Every request is handled to completion
    /// before the next input is read.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error.
    fn run(&mut self, session: &mut Session) -> Result<()>;
}
