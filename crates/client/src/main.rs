//! Awaken client binary.
//!
//! Composition root that assembles:
//! 1. Session (ledger store, journal, progression engine) via SessionBuilder
//! 2. Frontend (UI) - CLI today
//!
//! # Features
//!
//! - `frontend-cli`: Terminal dashboard (default)

use anyhow::Result;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli()?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, ...)");
    }

    Ok(())
}

/// Run the terminal dashboard.
#[cfg(feature = "frontend-cli")]
fn run_cli() -> Result<()> {
    use awaken_client::Client;
    use client_bootstrap::{ClientConfig, SessionBuilder};
    use client_frontend_cli::{CliConfig, CliFrontend, logging};

    // 1. Load configuration from environment
    let client_config = ClientConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging; the guard flushes the file writer on exit
    let _log_guard = logging::setup_logging()?;

    tracing::info!("Starting Awaken client");
    tracing::info!("Progression: {:?}", client_config.progression);
    tracing::info!("Journal: {}", client_config.enable_journal);

    // 3. Build Session (independent layer)
    let message_capacity = client_config.messages.capacity;
    let setup = SessionBuilder::new(client_config).build()?;
    tracing::info!("Ledger directory: {}", setup.data_dir.display());

    // 4. Build Frontend (independent layer)
    let frontend = CliFrontend::new(cli_config, message_capacity);

    // 5. Compose and run
    let client = Client::builder()
        .session(setup.session)
        .frontend(frontend)
        .build()?;

    client.run()?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
