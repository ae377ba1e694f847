//! Terminal dashboard for the Awaken ledger.
//!
//! This crate provides a terminal-based user interface for the progression
//! ledger. It implements the `client_frontend_core::Frontend` trait.
//!
//! # Architecture
//!
//! CliFrontend is a pure UI layer that:
//! - Borrows the Session for the duration of the run
//! - Does NOT build the ledger store or journal itself
//! - Handles each key press to completion before reading the next

mod app;
mod config;
mod input;
pub mod logging;
pub mod presentation;
mod state;

pub use app::CliFrontend;
pub use config::{CliConfig, UiConfig};
