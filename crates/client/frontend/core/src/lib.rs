//! Cross-frontend primitives for presenting the ledger.
//!
//! Houses message logging, outcome formatting, and view-model types that both
//! the terminal dashboard and future graphical clients can reuse.
pub mod format;
pub mod frontend;
pub mod message;
pub mod view_model;

pub use frontend::Frontend;
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use view_model::{DashboardView, DayPhase, MissionCard, PresentationMapper};
