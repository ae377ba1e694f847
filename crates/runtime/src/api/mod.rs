//! Public runtime API surface.
//!
//! This module gathers the types the presentation layer interacts with so
//! the repository layer can stay focused on persistence.

pub mod errors;
pub mod session;

pub use errors::{Result, RuntimeError};
pub use session::Session;
