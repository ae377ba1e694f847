//! Rendering and terminal plumbing for the dashboard.
pub mod event_loop;
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use event_loop::EventLoop;
