//! Input processing for the dashboard.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use awaken_core::ActivityKind;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Complete the given activity.
    Complete(ActivityKind),
    NextTab,
    PreviousTab,
    /// Ask for confirmation before wiping progress.
    RequestReset,
    ConfirmReset,
    CancelReset,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into dashboard commands.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    ///
    /// While a reset is pending only `y` confirms it; every other key cancels.
    pub fn handle_key(&self, key: KeyEvent, reset_pending: bool) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        if reset_pending {
            return match key.code {
                KeyCode::Char('y' | 'Y') => KeyAction::ConfirmReset,
                _ => KeyAction::CancelReset,
            };
        }

        match key.code {
            KeyCode::Char(ch) => self.handle_char(ch),
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Tab | KeyCode::Right => KeyAction::NextTab,
            KeyCode::BackTab | KeyCode::Left => KeyAction::PreviousTab,
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, raw: char) -> KeyAction {
        match raw.to_ascii_lowercase() {
            'q' => KeyAction::Quit,
            'p' | '1' => KeyAction::Complete(ActivityKind::Physical),
            'i' | '2' => KeyAction::Complete(ActivityKind::Intel),
            'r' => KeyAction::RequestReset,
            _ => KeyAction::None,
        }
    }
}
