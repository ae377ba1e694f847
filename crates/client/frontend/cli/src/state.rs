//! Application state for tab selection and pending confirmations.

/// Tabs under the mission control heading.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumIter)]
pub enum Tab {
    #[default]
    Missions,
    Ledger,
}

impl Tab {
    pub fn index(self) -> usize {
        match self {
            Self::Missions => 0,
            Self::Ledger => 1,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Missions => Self::Ledger,
            Self::Ledger => Self::Missions,
        }
    }

    pub fn previous(self) -> Self {
        // Two tabs: previous and next coincide.
        self.next()
    }
}

/// Mutable dashboard state between frames.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub tab: Tab,
    /// Set after `r` until the next key press.
    pub reset_pending: bool,
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
