//! Dashboard panels, one module per region of the screen.
pub mod footer;
pub mod header;
pub mod ledger;
pub mod messages;
pub mod metrics;
pub mod missions;
pub mod sidebar;
pub mod tabs;

use ratatui::widgets::{Block, Borders};

use crate::presentation::theme::RatatuiTheme;

/// Bordered block with the accent palette.
pub(crate) fn panel<'a>(title: &'a str, theme: &RatatuiTheme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .title(title)
        .title_style(theme.title())
}
