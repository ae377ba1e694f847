//! Composes the widgets into the full dashboard frame.
use anyhow::Result;
use awaken_runtime::JournalEntry;
use client_frontend_core::{DashboardView, MessageLog};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    widgets::Block,
};

use crate::presentation::{terminal::Tui, theme::RatatuiTheme, widgets};
use crate::state::{AppState, Tab};

/// Everything one frame needs.
pub struct RenderContext<'a> {
    pub view: &'a DashboardView,
    pub messages: &'a MessageLog,
    pub app_state: &'a AppState,
    pub journal: &'a [JournalEntry],
    pub ledger_location: &'a str,
    pub message_panel_height: u16,
}

pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    terminal.draw(|frame| draw(frame, ctx))?;
    Ok(())
}

/// Lays out header, sidebar, metrics, tabs, messages, and footer.
pub fn draw(frame: &mut Frame, ctx: &RenderContext) {
    let theme = RatatuiTheme::new();
    frame.render_widget(Block::default().style(theme.base()), frame.area());

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),                        // Header
            Constraint::Min(0),                           // Body
            Constraint::Length(ctx.message_panel_height), // Messages
            Constraint::Length(1),                        // Footer
        ])
        .split(frame.area());

    widgets::header::render(frame, rows[0], ctx.view, &theme);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(32), Constraint::Min(0)])
        .split(rows[1]);

    widgets::sidebar::render(frame, body[0], ctx.view, ctx.app_state, &theme);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Metrics
            Constraint::Length(3), // Tabs
            Constraint::Min(0),    // Tab content
        ])
        .split(body[1]);

    widgets::metrics::render(frame, main[0], ctx.view, &theme);
    widgets::tabs::render(frame, main[1], ctx.app_state.tab, &theme);

    match ctx.app_state.tab {
        Tab::Missions => widgets::missions::render(frame, main[2], ctx.view, &theme),
        Tab::Ledger => widgets::ledger::render(
            frame,
            main[2],
            ctx.view,
            ctx.journal,
            ctx.ledger_location,
            &theme,
        ),
    }

    let visible = ctx.message_panel_height.saturating_sub(2) as usize;
    let recent: Vec<_> = ctx.messages.recent(visible).cloned().collect();
    widgets::messages::render(frame, rows[2], &recent, &theme);

    widgets::footer::render(frame, rows[3], ctx.app_state, &theme);
}
