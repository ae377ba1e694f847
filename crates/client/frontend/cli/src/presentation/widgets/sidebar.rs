//! Commander panel: level, XP gauge, and the reset control.

use client_frontend_core::{DashboardView, PresentationMapper};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Wrap},
};

use super::panel;
use crate::presentation::theme::{ACCENT, PANEL, RatatuiTheme};
use crate::state::AppState;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    view: &DashboardView,
    app_state: &AppState,
    theme: &RatatuiTheme,
) {
    let block = panel(" COMMANDER ", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Identity
            Constraint::Length(1), // XP text
            Constraint::Length(1), // Gauge
            Constraint::Length(1),
            Constraint::Min(0), // Reset
        ])
        .split(inner);

    let identity = Paragraph::new(Line::from(vec![
        Span::styled("ID: ", theme.label()),
        Span::styled(format!("COMMANDER ({})", view.level_text()), theme.title()),
    ]));
    frame.render_widget(identity, sections[0]);

    let xp = Paragraph::new(Line::from(vec![
        Span::styled("EXP Progress: ", theme.label()),
        Span::styled(view.xp_text(), theme.emphasize(Style::default().fg(ACCENT))),
    ]));
    frame.render_widget(xp, sections[1]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(ACCENT).bg(PANEL))
        .ratio(view.progress.clamp(0.0, 1.0))
        .label(format!("{:.0}%", view.progress * 100.0));
    frame.render_widget(gauge, sections[2]);

    let reset = if app_state.reset_pending {
        Line::from(Span::styled(
            "Reset system? y = confirm, any key = cancel",
            theme.emphasize(Style::default().fg(Color::LightRed)),
        ))
    } else {
        Line::from(vec![
            Span::styled("[r] ", theme.label()),
            Span::styled("Reset system", Style::default().fg(Color::LightRed)),
        ])
    };
    frame.render_widget(
        Paragraph::new(reset).wrap(Wrap { trim: true }),
        sections[4],
    );
}
