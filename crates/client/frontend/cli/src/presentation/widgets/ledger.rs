//! Raw ledger view: stored fields, record location, and recent journal lines.

use awaken_runtime::JournalEntry;
use chrono::Local;
use client_frontend_core::DashboardView;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
};

use super::panel;
use crate::presentation::theme::RatatuiTheme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    view: &DashboardView,
    journal: &[JournalEntry],
    location: &str,
    theme: &RatatuiTheme,
) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(0)])
        .split(area);

    render_record(frame, sections[0], view, location, theme);
    render_journal(frame, sections[1], journal, theme);
}

fn render_record(
    frame: &mut Frame,
    area: Rect,
    view: &DashboardView,
    location: &str,
    theme: &RatatuiTheme,
) {
    let field = |name: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{name:<12}"), theme.label()),
            Span::raw(value),
        ])
    };

    let lines = vec![
        field("level", view.level.to_string()),
        field("xp_current", view.xp_current.to_string()),
        field("xp_next", view.xp_next.to_string()),
        field("vitality", view.vitality.to_string()),
        field("streak", view.streak.to_string()),
        field("last_login", view.last_login.to_string()),
        field("location", location.to_string()),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(panel(" SYSTEM LEDGER ", theme)),
        area,
    );
}

fn render_journal(frame: &mut Frame, area: Rect, journal: &[JournalEntry], theme: &RatatuiTheme) {
    if journal.is_empty() {
        let empty = Paragraph::new(Span::styled("No activity recorded yet.", theme.label()))
            .block(panel(" JOURNAL ", theme));
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(["TIME", "ACTIVITY", "XP", "LEVEL", "PROGRESS", "VITALITY"])
        .style(theme.title());

    let rows = journal.iter().map(|entry| {
        let level = if entry.leveled_up {
            Cell::from(format!("{} ▲", entry.level)).style(theme.title())
        } else {
            Cell::from(entry.level.to_string())
        };

        Row::new(vec![
            Cell::from(
                entry
                    .recorded_at
                    .with_timezone(&Local)
                    .format("%m-%d %H:%M")
                    .to_string(),
            ),
            Cell::from(entry.activity.to_string()),
            Cell::from(format!("+{}", entry.xp_gained)),
            level,
            Cell::from(format!("{}/{}", entry.xp_current, entry.xp_next)),
            Cell::from(entry.vitality.to_string()),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(9),
            Constraint::Length(5),
            Constraint::Length(7),
            Constraint::Length(10),
            Constraint::Min(8),
        ],
    )
    .header(header)
    .block(panel(" JOURNAL ", theme));

    frame.render_widget(table, area);
}
