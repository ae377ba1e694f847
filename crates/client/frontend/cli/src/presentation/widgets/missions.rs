//! Mission cards for the two activity tracks.

use awaken_core::ActivityKind;
use client_frontend_core::{DashboardView, MissionCard};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::panel;
use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, view: &DashboardView, theme: &RatatuiTheme) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (card, column) in view.missions.iter().zip(columns.iter()) {
        render_card(frame, *column, card, theme);
    }
}

fn render_card(frame: &mut Frame, area: Rect, card: &MissionCard, theme: &RatatuiTheme) {
    let title = match card.activity {
        ActivityKind::Physical => " PHYSICAL ",
        ActivityKind::Intel => " INTEL ",
    };

    let cost = if card.vitality_cost == 0 {
        "No vitality cost".to_string()
    } else {
        format!("Costs {} vitality", card.vitality_cost)
    };

    let lines = vec![
        Line::from(Span::styled(format!("{} track", card.track), theme.label())),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!(" [{}] ", hotkeys(card.activity)), theme.highlight()),
            Span::raw(" "),
            Span::styled(format!(" {} ", card.caption()), theme.button()),
        ]),
        Line::from(""),
        Line::from(Span::styled(cost, theme.label())),
    ];

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(panel(title, theme));

    frame.render_widget(paragraph, area);
}

fn hotkeys(activity: ActivityKind) -> &'static str {
    match activity {
        ActivityKind::Physical => "p/1",
        ActivityKind::Intel => "i/2",
    }
}
