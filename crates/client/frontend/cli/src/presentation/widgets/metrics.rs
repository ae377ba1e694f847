//! Four metric tiles: level, XP, vitality, streak.

use client_frontend_core::{DashboardView, PresentationMapper};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::panel;
use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, view: &DashboardView, theme: &RatatuiTheme) {
    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    let accent = theme.title();
    let metrics = [
        (" LEVEL ", view.level_text(), accent),
        (" XP GAINED ", view.xp_current.to_string(), accent),
        (
            " VITALITY ",
            view.vitality_text(),
            theme.emphasize(theme.style_vitality(view.vitality)),
        ),
        (" STREAK ", view.streak_text(), accent),
    ];

    for ((title, value, style), tile) in metrics.into_iter().zip(tiles.iter()) {
        let paragraph = Paragraph::new(metric_line(value, style))
            .alignment(Alignment::Center)
            .block(panel(title, theme));
        frame.render_widget(paragraph, *tile);
    }
}

fn metric_line(value: String, style: Style) -> Line<'static> {
    Line::from(Span::styled(value, style))
}
