//! Header widget with the protocol banner, system time, and phase.

use client_frontend_core::{DashboardView, DayPhase, PresentationMapper};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::panel;
use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, view: &DashboardView, theme: &RatatuiTheme) {
    let icon = match view.phase {
        DayPhase::Day => "☀",
        DayPhase::Night => "☾",
    };

    let text = vec![
        Line::from(Span::styled("⚡ PROTOCOL: AWAKEN", theme.title())),
        Line::from(vec![
            Span::styled("SYSTEM TIME: ", theme.label()),
            Span::raw(view.system_time.clone()),
            Span::styled(" | MODE: ", theme.label()),
            Span::styled(
                format!("{} {}", view.phase.label(), icon),
                theme.emphasize(theme.style_phase(view.phase)),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(panel("", theme));

    frame.render_widget(paragraph, area);
}
