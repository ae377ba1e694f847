//! Key binding hints.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::presentation::theme::RatatuiTheme;
use crate::state::AppState;

pub fn render(frame: &mut Frame, area: Rect, app_state: &AppState, theme: &RatatuiTheme) {
    let hints: &[(&str, &str)] = if app_state.reset_pending {
        &[("y", "confirm reset"), ("any", "cancel")]
    } else {
        &[
            ("p/1", "physical"),
            ("i/2", "intel"),
            ("tab/←/→", "switch tab"),
            ("r", "reset"),
            ("q/esc", "quit"),
        ]
    };

    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, action) in hints {
        spans.push(Span::styled(format!(" {key} "), theme.highlight()));
        spans.push(Span::styled(format!(" {action}  "), theme.label()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
