//! Message panel, newest entry on top.

use client_frontend_core::{MessageEntry, PresentationMapper, format};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::panel;
use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, messages: &[MessageEntry], theme: &RatatuiTheme) {
    let lines: Vec<Line> = messages
        .iter()
        .map(|entry| {
            let mut spans = Vec::with_capacity(2);
            if let Some(time) = entry.timestamp {
                spans.push(Span::styled(
                    format!("[{}] ", format::timestamp(time)),
                    theme.label(),
                ));
            }
            spans.push(Span::styled(
                entry.text.clone(),
                theme.style_message(entry.level),
            ));
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(panel(" MESSAGES ", theme));

    frame.render_widget(paragraph, area);
}
