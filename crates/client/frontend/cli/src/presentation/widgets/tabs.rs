//! Mission control tab bar.

use ratatui::{Frame, layout::Rect, widgets::Tabs};
use strum::IntoEnumIterator;

use super::panel;
use crate::presentation::theme::RatatuiTheme;
use crate::state::Tab;

pub fn render(frame: &mut Frame, area: Rect, selected: Tab, theme: &RatatuiTheme) {
    let titles: Vec<String> = Tab::iter().map(|tab| tab.to_string()).collect();

    let tabs = Tabs::new(titles)
        .select(selected.index())
        .style(theme.label())
        .highlight_style(theme.highlight())
        .block(panel(" MISSION CONTROL ", theme));

    frame.render_widget(tabs, area);
}
