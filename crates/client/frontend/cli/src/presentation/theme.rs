//! Ratatui theme implementation of PresentationMapper.
//!
//! Cyan-on-dark palette for the dashboard, implementing the framework-agnostic
//! PresentationMapper trait from client-frontend-core.

use client_frontend_core::{DayPhase, MessageLevel, PresentationMapper};
use ratatui::style::{Color, Modifier, Style};

pub const BACKGROUND: Color = Color::Rgb(0x0e, 0x11, 0x17);
pub const PANEL: Color = Color::Rgb(0x1f, 0x29, 0x37);
pub const ACCENT: Color = Color::Rgb(0x00, 0xff, 0xcc);
pub const MUTED: Color = Color::Rgb(0x6b, 0x72, 0x80);

/// Ratatui-specific theme implementing PresentationMapper.
pub struct RatatuiTheme;

impl PresentationMapper for RatatuiTheme {
    type Style = Style;

    fn style_vitality(&self, vitality: i32) -> Self::Style {
        let color = match vitality {
            v if v > 100 => Color::LightCyan,
            75..=100 => ACCENT,
            50..=74 => Color::Yellow,
            25..=49 => Color::LightRed,
            _ => Color::Red,
        };

        Style::default().fg(color)
    }

    fn style_phase(&self, phase: DayPhase) -> Self::Style {
        match phase {
            DayPhase::Day => Style::default().fg(Color::Yellow),
            DayPhase::Night => Style::default().fg(Color::LightBlue),
        }
    }

    fn style_message(&self, level: MessageLevel) -> Self::Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Success => Style::default().fg(ACCENT),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default().fg(Color::LightRed),
        }
    }

    fn emphasize(&self, base_style: Self::Style) -> Self::Style {
        base_style.add_modifier(Modifier::BOLD)
    }
}

impl RatatuiTheme {
    /// Create a new RatatuiTheme instance.
    pub fn new() -> Self {
        Self
    }

    pub fn base(&self) -> Style {
        Style::default().fg(ACCENT).bg(BACKGROUND)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(ACCENT)
    }

    pub fn title(&self) -> Style {
        self.emphasize(Style::default().fg(ACCENT))
    }

    pub fn label(&self) -> Style {
        Style::default().fg(MUTED)
    }

    pub fn button(&self) -> Style {
        Style::default().fg(ACCENT).bg(PANEL)
    }

    pub fn highlight(&self) -> Style {
        self.emphasize(Style::default().fg(BACKGROUND).bg(ACCENT))
    }
}

impl Default for RatatuiTheme {
    fn default() -> Self {
        Self::new()
    }
}
