//! UI theme definition.

use ratatui::style::{Color, Modifier, Style};

use super::style::StyleSheet;

/// Theme for the application UI.
#[derive(Debug, Clone)]
pub struct Theme {
    // Basic styles
    pub normal_text: Style,
    pub block_style: Style,
    pub header_style: Style,

    // Status styles
    pub help_style: Style,
    pub status_style: Style,
    pub done_style: Style,

    // Key styles
    pub key_style: Style,

    /// Class rules handed to the widgets
    pub sheet: StyleSheet,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            // Basic styles
            normal_text: Style::default().fg(Color::White),
            block_style: Style::default(),
            header_style: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),

            // Status styles
            help_style: Style::default().fg(Color::Gray),
            status_style: Style::default().fg(Color::Green),
            done_style: Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),

            // Key styles
            key_style: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),

            sheet: StyleSheet::default(),
        }
    }
}
