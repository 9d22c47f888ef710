//! Color tokens and style helpers for the demo page.
//!
//! Neon accents on a dark background: cyan for the active section, green
//! for committed transitions, steel blue for secondary text.

use ratatui::style::{Color, Modifier, Style};

pub const ACCENT: Color = Color::Rgb(0, 255, 255);
pub const POSITIVE: Color = Color::Rgb(0, 255, 128);
pub const WARNING: Color = Color::Rgb(255, 140, 0);
pub const MUTED: Color = Color::Rgb(100, 149, 237);
pub const TEXT_SECONDARY: Color = Color::Rgb(170, 170, 170);

/// Tab-bar button carrying the active marker.
pub fn active_button() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Tab-bar button under the cursor.
pub fn cursor_button() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

/// Tab-bar button, idle.
pub fn idle_button() -> Style {
    Style::default().fg(TEXT_SECONDARY)
}

/// Section content body.
pub fn body() -> Style {
    Style::default().fg(Color::White)
}

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

/// Border of the content block.
pub fn panel_border(active: bool) -> Style {
    if active {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(MUTED)
    }
}
