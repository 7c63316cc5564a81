//! Color theme definitions for the ratatui TUI
//!
//! Defines colors and styles used throughout the switcher.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color for the selected row
    pub selection_bg: Color,
    /// Foreground color for the selected row
    pub selection_fg: Color,
    /// Color for the cursor indicator and focused borders
    pub cursor: Color,
    /// Color for error messages
    pub error: Color,
    /// Color for borders
    pub border: Color,
    /// Color for dimmed/inactive text
    pub dimmed: Color,
    /// Color for extension badges
    pub badge: Color,
    /// Color for file names
    pub path: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            selection_bg: Color::Blue,
            selection_fg: Color::White,
            cursor: Color::Cyan,
            error: Color::Red,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
            badge: Color::Magenta,
            path: Color::White,
        }
    }

    /// Style for the currently selected row
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the cursor indicator (>)
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default()
            .fg(self.cursor)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for error messages
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for borders
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for dimmed text
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }

    /// Style for extension badges
    #[must_use]
    pub fn badge_style(&self) -> Style {
        Style::default().fg(self.badge)
    }

    /// Style for file names
    #[must_use]
    pub fn path_style(&self) -> Style {
        Style::default().fg(self.path).add_modifier(Modifier::BOLD)
    }
}
