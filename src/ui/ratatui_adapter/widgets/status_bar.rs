//! Status bar widget for match counts

use crate::ui::output::file_count_text;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Status bar showing how many files match and whether the list was capped
pub struct StatusBar<'a> {
    /// Size of the match set
    filtered_count: usize,
    /// Whether the lister capped the file list
    truncated: bool,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar widget
    #[must_use]
    pub const fn new(filtered_count: usize, truncated: bool, theme: &'a Theme) -> Self {
        Self {
            filtered_count,
            truncated,
            theme,
        }
    }

    /// Status text, e.g. `1 file` or `3 files (list truncated)`
    #[must_use]
    pub fn text(&self) -> String {
        file_count_text(self.filtered_count, self.truncated)
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(Span::styled(self.text(), self.theme.dimmed_style()));
        Paragraph::new(line).render(area, buf);
    }
}
