//! File list widget for the display window

use crate::paths::file_info;
use crate::switcher::{QuickSwitcher, View};
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

/// File list widget showing the display window with the selection highlighted
///
/// Each row shows the file name, its directory and an extension badge.
/// Loading, failure and empty states replace the rows with a single message.
pub struct FileList<'a> {
    /// Switcher being rendered
    switcher: &'a QuickSwitcher,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> FileList<'a> {
    /// Create a new file list widget
    #[must_use]
    pub const fn new(switcher: &'a QuickSwitcher, theme: &'a Theme) -> Self {
        Self { switcher, theme }
    }

    /// Area holding the file rows when the list is drawn into `area`
    ///
    /// Excludes the border and the overflow note.
    #[must_use]
    pub fn rows_area(area: Rect, has_overflow: bool) -> Rect {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        if has_overflow {
            Self::split_overflow(inner)[0]
        } else {
            inner
        }
    }

    fn split_overflow(inner: Rect) -> [Rect; 2] {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);
        [chunks[0], chunks[1]]
    }

    fn render_row(&self, path: &'a str, is_cursor: bool) -> ListItem<'a> {
        let info = file_info(path);
        let cursor_char = if is_cursor { ">" } else { " " };

        let mut spans = vec![
            Span::styled(cursor_char, self.theme.cursor_style()),
            Span::raw(" "),
            Span::styled(info.file_name, self.theme.path_style()),
        ];
        if !info.directory.is_empty() {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(info.directory, self.theme.dimmed_style()));
        }
        if !info.extension.is_empty() {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(format!("[{}]", info.extension), self.theme.badge_style()));
        }

        let item = ListItem::new(Line::from(spans));
        if is_cursor {
            item.style(self.theme.selected_style())
        } else {
            item
        }
    }

    fn render_message(area: Rect, buf: &mut Buffer, line: Line<'_>) {
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

impl StatefulWidget for FileList<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let title = format!(" Files ({}) ", self.switcher.filtered_count());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(title);

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        match self.switcher.view() {
            View::Loading => {
                state.select(None);
                Self::render_message(inner, buf, Line::styled("Loading files...", self.theme.dimmed_style()));
            }
            View::Error(message) => {
                state.select(None);
                Self::render_message(inner, buf, Line::styled(message, self.theme.error_style()));
            }
            View::Empty => {
                state.select(None);
                Self::render_message(inner, buf, Line::styled("No files found", self.theme.dimmed_style()));
            }
            View::Populated => {
                let overflow = self.switcher.overflow_count();
                let rows = if overflow > 0 {
                    let [rows, note] = Self::split_overflow(inner);
                    Self::render_message(
                        note,
                        buf,
                        Line::styled(format!("{overflow} more matches..."), self.theme.dimmed_style()),
                    );
                    rows
                } else {
                    inner
                };

                let selected = self.switcher.selected_index();
                let items: Vec<ListItem> = self
                    .switcher
                    .display_files()
                    .enumerate()
                    .map(|(index, path)| self.render_row(path, index == selected))
                    .collect();

                state.select(Some(selected));
                StatefulWidget::render(List::new(items), rows, buf, state);
            }
        }
    }
}
