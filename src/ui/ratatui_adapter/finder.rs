//! Ratatui-based switcher host
//!
//! Owns the terminal, runs file listings on a [`LoadWorker`] and drives a
//! [`QuickSwitcher`] from crossterm events until a file is chosen or the
//! switcher is dismissed.

use super::events::{EventResult, ListLayout, poll_and_handle};
use super::theme::Theme;
use super::widgets::{FileList, HelpBar, KeyHint, SearchBar, StatusBar};
use crate::switcher::{FileLister, LoadWorker, QuickSwitcher, View};
use crate::ui::error::Result;
use crate::ui::traits::FileSwitcher;
use crossterm::{
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::ListState,
};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

/// Poll interval; completions from the worker are picked up between polls
const TICK: Duration = Duration::from_millis(50);

/// Terminal file switcher
pub struct RatatuiSwitcher {
    lister: Arc<dyn FileLister>,
    hints: Vec<KeyHint>,
    theme: Theme,
}

impl RatatuiSwitcher {
    /// Create a switcher host listing files with `lister`
    #[must_use]
    pub fn new(lister: Arc<dyn FileLister>) -> Self {
        Self {
            lister,
            hints: HelpBar::default_hints(),
            theme: Theme::default(),
        }
    }

    /// Set custom theme
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Setup terminal for TUI mode
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableBracketedPaste)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Restore terminal to normal mode
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(
            io::stdout(),
            DisableBracketedPaste,
            DisableMouseCapture,
            LeaveAlternateScreen
        )?;
        Ok(())
    }

    /// Draw one frame and report where the file rows ended up
    fn render(
        frame: &mut Frame,
        switcher: &QuickSwitcher,
        list_state: &mut ListState,
        theme: &Theme,
        hints: &[KeyHint],
    ) -> ListLayout {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search bar
                Constraint::Min(3),    // File list
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        let query = switcher.query_input();
        frame.render_widget(SearchBar::new(query.text(), query.cursor(), theme), chunks[0]);

        frame.render_stateful_widget(FileList::new(switcher, theme), chunks[1], list_state);

        let footer = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(32)])
            .split(chunks[2]);
        frame.render_widget(
            StatusBar::new(switcher.filtered_count(), switcher.truncated(), theme),
            footer[0],
        );
        frame.render_widget(HelpBar::new(hints, theme), footer[1]);

        Self::list_layout(switcher, list_state, chunks[1])
    }

    fn list_layout(switcher: &QuickSwitcher, list_state: &ListState, list_area: Rect) -> ListLayout {
        if switcher.view() != View::Populated {
            return ListLayout::default();
        }
        ListLayout {
            rows: FileList::rows_area(list_area, switcher.overflow_count() > 0),
            offset: list_state.offset(),
        }
    }

    /// Main event loop
    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        switcher: &mut QuickSwitcher,
    ) -> Result<Option<String>> {
        let worker = LoadWorker::new(Arc::clone(&self.lister));
        worker.spawn(switcher.mount())?;

        let mut list_state = ListState::default();
        let mut layout = ListLayout::default();

        loop {
            while let Some(done) = worker.try_recv() {
                switcher.apply_load(&done.ticket, done.outcome);
            }

            terminal.draw(|frame| {
                layout = Self::render(frame, switcher, &mut list_state, &self.theme, &self.hints);
            })?;

            match poll_and_handle(switcher, layout, TICK)? {
                EventResult::Select(path) => return Ok(Some(path)),
                EventResult::Close => return Ok(None),
                EventResult::Continue | EventResult::Ignored => {}
            }
        }
    }
}

impl FileSwitcher for RatatuiSwitcher {
    fn run(&self, root: &str, query: Option<&str>) -> Result<Option<String>> {
        let mut switcher = QuickSwitcher::new(root);
        if let Some(query) = query {
            switcher.set_query(query);
        }

        let mut terminal = Self::setup_terminal()?;

        // Run the event loop, ensuring cleanup happens
        let result = self.run_loop(&mut terminal, &mut switcher);
        switcher.unmount();

        // Cleanup terminal (always, even on error)
        if let Err(e) = Self::cleanup_terminal() {
            log::error!("terminal cleanup failed: {e}");
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::switcher::FileListResult;
    use crate::testing::StaticLister;
    use ratatui::backend::TestBackend;

    fn draw(switcher: &QuickSwitcher) -> (String, ListLayout) {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        let mut list_state = ListState::default();
        let theme = Theme::default();
        let hints = HelpBar::default_hints();
        let mut layout = ListLayout::default();

        terminal
            .draw(|frame| {
                layout = RatatuiSwitcher::render(frame, switcher, &mut list_state, &theme, &hints);
            })
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        (text, layout)
    }

    #[test]
    fn test_switcher_creation() {
        let host = RatatuiSwitcher::new(Arc::new(StaticLister::new(&["a.rs"], false)));
        assert_eq!(host.hints.len(), 3);
    }

    #[test]
    fn test_render_loading_frame() {
        let mut switcher = QuickSwitcher::new("/proj");
        let _ticket = switcher.mount();

        let (text, layout) = draw(&switcher);
        assert!(text.contains("Search files..."));
        assert!(text.contains("Loading files..."));
        assert!(text.contains("0 files"));
        assert_eq!(layout, ListLayout::default());
    }

    #[test]
    fn test_render_populated_frame() {
        let mut switcher = QuickSwitcher::new("/proj");
        let ticket = switcher.mount();
        let files = vec!["src/main.rs".to_string(), "README.md".to_string()];
        switcher.apply_load(&ticket, Ok(FileListResult::new(files, true)));

        let (text, layout) = draw(&switcher);
        assert!(text.contains("main.rs"));
        assert!(text.contains("2 files (list truncated)"));
        assert!(text.contains("esc close"));
        assert_eq!(layout.rows, Rect::new(1, 4, 58, 6));
        assert_eq!(layout.row_at(5, 5), Some(1));
    }
}
