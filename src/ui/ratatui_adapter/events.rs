//! Event handling for the ratatui TUI
//!
//! Offers keys to the switcher's shortcuts first; anything it passes through
//! edits the query. Mouse scrolling moves the selection, hovering points it
//! and clicking picks a file.

use crate::switcher::{QuickSwitcher, SwitcherAction, SwitcherCallbacks};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use std::time::Duration;

/// Result of handling an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// A file was chosen; the path is absolute
    Select(String),
    /// The switcher was dismissed
    Close,
    /// No action taken
    Ignored,
}

/// Where the file rows were last drawn, for mapping mouse positions to rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListLayout {
    /// Screen area holding the rows
    pub rows: Rect,
    /// Display index of the first visible row
    pub offset: usize,
}

impl ListLayout {
    /// Display index of the row at a screen position
    #[must_use]
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        if !self.rows.contains(Position::new(column, row)) {
            return None;
        }
        Some(self.offset + usize::from(row - self.rows.y))
    }
}

/// Collects the switcher's outbound event as an [`EventResult`]
#[derive(Debug, Default)]
struct Outcome(Option<EventResult>);

impl SwitcherCallbacks for Outcome {
    fn on_select(&mut self, path: &str) {
        self.0 = Some(EventResult::Select(path.to_string()));
    }

    fn on_close(&mut self) {
        self.0 = Some(EventResult::Close);
    }
}

/// Handle a key event
pub fn handle_key(switcher: &mut QuickSwitcher, key: KeyEvent) -> EventResult {
    if key.kind != KeyEventKind::Press {
        return EventResult::Ignored;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return EventResult::Close;
    }

    let mut outcome = Outcome::default();
    if switcher.dispatch_key(&key, &mut outcome) {
        return outcome.0.unwrap_or(EventResult::Continue);
    }

    edit_query(switcher, key)
}

/// Apply a passed-through key to the query field
fn edit_query(switcher: &mut QuickSwitcher, key: KeyEvent) -> EventResult {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Char('u') if ctrl => switcher.edit_query(|q| {
            q.clear();
        }),
        KeyCode::Char('w') if ctrl => switcher.edit_query(|q| {
            q.delete_word();
        }),
        KeyCode::Char('a') if ctrl => switcher.edit_query(|q| q.cursor_home()),
        KeyCode::Char('e') if ctrl => switcher.edit_query(|q| q.cursor_end()),
        KeyCode::Char(c) if !ctrl && !alt => switcher.edit_query(|q| q.push(c)),
        KeyCode::Backspace => switcher.edit_query(|q| {
            q.backspace();
        }),
        KeyCode::Delete => switcher.edit_query(|q| {
            q.delete();
        }),
        KeyCode::Left => switcher.edit_query(|q| q.cursor_left()),
        KeyCode::Right => switcher.edit_query(|q| q.cursor_right()),
        KeyCode::Home => switcher.edit_query(|q| q.cursor_home()),
        KeyCode::End => switcher.edit_query(|q| q.cursor_end()),
        _ => return EventResult::Ignored,
    }
    EventResult::Continue
}

/// Handle a mouse event against the last drawn list
pub fn handle_mouse(switcher: &mut QuickSwitcher, mouse: MouseEvent, layout: ListLayout) -> EventResult {
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            switcher.move_up();
            EventResult::Continue
        }
        MouseEventKind::ScrollDown => {
            switcher.move_down();
            EventResult::Continue
        }
        MouseEventKind::Moved => match layout.row_at(mouse.column, mouse.row) {
            Some(index) => {
                switcher.hover(index);
                EventResult::Continue
            }
            None => EventResult::Ignored,
        },
        MouseEventKind::Down(MouseButton::Left) => layout
            .row_at(mouse.column, mouse.row)
            .and_then(|index| switcher.pick(index))
            .map_or(EventResult::Ignored, |action| match action {
                SwitcherAction::Select(path) => EventResult::Select(path),
                _ => EventResult::Ignored,
            }),
        _ => EventResult::Ignored,
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(
    switcher: &mut QuickSwitcher,
    layout: ListLayout,
    timeout: Duration,
) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        Event::Key(key) => handle_key(switcher, key),
        Event::Mouse(mouse) => handle_mouse(switcher, mouse, layout),
        Event::Paste(text) => {
            switcher.edit_query(|q| text.chars().filter(|c| !c.is_control()).for_each(|c| q.push(c)));
            EventResult::Continue
        }
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::switcher::FileListResult;

    fn make_switcher(files: &[&str]) -> QuickSwitcher {
        let mut switcher = QuickSwitcher::new("/proj");
        let ticket = switcher.mount();
        let files = files.iter().map(|f| (*f).to_string()).collect();
        switcher.apply_load(&ticket, Ok(FileListResult::new(files, false)));
        switcher
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_navigation_handling() {
        let mut switcher = make_switcher(&["a.rs", "b.rs", "c.rs"]);

        assert_eq!(handle_key(&mut switcher, key(KeyCode::Down)), EventResult::Continue);
        assert_eq!(switcher.selected_index(), 1);

        assert_eq!(handle_key(&mut switcher, key(KeyCode::Up)), EventResult::Continue);
        assert_eq!(handle_key(&mut switcher, key(KeyCode::Up)), EventResult::Continue);
        assert_eq!(switcher.selected_index(), 0);
    }

    #[test]
    fn test_enter_selects_absolute_path() {
        let mut switcher = make_switcher(&["src/main.rs", "README.md"]);
        handle_key(&mut switcher, key(KeyCode::Down));
        assert_eq!(
            handle_key(&mut switcher, key(KeyCode::Enter)),
            EventResult::Select("/proj/README.md".to_string())
        );
    }

    #[test]
    fn test_enter_on_empty_list_continues() {
        let mut switcher = make_switcher(&[]);
        assert_eq!(handle_key(&mut switcher, key(KeyCode::Enter)), EventResult::Continue);
    }

    #[test]
    fn test_escape_and_ctrl_c_close() {
        let mut switcher = make_switcher(&["a.rs"]);
        assert_eq!(handle_key(&mut switcher, key(KeyCode::Esc)), EventResult::Close);
        assert_eq!(
            handle_key(&mut switcher, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            EventResult::Close
        );
    }

    #[test]
    fn test_typing_edits_query() {
        let mut switcher = make_switcher(&["src/main.rs", "README.md"]);
        for c in "READ".chars() {
            handle_key(&mut switcher, KeyEvent::new(KeyCode::Char(c), KeyModifiers::SHIFT));
        }
        assert_eq!(switcher.query(), "READ");
        assert_eq!(switcher.filtered_count(), 1);

        handle_key(&mut switcher, key(KeyCode::Backspace));
        assert_eq!(switcher.query(), "REA");

        handle_key(&mut switcher, KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert_eq!(switcher.query(), "");
        assert_eq!(switcher.filtered_count(), 2);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut switcher = make_switcher(&["a.rs", "b.rs"]);
        let mut release = key(KeyCode::Down);
        release.kind = KeyEventKind::Release;
        assert_eq!(handle_key(&mut switcher, release), EventResult::Ignored);
        assert_eq!(switcher.selected_index(), 0);
    }

    #[test]
    fn test_row_at() {
        let layout = ListLayout {
            rows: Rect::new(1, 4, 20, 5),
            offset: 3,
        };
        assert_eq!(layout.row_at(2, 4), Some(3));
        assert_eq!(layout.row_at(2, 8), Some(7));
        assert_eq!(layout.row_at(2, 9), None);
        assert_eq!(layout.row_at(0, 5), None);
    }

    #[test]
    fn test_mouse_hover_and_click() {
        let mut switcher = make_switcher(&["a.rs", "b.rs", "c.rs"]);
        let layout = ListLayout {
            rows: Rect::new(0, 0, 20, 3),
            offset: 0,
        };

        assert_eq!(
            handle_mouse(&mut switcher, mouse(MouseEventKind::Moved, 3, 2), layout),
            EventResult::Continue
        );
        assert_eq!(switcher.selected_index(), 2);

        assert_eq!(
            handle_mouse(&mut switcher, mouse(MouseEventKind::Down(MouseButton::Left), 3, 1), layout),
            EventResult::Select("/proj/b.rs".to_string())
        );
        assert_eq!(
            handle_mouse(&mut switcher, mouse(MouseEventKind::Down(MouseButton::Left), 3, 10), layout),
            EventResult::Ignored
        );
    }

    #[test]
    fn test_mouse_scroll() {
        let mut switcher = make_switcher(&["a.rs", "b.rs"]);
        let layout = ListLayout::default();
        handle_mouse(&mut switcher, mouse(MouseEventKind::ScrollDown, 0, 0), layout);
        assert_eq!(switcher.selected_index(), 1);
        handle_mouse(&mut switcher, mouse(MouseEventKind::ScrollUp, 0, 0), layout);
        assert_eq!(switcher.selected_index(), 0);
    }
}
