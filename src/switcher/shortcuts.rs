//! Keyboard shortcuts of the switcher
//!
//! Maps a key event plus the current selection to a switcher action.
//! Keys without a shortcut are handed back to the query field.

use crossterm::event::{KeyCode, KeyEvent};

use crate::paths::join_root;

/// Action resolved from a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitcherAction {
    /// Move the selection one row down
    MoveDown,
    /// Move the selection one row up
    MoveUp,
    /// Confirm the file at this absolute path
    Select(String),
    /// Dismiss the switcher
    Close,
    /// Shortcut recognised but nothing to do (Enter on an empty list)
    Nothing,
}

impl SwitcherAction {
    /// Human-readable description for key hints
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::MoveDown | Self::MoveUp => "navigate",
            Self::Select(_) => "open",
            Self::Close => "close",
            Self::Nothing => "",
        }
    }
}

/// Result of offering a key to the switcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The switcher consumed the key; the query field must not see it
    Intercepted(SwitcherAction),
    /// Not a shortcut; the query field receives the key
    PassThrough,
}

impl KeyOutcome {
    /// Whether the key's default handling is suppressed
    #[must_use]
    pub const fn is_intercepted(&self) -> bool {
        matches!(self, Self::Intercepted(_))
    }
}

/// The part of the switcher state shortcuts depend on
#[derive(Debug, Clone, Copy)]
pub struct ShortcutContext<'a> {
    /// Project root used to absolutize the selection
    pub root: &'a str,
    /// Relative path under the selection cursor, if the window has one
    pub selected: Option<&'a str>,
}

/// Map a key event to a switcher action
///
/// Modifiers are ignored for the four shortcut keys.
#[must_use]
pub fn map_key(key: &KeyEvent, context: ShortcutContext<'_>) -> KeyOutcome {
    let action = match key.code {
        KeyCode::Down => SwitcherAction::MoveDown,
        KeyCode::Up => SwitcherAction::MoveUp,
        KeyCode::Enter => context
            .selected
            .map_or(SwitcherAction::Nothing, |relative| {
                SwitcherAction::Select(join_root(context.root, relative))
            }),
        KeyCode::Esc => SwitcherAction::Close,
        _ => return KeyOutcome::PassThrough,
    };
    KeyOutcome::Intercepted(action)
}
