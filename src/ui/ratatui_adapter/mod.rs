//! Ratatui-based switcher frontend
//!
//! Renders a [`QuickSwitcher`](crate::switcher::QuickSwitcher) with ratatui
//! and feeds it crossterm key and mouse events.
//!
//! # Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ │Search files...                        esc │
//! └─────────────────────────────────────────────┘
//! ┌ Files (2) ──────────────────────────────────┐
//! │> main.rs  src  [rs]                         │
//! │  README.md  [md]                            │
//! └─────────────────────────────────────────────┘
//! 2 files                  ↑↓ navigate  ↵ open  esc close
//! ```

mod events;
mod finder;
mod theme;
pub mod widgets;

pub use events::{EventResult, ListLayout, handle_key, handle_mouse};
pub use finder::RatatuiSwitcher;
pub use theme::Theme;
