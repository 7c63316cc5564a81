//! Ratatui widgets for the switcher TUI

mod file_list;
mod help_bar;
mod search_bar;
mod status_bar;

pub use file_list::FileList;
pub use help_bar::{HelpBar, KeyHint};
pub use search_bar::SearchBar;
pub use status_bar::StatusBar;
