//! File quick-switcher core
//!
//! Given a project root, a [`FileLister`] and a stream of key events, the
//! switcher keeps a case-insensitive substring view of the project's files,
//! a capped display window over it and a selection cursor, and resolves
//! Enter to the absolute path of the selected file.
//!
//! ```text
//! Loader ──▶ files ──filter(query)──▶ matches ──window──▶ display ◀── Selector
//!                                                            │
//!                         key ──▶ ShortcutMapper ──▶ Select(join(root, path)) | Close
//! ```
//!
//! # Example
//!
//! ```
//! use quickswitch::switcher::{FileListResult, QuickSwitcher, View};
//!
//! let mut switcher = QuickSwitcher::new("/project");
//! let ticket = switcher.mount();
//! assert_eq!(switcher.view(), View::Loading);
//!
//! let files = vec!["src/main.rs".to_string(), "README.md".to_string()];
//! switcher.apply_load(&ticket, Ok(FileListResult::new(files, false)));
//! switcher.set_query("main");
//!
//! assert_eq!(switcher.selected_file(), Some("src/main.rs"));
//! ```

mod error;
mod filter;
mod loader;
mod query;
mod selector;
mod shortcuts;
mod state;
mod window;

pub use error::{FetchError, FetchResult, GENERIC_FETCH_MESSAGE};
pub use filter::{filter_paths, is_blank, matching_indices};
pub use loader::{FileListResult, FileLister, LoadCompletion, LoadTicket, LoadWorker, Loader};
pub use query::QueryInput;
pub use selector::Selector;
pub use shortcuts::{KeyOutcome, ShortcutContext, SwitcherAction, map_key};
pub use state::{LoadState, QuickSwitcher, Snapshot, SwitcherCallbacks, View};
pub use window::{MAX_RENDERED, window};
