//! Switcher state
//!
//! [`QuickSwitcher`] owns everything one open switcher needs: the root,
//! the load lifecycle, the query and the selection. The match set, the
//! display window and the view are derived from those and recomputed on
//! every change, on the single thread that owns the switcher.

use super::error::FetchResult;
use super::filter::{is_blank, matching_indices};
use super::loader::{FileListResult, LoadTicket, Loader};
use super::query::QueryInput;
use super::selector::Selector;
use super::shortcuts::{KeyOutcome, ShortcutContext, SwitcherAction, map_key};
use super::window::window;
use crate::paths::join_root;
use crossterm::event::KeyEvent;
use serde::Serialize;

/// Where the file list currently stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// A fetch is in flight
    Loading,
    /// The latest fetch succeeded
    Ready(FileListResult),
    /// The latest fetch failed with this user-facing message
    Failed(String),
}

/// What the list area should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View<'a> {
    /// Waiting for the file list
    Loading,
    /// The file list could not be fetched
    Error(&'a str),
    /// Nothing to show: no files, or no matches
    Empty,
    /// At least one file in the display window
    Populated,
}

/// Read-only observable state, as a host would render it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Whether a fetch is in flight
    pub is_loading: bool,
    /// Failure message of the latest fetch
    pub error: Option<String>,
    /// Whether the source capped the file list
    pub truncated: bool,
    /// Current query text
    pub query: String,
    /// Size of the match set
    pub filtered_count: usize,
    /// Files in the display window
    pub display_files: Vec<String>,
    /// Matches left out of the display window
    pub overflow_count: usize,
    /// Selection cursor into the display window
    pub selected_index: usize,
}

/// Receiver of the switcher's outbound events
pub trait SwitcherCallbacks {
    /// A file was confirmed; `path` is absolute
    fn on_select(&mut self, path: &str);

    /// The switcher was dismissed
    fn on_close(&mut self);
}

/// State of one open file switcher
#[derive(Debug)]
pub struct QuickSwitcher {
    root: String,
    load: LoadState,
    loader: Loader,
    query: QueryInput,
    /// Indices into the loaded files matching the query
    matches: Vec<usize>,
    selector: Selector,
}

impl QuickSwitcher {
    /// Create a switcher for `root`
    ///
    /// Nothing is fetched until [`QuickSwitcher::mount`] is called.
    #[must_use]
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            load: LoadState::Loading,
            loader: Loader::new(),
            query: QueryInput::new(),
            matches: Vec::new(),
            selector: Selector::new(),
        }
    }

    /// Start fetching the file list for the current root
    ///
    /// Any fetch already in flight becomes stale. The caller runs the
    /// fetch and hands the outcome to [`QuickSwitcher::apply_load`].
    pub fn mount(&mut self) -> LoadTicket {
        log::info!("loading file list for {}", self.root);
        self.load = LoadState::Loading;
        self.refresh(true);
        self.loader.begin(self.root.clone())
    }

    /// Switch to another root
    ///
    /// Returns the ticket of the new fetch, or `None` when the root is
    /// unchanged.
    pub fn set_root(&mut self, root: impl Into<String>) -> Option<LoadTicket> {
        let root = root.into();
        if root == self.root {
            return None;
        }
        self.root = root;
        Some(self.mount())
    }

    /// Stop caring about the fetch in flight
    pub fn unmount(&mut self) {
        self.loader.cancel();
    }

    /// Apply the outcome of a fetch
    ///
    /// Returns `false` and leaves the state untouched if `ticket` is stale.
    pub fn apply_load(&mut self, ticket: &LoadTicket, outcome: FetchResult<FileListResult>) -> bool {
        if !self.loader.settle(ticket) {
            return false;
        }

        self.load = match outcome {
            Ok(result) => {
                log::info!(
                    "loaded {} files under {}{}",
                    result.files.len(),
                    ticket.root(),
                    if result.truncated { " (truncated)" } else { "" }
                );
                LoadState::Ready(result)
            }
            Err(err) => {
                log::warn!("failed to list files under {}: {err}", ticket.root());
                LoadState::Failed(err.user_message())
            }
        };
        self.refresh(true);
        true
    }

    /// Project root
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Load lifecycle state
    #[must_use]
    pub const fn load_state(&self) -> &LoadState {
        &self.load
    }

    /// Whether a fetch is in flight
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Loading)
    }

    /// Failure message of the latest fetch
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.load {
            LoadState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Whether the source capped the file list
    #[must_use]
    pub fn truncated(&self) -> bool {
        matches!(&self.load, LoadState::Ready(result) if result.truncated)
    }

    /// All loaded files
    #[must_use]
    pub fn files(&self) -> &[String] {
        match &self.load {
            LoadState::Ready(result) => &result.files,
            LoadState::Loading | LoadState::Failed(_) => &[],
        }
    }

    /// Current query text
    #[must_use]
    pub fn query(&self) -> &str {
        self.query.text()
    }

    /// Query field state, including its cursor
    #[must_use]
    pub const fn query_input(&self) -> &QueryInput {
        &self.query
    }

    /// Number of files matching the query
    #[must_use]
    pub fn filtered_count(&self) -> usize {
        self.matches.len()
    }

    /// Matches hidden by the display cap
    #[must_use]
    pub fn overflow_count(&self) -> usize {
        window(&self.matches).1
    }

    /// Files in the display window, in list order
    pub fn display_files(&self) -> impl Iterator<Item = &str> + '_ {
        let files = self.files();
        window(&self.matches)
            .0
            .iter()
            .map(move |&idx| files[idx].as_str())
    }

    /// Number of rows in the display window
    #[must_use]
    pub fn display_len(&self) -> usize {
        window(&self.matches).0.len()
    }

    /// Selection cursor into the display window
    #[must_use]
    pub const fn selected_index(&self) -> usize {
        self.selector.index()
    }

    /// Relative path under the selection cursor
    #[must_use]
    pub fn selected_file(&self) -> Option<&str> {
        self.display_file(self.selector.index())
    }

    /// Relative path at a display window row
    #[must_use]
    pub fn display_file(&self, index: usize) -> Option<&str> {
        let idx = *window(&self.matches).0.get(index)?;
        self.files().get(idx).map(String::as_str)
    }

    /// What the list area should show
    #[must_use]
    pub fn view(&self) -> View<'_> {
        match &self.load {
            LoadState::Loading => View::Loading,
            LoadState::Failed(message) => View::Error(message.as_str()),
            LoadState::Ready(_) if self.matches.is_empty() => View::Empty,
            LoadState::Ready(_) => View::Populated,
        }
    }

    /// Replace the query text
    pub fn set_query(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.edit_query(|query| query.set(text));
    }

    /// Edit the query field and refresh the matches if its text changed
    pub fn edit_query(&mut self, edit: impl FnOnce(&mut QueryInput)) {
        let before = self.query.text().to_string();
        edit(&mut self.query);

        if before == self.query.text() {
            return;
        }

        // Between two blank queries the match set is the file list itself
        let same_set = is_blank(&before) && is_blank(self.query.text());
        self.refresh(!same_set);
    }

    /// Move the selection one row down
    pub fn move_down(&mut self) {
        self.selector.move_down(self.display_len());
    }

    /// Move the selection one row up
    pub fn move_up(&mut self) {
        self.selector.move_up(self.display_len());
    }

    /// Point the selection at a display row, e.g. under the mouse
    pub fn hover(&mut self, index: usize) {
        self.selector.select(index, self.display_len());
    }

    /// Confirm the file at a display row, e.g. on click
    #[must_use]
    pub fn pick(&self, index: usize) -> Option<SwitcherAction> {
        self.display_file(index)
            .map(|relative| SwitcherAction::Select(join_root(&self.root, relative)))
    }

    /// Offer a key event to the switcher
    ///
    /// Navigation is applied here. `Select` and `Close` are returned for
    /// the host to act on.
    pub fn handle_key(&mut self, key: &KeyEvent) -> KeyOutcome {
        let context = ShortcutContext {
            root: &self.root,
            selected: self.selected_file(),
        };
        let outcome = map_key(key, context);

        match &outcome {
            KeyOutcome::Intercepted(SwitcherAction::MoveDown) => self.move_down(),
            KeyOutcome::Intercepted(SwitcherAction::MoveUp) => self.move_up(),
            _ => {}
        }
        outcome
    }

    /// Offer a key event and forward selection or dismissal to `callbacks`
    ///
    /// Returns whether the key was intercepted.
    pub fn dispatch_key(&mut self, key: &KeyEvent, callbacks: &mut impl SwitcherCallbacks) -> bool {
        let outcome = self.handle_key(key);
        match &outcome {
            KeyOutcome::Intercepted(SwitcherAction::Select(path)) => callbacks.on_select(path),
            KeyOutcome::Intercepted(SwitcherAction::Close) => callbacks.on_close(),
            _ => {}
        }
        outcome.is_intercepted()
    }

    /// Observable state for rendering
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            is_loading: self.is_loading(),
            error: self.error().map(str::to_string),
            truncated: self.truncated(),
            query: self.query().to_string(),
            filtered_count: self.filtered_count(),
            display_files: self.display_files().map(str::to_string).collect(),
            overflow_count: self.overflow_count(),
            selected_index: self.selected_index(),
        }
    }

    fn refresh(&mut self, reset_selection: bool) {
        self.matches = matching_indices(self.files(), self.query.text());
        if reset_selection {
            self.selector.reset();
        }
        self.selector.clamp(self.display_len());
    }
}
